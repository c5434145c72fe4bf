/// Axis-aligned world box of a scene object.
///
/// `(x, y, z)` is the front-bottom corner; the box spans `[x - xd, x]`,
/// `[y - yd, y]` and `[z, z + zd]`. Extents are not validated: zero or negative
/// values describe degenerate boxes and are accepted as-is.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct WorldBox {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub xd: i32,
    pub yd: i32,
    pub zd: i32,
}

impl WorldBox {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, xd: i32, yd: i32, zd: i32) -> Self {
        Self { x, y, z, xd, yd, zd }
    }

    /// Returns a copy moved by the given world offset.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
            ..self
        }
    }
}
