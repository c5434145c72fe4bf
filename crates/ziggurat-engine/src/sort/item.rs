use crate::coords::{CameraOrigin, ScreenPoint, ScreenRect, WorldBox};

use super::ItemFlags;

/// Minimum half-extent of a big flat square footprint.
pub const BIG_SQUARE_MIN: i32 = 128;

/// Visible object as handed over by scene traversal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SceneObject {
    pub bounds: WorldBox,
    pub shape: u32,
    pub frame: u32,
    /// Scene-supplied flags. Derived bits (`ItemFlags::DERIVED`) are ignored.
    pub flags: ItemFlags,
}

impl SceneObject {
    #[inline]
    pub const fn new(bounds: WorldBox, shape: u32, frame: u32) -> Self {
        Self {
            bounds,
            shape,
            frame,
            flags: ItemFlags::empty(),
        }
    }

    #[inline]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A projected object, ready for ordering.
///
/// Every field is a pure function of the source [`SceneObject`] and the frame's
/// [`CameraOrigin`]; see [`RenderItem::project`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct RenderItem {
    // World extents. `x`, `y`, `z` are the front-bottom corner.
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub x_left: i64,
    pub y_far: i64,
    pub z_top: i64,

    // Screen extents.
    pub sx_left: i64,
    pub sx_right: i64,
    pub sx_top: i64,
    pub sy_top: i64,
    pub sx_bot: i64,
    pub sy_bot: i64,
    pub screen: ScreenRect,

    pub flags: ItemFlags,
    pub shape: u32,
    pub frame: u32,
}

impl RenderItem {
    /// Projects a scene object for a frame viewed from `camera`.
    ///
    /// Divisions truncate toward zero. Rendering baselines depend on that exact
    /// rounding, so the expressions must not be simplified.
    pub fn project(object: &SceneObject, camera: CameraOrigin) -> Self {
        let b = object.bounds;
        let (x, y, z) = (i64::from(b.x), i64::from(b.y), i64::from(b.z));
        let (xd, yd, zd) = (i64::from(b.xd), i64::from(b.yd), i64::from(b.zd));
        let (sx, sy) = (i64::from(camera.sx), i64::from(camera.sy));

        let x_left = x - xd;
        let y_far = y - yd;
        let z_top = z + zd;

        let sx_left = x_left / 4 - y / 4 - sx;
        let sx_right = x / 4 - y_far / 4 - sx;
        let sx_top = x_left / 4 - y_far / 4 - sx;
        let sy_top = x_left / 8 + y_far / 8 - z_top - sy;
        let sx_bot = x / 4 - y / 4 - sx;
        let sy_bot = x / 8 + y / 8 - z - sy;

        let mut flags = object.flags.difference(ItemFlags::DERIVED);
        // Negative heights are degenerate and sort as flat.
        flags.set(ItemFlags::FLAT, b.zd <= 0);
        flags.set(ItemFlags::BIG_SQUARE, b.xd == b.yd && b.xd >= BIG_SQUARE_MIN);

        Self {
            x,
            y,
            z,
            x_left,
            y_far,
            z_top,
            sx_left,
            sx_right,
            sx_top,
            sy_top,
            sx_bot,
            sy_bot,
            screen: ScreenRect::new(sx_left, sy_top, sx_right, sy_bot),
            flags,
            shape: object.shape,
            frame: object.frame,
        }
    }

    /// Top vertex of the screen silhouette (far corner, top face).
    #[inline]
    pub const fn top_point(&self) -> ScreenPoint {
        ScreenPoint::new(self.sx_top, self.sy_top)
    }

    /// Bottom vertex of the screen silhouette (near corner, bottom face).
    #[inline]
    pub const fn bottom_point(&self) -> ScreenPoint {
        ScreenPoint::new(self.sx_bot, self.sy_bot)
    }

    /// Zero or negative depth along Y.
    #[inline]
    pub const fn y_flat(&self) -> bool {
        self.y_far >= self.y
    }

    /// Zero or negative breadth along X.
    #[inline]
    pub const fn x_flat(&self) -> bool {
        self.x_left >= self.x
    }

    /// Closeness to the viewer; larger is nearer.
    #[inline]
    pub const fn nearness(&self) -> i64 {
        self.x + self.y + self.z
    }
}
