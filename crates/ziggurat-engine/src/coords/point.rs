use core::ops::Sub;

/// 2D point in screen pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}
