/// Screen-space origin of the camera for one frame.
///
/// Subtracted from every projected coordinate. It is passed explicitly to each
/// projection call so that projection stays a pure function.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CameraOrigin {
    pub sx: i32,
    pub sy: i32,
}

impl CameraOrigin {
    #[inline]
    pub const fn new(sx: i32, sy: i32) -> Self {
        Self { sx, sy }
    }
}
