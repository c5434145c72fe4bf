//! Coordinate and geometry types shared by the projector and the sorter.
//!
//! World space:
//! - integer world units
//! - a box is an origin at its front-bottom corner plus half-extents reaching back
//!   (`x - xd`, `y - yd`) and up (`z + zd`)
//!
//! Screen space:
//! - integer pixels, origin top-left
//! - +X right, +Y down
//! - fixed 2:1 isometric projection; the camera only contributes a translation

mod camera;
mod point;
mod rect;
mod world_box;

pub use camera::CameraOrigin;
pub use point::ScreenPoint;
pub use rect::ScreenRect;
pub use world_box::WorldBox;
