//! Ziggurat engine crate.
//!
//! Resolves back-to-front paint order for 2.5D isometric scenes: axis-aligned
//! world boxes are projected to screen extents and ordered so that a painter's
//! algorithm draws them correctly. Rendering itself is left to the host.

pub mod coords;
pub mod logging;
pub mod sort;
