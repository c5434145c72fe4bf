//! Paint ordering for isometric scenes.
//!
//! Responsibilities:
//! - project scene objects into world/screen extents (`item`)
//! - decide, for any two items, which one is painted first (`order`)
//! - turn that pairwise relation into a deterministic sequence, either by a
//!   panic-free merge sort or by a dependency graph with cycle breaking
//! - optional extras on top of an order: occlusion marking, picking, GPU instances
//!
//! The relation is not transitive. Nothing here assumes it is.

mod config;
mod diagnostics;
mod flags;
mod geometry;
mod graph;
mod instance;
mod item;
mod list;
mod merge;
mod order;

pub use config::{PaintStrategy, ParseStrategyError, SortConfig};
pub use diagnostics::{Triple, find_intransitive_triples};
pub use flags::ItemFlags;
pub use graph::{GraphOrder, dependency_order};
pub use instance::{BlitInstance, OCCLUDED_BIT, as_bytes};
pub use item::{BIG_SQUARE_MIN, RenderItem, SceneObject};
pub use list::{PaintEntry, PaintList};
pub use order::{Z_TOLERANCE, is_painted_before, paint_cmp};

/// Paint order of `items` with the default merge-sort strategy.
///
/// Convenience for one-off use; [`PaintList`] reuses its buffers across frames.
pub fn paint_order(items: &[RenderItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut scratch = Vec::new();
    merge::sort_indices(&mut order, &mut scratch, |a, b| {
        is_painted_before(&items[a], &items[b])
    });
    order
}
