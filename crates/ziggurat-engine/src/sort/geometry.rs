//! Screen-space silhouette tests.
//!
//! A projected box covers a hexagon on screen: the top vertex, the bottom vertex,
//! the left and right extremes, and four slanted edges with a 2:1 slope. The tests
//! below use the bounding rect as a cheap reject, then the slanted edges.

use crate::coords::ScreenPoint;

use super::RenderItem;

/// Signed distances (unnormalized) of `d = vertex - p` from the four slanted edges.
///
/// Order: top-left, top-right, bottom-left, bottom-right. Inside is `<= 0`.
#[inline]
fn edge_dots(top_diff: ScreenPoint, bot_diff: ScreenPoint) -> [i64; 4] {
    [
        top_diff.x + top_diff.y * 2,
        -top_diff.x + top_diff.y * 2,
        bot_diff.x - bot_diff.y * 2,
        -bot_diff.x - bot_diff.y * 2,
    ]
}

impl RenderItem {
    /// Whether the screen silhouettes of `self` and `other` share any interior pixel.
    pub fn overlaps(&self, other: &RenderItem) -> bool {
        if !self.screen.intersects(other.screen) {
            return false;
        }

        let dots = edge_dots(
            self.top_point() - other.bottom_point(),
            self.bottom_point() - other.top_point(),
        );

        let right_clear = self.sx_right <= other.sx_left;
        let left_clear = self.sx_left >= other.sx_right;

        !(right_clear || left_clear || dots.iter().any(|&d| d >= 0))
    }

    /// Whether the silhouette of `self` completely covers the silhouette of `other`.
    pub fn occludes(&self, other: &RenderItem) -> bool {
        if !self.screen.contains_rect(other.screen) {
            return false;
        }

        let dots = edge_dots(
            self.top_point() - other.top_point(),
            self.bottom_point() - other.bottom_point(),
        );

        self.sx_right >= other.sx_right
            && self.sx_left <= other.sx_left
            && dots.iter().all(|&d| d <= 0)
    }

    /// Whether the screen point lies inside the silhouette.
    pub fn contains_point(&self, p: ScreenPoint) -> bool {
        if !self.screen.contains(p) {
            return false;
        }

        let dots = edge_dots(self.top_point() - p, self.bottom_point() - p);
        dots.iter().all(|&d| d <= 0)
    }
}
