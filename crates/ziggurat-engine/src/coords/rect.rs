use super::ScreenPoint;

/// Axis-aligned screen rectangle spanning `[min, max)` on both axes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScreenRect {
    pub min: ScreenPoint,
    pub max: ScreenPoint,
}

impl ScreenRect {
    #[inline]
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            min: ScreenPoint::new(left, top),
            max: ScreenPoint::new(right, bottom),
        }
    }

    /// Normalizes the rectangle so `min <= max` on both axes.
    #[inline]
    pub fn normalized(self) -> Self {
        ScreenRect::new(
            self.min.x.min(self.max.x),
            self.min.y.min(self.max.y),
            self.min.x.max(self.max.x),
            self.min.y.max(self.max.y),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: ScreenPoint) -> bool {
        let r = self.normalized();
        p.x >= r.min.x && p.y >= r.min.y && p.x < r.max.x && p.y < r.max.y
    }

    /// Whether `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_rect(self, other: ScreenRect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        b.min.x >= a.min.x && b.min.y >= a.min.y && b.max.x <= a.max.x && b.max.y <= a.max.y
    }

    #[inline]
    pub fn intersects(self, other: ScreenRect) -> bool {
        self.intersect(other).is_some()
    }

    #[inline]
    pub fn intersect(self, other: ScreenRect) -> Option<ScreenRect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.min.x.max(b.min.x);
        let y0 = a.min.y.max(b.min.y);
        let x1 = a.max.x.min(b.max.x);
        let y1 = a.max.y.min(b.max.y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(ScreenRect::new(x0, y0, x1, y1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: i64, t: i64, rt: i64, b: i64) -> ScreenRect { ScreenRect::new(l, t, rt, b) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn inverted_rect_from_negative_extents_is_normalized() {
        // A box with negative half-extents projects to right < left and bottom < top.
        let inverted = r(10, 7, 6, 3);
        assert_eq!(inverted.normalized(), r(6, 3, 10, 7));
        assert!(inverted.contains(ScreenPoint::new(8, 5)));
        assert!(inverted.intersects(r(0, 0, 8, 8)));
        assert_eq!(r(1, 2, 11, 22).normalized(), r(1, 2, 11, 22));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(ScreenPoint::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(ScreenPoint::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(ScreenPoint::new(10, 10)));
    }

    #[test]
    fn contains_rect_nested_and_partial() {
        let outer = r(-10, -10, 10, 10);
        assert!(outer.contains_rect(r(-10, -10, 10, 10)));
        assert!(outer.contains_rect(r(0, 0, 5, 5)));
        assert!(!outer.contains_rect(r(5, 5, 15, 15)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0, 0, 10, 10).intersect(r(5, 5, 15, 15)).unwrap();
        assert_eq!(i, r(5, 5, 10, 10));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        // Shared edge: zero-width overlap is not an intersection.
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 20, 10)).is_none());
        assert!(!r(0, 0, 10, 10).intersects(r(0, 10, 10, 20)));
    }

    #[test]
    fn intersect_negative_coordinates() {
        assert!(r(-20, -20, -5, -5).intersects(r(-10, -10, 0, 0)));
    }
}
