//! The pairwise paint-order relation.
//!
//! [`is_painted_before`] is a cascade of rules; each rule either decides or passes
//! to the next one. The relation is asymmetric and total over items with distinct
//! `(shape, frame)` pairs, but it is not transitive: three mutually overlapping
//! items can form a cycle. Callers must not feed it to sorts that require a
//! strict weak ordering (see `merge::sort_indices`).

use core::cmp::Ordering;

use super::RenderItem;

/// Bottom-z difference beyond which the lower item always goes first.
pub const Z_TOLERANCE: i64 = 8;

/// Outcome of a separation test on one axis.
#[inline]
fn separated(a_first: bool, b_first: bool) -> Option<bool> {
    match (a_first, b_first) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        // Neither, or both (only reachable with negative extents): undecided.
        _ => None,
    }
}

/// First differing criterion decides; `true` means `a` goes first.
macro_rules! first_differing {
    ($($a:expr, $b:expr => $a_first:expr;)+) => {
        $(
            if $a != $b {
                return $a_first;
            }
        )+
    };
}

/// Returns `true` if `a` must be painted before (behind) `b`.
pub fn is_painted_before(a: &RenderItem, b: &RenderItem) -> bool {
    let (fa, fb) = (a.flags, b.flags);

    // Scenery first, sprites layered on top.
    if fa.sprite() != fb.sprite() {
        return fb.sprite();
    }

    // Clearly separated in Z.
    let both_flat = fa.flat() && fb.flat();
    if let Some(first) = separated(
        a.z_top <= b.z && !both_flat && !fa.invitem(),
        b.z_top <= a.z && !both_flat && !fb.invitem(),
    ) {
        return first;
    }

    // Clearly separated in Y.
    let (a_yflat, b_yflat) = (a.y_flat(), b.y_flat());
    if !(a_yflat && b_yflat) {
        if let Some(first) = separated(a.y <= b.y_far, b.y <= a.y_far) {
            return first;
        }
    }

    // Clearly separated in X.
    let (a_xflat, b_xflat) = (a.x_flat(), b.x_flat());
    if !(a_xflat && b_xflat) {
        if let Some(first) = separated(a.x <= b.x_left, b.x <= a.x_left) {
            return first;
        }
    }

    // Overlapping on all three axes from here on.

    if fa.flat() || fb.flat() {
        first_differing! {
            a.z, b.z => a.z < b.z;
            fa.invitem(), fb.invitem() => fb.invitem();
            fa.flat(), fb.flat() => fa.flat();
            fa.trans(), fb.trans() => fb.trans();
            fa.anim(), fb.anim() => fb.anim();
            fa.draw(), fb.draw() => fa.draw();
            fa.solid(), fb.solid() => fa.solid();
            fa.occl(), fb.occl() => fa.occl();
            fa.big_square(), fb.big_square() => fa.big_square();
        }
    }

    // A thin item sorts against the middle of a thick one, not against its edges.
    if fa.fixed() == fb.fixed() {
        if a_yflat != b_yflat {
            return if a_yflat {
                a.y <= (b.y_far + b.y) / 2
            } else {
                (a.y_far + a.y) / 2 < b.y
            };
        }
        if a_xflat != b_xflat {
            return if a_xflat {
                a.x <= (b.x_left + b.x) / 2
            } else {
                (a.x_left + a.x) / 2 < b.x
            };
        }
    }

    if (a.z - b.z).abs() > Z_TOLERANCE {
        return a.z < b.z;
    }

    if a.x == b.x && a.y == b.y && fa.trans() != fb.trans() {
        return fb.trans();
    }

    if fa.land() && fb.land() {
        if fa.roof() != fb.roof() {
            return fb.roof();
        }
    } else if fa.roof() != fb.roof() {
        return fa.roof();
    }

    first_differing! {
        a.z, b.z => a.z < b.z;
        a.x + a.y, b.x + b.y => a.x + a.y < b.x + b.y;
        a.x_left + a.y_far, b.x_left + b.y_far => a.x_left + a.y_far < b.x_left + b.y_far;
        a.y, b.y => a.y < b.y;
        a.x, b.x => a.x < b.x;
        a.shape, b.shape => a.shape < b.shape;
    }

    a.frame < b.frame
}

/// [`is_painted_before`] as an [`Ordering`]: `Less` when `a` is painted first.
///
/// `Equal` only for items that agree on every tie-break key.
#[inline]
pub fn paint_cmp(a: &RenderItem, b: &RenderItem) -> Ordering {
    if is_painted_before(a, b) {
        Ordering::Less
    } else if is_painted_before(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CameraOrigin, WorldBox};
    use crate::sort::{ItemFlags, SceneObject};

    fn item(b: WorldBox, flags: ItemFlags, shape: u32) -> RenderItem {
        let obj = SceneObject::new(b, shape, 0).with_flags(flags);
        RenderItem::project(&obj, CameraOrigin::default())
    }

    fn plain(x: i32, y: i32, z: i32, xd: i32, yd: i32, zd: i32) -> RenderItem {
        item(WorldBox::new(x, y, z, xd, yd, zd), ItemFlags::empty(), 0)
    }

    fn first(a: &RenderItem, b: &RenderItem) {
        assert!(is_painted_before(a, b), "expected a before b");
        assert!(!is_painted_before(b, a), "expected b not before a");
    }

    // ── sprite partition ──────────────────────────────────────────────────

    #[test]
    fn scenery_before_sprite_regardless_of_geometry() {
        let scenery = plain(100, 100, 200, 32, 32, 32);
        let sprite = item(WorldBox::new(0, 0, 0, 8, 8, 8), ItemFlags::SPRITE, 0);
        first(&scenery, &sprite);
    }

    // ── clear separation ──────────────────────────────────────────────────

    #[test]
    fn vertical_separation() {
        let low = plain(100, 100, 0, 32, 32, 16);
        let high = plain(100, 100, 16, 32, 32, 16);
        first(&low, &high);
    }

    #[test]
    fn vertical_separation_skipped_for_inventory_item() {
        // Resting below and in front: z separation would put it first, Y separation puts it last.
        let b = WorldBox::new(100, 200, 0, 32, 32, 16);
        let above = plain(100, 100, 16, 32, 32, 16);
        first(&item(b, ItemFlags::empty(), 0), &above);
        first(&above, &item(b, ItemFlags::INVITEM, 0));
    }

    #[test]
    fn depth_separation() {
        let far = plain(100, 50, 0, 32, 32, 32);
        let near = plain(100, 100, 0, 32, 32, 32);
        first(&far, &near);
    }

    #[test]
    fn breadth_separation() {
        let left = plain(50, 100, 0, 32, 32, 32);
        let right = plain(100, 100, 0, 32, 32, 32);
        first(&left, &right);
    }

    // ── flat bundle ───────────────────────────────────────────────────────

    #[test]
    fn flat_stacking_by_bottom_z() {
        let floor = plain(100, 100, 0, 16, 16, 0);
        let decal = plain(100, 100, 10, 16, 16, 0);
        first(&floor, &decal);
    }

    #[test]
    fn flat_before_solid_at_same_z() {
        let rug = plain(100, 100, 0, 32, 32, 0);
        let chest = plain(100, 100, 0, 16, 16, 16);
        first(&rug, &chest);
    }

    #[test]
    fn flat_transparent_and_animated_last() {
        let b = WorldBox::new(100, 100, 0, 16, 16, 0);
        first(&item(b, ItemFlags::empty(), 5), &item(b, ItemFlags::TRANS, 1));
        first(&item(b, ItemFlags::empty(), 5), &item(b, ItemFlags::ANIM, 1));
    }

    #[test]
    fn flat_hints_first() {
        let b = WorldBox::new(100, 100, 0, 16, 16, 0);
        first(&item(b, ItemFlags::DRAW, 5), &item(b, ItemFlags::empty(), 1));
        first(&item(b, ItemFlags::SOLID, 5), &item(b, ItemFlags::empty(), 1));
        first(&item(b, ItemFlags::OCCL, 5), &item(b, ItemFlags::empty(), 1));
    }

    #[test]
    fn big_square_first() {
        let big = plain(200, 200, 0, 128, 128, 0);
        let small = plain(200, 200, 0, 16, 16, 0);
        assert!(big.flags.big_square());
        assert!(!small.flags.big_square());
        first(&big, &small);
    }

    #[test]
    fn flat_inventory_item_last() {
        let b = WorldBox::new(100, 100, 0, 16, 16, 0);
        first(&item(b, ItemFlags::empty(), 5), &item(b, ItemFlags::INVITEM, 1));
    }

    // ── axis-flat handling ────────────────────────────────────────────────

    #[test]
    fn y_thin_item_sorts_against_center() {
        // Wall segment with no Y depth, inside the Y span of a thick box.
        let thick = plain(100, 100, 0, 32, 32, 32);
        let before_center = plain(100, 80, 0, 32, 0, 32);
        let after_center = plain(100, 90, 0, 32, 0, 32);
        first(&before_center, &thick);
        first(&thick, &after_center);
    }

    #[test]
    fn x_thin_item_sorts_against_center() {
        let thick = plain(100, 100, 0, 32, 32, 32);
        let thin = plain(84, 100, 0, 0, 32, 32);
        first(&thin, &thick);
    }

    #[test]
    fn two_y_thin_items_skip_y_separation() {
        // Y alone would put `near_low` first; both are Y-thin, so the residual
        // bottom-z tie-break decides and the lower item goes first.
        let near_low = plain(100, 80, 4, 32, 0, 32);
        let far_high = plain(100, 90, 0, 32, 0, 32);
        first(&far_high, &near_low);
    }

    #[test]
    fn two_x_thin_items_skip_x_separation() {
        let near_low = plain(80, 100, 4, 0, 32, 32);
        let far_high = plain(90, 100, 0, 0, 32, 32);
        first(&far_high, &near_low);
    }

    #[test]
    fn axis_flat_rule_needs_matching_fixed() {
        // With matching `fixed` the thin item would go last (90 > center 84); the
        // mismatch skips the center rule and the diagonal sum decides instead.
        let thick = item(WorldBox::new(100, 100, 0, 32, 32, 32), ItemFlags::FIXED, 0);
        let thin = plain(100, 90, 0, 32, 0, 32);
        first(&thin, &thick);
        first(&plain(100, 100, 0, 32, 32, 32), &thin);
    }

    // ── z tolerance ───────────────────────────────────────────────────────

    #[test]
    fn z_tolerance() {
        let glass = WorldBox::new(100, 100, 0, 32, 32, 32);

        // More than the tolerance apart: the lower item goes first.
        let high = plain(100, 100, 9, 32, 32, 32);
        first(&item(glass, ItemFlags::TRANS, 0), &high);

        // Within tolerance the same-origin transparency rule still applies.
        let slightly_higher = plain(100, 100, 8, 32, 32, 32);
        first(&slightly_higher, &item(glass, ItemFlags::TRANS, 0));
    }

    // ── transparency, land, roof ──────────────────────────────────────────

    #[test]
    fn same_origin_transparent_last() {
        let solid = item(WorldBox::new(100, 100, 0, 32, 32, 32), ItemFlags::empty(), 9);
        let glass = item(WorldBox::new(100, 100, 0, 16, 16, 16), ItemFlags::TRANS, 1);
        first(&solid, &glass);
    }

    #[test]
    fn transparency_ignored_for_different_origins() {
        // Overlapping on every axis and within the z tolerance, but origins differ:
        // the diagonal sum decides, so the glass goes first.
        let glass = item(WorldBox::new(100, 100, 0, 32, 32, 32), ItemFlags::TRANS, 9);
        let solid = plain(110, 110, 0, 32, 32, 32);
        first(&glass, &solid);
    }

    #[test]
    fn land_before_land_roof() {
        let b = WorldBox::new(100, 100, 0, 32, 32, 32);
        let land = item(b, ItemFlags::LAND, 9);
        let land_roof = item(b, ItemFlags::LAND | ItemFlags::ROOF, 1);
        first(&land, &land_roof);
    }

    #[test]
    fn roof_first_otherwise() {
        let b = WorldBox::new(100, 100, 0, 32, 32, 32);
        let roof = item(b, ItemFlags::ROOF, 9);
        let other = item(b, ItemFlags::empty(), 1);
        first(&roof, &other);
    }

    // ── residual tie-breaks ───────────────────────────────────────────────

    #[test]
    fn diagonal_sum_then_back_corner() {
        let a = plain(100, 100, 0, 32, 32, 32);
        let b = plain(101, 100, 0, 32, 32, 32);
        first(&a, &b);

        // Same front corner sum, deeper back corner goes first.
        let deep = plain(100, 100, 0, 40, 32, 32);
        let shallow = plain(100, 100, 0, 32, 32, 32);
        first(&deep, &shallow);
    }

    #[test]
    fn y_then_x_tie_break() {
        let a = plain(101, 99, 0, 33, 31, 32);
        let b = plain(100, 100, 0, 32, 32, 32);
        // Equal x+y and equal xLeft+yFar: lower y goes first.
        first(&a, &b);
    }

    #[test]
    fn shape_then_frame_tail() {
        let b = WorldBox::new(100, 100, 0, 32, 32, 32);
        first(&item(b, ItemFlags::empty(), 1), &item(b, ItemFlags::empty(), 2));

        let f0 = RenderItem::project(&SceneObject::new(b, 7, 0), CameraOrigin::default());
        let f1 = RenderItem::project(&SceneObject::new(b, 7, 1), CameraOrigin::default());
        first(&f0, &f1);
        assert_eq!(paint_cmp(&f0, &f0), Ordering::Equal);
        assert_eq!(paint_cmp(&f0, &f1), Ordering::Less);
        assert_eq!(paint_cmp(&f1, &f0), Ordering::Greater);
    }

    // ── scenario ──────────────────────────────────────────────────────────

    #[test]
    fn scenario_box1_before_box2() {
        let box1 = plain(100, 100, 0, 32, 32, 64);
        let box2 = plain(100, 100, 100, 16, 16, 0);
        first(&box1, &box2);
    }

    // ── totality ──────────────────────────────────────────────────────────

    #[test]
    fn asymmetric_across_flags_and_degenerate_boxes() {
        let boxes = [
            WorldBox::new(100, 100, 0, 32, 32, 32),
            WorldBox::new(100, 100, 0, 16, 16, 0),
            WorldBox::new(90, 110, 4, 0, 32, 32),
            WorldBox::new(100, 100, 0, 32, 0, -8),
            WorldBox::new(100, 100, 10, -16, -16, -16),
            WorldBox::new(100, 100, 0, 128, 128, 0),
        ];
        let flag_sets = [
            ItemFlags::empty(),
            ItemFlags::FLAT | ItemFlags::TRANS,
            ItemFlags::INVITEM,
            ItemFlags::LAND | ItemFlags::ROOF,
            ItemFlags::ROOF | ItemFlags::FIXED,
            ItemFlags::SPRITE | ItemFlags::ANIM,
        ];

        let mut items = Vec::new();
        let mut shape = 0;
        for b in boxes {
            for f in flag_sets {
                items.push(item(b, f, shape));
                shape += 1;
            }
        }

        for a in &items {
            assert!(!is_painted_before(a, a));
            for b in &items {
                if a.shape == b.shape {
                    continue;
                }
                let ab = is_painted_before(a, b);
                let ba = is_painted_before(b, a);
                assert!(ab != ba, "exactly one of a<b, b<a must hold: {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn every_flag_combination_is_asymmetric() {
        let b = WorldBox::new(100, 100, 0, 16, 16, 0);
        let base = item(b, ItemFlags::empty(), 0);
        for bits in 0..(1u16 << 12) {
            let other = item(b, ItemFlags::from_bits_truncate(bits), 1);
            assert!(!(is_painted_before(&base, &other) && is_painted_before(&other, &base)));
        }
    }
}
