use bytemuck::{Pod, Zeroable};

use super::RenderItem;

/// Set in [`BlitInstance::flags`] when the item is fully hidden.
pub const OCCLUDED_BIT: u32 = 1 << 31;

/// Per-item record for a GPU blitter, laid out for direct buffer upload.
///
/// Written in paint order; the consumer draws instance `i + 1` over instance `i`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BlitInstance {
    /// Screen rect `[left, top, right, bottom)`, saturated to `i32`.
    pub rect: [i32; 4],
    pub shape: u32,
    pub frame: u32,
    /// `ItemFlags` bits, plus [`OCCLUDED_BIT`].
    pub flags: u32,
    pub _pad: u32,
}

impl BlitInstance {
    pub fn new(item: &RenderItem, occluded: bool) -> Self {
        let r = item.screen;
        let mut flags = u32::from(item.flags.bits());
        if occluded {
            flags |= OCCLUDED_BIT;
        }

        Self {
            rect: [r.min.x, r.min.y, r.max.x, r.max.y].map(saturate),
            shape: item.shape,
            frame: item.frame,
            flags,
            _pad: 0,
        }
    }

    #[inline]
    pub fn occluded(&self) -> bool {
        self.flags & OCCLUDED_BIT != 0
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Raw bytes of an instance buffer, ready for upload.
#[inline]
pub fn as_bytes(instances: &[BlitInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CameraOrigin, WorldBox};
    use crate::sort::{ItemFlags, SceneObject};

    #[test]
    fn layout_is_32_bytes() {
        assert_eq!(core::mem::size_of::<BlitInstance>(), 32);
        let two = [BlitInstance::default(); 2];
        assert_eq!(as_bytes(&two).len(), 64);
    }

    #[test]
    fn carries_rect_ids_and_flags() {
        let obj = SceneObject::new(WorldBox::new(100, 100, 0, 32, 32, 64), 42, 3)
            .with_flags(ItemFlags::TRANS);
        let item = RenderItem::project(&obj, CameraOrigin::default());
        let inst = BlitInstance::new(&item, true);
        assert_eq!(inst.rect, [-8, -48, 8, 24]);
        assert_eq!((inst.shape, inst.frame), (42, 3));
        assert!(inst.occluded());
        assert_eq!(inst.flags & !OCCLUDED_BIT, u32::from(ItemFlags::TRANS.bits()));
    }

    #[test]
    fn saturates_out_of_range_coordinates() {
        assert_eq!(saturate(i64::MAX), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
        assert_eq!(saturate(-5), -5);
    }
}
