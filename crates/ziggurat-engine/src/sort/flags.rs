use bitflags::bitflags;

bitflags! {
    /// Classification bits of a render item.
    ///
    /// `FLAT` and `BIG_SQUARE` are derived from the world box during projection;
    /// every other bit is supplied by the scene with the object.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u16 {
        /// Dynamic actor, layered over all scenery.
        const SPRITE     = 1 << 0;
        /// Zero vertical extent (floor, decal).
        const FLAT       = 1 << 1;
        /// Held or carried; exempt from the z-separation rule.
        const INVITEM    = 1 << 2;
        /// Alpha-blended.
        const TRANS      = 1 << 3;
        /// Animated.
        const ANIM       = 1 << 4;
        /// Draw hint.
        const DRAW       = 1 << 5;
        /// Solid (physics) hint.
        const SOLID      = 1 << 6;
        /// Occluder hint: hides what is fully behind it.
        const OCCL       = 1 << 7;
        const ROOF       = 1 << 8;
        const LAND       = 1 << 9;
        const FIXED      = 1 << 10;
        const NOISY      = 1 << 11;
        /// Large flat square footprint (floor tile).
        const BIG_SQUARE = 1 << 12;
    }
}

impl ItemFlags {
    /// Bits computed by the projector; never taken from scene input.
    pub const DERIVED: Self = Self::FLAT.union(Self::BIG_SQUARE);

    #[inline]
    pub const fn sprite(self) -> bool {
        self.contains(Self::SPRITE)
    }

    #[inline]
    pub const fn flat(self) -> bool {
        self.contains(Self::FLAT)
    }

    #[inline]
    pub const fn invitem(self) -> bool {
        self.contains(Self::INVITEM)
    }

    #[inline]
    pub const fn trans(self) -> bool {
        self.contains(Self::TRANS)
    }

    #[inline]
    pub const fn anim(self) -> bool {
        self.contains(Self::ANIM)
    }

    #[inline]
    pub const fn draw(self) -> bool {
        self.contains(Self::DRAW)
    }

    #[inline]
    pub const fn solid(self) -> bool {
        self.contains(Self::SOLID)
    }

    #[inline]
    pub const fn occl(self) -> bool {
        self.contains(Self::OCCL)
    }

    #[inline]
    pub const fn roof(self) -> bool {
        self.contains(Self::ROOF)
    }

    #[inline]
    pub const fn land(self) -> bool {
        self.contains(Self::LAND)
    }

    #[inline]
    pub const fn fixed(self) -> bool {
        self.contains(Self::FIXED)
    }

    #[inline]
    pub const fn noisy(self) -> bool {
        self.contains(Self::NOISY)
    }

    #[inline]
    pub const fn big_square(self) -> bool {
        self.contains(Self::BIG_SQUARE)
    }
}
