//! Sub-pixel arithmetic at the font engine boundary
//!
//! Kerning deltas, advances and pen positions cross the engine boundary in
//! 26.6 fixed point: 26 integer bits, 6 fractional bits, 64 units per pixel.
//! Layout works in whole pixels and converts with an arithmetic shift, so a
//! negative kerning of -0.5 px lands on -1, the same way `>> 6` does.

/// A 26.6 fixed-point number
///
/// ```rust
/// use textstrip_core::fixed::F26Dot6;
///
/// let x = F26Dot6::from_int(5);       // exactly 5.0
/// let y = F26Dot6::from_float(5.5);   // 5 + 32/64
/// assert_eq!(x.raw(), 320);
/// assert_eq!(y.raw(), 352);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    /// Fractional bits
    pub const FRAC_BITS: u32 = 6;

    /// Mask for the fractional part
    pub const FRAC_MASK: i32 = (1 << Self::FRAC_BITS) - 1;

    pub const ONE: F26Dot6 = F26Dot6(1 << Self::FRAC_BITS);

    pub const ZERO: F26Dot6 = F26Dot6(0);

    pub const HALF: F26Dot6 = F26Dot6(1 << (Self::FRAC_BITS - 1));

    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F26Dot6(x << Self::FRAC_BITS)
    }

    /// Nearest representable value
    #[inline]
    pub fn from_float(x: f32) -> Self {
        F26Dot6((x * 64.0).round() as i32)
    }

    /// Whole pixels, rounding toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    #[inline]
    pub fn to_float(self) -> f32 {
        self.0 as f32 / 64.0
    }

    /// Snap to the pixel grid, rounding to nearest
    #[inline]
    pub const fn round(self) -> F26Dot6 {
        F26Dot6((self.0 + Self::HALF.0) & !Self::FRAC_MASK)
    }

    #[inline]
    pub const fn floor(self) -> F26Dot6 {
        F26Dot6(self.0 & !Self::FRAC_MASK)
    }

    #[inline]
    pub const fn ceil(self) -> F26Dot6 {
        if self.0 & Self::FRAC_MASK == 0 {
            self
        } else {
            F26Dot6((self.0 & !Self::FRAC_MASK) + Self::ONE.0)
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// A 2D offset in 26.6 units
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: F26Dot6,
    pub y: F26Dot6,
}

impl Vector {
    pub const ZERO: Vector = Vector {
        x: F26Dot6::ZERO,
        y: F26Dot6::ZERO,
    };

    #[inline]
    pub const fn new(x: F26Dot6, y: F26Dot6) -> Self {
        Self { x, y }
    }

    /// Whole-pixel coordinates lifted into 26.6
    #[inline]
    pub const fn from_pixels(x: i32, y: i32) -> Self {
        Self::new(F26Dot6::from_int(x), F26Dot6::from_int(y))
    }
}
