//! Numeric pixel domains
//!
//! [`Pixel`] collapses the float and integer pixel domains into one trait so
//! that every operator is written once. Each domain supplies two constants:
//!
//! - [`Pixel::MAX_BOUND`]: the default upper threshold used by dilation.
//!   Floats use the largest representable value; `i32` uses the integer
//!   pixel encoding's full-scale sentinel `0x0100_0000`, not `i32::MAX`.
//! - [`Pixel::FULL_SCALE`]: the "on" value written by binarizing and
//!   negating operations (`1.0` for floats).
//!
//! Ordering is total and deterministic: floats compare with IEEE 754
//! `totalOrder`, so reductions over a fixed matrix always give the same
//! answer even when NaNs are present.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Full-scale value of the 32-bit integer pixel encoding
pub const INT_FULL_SCALE: i32 = 0x0100_0000;

/// An ordered numeric pixel type.
pub trait Pixel: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Default upper threshold for dilation-style operators
    const MAX_BOUND: Self;
    /// Value written for "on" pixels by thresholding and used by negation
    const FULL_SCALE: Self;

    /// Total order over the domain.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// `|self - other|`, saturating for integer domains.
    fn abs_diff(self, other: Self) -> Self;

    /// `self - other`, saturating for integer domains.
    fn saturating_sub(self, other: Self) -> Self;

    /// Whether the value is strictly below zero.
    fn is_negative(self) -> bool;

    /// Absolute value, saturating for integer domains.
    fn abs(self) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, rounding and saturating for integer domains.
    fn from_f64(value: f64) -> Self;

    /// The smaller of two values under [`Pixel::total_cmp`].
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other.total_cmp(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// The larger of two values under [`Pixel::total_cmp`].
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other.total_cmp(&self) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// `self <= other` under [`Pixel::total_cmp`].
    #[inline]
    fn at_most(self, other: Self) -> bool {
        self.total_cmp(&other) != Ordering::Greater
    }

    /// `self >= other` under [`Pixel::total_cmp`].
    #[inline]
    fn at_least(self, other: Self) -> bool {
        self.total_cmp(&other) != Ordering::Less
    }

    /// Clamp into `[lo, hi]`.
    #[inline]
    fn clamp_to(self, lo: Self, hi: Self) -> Self {
        self.max_of(lo).min_of(hi)
    }
}

macro_rules! impl_float_pixel {
    ($t:ty) => {
        impl Pixel for $t {
            const ZERO: Self = 0.0;
            const MAX_BOUND: Self = <$t>::MAX;
            const FULL_SCALE: Self = 1.0;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            #[inline]
            fn abs_diff(self, other: Self) -> Self {
                (self - other).abs()
            }

            #[inline]
            fn saturating_sub(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

macro_rules! impl_int_pixel {
    ($t:ty, $max_bound:expr, $full_scale:expr) => {
        impl Pixel for $t {
            const ZERO: Self = 0;
            const MAX_BOUND: Self = $max_bound;
            const FULL_SCALE: Self = $full_scale;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn abs_diff(self, other: Self) -> Self {
                <$t>::try_from(<$t>::abs_diff(self, other)).unwrap_or(<$t>::MAX)
            }

            #[inline]
            fn saturating_sub(self, other: Self) -> Self {
                <$t>::saturating_sub(self, other)
            }

            #[inline]
            #[allow(unused_comparisons)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn abs(self) -> Self {
                if Pixel::is_negative(self) {
                    <$t>::ZERO.saturating_sub(self)
                } else {
                    self
                }
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                // `as` saturates float-to-int casts and maps NaN to 0
                value.round() as $t
            }
        }
    };
}

impl_float_pixel!(f32);
impl_float_pixel!(f64);
impl_int_pixel!(i32, INT_FULL_SCALE, INT_FULL_SCALE);
impl_int_pixel!(u8, u8::MAX, u8::MAX);
impl_int_pixel!(u16, u16::MAX, u16::MAX);
