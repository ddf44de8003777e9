//! The binary16 value type and its bit-level representation.
//!
//! A [`Half`] is an opaque 16-bit pattern laid out as
//!
//! ```text
//!  15 | 14 ........ 10 | 9 ................ 0
//! sign| exponent (b15) |      mantissa
//! ```
//!
//! All field access goes through [`Half::decompose`] / [`Half::compose`], and
//! every boolean predicate is derived from [`Half::classify`], so the
//! predicates cannot disagree with the classifier.

use crate::class::FpClass;
use serde::{Deserialize, Serialize};

/// IEEE 754-2008 half-precision (binary16) floating-point value.
///
/// Values are immutable and `Copy`; every operation returns a new value.
/// Equality and ordering follow IEEE 754 (see [`crate::compare`]), so two
/// NaNs never compare equal while `+0 == -0`. Use [`Half::to_bits`] for
/// bit-exact comparisons.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// Sign bit mask.
    pub const SIGN_MASK: u16 = 0x8000;
    /// Exponent field mask.
    pub const EXPONENT_MASK: u16 = 0x7C00;
    /// Mantissa field mask.
    pub const MANTISSA_MASK: u16 = 0x03FF;
    /// Most significant mantissa bit; set for quiet NaNs.
    pub const QUIET_BIT: u16 = 0x0200;
    /// Number of stored mantissa bits.
    pub const MANTISSA_BITS: u32 = 10;
    /// Number of exponent bits.
    pub const EXPONENT_BITS: u32 = 5;
    /// Exponent bias.
    pub const EXPONENT_BIAS: i32 = 15;
    /// Biased exponent reserved for infinities and NaNs.
    pub const EXPONENT_MAX: u16 = 31;

    /// Positive zero, `0x0000`.
    pub const ZERO: Self = Self(0x0000);
    /// Negative zero, `0x8000`.
    pub const NEG_ZERO: Self = Self(0x8000);
    /// One, `0x3C00`.
    pub const ONE: Self = Self(0x3C00);
    /// Negative one, `0xBC00`.
    pub const NEG_ONE: Self = Self(0xBC00);
    /// Positive infinity, `0x7C00`.
    pub const INFINITY: Self = Self(0x7C00);
    /// Negative infinity, `0xFC00`.
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Largest finite value, 65504 (`0x7BFF`).
    pub const MAX: Self = Self(0x7BFF);
    /// Most negative finite value, -65504 (`0xFBFF`).
    pub const MIN: Self = Self(0xFBFF);
    /// Smallest positive normal value, 2^-14 (`0x0400`).
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Largest subnormal value, 1023 * 2^-24 (`0x03FF`).
    pub const MAX_SUBNORMAL: Self = Self(0x03FF);
    /// Smallest positive subnormal value, 2^-24 (`0x0001`).
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Canonical quiet NaN, `0x7E00`.
    pub const NAN: Self = Self(0x7E00);
    /// Negative quiet NaN, `0xFE00`.
    pub const NEG_NAN: Self = Self(0xFE00);
    /// A signaling NaN, `0x7D00`.
    pub const SIGNALING_NAN: Self = Self(0x7D00);
    /// Difference between 1.0 and the next larger value, 2^-10 (`0x1400`).
    pub const EPSILON: Self = Self(0x1400);

    /// Create a value from its raw bit pattern.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw bit pattern.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Split into `(sign, biased exponent, mantissa)`.
    ///
    /// Exact inverse of [`Half::compose`] over all 65 536 patterns.
    #[inline]
    #[must_use]
    pub const fn decompose(self) -> (bool, u16, u16) {
        let sign = self.0 & Self::SIGN_MASK != 0;
        let exponent = (self.0 & Self::EXPONENT_MASK) >> Self::MANTISSA_BITS;
        let mantissa = self.0 & Self::MANTISSA_MASK;
        (sign, exponent, mantissa)
    }

    /// Assemble a value from `(sign, biased exponent, mantissa)`.
    ///
    /// The exponent is masked to 5 bits and the mantissa to 10 bits.
    #[inline]
    #[must_use]
    pub const fn compose(sign: bool, exponent: u16, mantissa: u16) -> Self {
        let sign = if sign { Self::SIGN_MASK } else { 0 };
        Self(sign | ((exponent & 0x1F) << Self::MANTISSA_BITS) | (mantissa & Self::MANTISSA_MASK))
    }

    /// IEEE 754 class of this value.
    #[must_use]
    pub const fn classify(self) -> FpClass {
        let (sign, exponent, mantissa) = self.decompose();
        match (exponent, mantissa) {
            (Self::EXPONENT_MAX, 0) => {
                if sign {
                    FpClass::NegativeInfinity
                } else {
                    FpClass::PositiveInfinity
                }
            }
            (Self::EXPONENT_MAX, m) => {
                if m & Self::QUIET_BIT != 0 {
                    FpClass::QuietNaN
                } else {
                    FpClass::SignalingNaN
                }
            }
            (0, 0) => {
                if sign {
                    FpClass::NegativeZero
                } else {
                    FpClass::PositiveZero
                }
            }
            (0, _) => {
                if sign {
                    FpClass::NegativeSubnormal
                } else {
                    FpClass::PositiveSubnormal
                }
            }
            _ => {
                if sign {
                    FpClass::NegativeNormal
                } else {
                    FpClass::PositiveNormal
                }
            }
        }
    }

    /// True for `+0` and `-0`.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.classify().is_zero()
    }

    /// True for any NaN, quiet or signaling.
    #[inline]
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.classify().is_nan()
    }

    /// True for signaling NaNs.
    #[inline]
    #[must_use]
    pub const fn is_signaling_nan(self) -> bool {
        matches!(self.classify(), FpClass::SignalingNaN)
    }

    /// True for quiet NaNs.
    #[inline]
    #[must_use]
    pub const fn is_quiet_nan(self) -> bool {
        matches!(self.classify(), FpClass::QuietNaN)
    }

    /// True for either infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.classify().is_infinite()
    }

    /// True only for `+inf`.
    #[inline]
    #[must_use]
    pub const fn is_pos_infinity(self) -> bool {
        matches!(self.classify(), FpClass::PositiveInfinity)
    }

    /// True only for `-inf`.
    #[inline]
    #[must_use]
    pub const fn is_neg_infinity(self) -> bool {
        matches!(self.classify(), FpClass::NegativeInfinity)
    }

    /// True unless infinite or NaN.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.classify().is_finite()
    }

    /// True for normal numbers (not zero, subnormal, infinite or NaN).
    #[inline]
    #[must_use]
    pub const fn is_normal(self) -> bool {
        self.classify().is_normal()
    }

    /// True for subnormal numbers.
    #[inline]
    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        self.classify().is_subnormal()
    }

    /// `-1`, `0` or `1`.
    ///
    /// Both zeros report `0` regardless of their stored sign bit; use
    /// [`Half::signbit`] to read the sign bit itself. NaNs report the sign
    /// of their sign bit.
    #[must_use]
    pub const fn sign(self) -> i8 {
        if self.is_zero() {
            0
        } else if self.signbit() {
            -1
        } else {
            1
        }
    }

    /// The stored sign bit.
    #[inline]
    #[must_use]
    pub const fn signbit(self) -> bool {
        self.0 & Self::SIGN_MASK != 0
    }

    /// Same as [`Half::signbit`].
    #[inline]
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.signbit()
    }

    /// Negation of [`Half::signbit`].
    #[inline]
    #[must_use]
    pub const fn is_sign_positive(self) -> bool {
        !self.signbit()
    }

    /// Clear the sign bit.
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0 & !Self::SIGN_MASK)
    }

    /// Flip the sign bit. Applies to zeros, infinities and NaNs alike.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Self {
        Self(self.0 ^ Self::SIGN_MASK)
    }

    /// Magnitude of `self` with the sign bit of `sign`.
    #[inline]
    #[must_use]
    pub const fn copysign(self, sign: Self) -> Self {
        Self((self.0 & !Self::SIGN_MASK) | (sign.0 & Self::SIGN_MASK))
    }

    /// Set the quiet bit of a NaN; other values are returned unchanged.
    #[inline]
    #[must_use]
    pub const fn quieted(self) -> Self {
        if self.is_nan() {
            Self(self.0 | Self::QUIET_BIT)
        } else {
            self
        }
    }

    /// Signed zero with the given sign.
    #[inline]
    #[must_use]
    pub(crate) const fn zero_with_sign(negative: bool) -> Self {
        if negative { Self::NEG_ZERO } else { Self::ZERO }
    }

    /// Signed infinity with the given sign.
    #[inline]
    #[must_use]
    pub(crate) const fn infinity_with_sign(negative: bool) -> Self {
        if negative {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }
}

/// Leading zeros of a 10-bit mantissa; 10 for a zero mantissa.
///
/// Used to normalize subnormals: shifting a nonzero mantissa left by
/// `leading_zero_count(m) + 1` moves its leading one to the implicit-bit
/// position.
#[inline]
#[must_use]
pub const fn leading_zero_count(mantissa: u16) -> u32 {
    (mantissa & Half::MANTISSA_MASK).leading_zeros() - (16 - Half::MANTISSA_BITS)
}
