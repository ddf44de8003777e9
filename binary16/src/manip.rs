//! Neighbour stepping, exponent scaling, integral rounding, remainders,
//! interpolation, integer conversions and mathematical constants.

use crate::arith::{add_with_flags, mul_with_flags, sub_with_flags};
use crate::compare::{equal, greater, less};
use crate::error::ExceptionFlags;
use crate::half::{Half, leading_zero_count};
use crate::narrow::{Unpacked, round_to_half};
use crate::rounding::{RoundingBits, RoundingMode, should_round_up};

/// Any scale beyond this overflows or flushes every finite binary16 value.
const LDEXP_LIMIT: i32 = 64;

/// Mathematical constants, each the nearest binary16 value.
impl Half {
    /// Euler's number, e.
    pub const E: Self = Self::from_bits(0x4170);
    /// Archimedes' constant, π.
    pub const PI: Self = Self::from_bits(0x4248);
    /// The golden ratio, φ.
    pub const PHI: Self = Self::from_bits(0x3E79);
    /// √2
    pub const SQRT_2: Self = Self::from_bits(0x3DA8);
    /// √e
    pub const SQRT_E: Self = Self::from_bits(0x3E98);
    /// √π
    pub const SQRT_PI: Self = Self::from_bits(0x3F17);
    /// √φ
    pub const SQRT_PHI: Self = Self::from_bits(0x3D17);
    /// ln(2)
    pub const LN_2: Self = Self::from_bits(0x398C);
    /// log₂(e)
    pub const LOG2_E: Self = Self::from_bits(0x3DC5);
    /// ln(10)
    pub const LN_10: Self = Self::from_bits(0x409B);
    /// log₁₀(e)
    pub const LOG10_E: Self = Self::from_bits(0x36F3);
}

impl Half {
    /// Next representable value toward `+inf`.
    ///
    /// Both zeros step to the smallest positive subnormal; `+inf` stays put
    /// and a NaN yields the canonical quiet NaN.
    #[must_use]
    pub const fn next_up(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_pos_infinity() {
            return self;
        }
        if self.is_zero() {
            return Self::MIN_POSITIVE_SUBNORMAL;
        }
        if self.signbit() {
            Self::from_bits(self.to_bits() - 1)
        } else {
            Self::from_bits(self.to_bits() + 1)
        }
    }

    /// Next representable value toward `-inf`.
    #[must_use]
    pub const fn next_down(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        self.negate().next_up().negate()
    }

    /// Next representable value after `self` in the direction of `toward`.
    ///
    /// Returns `toward` when the two compare equal, so
    /// `next_after(-0, +0)` is `+0`.
    #[must_use]
    pub const fn next_after(self, toward: Self) -> Self {
        if self.is_nan() || toward.is_nan() {
            Self::NAN
        } else if equal(self, toward) {
            toward
        } else if less(self, toward) {
            self.next_up()
        } else {
            self.next_down()
        }
    }

    /// Split into a fraction with magnitude in `[0.5, 1)` and a power of two.
    ///
    /// Zeros, infinities and NaNs are returned unchanged with exponent 0.
    #[must_use]
    pub const fn frexp(self) -> (Self, i32) {
        if !self.is_finite() || self.is_zero() {
            return (self, 0);
        }
        let (sign, exponent, mantissa) = self.decompose();
        let (unbiased, mantissa) = if exponent == 0 {
            let shift = leading_zero_count(mantissa) + 1;
            (
                1 - Self::EXPONENT_BIAS - shift as i32,
                (mantissa << shift) & Self::MANTISSA_MASK,
            )
        } else {
            (exponent as i32 - Self::EXPONENT_BIAS, mantissa)
        };
        let half_exponent = (Self::EXPONENT_BIAS - 1) as u16;
        (Self::compose(sign, half_exponent, mantissa), unbiased + 1)
    }

    /// `self * 2^exp`, rounded to nearest even.
    ///
    /// Overflow gives infinity and results below the subnormal range flush
    /// to zero. Zeros, infinities and NaNs are returned unchanged.
    #[must_use]
    pub fn ldexp(self, exp: i32) -> Self {
        if !self.is_finite() || self.is_zero() {
            return self;
        }
        let mut unpacked = Unpacked::from_half(self);
        unpacked.exponent += exp.clamp(-LDEXP_LIMIT, LDEXP_LIMIT);
        round_to_half(&unpacked, RoundingMode::NearestEven).0
    }

    /// Round to an integral value in the given direction.
    ///
    /// The sign is kept, so `-0.25` truncates to `-0`. Infinities, NaNs and
    /// values already integral are returned unchanged.
    #[must_use]
    pub fn round_to_integral(self, mode: RoundingMode) -> Self {
        if !self.is_finite() || self.is_zero() {
            return self;
        }
        let unpacked = Unpacked::from_half(self);
        if unpacked.exponent >= 0 {
            return self;
        }
        let (mut integer, bits) = RoundingBits::split(unpacked.significand, -unpacked.exponent as u32);
        if should_round_up(mode, unpacked.sign, integer & 1 != 0, bits) {
            integer += 1;
        }
        round_to_half(&Unpacked::new(unpacked.sign, 0, integer), mode).0
    }

    /// Round toward zero.
    #[must_use]
    pub fn trunc(self) -> Self {
        self.round_to_integral(RoundingMode::TowardZero)
    }

    /// Round toward `-inf`.
    #[must_use]
    pub fn floor(self) -> Self {
        self.round_to_integral(RoundingMode::TowardNegative)
    }

    /// Round toward `+inf`.
    #[must_use]
    pub fn ceil(self) -> Self {
        self.round_to_integral(RoundingMode::TowardPositive)
    }

    /// Round to nearest, ties away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        self.round_to_integral(RoundingMode::NearestAway)
    }

    /// Round to nearest, ties to even.
    #[must_use]
    pub fn round_ties_even(self) -> Self {
        self.round_to_integral(RoundingMode::NearestEven)
    }

    /// `self - self.trunc()`. NaN for infinities and NaNs.
    #[must_use]
    pub fn fract(self) -> Self {
        if !self.is_finite() {
            return Self::NAN;
        }
        sub_with_flags(self, self.trunc(), RoundingMode::NearestEven).0
    }

    /// Split into `(fractional, integral)` parts sharing the sign of `self`.
    ///
    /// An infinity splits into a signed zero and itself; a NaN into two
    /// copies of itself.
    #[must_use]
    pub fn modf(self) -> (Self, Self) {
        if self.is_nan() {
            return (self, self);
        }
        if self.is_infinite() {
            return (Self::zero_with_sign(self.signbit()), self);
        }
        let integral = self.trunc();
        let fractional = sub_with_flags(self, integral, RoundingMode::NearestEven).0;
        (fractional.copysign(self), integral)
    }

    /// Truncated remainder: `self - n * divisor` with `n = trunc(self / divisor)`.
    ///
    /// The result is exact and carries the sign of `self`. A NaN operand, an
    /// infinite `self` or a zero divisor give NaN; an infinite divisor
    /// returns `self`.
    #[must_use]
    pub fn modulo(self, divisor: Self) -> Self {
        if let Some(special) = remainder_special(self, divisor) {
            return special;
        }
        let (x, y, exponent) = align(self, divisor);
        round_to_half(&Unpacked::new(self.signbit(), exponent, x % y), RoundingMode::NearestEven).0
    }

    /// IEEE remainder: `self - n * divisor` with `n` the quotient rounded to
    /// nearest, ties to even.
    ///
    /// The result is exact and its magnitude is at most `|divisor| / 2`. A
    /// zero result takes the sign of `self`. Special cases match
    /// [`Half::modulo`].
    #[must_use]
    pub fn remainder(self, divisor: Self) -> Self {
        if let Some(special) = remainder_special(self, divisor) {
            return special;
        }
        let (x, y, exponent) = align(self, divisor);
        let (quotient, rest) = (x / y, x % y);
        let twice = rest << 1;
        let sign = self.signbit();
        let (sign, magnitude) = if twice > y || (twice == y && quotient & 1 != 0) {
            (!sign, y - rest)
        } else {
            (sign, rest)
        };
        round_to_half(&Unpacked::new(sign, exponent, magnitude), RoundingMode::NearestEven).0
    }

    /// Positive difference: `self - other` when `self > other`, else `+0`.
    ///
    /// A NaN operand propagates.
    #[must_use]
    pub fn dim(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() || greater(self, other) {
            sub_with_flags(self, other, RoundingMode::NearestEven).0
        } else {
            Self::ZERO
        }
    }

    /// Linear interpolation `self + t * (other - self)`, rounded to nearest
    /// even at each step.
    ///
    /// `t == 0` returns `self` and `t == 1` returns `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: Self) -> Self {
        self.lerp_with_flags(other, t, RoundingMode::NearestEven).0
    }

    /// [`Half::lerp`] in the given rounding direction, with the flags raised
    /// by any of its three operations.
    #[must_use]
    pub fn lerp_with_flags(self, other: Self, t: Self, rounding: RoundingMode) -> (Self, ExceptionFlags) {
        if t.is_zero() {
            return (self, ExceptionFlags::NONE);
        }
        if equal(t, Self::ONE) {
            return (other, ExceptionFlags::NONE);
        }
        let (span, mut flags) = sub_with_flags(other, self, rounding);
        let (step, raised) = mul_with_flags(t, span, rounding);
        flags |= raised;
        let (result, raised) = add_with_flags(self, step, rounding);
        flags |= raised;
        (result, flags)
    }

    /// `-1` for negative values and `1` for positive ones, infinities
    /// included.
    ///
    /// Unlike `f32::signum`, both zeros give `+0`. A NaN is returned
    /// unchanged.
    #[must_use]
    pub const fn signum(self) -> Self {
        if self.is_nan() {
            self
        } else if self.is_zero() {
            Self::ZERO
        } else if self.signbit() {
            Self::NEG_ONE
        } else {
            Self::ONE
        }
    }

    /// Convert an integer with the given rounding direction.
    #[must_use]
    pub fn from_i64_with(value: i64, mode: RoundingMode) -> Self {
        let unpacked = Unpacked::new(value < 0, 0, value.unsigned_abs());
        round_to_half(&unpacked, mode).0
    }

    /// Convert an unsigned integer with the given rounding direction.
    #[must_use]
    pub fn from_u64_with(value: u64, mode: RoundingMode) -> Self {
        round_to_half(&Unpacked::new(false, 0, value), mode).0
    }

    /// Convert an `i32`, rounding to nearest even.
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        Self::from_i64_with(i64::from(value), RoundingMode::NearestEven)
    }

    /// Convert an `i64`, rounding to nearest even.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self::from_i64_with(value, RoundingMode::NearestEven)
    }

    /// Convert a `u64`, rounding to nearest even.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::from_u64_with(value, RoundingMode::NearestEven)
    }

    /// Integer part, truncated toward zero; `None` for infinities and NaNs.
    #[must_use]
    pub fn to_i64_checked(self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }
        if self.is_zero() {
            return Some(0);
        }
        let unpacked = Unpacked::from_half(self);
        let magnitude = if unpacked.exponent >= 0 {
            unpacked.significand << unpacked.exponent
        } else {
            unpacked.significand >> -unpacked.exponent
        };
        let magnitude = magnitude as i64;
        Some(if unpacked.sign { -magnitude } else { magnitude })
    }
}

/// Results of `modulo` and `remainder` that need no division; `None` when
/// both operands are finite and nonzero.
const fn remainder_special(x: Half, y: Half) -> Option<Half> {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y.is_zero() {
        Some(Half::NAN)
    } else if x.is_zero() || y.is_infinite() {
        Some(x)
    } else {
        None
    }
}

/// Integer significands of two finite nonzero values on a shared scale
/// `2^exponent`. Exponents span at most 29, so both fit in 40 bits.
fn align(x: Half, y: Half) -> (u64, u64, i32) {
    let x = Unpacked::from_half(x);
    let y = Unpacked::from_half(y);
    let exponent = x.exponent.min(y.exponent);
    (
        x.significand << (x.exponent - exponent),
        y.significand << (y.exponent - exponent),
        exponent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(bits: u16) -> Half {
        Half::from_bits(bits)
    }

    fn f(x: f64) -> Half {
        Half::from_f64(x)
    }

    #[test]
    fn test_next_after() {
        assert_eq!(h(0x3C00).next_after(h(0x4000)).to_bits(), 0x3C01);
        assert_eq!(h(0x3C00).next_after(Half::ZERO).to_bits(), 0x3BFF);
        assert_eq!(Half::ZERO.next_after(Half::ONE).to_bits(), 0x0001);
        assert_eq!(Half::ZERO.next_after(Half::NEG_ONE).to_bits(), 0x8001);
        assert_eq!(Half::NEG_ZERO.next_after(Half::ZERO).to_bits(), 0x0000);
        assert_eq!(Half::MAX.next_after(Half::INFINITY).to_bits(), 0x7C00);
        assert_eq!(Half::INFINITY.next_after(Half::ZERO).to_bits(), 0x7BFF);
        assert_eq!(Half::ONE.next_after(Half::NAN).to_bits(), 0x7E00);
        assert_eq!(h(0x8001).next_after(Half::ONE).to_bits(), 0x8000);
    }

    #[test]
    fn test_next_up_down() {
        assert_eq!(Half::NEG_INFINITY.next_up().to_bits(), 0xFBFF);
        assert_eq!(Half::INFINITY.next_up().to_bits(), 0x7C00);
        assert_eq!(Half::NEG_INFINITY.next_down().to_bits(), 0xFC00);
        assert_eq!(Half::ZERO.next_down().to_bits(), 0x8001);
        assert_eq!(Half::MAX_SUBNORMAL.next_up().to_bits(), 0x0400);
        assert!(Half::SIGNALING_NAN.next_down().is_quiet_nan());
    }

    #[test]
    fn test_frexp_ldexp() {
        let (fraction, exp) = f(8.0).frexp();
        assert_eq!((fraction.to_f64(), exp), (0.5, 4));
        let (fraction, exp) = f(-3.0).frexp();
        assert_eq!((fraction.to_f64(), exp), (-0.75, 2));
        let (fraction, exp) = Half::MIN_POSITIVE_SUBNORMAL.frexp();
        assert_eq!((fraction.to_f64(), exp), (0.5, -23));
        for bits in [0x0001u16, 0x0155, 0x03FF, 0x0400, 0x3C00, 0x7BFF, 0xB123] {
            let (fraction, exp) = h(bits).frexp();
            assert_eq!(fraction.ldexp(exp).to_bits(), bits);
        }
        assert_eq!(Half::NAN.frexp().1, 0);
    }

    #[test]
    fn test_ldexp_rounding() {
        assert_eq!(Half::ONE.ldexp(3).to_f64(), 8.0);
        assert_eq!(Half::ONE.ldexp(16).to_bits(), 0x7C00);
        assert_eq!(Half::ONE.ldexp(-24).to_bits(), 0x0001);
        assert_eq!(Half::ONE.ldexp(-25).to_bits(), 0x0000);
        assert_eq!(f(1.5).ldexp(-25).to_bits(), 0x0001);
        // 3 * 2^-25 ties to the even subnormal 2
        assert_eq!(f(3.0).ldexp(-25).to_bits(), 0x0002);
        assert_eq!(Half::ONE.ldexp(i32::MAX).to_bits(), 0x7C00);
        assert_eq!(Half::NEG_ONE.ldexp(i32::MIN).to_bits(), 0x8000);
    }

    #[test]
    fn test_integral_rounding() {
        assert_eq!(f(2.5).trunc().to_f64(), 2.0);
        assert_eq!(f(-2.5).trunc().to_f64(), -2.0);
        assert_eq!(f(-0.25).trunc().to_bits(), 0x8000);
        assert_eq!(f(2.5).floor().to_f64(), 2.0);
        assert_eq!(f(-2.5).floor().to_f64(), -3.0);
        assert_eq!(f(-0.5).floor().to_f64(), -1.0);
        assert_eq!(f(2.25).ceil().to_f64(), 3.0);
        assert_eq!(f(-0.5).ceil().to_bits(), 0x8000);
        assert_eq!(f(2.5).round().to_f64(), 3.0);
        assert_eq!(f(-2.5).round().to_f64(), -3.0);
        assert_eq!(f(2.5).round_ties_even().to_f64(), 2.0);
        assert_eq!(f(3.5).round_ties_even().to_f64(), 4.0);
        assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.ceil().to_f64(), 1.0);
        assert_eq!(Half::MAX.floor().to_bits(), 0x7BFF);
        assert_eq!(f(1023.5).round_ties_even().to_f64(), 1024.0);
    }

    #[test]
    fn test_fract_modf() {
        assert_eq!(f(2.75).fract().to_f64(), 0.75);
        assert_eq!(f(-2.75).fract().to_f64(), -0.75);
        assert!(Half::INFINITY.fract().is_nan());
        let (fractional, integral) = f(-3.5).modf();
        assert_eq!((fractional.to_f64(), integral.to_f64()), (-0.5, -3.0));
        let (fractional, integral) = f(-4.0).modf();
        assert_eq!(fractional.to_bits(), 0x8000);
        assert_eq!(integral.to_f64(), -4.0);
        let (fractional, integral) = Half::NEG_INFINITY.modf();
        assert_eq!((fractional.to_bits(), integral.to_bits()), (0x8000, 0xFC00));
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Half::from_i32(-3).to_bits(), 0xC200);
        assert_eq!(Half::from_i64(65504).to_bits(), 0x7BFF);
        assert_eq!(Half::from_i64(65520).to_bits(), 0x7C00);
        assert_eq!(Half::from_i64(i64::MIN).to_bits(), 0xFC00);
        assert_eq!(Half::from_u64(2049).to_f64(), 2048.0);
        assert_eq!(Half::from_u64_with(2049, RoundingMode::TowardPositive).to_f64(), 2050.0);
        assert_eq!(Half::from_i64_with(-2049, RoundingMode::TowardNegative).to_f64(), -2050.0);
        assert_eq!(Half::from_u64(0).to_bits(), 0x0000);

        assert_eq!(f(-3.75).to_i64_checked(), Some(-3));
        assert_eq!(Half::MAX.to_i64_checked(), Some(65504));
        assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.to_i64_checked(), Some(0));
        assert_eq!(Half::INFINITY.to_i64_checked(), None);
        assert_eq!(Half::NAN.to_i64_checked(), None);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(f(5.5).modulo(f(2.0)).to_f64(), 1.5);
        assert_eq!(f(-5.5).modulo(f(2.0)).to_f64(), -1.5);
        assert_eq!(f(5.5).modulo(f(-2.0)).to_f64(), 1.5);
        assert_eq!(Half::MAX.modulo(f(3.0)).to_f64(), 2.0);
        assert_eq!(f(-4.0).modulo(f(2.0)).to_bits(), 0x8000);
        assert_eq!(Half::MAX.modulo(Half::MIN_POSITIVE_SUBNORMAL).to_bits(), 0x0000);
        assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.modulo(Half::MAX).to_bits(), 0x0001);

        assert!(Half::ONE.modulo(Half::ZERO).is_nan());
        assert!(Half::ONE.modulo(Half::NEG_ZERO).is_nan());
        assert!(Half::INFINITY.modulo(Half::ONE).is_nan());
        assert!(Half::NAN.modulo(Half::ONE).is_nan());
        assert!(Half::ONE.modulo(Half::NAN).is_nan());
        assert_eq!(f(-3.0).modulo(Half::INFINITY).to_f64(), -3.0);
        assert_eq!(Half::NEG_ZERO.modulo(f(3.0)).to_bits(), 0x8000);
    }

    #[test]
    fn test_modulo_matches_host_fmod() {
        let divisors = [0x0001u16, 0x0155, 0x3555, 0x3C00, 0x4248, 0xC500, 0x7BFF, 0x7C00];
        for y in divisors.map(h) {
            for bits in (0..=0xFFFFu16).step_by(37) {
                let x = h(bits);
                let expected = x.to_f64() % y.to_f64();
                let got = x.modulo(y);
                if expected.is_nan() {
                    assert!(got.is_nan(), "{x:?} % {y:?}");
                } else {
                    assert_eq!(got.to_bits(), Half::from_f64(expected).to_bits(), "{x:?} % {y:?}");
                }
            }
        }
    }

    #[test]
    fn test_remainder() {
        assert_eq!(f(5.5).remainder(f(2.0)).to_f64(), -0.5);
        assert_eq!(f(-5.5).remainder(f(2.0)).to_f64(), 0.5);
        // quotient 3.5 rounds to 4, 2.5 rounds to 2
        assert_eq!(f(7.0).remainder(f(2.0)).to_f64(), -1.0);
        assert_eq!(f(5.0).remainder(f(2.0)).to_f64(), 1.0);
        assert_eq!(f(4.0).remainder(f(2.0)).to_bits(), 0x0000);
        assert_eq!(f(-4.0).remainder(f(2.0)).to_bits(), 0x8000);
        assert_eq!(Half::MAX.remainder(f(3.0)).to_f64(), -1.0);
        assert_eq!(f(0.75).remainder(Half::MIN_POSITIVE_SUBNORMAL).to_bits(), 0x0000);

        assert!(f(3.0).remainder(Half::ZERO).is_nan());
        assert!(Half::NEG_INFINITY.remainder(f(3.0)).is_nan());
        assert!(Half::NAN.remainder(Half::INFINITY).is_nan());
        assert_eq!(f(3.0).remainder(Half::INFINITY).to_f64(), 3.0);
        assert_eq!(f(-0.5).remainder(Half::NEG_INFINITY).to_f64(), -0.5);
        assert_eq!(Half::ZERO.remainder(f(3.0)).to_bits(), 0x0000);
    }

    #[test]
    fn test_dim() {
        assert_eq!(f(5.0).dim(f(3.0)).to_f64(), 2.0);
        assert_eq!(f(3.0).dim(f(5.0)).to_bits(), 0x0000);
        assert_eq!(Half::NEG_ZERO.dim(Half::ZERO).to_bits(), 0x0000);
        assert_eq!(Half::MAX.dim(Half::MIN).to_bits(), 0x7C00);
        assert_eq!(Half::INFINITY.dim(Half::INFINITY).to_bits(), 0x0000);
        assert!(Half::NAN.dim(Half::ONE).is_nan());
        assert!(Half::ONE.dim(Half::NAN).is_nan());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(f(2.0).lerp(f(4.0), f(0.5)).to_f64(), 3.0);
        assert_eq!(f(2.0).lerp(f(4.0), f(2.0)).to_f64(), 6.0);
        assert_eq!(f(-1.0).lerp(f(1.0), f(0.25)).to_f64(), -0.5);
        assert_eq!(f(7.0).lerp(Half::INFINITY, Half::ZERO).to_f64(), 7.0);
        assert_eq!(Half::NAN.lerp(f(7.0), Half::ONE).to_f64(), 7.0);
        assert!(f(1.0).lerp(f(2.0), Half::NAN).is_nan());

        let (result, flags) =
            Half::MIN.lerp_with_flags(Half::MAX, f(0.5), RoundingMode::NearestEven);
        assert_eq!(result.to_bits(), 0x7C00);
        assert!(flags.overflow && flags.inexact);

        let (_, flags) = f(1.0).lerp_with_flags(f(2.0), f(1.0 / 3.0), RoundingMode::TowardZero);
        assert!(flags.inexact && !flags.overflow);
        let (_, flags) = f(2.0).lerp_with_flags(f(4.0), f(0.5), RoundingMode::NearestEven);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_signum() {
        assert_eq!(f(-3.0).signum().to_bits(), 0xBC00);
        assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.signum().to_bits(), 0x3C00);
        assert_eq!(Half::NEG_INFINITY.signum().to_bits(), 0xBC00);
        assert_eq!(Half::NEG_ZERO.signum().to_bits(), 0x0000);
        assert_eq!(Half::ZERO.signum().to_bits(), 0x0000);
        assert_eq!(Half::SIGNALING_NAN.signum().to_bits(), 0x7D00);
    }

    #[test]
    fn test_constants_are_nearest() {
        use std::f64::consts;

        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        for (constant, exact) in [
            (Half::E, consts::E),
            (Half::PI, consts::PI),
            (Half::PHI, phi),
            (Half::SQRT_2, consts::SQRT_2),
            (Half::SQRT_E, consts::E.sqrt()),
            (Half::SQRT_PI, consts::PI.sqrt()),
            (Half::SQRT_PHI, phi.sqrt()),
            (Half::LN_2, consts::LN_2),
            (Half::LOG2_E, consts::LOG2_E),
            (Half::LN_10, consts::LN_10),
            (Half::LOG10_E, consts::LOG10_E),
        ] {
            assert_eq!(constant.to_bits(), Half::from_f64(exact).to_bits(), "{exact}");
        }
        assert_eq!(Half::PI.to_f64(), 3.140625);
    }
}
