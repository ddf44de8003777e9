//! Narrowing from wide formats into binary16.
//!
//! Every lossy path in the crate ends in [`round_to_half`]: conversions,
//! the integer-significand arithmetic, integer-to-half and `ldexp` all
//! describe their exact (or sticky-tagged) result as an [`Unpacked`] value
//! and let this one routine pick the representable neighbour.

use crate::error::{ErrorKind, ExceptionFlags, Operand, Operation, OperationError, OperationResult};
use crate::format::{FloatFormat, WideFloat};
use crate::half::Half;
use crate::mode::ConversionMode;
use crate::rounding::{RoundingBits, RoundingMode, should_round_up};

/// Exponent of the least significant bit of the smallest subnormal.
const MIN_LSB_EXPONENT: i32 = 1 - Half::EXPONENT_BIAS - Half::MANTISSA_BITS as i32;
/// Unbiased exponent of the smallest normal value.
const MIN_NORMAL_EXPONENT: i32 = 1 - Half::EXPONENT_BIAS;
/// Unbiased exponent of the largest finite value.
const MAX_NORMAL_EXPONENT: i32 = Half::EXPONENT_BIAS;

/// A finite value `(-1)^sign * significand * 2^exponent` awaiting rounding.
///
/// `sticky` records that nonzero bits below `significand` were already
/// lost (e.g. a division remainder). Producers only set it when the
/// significand carries at least 13 significant bits, so those lost bits
/// always sit below the round bit of the binary16 result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unpacked {
    /// Sign of the value.
    pub sign: bool,
    /// Power of two scaling the significand.
    pub exponent: i32,
    /// Integer significand.
    pub significand: u64,
    /// Nonzero bits were discarded below the significand.
    pub sticky: bool,
}

impl Unpacked {
    /// An exact value.
    #[must_use]
    pub const fn new(sign: bool, exponent: i32, significand: u64) -> Self {
        Self {
            sign,
            exponent,
            significand,
            sticky: false,
        }
    }

    /// Unpack a finite binary16 value. Zero unpacks to a zero significand.
    #[must_use]
    pub const fn from_half(h: Half) -> Self {
        let (sign, exponent, mantissa) = h.decompose();
        if exponent == 0 {
            Self::new(sign, MIN_LSB_EXPONENT, mantissa as u64)
        } else {
            Self::new(
                sign,
                exponent as i32 - Half::EXPONENT_BIAS - Half::MANTISSA_BITS as i32,
                (mantissa | (1 << Half::MANTISSA_BITS)) as u64,
            )
        }
    }
}

/// Round an unpacked finite value to binary16.
///
/// Overflow produces signed infinity in every rounding mode. A magnitude
/// below 2^-25 (its guard bit would sit above its leading one) is flushed to
/// signed zero. A subnormal that rounds up past 0x3FF becomes the smallest
/// normal. `underflow` is raised when a nonzero value yields zero.
#[must_use]
pub fn round_to_half(value: &Unpacked, mode: RoundingMode) -> (Half, ExceptionFlags) {
    let sign = value.sign;
    if value.significand == 0 {
        return (Half::zero_with_sign(sign), ExceptionFlags::NONE);
    }

    let msb = 63 - value.significand.leading_zeros() as i32;
    let top = value.exponent.saturating_add(msb);
    if top > MAX_NORMAL_EXPONENT {
        return overflow(sign);
    }

    let lsb_exponent = top.max(MIN_NORMAL_EXPONENT) - Half::MANTISSA_BITS as i32;
    let shift = lsb_exponent - value.exponent;
    if shift >= msb + 2 {
        return underflow(sign);
    }

    let (mut kept, bits) = if shift <= 0 {
        (value.significand << -shift, RoundingBits::EXACT)
    } else {
        RoundingBits::split(value.significand, shift as u32)
    };
    let bits = bits.with_sticky(value.sticky);
    if should_round_up(mode, sign, kept & 1 != 0, bits) {
        kept += 1;
    }

    // Adding the significand (implicit bit included) onto `biased - 1`
    // lets a carry out of the mantissa bump the exponent field.
    let base = if top < MIN_NORMAL_EXPONENT {
        0
    } else {
        ((top + Half::EXPONENT_BIAS - 1) as u64) << Half::MANTISSA_BITS
    };
    let magnitude = base + kept;
    if magnitude >= u64::from(Half::EXPONENT_MASK) {
        return overflow(sign);
    }

    let flags = ExceptionFlags {
        inexact: !bits.is_exact(),
        underflow: magnitude == 0,
        ..ExceptionFlags::NONE
    };
    let sign_bit = if sign { Half::SIGN_MASK } else { 0 };
    (Half::from_bits(sign_bit | magnitude as u16), flags)
}

fn overflow(sign: bool) -> (Half, ExceptionFlags) {
    let flags = ExceptionFlags {
        overflow: true,
        inexact: true,
        ..ExceptionFlags::NONE
    };
    (Half::infinity_with_sign(sign), flags)
}

fn underflow(sign: bool) -> (Half, ExceptionFlags) {
    let flags = ExceptionFlags {
        underflow: true,
        inexact: true,
        ..ExceptionFlags::NONE
    };
    (Half::zero_with_sign(sign), flags)
}

/// Narrow `x` with IEEE semantics, reporting the raised exception flags.
///
/// Infinities map to infinities and zeros to zeros of the same sign. A NaN
/// keeps its sign and the top ten bits of its payload, so quiet NaNs stay
/// quiet; a payload that would truncate to zero becomes 1.
#[must_use]
pub fn narrow_with_flags<W: WideFloat>(x: W, mode: RoundingMode) -> (Half, ExceptionFlags) {
    let format = W::FORMAT;
    let drop = format.mantissa_bits() - Half::MANTISSA_BITS;
    let (sign, exponent, mantissa) = format.split(x.to_raw());

    if exponent == format.max_exponent() {
        if mantissa == 0 {
            return (Half::infinity_with_sign(sign), ExceptionFlags::NONE);
        }
        let payload = match (mantissa >> drop) as u16 {
            0 => 1,
            p => p,
        };
        return (
            Half::compose(sign, Half::EXPONENT_MAX, payload),
            ExceptionFlags::NONE,
        );
    }

    let unbiased = if exponent == 0 {
        1 - format.bias()
    } else {
        exponent as i32 - format.bias()
    };
    let significand = if exponent == 0 {
        mantissa
    } else {
        mantissa | (1 << format.mantissa_bits())
    };
    let unpacked = Unpacked::new(
        sign,
        unbiased - format.mantissa_bits() as i32,
        significand,
    );
    round_to_half(&unpacked, mode)
}

/// Narrow `x` under `conversion`, returning the best-effort value together
/// with the error the mode reports, if any.
///
/// The value is always the IEEE result (or the Fast result in Fast mode),
/// even when an error is returned alongside it.
#[must_use]
pub fn narrow_best_effort<W: WideFloat>(
    x: W,
    conversion: ConversionMode,
    rounding: RoundingMode,
) -> (Half, Option<OperationError>) {
    if conversion == ConversionMode::Fast {
        return (narrow_with_flags(x.to_single(), rounding).0, None);
    }

    let (value, flags) = narrow_with_flags(x, rounding);
    let kind = if conversion.rejects_specials() && value.is_nan() {
        Some(ErrorKind::NaNOperand)
    } else if conversion.rejects_specials() && value.is_infinite() && !flags.overflow {
        Some(ErrorKind::Overflow)
    } else {
        conversion.error_for(flags)
    };
    let error = kind.map(|kind| OperationError::new(kind, operation_for::<W>(), Operand::Wide(x.to_double())));
    (value, error)
}

/// Narrow `x` to binary16 under the given conversion and rounding modes.
///
/// # Errors
///
/// Strict and Exact modes return [`ErrorKind::NaNOperand`] for NaN sources,
/// [`ErrorKind::Overflow`] for infinite sources and magnitudes beyond
/// binary16 range, and [`ErrorKind::Underflow`] when a nonzero value rounds
/// to zero. Exact mode also returns [`ErrorKind::Inexact`] whenever
/// rounding discards nonzero bits. IEEE and Fast never fail.
pub fn narrow<W: WideFloat>(
    x: W,
    conversion: ConversionMode,
    rounding: RoundingMode,
) -> OperationResult<Half> {
    match narrow_best_effort(x, conversion, rounding) {
        (_, Some(error)) => Err(error),
        (value, None) => Ok(value),
    }
}

fn operation_for<W: WideFloat>() -> Operation {
    if W::FORMAT == FloatFormat::BINARY32 {
        Operation::NarrowF32
    } else {
        Operation::NarrowF64
    }
}

impl Half {
    /// Convert from binary32, rounding to nearest even.
    #[must_use]
    pub fn from_f32(x: f32) -> Self {
        narrow_with_flags(x, RoundingMode::NearestEven).0
    }

    /// Convert from binary64, rounding to nearest even.
    #[must_use]
    pub fn from_f64(x: f64) -> Self {
        narrow_with_flags(x, RoundingMode::NearestEven).0
    }

    /// Convert from binary32 with an explicit rounding mode.
    #[must_use]
    pub fn from_f32_with(x: f32, mode: RoundingMode) -> Self {
        narrow_with_flags(x, mode).0
    }

    /// Convert from binary64 with an explicit rounding mode.
    #[must_use]
    pub fn from_f64_with(x: f64, mode: RoundingMode) -> Self {
        narrow_with_flags(x, mode).0
    }
}
