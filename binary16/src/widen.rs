//! Exact widening of binary16 into wider formats.

use crate::format::WideFloat;
use crate::half::{Half, leading_zero_count};

/// Convert `h` to the wider format `W`. Never rounds.
///
/// Subnormal inputs are normalized so the wide value is a normal number.
/// NaN payloads are left-aligned in the wide mantissa, which keeps the quiet
/// bit in place: signaling NaNs widen to signaling NaNs.
#[must_use]
pub fn widen<W: WideFloat>(h: Half) -> W {
    let format = W::FORMAT;
    let align = format.mantissa_bits() - Half::MANTISSA_BITS;
    let rebias = format.bias() - Half::EXPONENT_BIAS;
    let (sign, exponent, mantissa) = h.decompose();
    let mantissa = u64::from(mantissa);

    let raw = match exponent {
        Half::EXPONENT_MAX => format.join(sign, format.max_exponent(), mantissa << align),
        0 if mantissa == 0 => format.join(sign, 0, 0),
        0 => {
            let shift = leading_zero_count(mantissa as u16) + 1;
            let wide_exponent = rebias + 1 - shift as i32;
            let normalized = (mantissa << shift) & u64::from(Half::MANTISSA_MASK);
            format.join(sign, wide_exponent as u64, normalized << align)
        }
        _ => format.join(sign, (i32::from(exponent) + rebias) as u64, mantissa << align),
    };
    W::from_raw(raw)
}

impl Half {
    /// Exact conversion to binary32.
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> f32 {
        widen(self)
    }

    /// Exact conversion to binary64.
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        widen(self)
    }
}
