//! Property-based tests for narrowing and widening

use binary16::{ConversionMode, ErrorKind, Half, RoundingMode, narrow, narrow_with_flags, widen};
use proptest::prelude::*;

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

/// Finite binary64 values concentrated around the binary16 range
fn near_range() -> impl Strategy<Value = f64> {
    (any::<bool>(), -30i32..18, 0.0f64..1.0).prop_map(|(negative, exp, frac)| {
        let magnitude = (1.0 + frac) * 2f64.powi(exp);
        if negative { -magnitude } else { magnitude }
    })
}

/// Any binary32 value that is not NaN
fn non_nan_f32() -> impl Strategy<Value = f32> {
    any::<u32>()
        .prop_map(f32::from_bits)
        .prop_filter("not NaN", |x| !x.is_nan())
}

#[cfg(test)]
mod narrowing_properties {
    use super::*;

    proptest! {
        #[test]
        fn widen_then_narrow_is_identity(bits in any::<u16>(), mode in rounding_mode()) {
            let h = Half::from_bits(bits);
            prop_assert_eq!(narrow_with_flags(widen::<f32>(h), mode).0.to_bits(), bits);
            prop_assert_eq!(narrow_with_flags(widen::<f64>(h), mode).0.to_bits(), bits);
        }

        #[test]
        fn result_is_adjacent_to_source(x in near_range(), mode in rounding_mode()) {
            let (h, _) = narrow_with_flags(x, mode);
            let down = Half::from_f64_with(x, RoundingMode::TowardNegative);
            let up = Half::from_f64_with(x, RoundingMode::TowardPositive);
            prop_assert!(h.to_bits() == down.to_bits() || h.to_bits() == up.to_bits());
        }

        #[test]
        fn nearest_is_closest(x in -65000.0f64..65000.0) {
            let h = Half::from_f64(x);
            let error = (h.to_f64() - x).abs();
            prop_assert!(error <= (h.next_up().to_f64() - x).abs());
            prop_assert!(error <= (h.next_down().to_f64() - x).abs());
        }

        #[test]
        fn narrowing_is_monotonic(a in near_range(), b in near_range(), mode in rounding_mode()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (x, _) = narrow_with_flags(lo, mode);
            let (y, _) = narrow_with_flags(hi, mode);
            prop_assert!(x <= y, "{} -> {:?}, {} -> {:?}", lo, x, hi, y);
        }

        #[test]
        fn sign_is_preserved(x in non_nan_f32(), mode in rounding_mode()) {
            let (h, _) = narrow_with_flags(x, mode);
            prop_assert_eq!(h.signbit(), x.is_sign_negative());
        }

        #[test]
        fn fast_matches_ieee_for_binary32(x in any::<u32>(), mode in rounding_mode()) {
            let x = f32::from_bits(x);
            let fast = narrow(x, ConversionMode::Fast, mode).unwrap();
            let ieee = narrow(x, ConversionMode::Ieee, mode).unwrap();
            prop_assert_eq!(fast.to_bits(), ieee.to_bits());
        }

        #[test]
        fn exact_accepts_only_representable(x in near_range()) {
            let result = narrow(x, ConversionMode::Exact, RoundingMode::NearestEven);
            let nearest = Half::from_f64(x);
            let representable = nearest.is_finite() && nearest.to_f64() == x;
            prop_assert_eq!(result.is_ok(), representable);
            if let Err(error) = result {
                prop_assert!(matches!(
                    error.kind,
                    ErrorKind::Overflow | ErrorKind::Underflow | ErrorKind::Inexact
                ));
            }
        }

        #[test]
        fn strict_fails_only_on_range(x in near_range(), mode in rounding_mode()) {
            let (h, flags) = narrow_with_flags(x, mode);
            match narrow(x, ConversionMode::Strict, mode) {
                Ok(value) => {
                    prop_assert_eq!(value.to_bits(), h.to_bits());
                    prop_assert!(!flags.overflow && !flags.underflow);
                }
                Err(error) => {
                    prop_assert!(flags.overflow || flags.underflow, "{}", error);
                }
            }
        }
    }
}
