//! Property-based tests for binary16 arithmetic
//!
//! Sums and products of two binary16 values are exact in binary64, and a
//! binary64 quotient is close enough that rounding it again cannot change
//! the binary16 result. Narrowing the binary64 result therefore gives the
//! correctly rounded answer the engine must produce.

use binary16::arith::{add_with_flags, div_with_flags, mul_with_flags, sub_with_flags};
use binary16::{ArithmeticMode, BinaryOp, Half, RoundingMode, narrow_with_flags};
use proptest::prelude::*;

/// Strategy for finite, nonzero values
fn finite_nonzero() -> impl Strategy<Value = Half> {
    any::<u16>()
        .prop_map(Half::from_bits)
        .prop_filter("finite nonzero", |h| h.is_finite() && !h.is_zero())
}

/// Strategy for any non-NaN value
fn non_nan() -> impl Strategy<Value = Half> {
    any::<u16>()
        .prop_map(Half::from_bits)
        .prop_filter("not NaN", |h| !h.is_nan())
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

/// Expected result from the binary64 reference.
fn reference(wide: f64, mode: RoundingMode) -> Half {
    if wide == 0.0 {
        // exact cancellation
        return if mode == RoundingMode::TowardNegative {
            Half::NEG_ZERO
        } else {
            Half::ZERO
        };
    }
    narrow_with_flags(wide, mode).0
}

fn same(a: Half, b: Half) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

#[cfg(test)]
mod reference_agreement {
    use super::*;

    proptest! {
        #[test]
        fn add_matches_binary64(a in finite_nonzero(), b in finite_nonzero(), mode in rounding_mode()) {
            let (got, _) = add_with_flags(a, b, mode);
            let expected = reference(a.to_f64() + b.to_f64(), mode);
            prop_assert_eq!(got.to_bits(), expected.to_bits(), "{:?} + {:?} {}", a, b, mode);
        }

        #[test]
        fn sub_matches_binary64(a in finite_nonzero(), b in finite_nonzero(), mode in rounding_mode()) {
            let (got, _) = sub_with_flags(a, b, mode);
            let expected = reference(a.to_f64() - b.to_f64(), mode);
            prop_assert_eq!(got.to_bits(), expected.to_bits(), "{:?} - {:?} {}", a, b, mode);
        }

        #[test]
        fn mul_matches_binary64(a in finite_nonzero(), b in finite_nonzero(), mode in rounding_mode()) {
            let (got, _) = mul_with_flags(a, b, mode);
            let expected = narrow_with_flags(a.to_f64() * b.to_f64(), mode).0;
            prop_assert_eq!(got.to_bits(), expected.to_bits(), "{:?} * {:?} {}", a, b, mode);
        }

        #[test]
        fn div_matches_binary64(a in finite_nonzero(), b in finite_nonzero(), mode in rounding_mode()) {
            let (got, _) = div_with_flags(a, b, mode);
            let expected = narrow_with_flags(a.to_f64() / b.to_f64(), mode).0;
            prop_assert_eq!(got.to_bits(), expected.to_bits(), "{:?} / {:?} {}", a, b, mode);
        }

        /// Inexact results are flagged, exact ones are not
        #[test]
        fn inexact_flag_is_accurate(a in finite_nonzero(), b in finite_nonzero()) {
            let (sum, flags) = add_with_flags(a, b, RoundingMode::NearestEven);
            let wide = a.to_f64() + b.to_f64();
            if sum.is_finite() {
                prop_assert_eq!(flags.inexact, sum.to_f64() != wide);
            } else {
                prop_assert!(flags.overflow && flags.inexact);
            }
        }
    }
}

#[cfg(test)]
mod algebraic_properties {
    use super::*;

    proptest! {
        #[test]
        fn addition_commutes(a in non_nan(), b in non_nan(), mode in rounding_mode()) {
            let x = add_with_flags(a, b, mode).0;
            let y = add_with_flags(b, a, mode).0;
            prop_assert!(same(x, y));
        }

        #[test]
        fn multiplication_commutes(a in non_nan(), b in non_nan(), mode in rounding_mode()) {
            let x = mul_with_flags(a, b, mode).0;
            let y = mul_with_flags(b, a, mode).0;
            prop_assert!(same(x, y));
        }

        #[test]
        fn subtraction_is_addition_of_negation(a in non_nan(), b in non_nan(), mode in rounding_mode()) {
            let x = sub_with_flags(a, b, mode).0;
            let y = add_with_flags(a, b.negate(), mode).0;
            prop_assert!(same(x, y));
        }

        #[test]
        fn negative_zero_is_additive_identity(a in non_nan(), mode in rounding_mode()) {
            // +0 + -0 takes the sign of the rounding direction
            prop_assume!(a.to_bits() != 0);
            let (x, flags) = add_with_flags(a, Half::NEG_ZERO, mode);
            prop_assert_eq!(x.to_bits(), a.to_bits());
            prop_assert!(flags.is_empty());
        }

        #[test]
        fn product_sign_is_xor(a in non_nan(), b in non_nan(), mode in rounding_mode()) {
            let (x, _) = mul_with_flags(a, b, mode);
            if !x.is_nan() {
                prop_assert_eq!(x.signbit(), a.signbit() != b.signbit());
            }
        }

        #[test]
        fn quotient_sign_is_xor(a in non_nan(), b in non_nan(), mode in rounding_mode()) {
            let (x, _) = div_with_flags(a, b, mode);
            if !x.is_nan() {
                prop_assert_eq!(x.signbit(), a.signbit() != b.signbit());
            }
        }

        /// Directed results bracket the nearest one
        #[test]
        fn directed_modes_bracket(a in finite_nonzero(), b in finite_nonzero(), op_index in 0usize..4) {
            let op = BinaryOp::ALL[op_index];
            let down = op.apply_with_flags(a, b, RoundingMode::TowardNegative).0;
            let up = op.apply_with_flags(a, b, RoundingMode::TowardPositive).0;
            let near = op.apply_with_flags(a, b, RoundingMode::NearestEven).0;
            prop_assert!(down <= near && near <= up, "{} {:?} {:?}", op, a, b);
        }

        /// Exact mode fails exactly when IEEE raises a reportable flag
        #[test]
        fn exact_mode_matches_flags(a in any::<u16>(), b in any::<u16>(), op_index in 0usize..4) {
            let (a, b) = (Half::from_bits(a), Half::from_bits(b));
            let op = BinaryOp::ALL[op_index];
            let (value, flags) = op.apply_with_flags(a, b, RoundingMode::NearestEven);
            let result = op.apply(a, b, ArithmeticMode::Exact, RoundingMode::NearestEven);
            let reportable = a.is_nan()
                || b.is_nan()
                || flags.invalid
                || flags.division_by_zero
                || flags.overflow
                || flags.underflow;
            prop_assert_eq!(result.is_err(), reportable);
            if let Ok(exact) = result {
                prop_assert_eq!(exact.to_bits(), value.to_bits());
            }
        }
    }
}
