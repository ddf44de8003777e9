//! Property-based tests for comparison, stepping and batch processing

use binary16::batch::{narrow_slice, par_binary_slice, par_narrow_slice};
use binary16::compare::{equal, less, max, min, total_cmp};
use binary16::{BinaryOp, FloatContext, Half, RoundingMode};
use proptest::prelude::*;

fn any_half() -> impl Strategy<Value = Half> {
    any::<u16>().prop_map(Half::from_bits)
}

fn context() -> impl Strategy<Value = FloatContext> {
    (
        prop::sample::select(binary16::ConversionMode::ALL.to_vec()),
        prop::sample::select(binary16::ArithmeticMode::ALL.to_vec()),
        prop::sample::select(RoundingMode::ALL.to_vec()),
    )
        .prop_map(|(conversion, arithmetic, rounding)| FloatContext::new(conversion, arithmetic, rounding))
}

#[cfg(test)]
mod ordering_properties {
    use super::*;

    proptest! {
        #[test]
        fn less_matches_host(a in any_half(), b in any_half()) {
            prop_assert_eq!(less(a, b), a.to_f64() < b.to_f64());
            prop_assert_eq!(equal(a, b), a.to_f64() == b.to_f64());
        }

        #[test]
        fn total_cmp_matches_host(a in any_half(), b in any_half()) {
            prop_assert_eq!(total_cmp(a, b), a.to_f64().total_cmp(&b.to_f64()));
        }

        #[test]
        fn min_max_partition(a in any_half(), b in any_half()) {
            prop_assume!(!a.is_nan() && !b.is_nan());
            let lo = min(a, b);
            let hi = max(a, b);
            prop_assert!(lo <= hi);
            prop_assert!(equal(lo, a) || equal(lo, b));
            prop_assert!(equal(hi, a) || equal(hi, b));
        }

        #[test]
        fn stepping_round_trips(a in any_half()) {
            prop_assume!(a.is_finite() && !a.is_zero());
            prop_assert_eq!(a.next_up().next_down().to_bits(), a.to_bits());
            prop_assert_eq!(a.next_down().next_up().to_bits(), a.to_bits());
            prop_assert!(a.next_down() < a && a < a.next_up());
        }
    }
}

#[cfg(test)]
mod batch_properties {
    use super::*;

    proptest! {
        #[test]
        fn parallel_narrowing_matches_sequential(
            input in prop::collection::vec(any::<f64>(), 0..256),
            ctx in context()
        ) {
            let seq = narrow_slice(&input, &ctx);
            let par = par_narrow_slice(&input, &ctx);
            prop_assert_eq!(seq.values.len(), input.len());
            let bits = |values: &[Half]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
            prop_assert_eq!(bits(&seq.values), bits(&par.values));
            let indices: Vec<usize> = seq.errors.iter().map(|e| e.index).collect();
            prop_assert_eq!(indices.clone(), par.errors.iter().map(|e| e.index).collect::<Vec<_>>());
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn parallel_arithmetic_matches_scalar(
            pairs in prop::collection::vec((any_half(), any_half()), 0..256),
            op_index in 0usize..4,
            ctx in context()
        ) {
            let op = BinaryOp::ALL[op_index];
            let (a, b): (Vec<Half>, Vec<Half>) = pairs.into_iter().unzip();
            let outcome = par_binary_slice(op, &a, &b, &ctx);
            for (i, (&x, &y)) in a.iter().zip(&b).enumerate() {
                let (value, error) = op.apply_best_effort(x, y, ctx.arithmetic, ctx.rounding);
                prop_assert_eq!(outcome.values[i].to_bits(), value.to_bits());
                prop_assert_eq!(error.is_some(), outcome.errors.iter().any(|e| e.index == i));
            }
        }
    }
}
