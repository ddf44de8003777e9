//! Fuzz target for narrowing conversions
//!
//! Checks rounding direction, mode agreement and NaN handling on arbitrary
//! binary32 and binary64 bit patterns

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use binary16::{ConversionMode, Half, RoundingMode, narrow, narrow_with_flags};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Source {
    Single(u32),
    Double(u64),
}

#[derive(Debug, Arbitrary)]
struct Case {
    source: Source,
    mode: u8,
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);
    let Ok(case) = Case::arbitrary(&mut unstructured) else {
        return;
    };
    let mode = RoundingMode::ALL[usize::from(case.mode) % RoundingMode::ALL.len()];

    let (wide, (h, flags)) = match case.source {
        Source::Single(bits) => {
            let x = f32::from_bits(bits);
            (f64::from(x), narrow_with_flags(x, mode))
        }
        Source::Double(bits) => {
            let x = f64::from_bits(bits);
            (x, narrow_with_flags(x, mode))
        }
    };

    if wide.is_nan() {
        assert!(h.is_nan());
        assert!(flags.is_empty());
        return;
    }
    assert_eq!(h.signbit(), wide.is_sign_negative());
    assert_eq!(flags.inexact, h.to_f64() != wide);

    // the result is one of the two directed roundings
    let down = Half::from_f64_with(wide, RoundingMode::TowardNegative);
    let up = Half::from_f64_with(wide, RoundingMode::TowardPositive);
    assert!(h.to_bits() == down.to_bits() || h.to_bits() == up.to_bits());
    assert!(down <= up);

    // error modes only differ from IEEE by reporting
    for conversion in [ConversionMode::Strict, ConversionMode::Exact] {
        if let Ok(value) = narrow(wide, conversion, mode) {
            assert_eq!(value.to_bits(), narrow_with_flags(wide, mode).0.to_bits());
        }
    }
});
