//! Fuzz target for binary16 arithmetic
//!
//! Compares every operation against a binary64 reference computation

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use binary16::{ArithmeticMode, BinaryOp, Half, RoundingMode, narrow_with_flags};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Arbitrary)]
struct Case {
    a: u16,
    b: u16,
    op: Op,
    mode: u8,
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);
    let Ok(case) = Case::arbitrary(&mut unstructured) else {
        return;
    };
    let (a, b) = (Half::from_bits(case.a), Half::from_bits(case.b));
    let mode = RoundingMode::ALL[usize::from(case.mode) % RoundingMode::ALL.len()];
    let (op, wide) = match case.op {
        Op::Add => (BinaryOp::Add, a.to_f64() + b.to_f64()),
        Op::Sub => (BinaryOp::Sub, a.to_f64() - b.to_f64()),
        Op::Mul => (BinaryOp::Mul, a.to_f64() * b.to_f64()),
        Op::Div => (BinaryOp::Div, a.to_f64() / b.to_f64()),
    };

    let (value, flags) = op.apply_with_flags(a, b, mode);
    if wide.is_nan() {
        assert!(value.is_nan());
    } else if wide == 0.0 {
        assert!(value.is_zero());
    } else {
        let expected = narrow_with_flags(wide, mode).0;
        assert_eq!(value.to_bits(), expected.to_bits(), "{a:?} {op} {b:?} {mode}");
    }

    // Exact mode returns the same bits whenever it succeeds
    if let Ok(exact) = op.apply(a, b, ArithmeticMode::Exact, mode) {
        assert_eq!(exact.to_bits(), value.to_bits());
        assert!(!flags.overflow && !flags.underflow && !flags.invalid);
    }
    // Fast mode agrees on special values
    if a.is_nan() || b.is_nan() {
        assert!(op.apply(a, b, ArithmeticMode::Fast, mode).is_ok_and(|v| v.is_nan()));
    }
});
