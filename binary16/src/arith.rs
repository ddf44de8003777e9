//! Addition, subtraction, multiplication and division.
//!
//! Each operation first resolves the IEEE special-value table (NaN,
//! infinity, zero). Finite nonzero operands then take one of two paths:
//!
//! - IEEE and Exact compute the exact result on integer significands and
//!   round it once through [`round_to_half`].
//! - Fast computes in native binary32 and narrows the result. Products are
//!   exact in binary32; sums and quotients may round twice.
//!
//! Exact mode reports NaN operands, invalid operations, division by zero,
//! overflow and underflow to zero as errors. It does not report inexact
//! results.

use crate::error::{ExceptionFlags, Operand, Operation, OperationError, OperationResult};
use crate::half::Half;
use crate::mode::ArithmeticMode;
use crate::narrow::{Unpacked, narrow_with_flags, round_to_half};
use crate::rounding::RoundingMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra quotient bits produced by the long division.
const QUOTIENT_BITS: u32 = 40;
/// Exponent gap past which the smaller addend cannot move a nearest result.
const ADD_SHORTCUT_GAP: i32 = 24;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
}

impl BinaryOp {
    /// All four operations.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Parse an operator symbol or name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" | "add" => Some(Self::Add),
            "-" | "sub" => Some(Self::Sub),
            "*" | "x" | "mul" => Some(Self::Mul),
            "/" | "div" => Some(Self::Div),
            _ => None,
        }
    }

    /// The operation tag used in errors.
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Add,
            Self::Sub => Operation::Sub,
            Self::Mul => Operation::Mul,
            Self::Div => Operation::Div,
        }
    }

    /// Correctly rounded IEEE result and the flags it raised.
    #[must_use]
    pub fn apply_with_flags(self, a: Half, b: Half, rounding: RoundingMode) -> (Half, ExceptionFlags) {
        match self {
            Self::Add => add_with_flags(a, b, rounding),
            Self::Sub => sub_with_flags(a, b, rounding),
            Self::Mul => mul_with_flags(a, b, rounding),
            Self::Div => div_with_flags(a, b, rounding),
        }
    }

    /// Result under `mode`, together with the error the mode reports.
    ///
    /// The value is the best-effort result even when an error is returned.
    #[must_use]
    pub fn apply_best_effort(
        self,
        a: Half,
        b: Half,
        mode: ArithmeticMode,
        rounding: RoundingMode,
    ) -> (Half, Option<OperationError>) {
        if mode == ArithmeticMode::Fast {
            return (self.apply_fast(a, b, rounding), None);
        }
        let (value, flags) = self.apply_with_flags(a, b, rounding);
        let nan_operand = a.is_nan() || b.is_nan();
        let error = mode
            .error_for(nan_operand, flags)
            .map(|kind| OperationError::new(kind, self.operation(), Operand::Pair(a, b)));
        (value, error)
    }

    /// Apply under `mode`.
    ///
    /// # Errors
    ///
    /// Only [`ArithmeticMode::Exact`] fails; see the module documentation.
    pub fn apply(
        self,
        a: Half,
        b: Half,
        mode: ArithmeticMode,
        rounding: RoundingMode,
    ) -> OperationResult<Half> {
        match self.apply_best_effort(a, b, mode, rounding) {
            (_, Some(error)) => Err(error),
            (value, None) => Ok(value),
        }
    }

    fn apply_fast(self, a: Half, b: Half, rounding: RoundingMode) -> Half {
        let special = match self {
            Self::Add => add_special(a, b, rounding),
            Self::Sub => sub_special(a, b, rounding),
            Self::Mul => mul_special(a, b),
            Self::Div => div_special(a, b),
        };
        if let Some((value, _)) = special {
            return value;
        }
        let (x, y) = (a.to_f32(), b.to_f32());
        let wide = match self {
            Self::Add => x + y,
            Self::Sub => x - y,
            Self::Mul => x * y,
            Self::Div => x / y,
        };
        if wide == 0.0 && matches!(self, Self::Add | Self::Sub) {
            return cancellation_zero(rounding);
        }
        narrow_with_flags(wide, rounding).0
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `a + b` under `mode`.
///
/// # Errors
///
/// In [`ArithmeticMode::Exact`]: NaN operand, `inf - inf`, overflow, or a
/// nonzero result rounded to zero.
pub fn add(a: Half, b: Half, mode: ArithmeticMode, rounding: RoundingMode) -> OperationResult<Half> {
    BinaryOp::Add.apply(a, b, mode, rounding)
}

/// `a - b` under `mode`, defined as `a + (-b)`.
///
/// # Errors
///
/// Same conditions as [`add`].
pub fn sub(a: Half, b: Half, mode: ArithmeticMode, rounding: RoundingMode) -> OperationResult<Half> {
    BinaryOp::Sub.apply(a, b, mode, rounding)
}

/// `a * b` under `mode`.
///
/// # Errors
///
/// In [`ArithmeticMode::Exact`]: NaN operand, `0 * inf`, overflow, or a
/// nonzero result rounded to zero.
pub fn mul(a: Half, b: Half, mode: ArithmeticMode, rounding: RoundingMode) -> OperationResult<Half> {
    BinaryOp::Mul.apply(a, b, mode, rounding)
}

/// `a / b` under `mode`.
///
/// # Errors
///
/// In [`ArithmeticMode::Exact`]: NaN operand, `0 / 0` or `inf / inf`,
/// nonzero finite divided by zero, overflow, or a nonzero result rounded
/// to zero.
pub fn div(a: Half, b: Half, mode: ArithmeticMode, rounding: RoundingMode) -> OperationResult<Half> {
    BinaryOp::Div.apply(a, b, mode, rounding)
}

/// Quiet the first NaN operand.
fn propagate_nan(a: Half, b: Half) -> Option<(Half, ExceptionFlags)> {
    let nan = if a.is_nan() {
        a
    } else if b.is_nan() {
        b
    } else {
        return None;
    };
    let flags = if a.is_signaling_nan() || b.is_signaling_nan() {
        ExceptionFlags::INVALID
    } else {
        ExceptionFlags::NONE
    };
    Some((nan.quieted(), flags))
}

fn invalid() -> (Half, ExceptionFlags) {
    (Half::NAN, ExceptionFlags::INVALID)
}

/// Zero produced by `x + (-x)` or `(+0) + (-0)`.
fn cancellation_zero(rounding: RoundingMode) -> Half {
    Half::zero_with_sign(rounding == RoundingMode::TowardNegative)
}

fn add_special(a: Half, b: Half, rounding: RoundingMode) -> Option<(Half, ExceptionFlags)> {
    if let Some(nan) = propagate_nan(a, b) {
        return Some(nan);
    }
    let exact = |h: Half| Some((h, ExceptionFlags::NONE));
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) if a.signbit() != b.signbit() => return Some(invalid()),
        (true, _) => return exact(a),
        (false, true) => return exact(b),
        (false, false) => {}
    }
    match (a.is_zero(), b.is_zero()) {
        (true, true) if a.signbit() == b.signbit() => exact(a),
        (true, true) => exact(cancellation_zero(rounding)),
        (true, false) => exact(b),
        (false, true) => exact(a),
        (false, false) => None,
    }
}

fn sub_special(a: Half, b: Half, rounding: RoundingMode) -> Option<(Half, ExceptionFlags)> {
    if let Some(nan) = propagate_nan(a, b) {
        return Some(nan);
    }
    add_special(a, b.negate(), rounding)
}

/// Correctly rounded `a + b` with the raised exception flags.
#[must_use]
pub fn add_with_flags(a: Half, b: Half, rounding: RoundingMode) -> (Half, ExceptionFlags) {
    if let Some(special) = add_special(a, b, rounding) {
        return special;
    }

    // order by magnitude so the aligned difference is never negative
    let (large, small) = if a.abs().to_bits() >= b.abs().to_bits() {
        (a, b)
    } else {
        (b, a)
    };
    let large = Unpacked::from_half(large);
    let small = Unpacked::from_half(small);
    let gap = large.exponent - small.exponent;
    if gap >= ADD_SHORTCUT_GAP && rounding.is_nearest() {
        return round_to_half(&large, rounding);
    }

    // gap <= 29 and significands fit in 11 bits, so the aligned sum is exact
    let aligned = large.significand << gap;
    let sum = if large.sign == small.sign {
        aligned + small.significand
    } else {
        aligned - small.significand
    };
    if sum == 0 {
        return (cancellation_zero(rounding), ExceptionFlags::NONE);
    }
    round_to_half(&Unpacked::new(large.sign, small.exponent, sum), rounding)
}

/// Correctly rounded `a - b` with the raised exception flags.
#[must_use]
pub fn sub_with_flags(a: Half, b: Half, rounding: RoundingMode) -> (Half, ExceptionFlags) {
    if let Some(nan) = propagate_nan(a, b) {
        return nan;
    }
    add_with_flags(a, b.negate(), rounding)
}

fn mul_special(a: Half, b: Half) -> Option<(Half, ExceptionFlags)> {
    if let Some(nan) = propagate_nan(a, b) {
        return Some(nan);
    }
    let sign = a.signbit() != b.signbit();
    if (a.is_zero() && b.is_infinite()) || (a.is_infinite() && b.is_zero()) {
        Some(invalid())
    } else if a.is_infinite() || b.is_infinite() {
        Some((Half::infinity_with_sign(sign), ExceptionFlags::NONE))
    } else if a.is_zero() || b.is_zero() {
        Some((Half::zero_with_sign(sign), ExceptionFlags::NONE))
    } else {
        None
    }
}

/// Correctly rounded `a * b` with the raised exception flags.
#[must_use]
pub fn mul_with_flags(a: Half, b: Half, rounding: RoundingMode) -> (Half, ExceptionFlags) {
    if let Some(special) = mul_special(a, b) {
        return special;
    }
    let x = Unpacked::from_half(a);
    let y = Unpacked::from_half(b);
    let product = Unpacked::new(
        x.sign != y.sign,
        x.exponent + y.exponent,
        x.significand * y.significand,
    );
    round_to_half(&product, rounding)
}

fn div_special(a: Half, b: Half) -> Option<(Half, ExceptionFlags)> {
    if let Some(nan) = propagate_nan(a, b) {
        return Some(nan);
    }
    let sign = a.signbit() != b.signbit();
    if (a.is_zero() && b.is_zero()) || (a.is_infinite() && b.is_infinite()) {
        Some(invalid())
    } else if a.is_infinite() {
        Some((Half::infinity_with_sign(sign), ExceptionFlags::NONE))
    } else if b.is_zero() {
        Some((Half::infinity_with_sign(sign), ExceptionFlags::DIVISION_BY_ZERO))
    } else if b.is_infinite() || a.is_zero() {
        Some((Half::zero_with_sign(sign), ExceptionFlags::NONE))
    } else {
        None
    }
}

/// Correctly rounded `a / b` with the raised exception flags.
#[must_use]
pub fn div_with_flags(a: Half, b: Half, rounding: RoundingMode) -> (Half, ExceptionFlags) {
    if let Some(special) = div_special(a, b) {
        return special;
    }
    let x = Unpacked::from_half(a);
    let y = Unpacked::from_half(b);
    let dividend = x.significand << QUOTIENT_BITS;
    let quotient = Unpacked {
        sign: x.sign != y.sign,
        exponent: x.exponent - y.exponent - QUOTIENT_BITS as i32,
        significand: dividend / y.significand,
        sticky: dividend % y.significand != 0,
    };
    round_to_half(&quotient, rounding)
}
