//! Explicit operation context.
//!
//! A [`FloatContext`] bundles the conversion mode, arithmetic mode and
//! rounding direction that every operation needs. It is a plain `Copy`
//! value passed to each call; nothing in the crate reads a process-wide
//! default, so contexts can differ freely between threads.

use crate::arith::BinaryOp;
use crate::batch::{self, BatchOutcome};
use crate::error::OperationResult;
use crate::format::WideFloat;
use crate::half::Half;
use crate::mode::{ArithmeticMode, ConversionMode};
use crate::narrow;
use crate::rounding::RoundingMode;
use serde::{Deserialize, Serialize};

/// Modes applied to conversions and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatContext {
    /// Narrowing conversion mode
    pub conversion: ConversionMode,
    /// Arithmetic mode
    pub arithmetic: ArithmeticMode,
    /// Rounding direction
    pub rounding: RoundingMode,
}

impl Default for FloatContext {
    fn default() -> Self {
        Self::IEEE
    }
}

impl FloatContext {
    /// IEEE semantics, round to nearest even. Never fails.
    pub const IEEE: Self = Self::new(ConversionMode::Ieee, ArithmeticMode::Ieee, RoundingMode::NearestEven);
    /// Strict conversion and Exact arithmetic, round to nearest even.
    pub const STRICT: Self = Self::new(ConversionMode::Strict, ArithmeticMode::Exact, RoundingMode::NearestEven);
    /// Fast conversion and arithmetic, round to nearest even.
    pub const FAST: Self = Self::new(ConversionMode::Fast, ArithmeticMode::Fast, RoundingMode::NearestEven);

    /// Create a context from its three modes.
    #[must_use]
    pub const fn new(conversion: ConversionMode, arithmetic: ArithmeticMode, rounding: RoundingMode) -> Self {
        Self {
            conversion,
            arithmetic,
            rounding,
        }
    }

    /// Replace the rounding direction.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Replace the conversion mode.
    #[must_use]
    pub const fn with_conversion(mut self, conversion: ConversionMode) -> Self {
        self.conversion = conversion;
        self
    }

    /// Replace the arithmetic mode.
    #[must_use]
    pub const fn with_arithmetic(mut self, arithmetic: ArithmeticMode) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    /// Narrow any wide value.
    ///
    /// # Errors
    ///
    /// See [`narrow::narrow`].
    pub fn narrow<W: WideFloat>(&self, x: W) -> OperationResult<Half> {
        narrow::narrow(x, self.conversion, self.rounding)
    }

    /// Narrow a binary32 value.
    ///
    /// # Errors
    ///
    /// See [`narrow::narrow`].
    pub fn narrow_f32(&self, x: f32) -> OperationResult<Half> {
        self.narrow(x)
    }

    /// Narrow a binary64 value.
    ///
    /// # Errors
    ///
    /// See [`narrow::narrow`].
    pub fn narrow_f64(&self, x: f64) -> OperationResult<Half> {
        self.narrow(x)
    }

    /// Apply a binary operation.
    ///
    /// # Errors
    ///
    /// See [`BinaryOp::apply`].
    pub fn apply(&self, op: BinaryOp, a: Half, b: Half) -> OperationResult<Half> {
        op.apply(a, b, self.arithmetic, self.rounding)
    }

    /// `a + b`
    ///
    /// # Errors
    ///
    /// See [`crate::arith::add`].
    pub fn add(&self, a: Half, b: Half) -> OperationResult<Half> {
        self.apply(BinaryOp::Add, a, b)
    }

    /// `a - b`
    ///
    /// # Errors
    ///
    /// See [`crate::arith::sub`].
    pub fn sub(&self, a: Half, b: Half) -> OperationResult<Half> {
        self.apply(BinaryOp::Sub, a, b)
    }

    /// `a * b`
    ///
    /// # Errors
    ///
    /// See [`crate::arith::mul`].
    pub fn mul(&self, a: Half, b: Half) -> OperationResult<Half> {
        self.apply(BinaryOp::Mul, a, b)
    }

    /// `a / b`
    ///
    /// # Errors
    ///
    /// See [`crate::arith::div`].
    pub fn div(&self, a: Half, b: Half) -> OperationResult<Half> {
        self.apply(BinaryOp::Div, a, b)
    }

    /// Narrow a slice, collecting per-index errors.
    #[must_use]
    pub fn narrow_slice<W: WideFloat>(&self, input: &[W]) -> BatchOutcome {
        batch::narrow_slice(input, self)
    }

    /// Parallel [`FloatContext::narrow_slice`].
    #[must_use]
    pub fn par_narrow_slice<W: WideFloat>(&self, input: &[W]) -> BatchOutcome {
        batch::par_narrow_slice(input, self)
    }

    /// Element-wise `a + b`.
    #[must_use]
    pub fn add_slice(&self, a: &[Half], b: &[Half]) -> BatchOutcome {
        batch::add_slice(a, b, self)
    }

    /// Element-wise `a - b`.
    #[must_use]
    pub fn sub_slice(&self, a: &[Half], b: &[Half]) -> BatchOutcome {
        batch::sub_slice(a, b, self)
    }

    /// Element-wise `a * b`.
    #[must_use]
    pub fn mul_slice(&self, a: &[Half], b: &[Half]) -> BatchOutcome {
        batch::mul_slice(a, b, self)
    }

    /// Element-wise `a / b`.
    #[must_use]
    pub fn div_slice(&self, a: &[Half], b: &[Half]) -> BatchOutcome {
        batch::div_slice(a, b, self)
    }

    /// Multiply every element by `factor`.
    #[must_use]
    pub fn scale_slice(&self, values: &[Half], factor: Half) -> BatchOutcome {
        batch::scale_slice(values, factor, self)
    }
}

impl Half {
    /// `self + rhs` under `ctx`.
    ///
    /// # Errors
    ///
    /// See [`crate::arith::add`].
    pub fn add_with(self, rhs: Self, ctx: &FloatContext) -> OperationResult<Self> {
        ctx.add(self, rhs)
    }

    /// `self - rhs` under `ctx`.
    ///
    /// # Errors
    ///
    /// See [`crate::arith::sub`].
    pub fn sub_with(self, rhs: Self, ctx: &FloatContext) -> OperationResult<Self> {
        ctx.sub(self, rhs)
    }

    /// `self * rhs` under `ctx`.
    ///
    /// # Errors
    ///
    /// See [`crate::arith::mul`].
    pub fn mul_with(self, rhs: Self, ctx: &FloatContext) -> OperationResult<Self> {
        ctx.mul(self, rhs)
    }

    /// `self / rhs` under `ctx`.
    ///
    /// # Errors
    ///
    /// See [`crate::arith::div`].
    pub fn div_with(self, rhs: Self, ctx: &FloatContext) -> OperationResult<Self> {
        ctx.div(self, rhs)
    }
}
