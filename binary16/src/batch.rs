//! Batch conversion and element-wise arithmetic.
//!
//! Every element is processed independently with the scalar operation.
//! Failures in Strict/Exact modes are reported per index while the output
//! still holds one best-effort value per input element. The `par_*`
//! variants split the work across the rayon thread pool and return exactly
//! what the sequential versions return.
//!
//! Mismatched slice lengths are a caller bug and panic.

use crate::arith::BinaryOp;
use crate::context::FloatContext;
use crate::error::{IndexedError, OperationError};
use crate::format::WideFloat;
use crate::half::Half;
use crate::narrow::narrow_best_effort;
use crate::widen::widen;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Result of a batch operation.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// One value per input element; failing elements hold the best-effort
    /// IEEE result.
    pub values: Vec<Half>,
    /// Failures in ascending index order.
    pub errors: Vec<IndexedError>,
}

impl BatchOutcome {
    fn with_capacity(len: usize) -> Self {
        Self {
            values: Vec::with_capacity(len),
            errors: Vec::new(),
        }
    }

    fn push(&mut self, value: Half, error: Option<OperationError>) {
        if let Some(error) = error {
            let index = self.values.len();
            trace!(index, %error, "batch element failed");
            self.errors.push(IndexedError { index, error });
        }
        self.values.push(value);
    }

    fn collect(label: &str, results: impl IntoIterator<Item = (Half, Option<OperationError>)>, len: usize) -> Self {
        let mut outcome = Self::with_capacity(len);
        for (value, error) in results {
            outcome.push(value, error);
        }
        if !outcome.errors.is_empty() {
            debug!(
                operation = label,
                total = outcome.values.len(),
                failed = outcome.errors.len(),
                first = outcome.errors[0].index,
                "batch completed with errors"
            );
        }
        outcome
    }

    /// True when every element succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The values, or the first error.
    ///
    /// # Errors
    ///
    /// Returns the lowest-index failure, if any.
    pub fn into_result(self) -> Result<Vec<Half>, IndexedError> {
        match self.errors.first() {
            Some(error) => Err(*error),
            None => Ok(self.values),
        }
    }
}

/// Narrow every element under `ctx`.
#[must_use]
pub fn narrow_slice<W: WideFloat>(input: &[W], ctx: &FloatContext) -> BatchOutcome {
    let results = input
        .iter()
        .map(|&x| narrow_best_effort(x, ctx.conversion, ctx.rounding));
    BatchOutcome::collect("narrow", results, input.len())
}

/// Parallel [`narrow_slice`].
#[must_use]
pub fn par_narrow_slice<W: WideFloat>(input: &[W], ctx: &FloatContext) -> BatchOutcome {
    let results: Vec<_> = input
        .par_iter()
        .map(|&x| narrow_best_effort(x, ctx.conversion, ctx.rounding))
        .collect();
    BatchOutcome::collect("narrow", results, input.len())
}

/// Narrow into a caller-provided buffer, returning the per-index errors.
///
/// # Panics
///
/// Panics if `output.len() != input.len()`.
pub fn narrow_into<W: WideFloat>(input: &[W], output: &mut [Half], ctx: &FloatContext) -> Vec<IndexedError> {
    assert_eq!(input.len(), output.len(), "narrow_into: length mismatch");
    let mut errors = Vec::new();
    for (index, (&x, slot)) in input.iter().zip(output.iter_mut()).enumerate() {
        let (value, error) = narrow_best_effort(x, ctx.conversion, ctx.rounding);
        *slot = value;
        if let Some(error) = error {
            trace!(index, %error, "batch element failed");
            errors.push(IndexedError { index, error });
        }
    }
    if !errors.is_empty() {
        debug!(total = input.len(), failed = errors.len(), "narrow_into completed with errors");
    }
    errors
}

/// Widen every element. Never fails.
#[must_use]
pub fn widen_slice<W: WideFloat>(input: &[Half]) -> Vec<W> {
    input.iter().map(|&h| widen(h)).collect()
}

/// Parallel [`widen_slice`].
#[must_use]
pub fn par_widen_slice<W: WideFloat>(input: &[Half]) -> Vec<W> {
    input.par_iter().map(|&h| widen(h)).collect()
}

/// Widen into a caller-provided buffer.
///
/// # Panics
///
/// Panics if `output.len() != input.len()`.
pub fn widen_into<W: WideFloat>(input: &[Half], output: &mut [W]) {
    assert_eq!(input.len(), output.len(), "widen_into: length mismatch");
    for (&h, slot) in input.iter().zip(output.iter_mut()) {
        *slot = widen(h);
    }
}

/// Apply `op` element-wise.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[must_use]
pub fn binary_slice(op: BinaryOp, a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    assert_eq!(a.len(), b.len(), "{op} slice: length mismatch");
    let results = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| op.apply_best_effort(x, y, ctx.arithmetic, ctx.rounding));
    BatchOutcome::collect(op.symbol(), results, a.len())
}

/// Parallel [`binary_slice`].
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[must_use]
pub fn par_binary_slice(op: BinaryOp, a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    assert_eq!(a.len(), b.len(), "{op} slice: length mismatch");
    let results: Vec<_> = a
        .par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| op.apply_best_effort(x, y, ctx.arithmetic, ctx.rounding))
        .collect();
    BatchOutcome::collect(op.symbol(), results, a.len())
}

/// Element-wise `a + b`.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn add_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    binary_slice(BinaryOp::Add, a, b, ctx)
}

/// Element-wise `a - b`.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn sub_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    binary_slice(BinaryOp::Sub, a, b, ctx)
}

/// Element-wise `a * b`.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn mul_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    binary_slice(BinaryOp::Mul, a, b, ctx)
}

/// Element-wise `a / b`.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn div_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    binary_slice(BinaryOp::Div, a, b, ctx)
}

/// Parallel [`add_slice`].
#[must_use]
pub fn par_add_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    par_binary_slice(BinaryOp::Add, a, b, ctx)
}

/// Parallel [`sub_slice`].
#[must_use]
pub fn par_sub_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    par_binary_slice(BinaryOp::Sub, a, b, ctx)
}

/// Parallel [`mul_slice`].
#[must_use]
pub fn par_mul_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    par_binary_slice(BinaryOp::Mul, a, b, ctx)
}

/// Parallel [`div_slice`].
#[must_use]
pub fn par_div_slice(a: &[Half], b: &[Half], ctx: &FloatContext) -> BatchOutcome {
    par_binary_slice(BinaryOp::Div, a, b, ctx)
}

/// Multiply every element by `factor`.
#[must_use]
pub fn scale_slice(values: &[Half], factor: Half, ctx: &FloatContext) -> BatchOutcome {
    let results = values
        .iter()
        .map(|&x| BinaryOp::Mul.apply_best_effort(x, factor, ctx.arithmetic, ctx.rounding));
    BatchOutcome::collect("scale", results, values.len())
}
