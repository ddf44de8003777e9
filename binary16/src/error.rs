//! Error taxonomy and IEEE exception flags.

use crate::half::Half;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use thiserror::Error;

/// Kind of exceptional condition surfaced by Strict and Exact modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Magnitude too large for binary16, or an infinite source in Strict mode.
    Overflow,
    /// A nonzero value rounded or flushed to zero.
    Underflow,
    /// Indeterminate form: inf - inf, 0 * inf, 0 / 0, inf / inf.
    InvalidOperation,
    /// Nonzero finite value divided by zero.
    DivisionByZero,
    /// A NaN was supplied as an operand.
    #[serde(rename = "nan_operand")]
    NaNOperand,
    /// Rounding discarded nonzero bits (Exact conversion only).
    Inexact,
}

impl ErrorKind {
    /// Short snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
            Self::InvalidOperation => "invalid_operation",
            Self::DivisionByZero => "division_by_zero",
            Self::NaNOperand => "nan_operand",
            Self::Inexact => "inexact",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Conversion from binary32.
    NarrowF32,
    /// Conversion from binary64.
    NarrowF64,
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division
    Div,
}

impl Operation {
    /// Short name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NarrowF32 => "narrow_f32",
            Self::NarrowF64 => "narrow_f64",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The offending input of a failed operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A wide source value (binary32 sources are widened exactly).
    Wide(f64),
    /// The two operands of a binary arithmetic operation.
    Pair(Half, Half),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wide(x) => write!(f, "{x:e}"),
            Self::Pair(a, b) => write!(f, "{a:#06x}, {b:#06x}"),
        }
    }
}

/// Error returned by Strict conversion and Exact conversion/arithmetic.
#[derive(Error, Debug, Clone, Copy)]
#[error("{operation}({operand}): {kind}")]
pub struct OperationError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Which operation failed.
    pub operation: Operation,
    /// The input that triggered the failure.
    pub operand: Operand,
}

impl OperationError {
    /// Create an error.
    #[must_use]
    pub const fn new(kind: ErrorKind, operation: Operation, operand: Operand) -> Self {
        Self {
            kind,
            operation,
            operand,
        }
    }
}

/// Result type for fallible operations
pub type OperationResult<T> = Result<T, OperationError>;

/// An error tagged with the position of the failing element in a batch.
#[derive(Error, Debug, Clone, Copy)]
#[error("element {index}: {error}")]
pub struct IndexedError {
    /// Position in the input slice.
    pub index: usize,
    /// The element's error.
    #[source]
    pub error: OperationError,
}

/// IEEE 754 exception flags raised by a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExceptionFlags {
    /// Invalid operation
    pub invalid: bool,
    /// Division by zero
    pub division_by_zero: bool,
    /// Overflow
    pub overflow: bool,
    /// Underflow to zero
    pub underflow: bool,
    /// Inexact result
    pub inexact: bool,
}

impl ExceptionFlags {
    /// No flags raised.
    pub const NONE: Self = Self {
        invalid: false,
        division_by_zero: false,
        overflow: false,
        underflow: false,
        inexact: false,
    };

    /// Only `invalid`.
    pub const INVALID: Self = Self {
        invalid: true,
        ..Self::NONE
    };

    /// Only `division_by_zero`.
    pub const DIVISION_BY_ZERO: Self = Self {
        division_by_zero: true,
        ..Self::NONE
    };

    /// True when nothing was raised.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.invalid || self.division_by_zero || self.overflow || self.underflow || self.inexact)
    }
}

impl BitOr for ExceptionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            invalid: self.invalid || rhs.invalid,
            division_by_zero: self.division_by_zero || rhs.division_by_zero,
            overflow: self.overflow || rhs.overflow,
            underflow: self.underflow || rhs.underflow,
            inexact: self.inexact || rhs.inexact,
        }
    }
}

impl BitOrAssign for ExceptionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
