//! binary16 - IEEE 754 half-precision floating point
//!
//! This crate provides a bit-exact software implementation of the IEEE
//! 754-2008 binary16 format:
//! - [`Half`], an immutable 16-bit value with classification and sign
//!   manipulation
//! - Exact widening to `f32`/`f64` and correctly rounded narrowing in five
//!   rounding modes
//! - Addition, subtraction, multiplication and division in IEEE, Fast and
//!   Exact modes
//! - IEEE comparison, `min`/`max` and total ordering
//! - Batch conversion and arithmetic with per-index error reporting
//!
//! Operating modes are never global. Every fallible operation takes its
//! modes explicitly, usually bundled in a [`FloatContext`].
//!
//! # Examples
//!
//! ## Conversions
//!
//! ```
//! use binary16::{ConversionMode, ErrorKind, Half, RoundingMode, narrow};
//!
//! let h = Half::from_f32(1.5);
//! assert_eq!(h.to_bits(), 0x3E00);
//! assert_eq!(h.to_f64(), 1.5);
//!
//! // IEEE overflow saturates to infinity, Strict reports it
//! assert!(Half::from_f64(1e10).is_infinite());
//! let err = narrow(1e10f64, ConversionMode::Strict, RoundingMode::NearestEven).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Overflow);
//! ```
//!
//! ## Arithmetic with a context
//!
//! ```
//! use binary16::{ErrorKind, FloatContext, Half, RoundingMode};
//!
//! let one = Half::ONE;
//! let three = Half::from_f32(3.0);
//!
//! let ctx = FloatContext::IEEE.with_rounding(RoundingMode::TowardPositive);
//! assert_eq!(ctx.div(one, three).unwrap().to_bits(), 0x3556);
//!
//! // Exact arithmetic turns indeterminate forms into errors
//! let err = FloatContext::STRICT.div(Half::ZERO, Half::ZERO).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvalidOperation);
//!
//! // Operators use IEEE rules and round to nearest even
//! assert_eq!((one + one).to_bits(), 0x4000);
//! ```
//!
//! ## Batches
//!
//! ```
//! use binary16::{ErrorKind, FloatContext};
//!
//! let outcome = FloatContext::STRICT.narrow_slice(&[1.0f64, 1e6, 0.5]);
//! assert_eq!(outcome.values.len(), 3);
//! assert_eq!(outcome.errors[0].index, 1);
//! assert_eq!(outcome.errors[0].error.kind, ErrorKind::Overflow);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod arith;
pub mod batch;
pub mod class;
pub mod compare;
pub mod context;
pub mod error;
mod fmt;
pub mod format;
pub mod half;
pub mod manip;
pub mod mode;
pub mod narrow;
mod ops;
pub mod rounding;
pub mod widen;

pub use arith::{BinaryOp, add, div, mul, sub};
pub use batch::BatchOutcome;
pub use class::FpClass;
pub use context::FloatContext;
pub use error::{
    ErrorKind, ExceptionFlags, IndexedError, Operand, Operation, OperationError, OperationResult,
};
pub use format::{FloatFormat, WideFloat};
pub use half::{Half, leading_zero_count};
pub use mode::{ArithmeticMode, ConversionMode};
pub use narrow::{narrow, narrow_with_flags};
pub use rounding::RoundingMode;
pub use widen::widen;
