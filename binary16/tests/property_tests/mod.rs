//! Property-based tests for binary16
//!
//! This module contains property tests for:
//! - Arithmetic against a binary64 reference computation
//! - Narrowing conversions, rounding direction and monotonicity
//! - Comparison and batch processing invariants

mod arithmetic_properties;
mod comparison_properties;
mod conversion_properties;
