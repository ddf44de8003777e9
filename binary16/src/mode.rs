//! Conversion and arithmetic modes, and how each turns raised exception
//! flags into errors.
//!
//! The numeric result of an operation never depends on the mode's error
//! policy: IEEE, Strict and Exact compute the same bits, and only the
//! latter two report the exceptional conditions as [`ErrorKind`]s. Fast mode
//! takes a different numeric path through native binary32 arithmetic.

use crate::error::{ErrorKind, ExceptionFlags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How narrowing conversions treat exceptional results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    /// Always produce a value; overflow gives infinity, underflow gives zero.
    #[default]
    Ieee,
    /// Reject infinite and NaN sources, overflow and underflow.
    Strict,
    /// Go through native binary32 first; binary64 sources may round twice.
    Fast,
    /// Strict, and additionally reject any conversion that rounds.
    Exact,
}

impl ConversionMode {
    /// All conversion modes.
    pub const ALL: [Self; 4] = [Self::Ieee, Self::Strict, Self::Fast, Self::Exact];

    /// Whether infinite and NaN sources are errors.
    #[must_use]
    pub const fn rejects_specials(self) -> bool {
        matches!(self, Self::Strict | Self::Exact)
    }

    /// Map the flags raised by a conversion to the error this mode reports.
    #[must_use]
    pub const fn error_for(self, flags: ExceptionFlags) -> Option<ErrorKind> {
        match self {
            Self::Ieee | Self::Fast => None,
            Self::Strict | Self::Exact => {
                if flags.overflow {
                    Some(ErrorKind::Overflow)
                } else if flags.underflow {
                    Some(ErrorKind::Underflow)
                } else if flags.inexact && matches!(self, Self::Exact) {
                    Some(ErrorKind::Inexact)
                } else {
                    None
                }
            }
        }
    }

    /// Short name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ieee => "ieee",
            Self::Strict => "strict",
            Self::Fast => "fast",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How arithmetic treats exceptional results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticMode {
    /// Correctly rounded, never fails.
    #[default]
    Ieee,
    /// Native binary32 arithmetic narrowed once; never fails.
    Fast,
    /// Correctly rounded; NaN operands, invalid operations, division by
    /// zero, overflow and underflow to zero are errors.
    Exact,
}

impl ArithmeticMode {
    /// All arithmetic modes.
    pub const ALL: [Self; 3] = [Self::Ieee, Self::Fast, Self::Exact];

    /// Map an operation's outcome to the error this mode reports.
    #[must_use]
    pub const fn error_for(self, nan_operand: bool, flags: ExceptionFlags) -> Option<ErrorKind> {
        match self {
            Self::Ieee | Self::Fast => None,
            Self::Exact => {
                if nan_operand {
                    Some(ErrorKind::NaNOperand)
                } else if flags.invalid {
                    Some(ErrorKind::InvalidOperation)
                } else if flags.division_by_zero {
                    Some(ErrorKind::DivisionByZero)
                } else if flags.overflow {
                    Some(ErrorKind::Overflow)
                } else if flags.underflow {
                    Some(ErrorKind::Underflow)
                } else {
                    None
                }
            }
        }
    }

    /// Short name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ieee => "ieee",
            Self::Fast => "fast",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for ArithmeticMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
