//! IEEE 754 value classes for binary16.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a binary16 bit pattern, as returned by [`Half::classify`](crate::Half::classify).
///
/// Every one of the 65 536 patterns falls in exactly one class. The
/// comments give the exponent field (bits 10..15) and mantissa (bits 0..10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FpClass {
    /// Exponent 0x1F, bit 0x200 clear, mantissa nonzero: `0x7C01..=0x7DFF` and
    /// `0xFC01..=0xFDFF`.
    #[serde(rename = "signaling_nan")]
    SignalingNaN,
    /// Exponent 0x1F with bit 0x200 set, either sign. `0x7E00` is canonical.
    #[serde(rename = "quiet_nan")]
    QuietNaN,
    /// `0xFC00`
    NegativeInfinity,
    /// `0x8400..=0xFBFF`
    NegativeNormal,
    /// Exponent 0, mantissa nonzero, sign set: `0x8001..=0x83FF`.
    NegativeSubnormal,
    /// `0x8000`
    NegativeZero,
    /// `0x0000`
    PositiveZero,
    /// `0x0001..=0x03FF`, multiples of 2^-24 below 2^-14.
    PositiveSubnormal,
    /// `0x0400..=0x7BFF`, from 2^-14 up to 65504.
    PositiveNormal,
    /// `0x7C00`
    PositiveInfinity,
}

impl FpClass {
    /// All ten classes in IEEE 754 `class()` order.
    pub const ALL: [Self; 10] = [
        Self::SignalingNaN,
        Self::QuietNaN,
        Self::NegativeInfinity,
        Self::NegativeNormal,
        Self::NegativeSubnormal,
        Self::NegativeZero,
        Self::PositiveZero,
        Self::PositiveSubnormal,
        Self::PositiveNormal,
        Self::PositiveInfinity,
    ];

    /// Exponent field all ones with a nonzero mantissa.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::SignalingNaN | Self::QuietNaN)
    }

    /// `0x7C00` or `0xFC00`.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::NegativeInfinity | Self::PositiveInfinity)
    }

    /// Either zero, which differ only in bit 15.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::NegativeZero | Self::PositiveZero)
    }

    /// Exponent field 0 with a nonzero mantissa.
    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        matches!(self, Self::NegativeSubnormal | Self::PositiveSubnormal)
    }

    /// Exponent field strictly between 0 and 0x1F.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::NegativeNormal | Self::PositiveNormal)
    }

    /// Any exponent field but 0x1F.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        !matches!(
            self,
            Self::SignalingNaN | Self::QuietNaN | Self::NegativeInfinity | Self::PositiveInfinity
        )
    }

    /// Whether the class carries a negative sign.
    ///
    /// NaN classes are unsigned here; the sign bit of a NaN pattern is
    /// reported by [`Half::signbit`](crate::Half::signbit).
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(
            self,
            Self::NegativeInfinity
                | Self::NegativeNormal
                | Self::NegativeSubnormal
                | Self::NegativeZero
        )
    }

    /// Short snake_case name used in diagnostics and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignalingNaN => "signaling_nan",
            Self::QuietNaN => "quiet_nan",
            Self::NegativeInfinity => "negative_infinity",
            Self::NegativeNormal => "negative_normal",
            Self::NegativeSubnormal => "negative_subnormal",
            Self::NegativeZero => "negative_zero",
            Self::PositiveZero => "positive_zero",
            Self::PositiveSubnormal => "positive_subnormal",
            Self::PositiveNormal => "positive_normal",
            Self::PositiveInfinity => "positive_infinity",
        }
    }
}

impl fmt::Display for FpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
