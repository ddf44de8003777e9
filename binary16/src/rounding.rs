//! Rounding modes and the guard/round/sticky decision procedure.
//!
//! Every lossy path in the crate truncates an integer significand and then
//! asks [`should_round_up`] whether to add one unit in the last place. The
//! discarded bits are summarised by [`RoundingBits`]:
//!
//! - guard: the most significant discarded bit,
//! - round: the bit just below guard,
//! - sticky: the OR of everything below round.
//!
//! The two directed-infinity modes are the only ones that depend on the sign
//! of the value being rounded. Toward +inf rounds a positive magnitude up and
//! truncates a negative one; toward -inf is the mirror image. Neither is the
//! same as toward-zero, which truncates both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IEEE 754 rounding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties to even (roundTiesToEven)
    #[default]
    NearestEven,
    /// Round to nearest, ties away from zero (roundTiesToAway)
    NearestAway,
    /// Round toward zero (truncate)
    TowardZero,
    /// Round toward positive infinity
    TowardPositive,
    /// Round toward negative infinity
    TowardNegative,
}

impl RoundingMode {
    /// All five modes.
    pub const ALL: [Self; 5] = [
        Self::NearestEven,
        Self::NearestAway,
        Self::TowardZero,
        Self::TowardPositive,
        Self::TowardNegative,
    ];

    /// True for the two round-to-nearest modes.
    #[must_use]
    pub const fn is_nearest(self) -> bool {
        matches!(self, Self::NearestEven | Self::NearestAway)
    }

    /// SMT-LIB style short name (`rne`, `rna`, `rtz`, `rtp`, `rtn`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NearestEven => "rne",
            Self::NearestAway => "rna",
            Self::TowardZero => "rtz",
            Self::TowardPositive => "rtp",
            Self::TowardNegative => "rtn",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bits discarded by a truncating right shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundingBits {
    /// Most significant discarded bit.
    pub guard: bool,
    /// Discarded bit just below guard.
    pub round: bool,
    /// OR of all remaining discarded bits.
    pub sticky: bool,
}

impl RoundingBits {
    /// Shift `value` right by `shift` and summarise what fell off.
    ///
    /// Returns the retained part and the discarded bits. A shift of 64 or
    /// more retains nothing; the guard bit is then bit 63 only when the
    /// shift is exactly 64.
    #[must_use]
    pub const fn split(value: u64, shift: u32) -> (u64, Self) {
        if shift == 0 {
            return (value, Self::EXACT);
        }
        let retained = if shift >= 64 { 0 } else { value >> shift };
        let guard = bit(value, shift - 1);
        let round = shift >= 2 && bit(value, shift - 2);
        let sticky = shift >= 3 && low_bits_nonzero(value, shift - 2);
        (
            retained,
            Self {
                guard,
                round,
                sticky,
            },
        )
    }

    /// No bits discarded.
    pub const EXACT: Self = Self {
        guard: false,
        round: false,
        sticky: false,
    };

    /// Fold extra already-lost bits into sticky.
    #[must_use]
    pub const fn with_sticky(self, lost: bool) -> Self {
        Self {
            guard: self.guard,
            round: self.round,
            sticky: self.sticky || lost,
        }
    }

    /// True when nothing nonzero was discarded.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        !(self.guard || self.round || self.sticky)
    }

    /// True when the discarded part is exactly half an ulp.
    #[must_use]
    pub const fn is_halfway(self) -> bool {
        self.guard && !self.round && !self.sticky
    }
}

const fn bit(value: u64, index: u32) -> bool {
    index < 64 && (value >> index) & 1 != 0
}

const fn low_bits_nonzero(value: u64, count: u32) -> bool {
    if count >= 64 {
        value != 0
    } else {
        value & ((1u64 << count) - 1) != 0
    }
}

/// Decide whether a truncated significand must be incremented.
///
/// `negative` is the sign of the value being rounded and is only consulted
/// by [`RoundingMode::TowardPositive`] and [`RoundingMode::TowardNegative`].
/// `retained_lsb` is the least significant bit kept after truncation and
/// only breaks ties under [`RoundingMode::NearestEven`].
#[must_use]
pub const fn should_round_up(
    mode: RoundingMode,
    negative: bool,
    retained_lsb: bool,
    bits: RoundingBits,
) -> bool {
    match mode {
        RoundingMode::NearestEven => bits.guard && (!bits.is_halfway() || retained_lsb),
        RoundingMode::NearestAway => bits.guard,
        RoundingMode::TowardZero => false,
        RoundingMode::TowardPositive => !negative && !bits.is_exact(),
        RoundingMode::TowardNegative => negative && !bits.is_exact(),
    }
}
