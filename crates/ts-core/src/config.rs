//! Problem header and schedule configuration.
//!
//! # Rounding
//!
//! A street's green time is its share of intersection demand scaled to the
//! cycle length:
//!
//! ```text
//! share    = weight as f64 / total_weight as f64 * cycle_length as f64
//! duration = rounding.round(share)
//! ```
//!
//! Shares are never negative, so the only question is what happens at an
//! exact `.5`.  [`RoundingRule::HalfEven`] is the default: `2.5 → 2`,
//! `3.5 → 4`.  [`RoundingRule::HalfAwayFromZero`] always rounds a tie up.

use std::fmt;
use std::str::FromStr;

use crate::{TsError, TsResult};

// ── ProblemHeader ─────────────────────────────────────────────────────────────

/// The five integers on the first line of an input file: `D I S V F`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemHeader {
    /// Simulation duration in seconds.  Carried but not used for scheduling.
    pub duration: u32,
    pub intersection_count: u32,
    pub street_count: u32,
    pub vehicle_count: u32,
    /// Cycle length `F`.  Signed so that a bad value survives parsing and is
    /// rejected by [`ScheduleConfig::new`] as `InvalidConfiguration`.
    pub cycle_length: i64,
}

impl ProblemHeader {
    /// Validate the cycle length and pair it with a rounding rule.
    pub fn schedule_config(&self, rounding: RoundingRule) -> TsResult<ScheduleConfig> {
        ScheduleConfig::new(self.cycle_length, rounding)
    }
}

// ── RoundingRule ──────────────────────────────────────────────────────────────

/// Tie-break rule for proportional green durations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundingRule {
    /// Banker's rounding: ties go to the even neighbour.
    #[default]
    HalfEven,
    /// Ties go to the neighbour farther from zero.
    HalfAwayFromZero,
}

impl RoundingRule {
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingRule::HalfEven         => value.round_ties_even(),
            RoundingRule::HalfAwayFromZero => value.round(),
        }
    }
}

impl fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingRule::HalfEven         => f.write_str("half-even"),
            RoundingRule::HalfAwayFromZero => f.write_str("half-away"),
        }
    }
}

impl FromStr for RoundingRule {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "half-even" | "even" | "bankers" => Ok(RoundingRule::HalfEven),
            "half-away" | "away" | "half-away-from-zero" => Ok(RoundingRule::HalfAwayFromZero),
            other => Err(TsError::Parse(format!(
                "invalid rounding rule {other:?}: expected \"half-even\" or \"half-away\""
            ))),
        }
    }
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// Validated inputs for the schedule builder.
///
/// The only way to obtain one is [`ScheduleConfig::new`], so a config in hand
/// always has `cycle_length > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleConfig {
    cycle_length: u32,
    rounding: RoundingRule,
}

impl ScheduleConfig {
    /// Build a config, rejecting a cycle length that is zero, negative, or
    /// larger than `u32::MAX`.
    pub fn new(cycle_length: i64, rounding: RoundingRule) -> TsResult<Self> {
        if cycle_length <= 0 {
            return Err(TsError::InvalidConfiguration(format!(
                "cycle length must be positive, got {cycle_length}"
            )));
        }
        let cycle_length = u32::try_from(cycle_length).map_err(|_| {
            TsError::InvalidConfiguration(format!(
                "cycle length {cycle_length} exceeds {}",
                u32::MAX
            ))
        })?;
        Ok(Self { cycle_length, rounding })
    }

    #[inline]
    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    #[inline]
    pub fn rounding(&self) -> RoundingRule {
        self.rounding
    }

    /// Green duration for a street carrying `weight` of `total_weight`
    /// demand.  Returns 0 when the share rounds away entirely.
    ///
    /// `total_weight` must be non-zero.
    pub fn proportional_duration(&self, weight: u64, total_weight: u64) -> u32 {
        debug_assert!(total_weight > 0);
        let share = weight as f64 / total_weight as f64 * self.cycle_length as f64;
        // weight ≤ total_weight keeps the result in [0, cycle_length].
        self.rounding.round(share) as u32
    }
}
