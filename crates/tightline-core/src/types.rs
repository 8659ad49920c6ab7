//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{FishRank, FishSex};

/// Simulation time tracking. Steps are variable-length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// In-game time of day, in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    pub minutes: f64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            minutes: CLOCK_START_MINUTE,
        }
    }
}

impl GameClock {
    pub fn at_minute(minutes: f64) -> Self {
        Self {
            minutes: minutes.rem_euclid(MINUTES_PER_DAY),
        }
    }

    /// Whole hour of the day, 0–23.
    pub fn hour(&self) -> u32 {
        (self.minutes / 60.0).floor() as u32 % 24
    }

    /// Advance by `real_secs` of wall time at `minutes_per_real_minute` game speed.
    pub fn advance(&mut self, real_secs: f64, minutes_per_real_minute: f64) {
        let delta = real_secs / 60.0 * minutes_per_real_minute;
        self.minutes = (self.minutes + delta).rem_euclid(MINUTES_PER_DAY);
    }
}

/// Hours of the day a species feeds, `[start, end)`. Wraps past midnight when
/// `start >= end`, so equal hours cover the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveHours {
    pub start: u32,
    pub end: u32,
}

impl ActiveHours {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start < self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// A fish fixed at hook-set: what the player is fighting and may land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishInstance {
    pub species_id: String,
    pub sex: FishSex,
    /// Centimetres, one decimal.
    pub length_cm: f64,
    /// Kilograms, two decimals.
    pub weight_kg: f64,
    pub rank: FishRank,
    /// Length percentile against the largest possible specimen, rounded.
    pub percentile: u32,
}

/// Result of a successful hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitOutcome {
    pub stun_duration_ms: f64,
    pub was_effective: bool,
}

impl HitOutcome {
    pub fn stun_secs(&self) -> f64 {
        self.stun_duration_ms / 1000.0
    }
}
