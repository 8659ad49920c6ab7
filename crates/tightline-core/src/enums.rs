//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Discrete fight state, as reported in telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStateKind {
    #[default]
    Idle,
    Casting,
    Waiting,
    Nibbling,
    Biting,
    Reeling,
    Caught,
    Lost,
}

impl GameStateKind {
    /// States an escape key can back out of.
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Waiting | Self::Nibbling | Self::Biting)
    }

    /// States that wait for an explicit acknowledgment.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Caught | Self::Lost)
    }
}

/// Cast animation sequence. Purely timing, no gameplay effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastingStage {
    #[default]
    Windup,
    Cast,
    Line,
    Splash,
}

impl CastingStage {
    pub fn duration_secs(self) -> f64 {
        match self {
            Self::Windup => CAST_WINDUP_SECS,
            Self::Cast => CAST_THROW_SECS,
            Self::Line => CAST_LINE_SECS,
            Self::Splash => CAST_SPLASH_SECS,
        }
    }

    /// The following stage, or `None` once the bait is in the water.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Windup => Some(Self::Cast),
            Self::Cast => Some(Self::Line),
            Self::Line => Some(Self::Splash),
            Self::Splash => None,
        }
    }
}

/// Trophy rank of a landed fish. Ordered `C < B < A < S`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FishRank {
    #[default]
    C,
    B,
    A,
    S,
}

impl FishRank {
    /// Rank for a length percentile (0–100).
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= RANK_S_PERCENTILE {
            Self::S
        } else if percentile >= RANK_A_PERCENTILE {
            Self::A
        } else if percentile >= RANK_B_PERCENTILE {
            Self::B
        } else {
            Self::C
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishSex {
    Male,
    Female,
}

/// Rod power class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RodPower {
    Ultralight,
    Light,
    #[default]
    Medium,
    Heavy,
    ExtraHeavy,
}

impl RodPower {
    /// Scalar used by pull, reel and hit formulas.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Ultralight => 0.5,
            Self::Light => 0.75,
            Self::Medium => 1.0,
            Self::Heavy => 1.3,
            Self::ExtraHeavy => 1.6,
        }
    }
}

/// Technique a rod is built for. Some waters only permit certain techniques.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishingType {
    #[default]
    Float,
    Baitcasting,
    Bottom,
}

/// Tension band that sets reel speed and charge gain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TensionBand {
    /// Below `TENSION_SLACK_LOW`. The fish swims away.
    Slack,
    /// Between slack and the safe band.
    SlackToSafe,
    #[default]
    Safe,
    /// Between the safe band and the danger band.
    SafeToDanger,
    /// Above `TENSION_DANGER_HIGH`. The reel stalls.
    TooHigh,
}
