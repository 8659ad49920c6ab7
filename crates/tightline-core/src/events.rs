//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::{FishInstance, HitOutcome};

/// How a fight ended. Emitted exactly once per hooked (or struck-at) fish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FightOutcome {
    Caught { fish: FishInstance },
    LineBroken,
    FishEscaped,
    /// The player struck while the fish was only nibbling.
    StrikeTooEarly,
}

impl FightOutcome {
    pub fn is_catch(&self) -> bool {
        matches!(self, Self::Caught { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FishingEvent {
    CastStarted { bait_id: String },
    /// The bait is in the water and the school may notice it.
    LineSettled,
    Nibble { species_id: Option<String> },
    Bite { species_id: Option<String> },
    /// The bite window closed without a strike.
    BiteMissed,
    Hooked { fish: FishInstance },
    FightToggled { is_fighting: bool },
    Stunned { outcome: HitOutcome },
    StunExpired,
    Outcome { outcome: FightOutcome },
    Abandoned,
}
