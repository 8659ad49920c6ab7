//! Fight state machine states.
//!
//! Each state carries only the data and countdowns it needs, so leaving a
//! state drops its timers with it.

use hecs::Entity;

use tightline_core::enums::{CastingStage, GameStateKind};
use tightline_core::types::FishInstance;

use crate::countdown::Countdown;
use crate::session::FightSession;

/// A school fish that took the bait.
#[derive(Debug, Clone, PartialEq)]
pub struct Attracted {
    pub entity: Entity,
    pub species_id: String,
}

/// A bite in progress. `attracted` is `None` when no school fish was involved,
/// in which case the species is rolled at hook-set.
#[derive(Debug, Clone, PartialEq)]
pub struct Bite {
    pub attracted: Option<Attracted>,
}

impl Bite {
    pub fn species_id(&self) -> Option<String> {
        self.attracted.as_ref().map(|a| a.species_id.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FightPhase {
    #[default]
    Idle,
    Casting {
        stage: CastingStage,
        stage_timer: Countdown,
    },
    Waiting {
        next_check: Countdown,
    },
    Nibbling {
        until_bite: Countdown,
        bite: Bite,
    },
    Biting {
        window: Countdown,
        bite: Bite,
    },
    Reeling(Box<FightSession>),
    Caught(FishInstance),
    Lost,
}

impl FightPhase {
    pub fn kind(&self) -> GameStateKind {
        match self {
            Self::Idle => GameStateKind::Idle,
            Self::Casting { .. } => GameStateKind::Casting,
            Self::Waiting { .. } => GameStateKind::Waiting,
            Self::Nibbling { .. } => GameStateKind::Nibbling,
            Self::Biting { .. } => GameStateKind::Biting,
            Self::Reeling(_) => GameStateKind::Reeling,
            Self::Caught(_) => GameStateKind::Caught,
            Self::Lost => GameStateKind::Lost,
        }
    }
}
