//! Telemetry snapshot returned by every tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FishingEvent;
use crate::types::{FishInstance, SimTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightTelemetry {
    pub time: SimTime,
    pub state: GameStateKind,
    /// Only while casting.
    pub casting_stage: Option<CastingStage>,
    /// Only while reeling.
    pub fight: Option<FightView>,
    /// Seconds left to strike while biting.
    pub bite_window_secs: Option<f64>,
    /// Set once landed, until acknowledged.
    pub landed: Option<FishInstance>,
    pub events: Vec<FishingEvent>,
}

/// Meters of the fight in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightView {
    pub tension: f64,
    pub line_tension: f64,
    pub rod_tension: f64,
    pub distance: f64,
    pub max_distance: f64,
    pub hit_charge: f64,
    pub is_fighting: bool,
    pub is_stunned: bool,
    pub stun_time_left: f64,
    pub high_tension_secs: f64,
    pub slack_secs: f64,
    pub band: TensionBand,
    pub fish: FishInstance,
}
