//! Player commands sent to the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::catalog::{Bait, Loadout, Location};

/// Everything a cast needs. The engine reads nothing else about the player's gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRequest {
    pub loadout: Loadout,
    pub bait: Bait,
    pub location: Location,
    /// Where the bait should land. Clamped to the water; defaults to mid-water.
    #[serde(default)]
    pub target: Option<DVec2>,
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Cast the line.
    Cast { request: CastRequest },
    /// Strike to set the hook.
    SetHook,
    /// Hold or release the reel (level-triggered).
    SetPull { active: bool },
    /// Spend a full charge to stun the fish.
    Hit,
    /// Reel in without a fight (escape key).
    Abandon,
    /// Dismiss the catch or loss screen.
    Acknowledge,
}
