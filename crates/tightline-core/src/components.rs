//! ECS components for the swimming school.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A fish swimming near the bait. Only the species is known until it is hooked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swimmer {
    pub species_id: String,
}

/// Position in the water, in scene percent (x right, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterPosition(pub DVec2);

/// Displacement per attraction step and the time left on the current heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Swim {
    pub velocity: DVec2,
    pub speed: f64,
    pub turn_in_secs: f64,
}
