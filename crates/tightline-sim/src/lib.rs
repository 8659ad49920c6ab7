//! Fishing simulation engine for tightline.
//!
//! Owns the fight state machine, the seeded RNG and the swimming school,
//! and produces `FightTelemetry` each tick.

pub mod catch_roll;
pub mod countdown;
pub mod engine;
pub mod phase;
pub mod school;
pub mod session;
pub mod systems;

pub use engine::{FishingEngine, SchoolConfig, SimConfig};
pub use tightline_core as core;

#[cfg(test)]
mod tests;
