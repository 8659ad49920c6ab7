//! Systems run by the engine each tick.
//!
//! Systems are plain functions over the world or the fight session.
//! They do not own state.

pub mod attraction;
pub mod fight;
pub mod swimming;
pub mod telemetry;
