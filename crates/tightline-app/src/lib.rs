//! Tightline headless runner.
//!
//! Wires the fishing engine to a JSON config, background timers (energy and
//! the game clock), a fixed-rate game loop thread fed by a command channel,
//! and an autopilot angler used by the CLI.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod session;
pub mod state;

pub use tightline_core as core;
