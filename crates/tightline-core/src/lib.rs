//! Core types and definitions for the tightline fishing simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! catalog data, commands, telemetry snapshots, events, errors and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod supplies;
pub mod types;

#[cfg(test)]
mod tests;
