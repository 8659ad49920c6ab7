//! Fight physics for tightline.
//!
//! Pressure model, tension bands and the per-tick tension/distance
//! integrator. Everything here is a pure function of plain data;
//! randomness arrives as explicit draws.

pub mod bands;
pub mod integrator;
pub mod pressure;

pub use tightline_core as core;
