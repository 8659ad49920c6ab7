//! Runner configuration, loaded from an optional JSON file.
//!
//! Every field has a default, so a file only needs the values it changes.

use std::io::ErrorKind;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use tightline_core::catalog::Catalog;
use tightline_core::commands::CastRequest;
use tightline_core::constants::*;
use tightline_core::error::CatalogError;
use tightline_core::supplies::PlayerSupplies;
use tightline_sim::SimConfig;

use crate::error::ConfigError;

/// Gear and bait ids, resolved against the catalog at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TackleConfig {
    pub rod: String,
    pub line: String,
    pub reel: String,
    pub hook: String,
    pub bait: String,
}

impl Default for TackleConfig {
    fn default() -> Self {
        Self {
            rod: "fiber_float".into(),
            line: "mono_medium".into(),
            reel: "spinning_basic".into(),
            hook: "hook_6".into(),
            bait: "worm".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Minutes after midnight when the session starts.
    pub start_minute: f64,
    pub minutes_per_real_minute: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_minute: CLOCK_START_MINUTE,
            minutes_per_real_minute: CLOCK_MINUTES_PER_REAL_MINUTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegenConfig {
    pub interval_secs: f64,
    pub amount: u32,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            interval_secs: ENERGY_REGEN_INTERVAL_SECS,
            amount: ENERGY_REGEN_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Game loop rate in realtime mode, and the step size of headless runs.
    pub tick_rate_hz: u32,
    pub location: String,
    pub tackle: TackleConfig,
    pub supplies: PlayerSupplies,
    pub clock: ClockConfig,
    pub energy_regen: RegenConfig,
    /// Casts the autopilot makes before stopping.
    pub casts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate_hz: 60,
            location: "pond".into(),
            tackle: TackleConfig::default(),
            supplies: PlayerSupplies::default()
                .with_bait("worm", 20)
                .with_bait("bread", 20),
            clock: ClockConfig::default(),
            energy_regen: RegenConfig::default(),
            casts: 5,
        }
    }
}

impl AppConfig {
    /// Load from `path`. No path, or a path that does not exist, gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply command-line overrides on top of the file.
    pub fn with_overrides(mut self, seed: Option<u64>, location: Option<String>, casts: Option<u32>) -> Self {
        if let Some(seed) = seed {
            self.sim.seed = seed;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(casts) = casts {
            self.casts = casts;
        }
        self
    }

    /// Seconds per tick at the configured rate.
    pub fn step_secs(&self) -> f64 {
        1.0 / f64::from(self.tick_rate_hz.max(1))
    }

    /// Resolve the configured tackle into the request the engine casts with.
    pub fn cast_request(&self, catalog: &Catalog) -> Result<CastRequest, CatalogError> {
        let t = &self.tackle;
        Ok(CastRequest {
            loadout: catalog.loadout(&t.rod, &t.line, &t.reel, &t.hook)?,
            bait: catalog.bait(&t.bait)?.clone(),
            location: catalog.location(&self.location)?.clone(),
            target: None,
        })
    }
}
