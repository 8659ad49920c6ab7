//! Player energy and bait counters consumed by casting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::ENERGY_MAX;

/// Counters the engine reads and decrements when a cast starts.
/// Implemented by whatever owns the player's session.
pub trait SupplyLedger {
    fn energy(&self) -> u32;
    fn bait_count(&self, bait_id: &str) -> u32;
    fn spend_energy(&mut self, amount: u32);
    fn consume_bait(&mut self, bait_id: &str);
}

/// A simple in-memory ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSupplies {
    pub energy: u32,
    #[serde(default)]
    pub bait: BTreeMap<String, u32>,
}

impl Default for PlayerSupplies {
    fn default() -> Self {
        Self {
            energy: ENERGY_MAX,
            bait: BTreeMap::new(),
        }
    }
}

impl PlayerSupplies {
    pub fn with_bait(mut self, bait_id: &str, count: u32) -> Self {
        self.bait.insert(bait_id.to_string(), count);
        self
    }

    /// Restore energy up to the cap.
    pub fn regenerate(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount).min(ENERGY_MAX);
    }
}

impl SupplyLedger for PlayerSupplies {
    fn energy(&self) -> u32 {
        self.energy
    }

    fn bait_count(&self, bait_id: &str) -> u32 {
        self.bait.get(bait_id).copied().unwrap_or(0)
    }

    fn spend_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_sub(amount);
    }

    fn consume_bait(&mut self, bait_id: &str) {
        if let Some(count) = self.bait.get_mut(bait_id) {
            *count = count.saturating_sub(1);
        }
    }
}
