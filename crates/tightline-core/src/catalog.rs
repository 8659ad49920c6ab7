//! Static reference data: species, baits, locations and tackle.
//!
//! The catalog is read-only during play. The game ships with an embedded
//! JSON catalog; tests and tools may load their own with [`Catalog::from_json`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ATTRACTION_RADIUS;
use crate::enums::{FishRank, FishingType, RodPower};
use crate::error::CatalogError;
use crate::types::ActiveHours;

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

/// Size and weight ranges of a species. Sex multipliers scale both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStats {
    pub min_length: f64,
    pub max_length: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub male_multiplier: f64,
    pub female_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    pub locations: Vec<String>,
    #[serde(default)]
    pub preferred_baits: Vec<String>,
    /// Feeding window. `None` means the species feeds around the clock.
    #[serde(default)]
    pub active_hours: Option<ActiveHours>,
    pub price: f64,
    /// 0–10.
    pub fight_strength: f64,
    /// 0–10.
    pub aggression: f64,
    /// Best rank a given hook size can land.
    #[serde(default)]
    pub max_rank_by_hook_size: BTreeMap<i32, FishRank>,
    /// Maximum length (cm) this species reaches at a given location.
    #[serde(default)]
    pub location_size_limit: BTreeMap<String, f64>,
    pub stats: SpeciesStats,
}

impl Species {
    pub fn prefers_bait(&self, bait_id: &str) -> bool {
        self.preferred_baits.iter().any(|b| b == bait_id)
    }

    pub fn is_active_at(&self, hour: u32) -> bool {
        self.active_hours.map_or(true, |hours| hours.contains(hour))
    }

    pub fn lives_in(&self, location_id: &str) -> bool {
        self.locations.iter().any(|l| l == location_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bait {
    pub id: String,
    pub name: String,
    /// Never consumed by casting (artificial lures).
    #[serde(default)]
    pub unlimited: bool,
    /// How far the scent reaches, in tenths of a water unit.
    #[serde(default)]
    pub attraction_radius: Option<f64>,
}

impl Bait {
    pub fn attraction_radius(&self) -> f64 {
        self.attraction_radius.unwrap_or(DEFAULT_ATTRACTION_RADIUS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Techniques allowed here. `None` permits every technique.
    #[serde(default)]
    pub allowed_fishing_types: Option<Vec<FishingType>>,
}

impl Location {
    pub fn permits(&self, fishing_type: FishingType) -> bool {
        self.allowed_fishing_types
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&fishing_type))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodSpec {
    pub id: String,
    pub name: String,
    pub fishing_type: FishingType,
    pub power: RodPower,
    /// Casting range, which is also the starting reel-in distance.
    pub range: f64,
    pub max_line_weight_lb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub id: String,
    pub name: String,
    pub test_weight_lb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelSpec {
    pub id: String,
    pub name: String,
    pub max_drag_lb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookSpec {
    pub id: String,
    pub name: String,
    /// Smaller or negative means a physically larger hook.
    pub size: i32,
}

/// The tackle equipped for one cast. Immutable for the fight's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub rod: RodSpec,
    pub line: LineSpec,
    pub reel: ReelSpec,
    pub hook: HookSpec,
}

impl Loadout {
    pub fn rod_power(&self) -> f64 {
        self.rod.power.multiplier()
    }

    pub fn max_distance(&self) -> f64 {
        self.rod.range
    }
}

/// All reference data the simulation consults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub species: Vec<Species>,
    pub baits: Vec<Bait>,
    pub locations: Vec<Location>,
    pub rods: Vec<RodSpec>,
    pub lines: Vec<LineSpec>,
    pub reels: Vec<ReelSpec>,
    pub hooks: Vec<HookSpec>,
}

impl Catalog {
    /// The catalog compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog. Every species location must exist.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        for species in &catalog.species {
            for location_id in &species.locations {
                catalog.location(location_id)?;
            }
        }
        Ok(catalog)
    }

    pub fn species(&self, id: &str) -> Result<&Species, CatalogError> {
        self.species
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownSpecies(id.to_string()))
    }

    pub fn species_for_location(&self, location_id: &str) -> Vec<&Species> {
        self.species
            .iter()
            .filter(|s| s.lives_in(location_id))
            .collect()
    }

    pub fn location(&self, id: &str) -> Result<&Location, CatalogError> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CatalogError::UnknownLocation(id.to_string()))
    }

    pub fn bait(&self, id: &str) -> Result<&Bait, CatalogError> {
        self.baits
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CatalogError::UnknownBait(id.to_string()))
    }

    /// Resolve a loadout from gear ids.
    pub fn loadout(
        &self,
        rod_id: &str,
        line_id: &str,
        reel_id: &str,
        hook_id: &str,
    ) -> Result<Loadout, CatalogError> {
        Ok(Loadout {
            rod: find_gear(&self.rods, "rod", rod_id, |r| &r.id)?,
            line: find_gear(&self.lines, "line", line_id, |l| &l.id)?,
            reel: find_gear(&self.reels, "reel", reel_id, |r| &r.id)?,
            hook: find_gear(&self.hooks, "hook", hook_id, |h| &h.id)?,
        })
    }
}

fn find_gear<T: Clone>(
    items: &[T],
    kind: &'static str,
    id: &str,
    key: impl Fn(&T) -> &String,
) -> Result<T, CatalogError> {
    items
        .iter()
        .find(|item| key(item) == id)
        .cloned()
        .ok_or_else(|| CatalogError::UnknownGear {
            kind,
            id: id.to_string(),
        })
}
