//! Rejected-action errors.
//!
//! A rejected action never changes simulation state. Fight outcomes
//! (caught, escaped, broken line) are events, not errors.

use thiserror::Error;

use crate::enums::GameStateKind;

/// Why a cast was refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CastError {
    #[error("no {bait_id} left")]
    NoBait { bait_id: String },
    #[error("not enough energy to cast (have {available}, need {required})")]
    NoEnergy { available: u32, required: u32 },
    #[error("rod technique is not permitted at {location_id}")]
    IncompatibleGearForLocation { location_id: String },
    #[error("cannot cast while {state:?}")]
    NotIdle { state: GameStateKind },
}

/// Why a hook-set did nothing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HookError {
    #[error("nothing on the line while {state:?}")]
    NothingOnTheLine { state: GameStateKind },
}

/// Why a hit was refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HitError {
    #[error("no fish is being reeled")]
    NotReeling,
    #[error("hit charge at {charge:.0}%")]
    NotCharged { charge: f64 },
}

/// Any player action rejected through the command path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionRejected {
    #[error(transparent)]
    Cast(#[from] CastError),
    #[error(transparent)]
    Hook(#[from] HookError),
    #[error(transparent)]
    Hit(#[from] HitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("nothing to {action} while {state:?}")]
    WrongState {
        action: &'static str,
        state: GameStateKind,
    },
}

/// Catalog data could not be loaded or a reference did not resolve.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(String),
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("unknown bait: {0}")]
    UnknownBait(String),
    #[error("unknown {kind}: {id}")]
    UnknownGear { kind: &'static str, id: String },
}
