//! Fishing engine: the core of the game.
//!
//! `FishingEngine` owns the fight state machine, the school of fish in an
//! ECS world, and the seeded RNG. It validates player actions, runs systems
//! on every `tick`, and produces `FightTelemetry`. Completely headless.

use glam::DVec2;
use hecs::World;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use tightline_core::catalog::{Catalog, Species};
use tightline_core::commands::{CastRequest, PlayerCommand};
use tightline_core::constants::*;
use tightline_core::enums::{CastingStage, GameStateKind};
use tightline_core::error::{ActionRejected, CastError, HitError, HookError};
use tightline_core::events::{FightOutcome, FishingEvent};
use tightline_core::state::FightTelemetry;
use tightline_core::supplies::SupplyLedger;
use tightline_core::types::{GameClock, HitOutcome, SimTime};
use tightline_physics::integrator::{self, FightProfile, Terminal};

use crate::catch_roll::{self, CatchContext};
use crate::countdown::Countdown;
use crate::phase::{Bite, FightPhase};
use crate::school;
use crate::session::FightSession;
use crate::systems;
use crate::systems::attraction::BaitInWater;

/// Size of the school spawned at each location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    /// With the school disabled, bites come from a flat ambient chance.
    pub enabled: bool,
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_size: SCHOOL_MIN,
            max_size: SCHOOL_MAX,
        }
    }
}

/// Configuration for a new engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same telemetry.
    pub seed: u64,
    /// Longest step a tick integrates. Longer frames are truncated.
    pub max_step_secs: f64,
    pub school: SchoolConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_step_secs: MAX_STEP_SECS,
            school: SchoolConfig::default(),
        }
    }
}

/// The cast currently in the water.
struct ActiveCast {
    request: CastRequest,
    point: DVec2,
}

pub struct FishingEngine {
    catalog: Catalog,
    world: World,
    time: SimTime,
    phase: FightPhase,
    cast: Option<ActiveCast>,
    school_location: Option<String>,
    school_config: SchoolConfig,
    max_step_secs: f64,
    pulling: bool,
    hour: u32,
    rng: ChaCha8Rng,
    events: Vec<FishingEvent>,
}

impl FishingEngine {
    pub fn new(config: SimConfig, catalog: Catalog) -> Self {
        Self {
            catalog,
            world: World::new(),
            time: SimTime::default(),
            phase: FightPhase::Idle,
            cast: None,
            school_location: None,
            school_config: config.school,
            max_step_secs: config.max_step_secs,
            pulling: false,
            hour: GameClock::default().hour(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// Arrive at a location with the line out of the water, and spawn a fresh school.
    /// Refused while a cast or fight is in progress.
    pub fn enter_location(&mut self, location_id: &str) -> Result<(), ActionRejected> {
        let state = self.phase.kind();
        if !(state == GameStateKind::Idle || state.is_terminal()) {
            return Err(ActionRejected::WrongState {
                action: "travel",
                state,
            });
        }
        self.catalog.location(location_id)?;
        debug!("travelled to {location_id}");
        self.phase = FightPhase::Idle;
        self.cast = None;
        self.pulling = false;
        self.spawn_school(location_id);
        Ok(())
    }

    /// Hour of day used for species activity windows.
    pub fn set_hour(&mut self, hour: u32) {
        self.hour = hour % 24;
    }

    /// Cast the line. Spends energy and (unless unlimited) one bait.
    pub fn start_cast(
        &mut self,
        request: CastRequest,
        supplies: &mut impl SupplyLedger,
    ) -> Result<(), CastError> {
        let state = self.phase.kind();
        if state != GameStateKind::Idle {
            return Err(CastError::NotIdle { state });
        }
        if !request.location.permits(request.loadout.rod.fishing_type) {
            return Err(CastError::IncompatibleGearForLocation {
                location_id: request.location.id.clone(),
            });
        }
        if !request.bait.unlimited && supplies.bait_count(&request.bait.id) == 0 {
            return Err(CastError::NoBait {
                bait_id: request.bait.id.clone(),
            });
        }
        if supplies.energy() < CAST_ENERGY_COST {
            return Err(CastError::NoEnergy {
                available: supplies.energy(),
                required: CAST_ENERGY_COST,
            });
        }

        supplies.spend_energy(CAST_ENERGY_COST);
        if !request.bait.unlimited {
            supplies.consume_bait(&request.bait.id);
        }

        let location_changed = self.school_location.as_deref() != Some(request.location.id.as_str());
        if location_changed || school::school_size(&self.world) == 0 {
            self.spawn_school(&request.location.id);
        }

        debug!("cast with {} at {}", request.bait.id, request.location.id);
        self.events.push(FishingEvent::CastStarted {
            bait_id: request.bait.id.clone(),
        });
        self.cast = Some(ActiveCast {
            point: systems::attraction::cast_point(request.target),
            request,
        });
        self.pulling = false;
        self.phase = FightPhase::Casting {
            stage: CastingStage::Windup,
            stage_timer: Countdown::new(CastingStage::Windup.duration_secs()),
        };
        Ok(())
    }

    /// Strike. Sets the hook on a bite, loses the fish on a nibble.
    pub fn set_hook_intent(&mut self) -> Result<GameStateKind, HookError> {
        match std::mem::take(&mut self.phase) {
            FightPhase::Biting { bite, .. } => {
                self.phase = self.hook_fish(bite);
            }
            FightPhase::Nibbling { .. } => {
                self.phase = self.finish(FightOutcome::StrikeTooEarly);
            }
            other => {
                let state = other.kind();
                self.phase = other;
                return Err(HookError::NothingOnTheLine { state });
            }
        }
        Ok(self.phase.kind())
    }

    /// Hold or release the reel. Sampled by every tick.
    pub fn set_pull_input(&mut self, active: bool) {
        self.pulling = active;
    }

    /// Spend a full hit charge to stun the fish.
    pub fn trigger_hit(&mut self) -> Result<HitOutcome, HitError> {
        let FightPhase::Reeling(session) = &mut self.phase else {
            return Err(HitError::NotReeling);
        };
        let outcome = integrator::trigger_hit(&mut session.meters, &session.profile)?;
        debug!(
            "hit: stunned for {:.2}s (effective: {})",
            outcome.stun_secs(),
            outcome.was_effective
        );
        self.events.push(FishingEvent::Stunned { outcome });
        Ok(outcome)
    }

    /// Reel the bait back in while waiting or during a bite. Pending timers are dropped.
    pub fn abandon(&mut self) -> Result<(), ActionRejected> {
        let state = self.phase.kind();
        if !(state.is_cancellable() || state == GameStateKind::Casting) {
            return Err(ActionRejected::WrongState {
                action: "abandon",
                state,
            });
        }
        debug!("abandoned cast while {state:?}");
        self.reset_to_idle();
        self.events.push(FishingEvent::Abandoned);
        Ok(())
    }

    /// Dismiss a catch or loss and return to idle.
    pub fn acknowledge(&mut self) -> Result<(), ActionRejected> {
        let state = self.phase.kind();
        if !state.is_terminal() {
            return Err(ActionRejected::WrongState {
                action: "acknowledge",
                state,
            });
        }
        self.reset_to_idle();
        Ok(())
    }

    /// Apply a player command.
    pub fn execute(
        &mut self,
        command: PlayerCommand,
        supplies: &mut impl SupplyLedger,
    ) -> Result<(), ActionRejected> {
        match command {
            PlayerCommand::Cast { request } => self.start_cast(request, supplies)?,
            PlayerCommand::SetHook => {
                self.set_hook_intent()?;
            }
            PlayerCommand::SetPull { active } => self.set_pull_input(active),
            PlayerCommand::Hit => {
                self.trigger_hit()?;
            }
            PlayerCommand::Abandon => self.abandon()?,
            PlayerCommand::Acknowledge => self.acknowledge()?,
        }
        Ok(())
    }

    /// Advance the simulation by `dt` seconds (capped) and return telemetry.
    /// A non-finite `dt` counts as a zero-length step.
    pub fn tick(&mut self, dt: f64) -> FightTelemetry {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_step_secs)
        } else {
            0.0
        };
        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::telemetry::build_telemetry(self.time, &self.phase, events)
    }

    pub fn state(&self) -> GameStateKind {
        self.phase.kind()
    }

    pub fn phase(&self) -> &FightPhase {
        &self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Put a motionless fish of `species_id` at `position` (for testing).
    #[cfg(test)]
    pub fn spawn_test_swimmer(&mut self, species_id: &str, position: DVec2) -> hecs::Entity {
        let species = self
            .catalog
            .species(species_id)
            .expect("test species exists")
            .clone();
        let entity = school::spawn_swimmer(&mut self.world, &mut self.rng, &species, position);
        if let Ok(mut swim) = self.world.get::<&mut tightline_core::components::Swim>(entity) {
            swim.speed = 0.0;
            swim.velocity = DVec2::ZERO;
        }
        entity
    }

    /// Replace the current phase (for testing).
    #[cfg(test)]
    pub fn force_phase(&mut self, phase: FightPhase) {
        self.phase = phase;
    }

    /// Mutable access to the fight in progress (for testing).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> Option<&mut FightSession> {
        match &mut self.phase {
            FightPhase::Reeling(session) => Some(session),
            _ => None,
        }
    }

    fn spawn_school(&mut self, location_id: &str) {
        self.school_location = Some(location_id.to_string());
        if !self.school_config.enabled {
            school::clear_school(&mut self.world);
            return;
        }
        let species = self.catalog.species_for_location(location_id);
        let count = school::respawn_school(
            &mut self.world,
            &mut self.rng,
            &species,
            self.school_config.min_size,
            self.school_config.max_size,
        );
        debug!("spawned {count} fish at {location_id}");
    }

    fn reset_to_idle(&mut self) {
        self.phase = FightPhase::Idle;
        self.cast = None;
        self.pulling = false;
    }

    /// Report `outcome` and return the terminal phase for it.
    fn finish(&mut self, outcome: FightOutcome) -> FightPhase {
        info!("fight over: {outcome:?}");
        let phase = match &outcome {
            FightOutcome::Caught { fish } => FightPhase::Caught(fish.clone()),
            _ => FightPhase::Lost,
        };
        self.pulling = false;
        self.events.push(FishingEvent::Outcome { outcome });
        phase
    }

    /// Run catch resolution and start the fight.
    fn hook_fish(&mut self, bite: Bite) -> FightPhase {
        let Some(cast) = &self.cast else {
            return FightPhase::Idle;
        };
        let location_id = cast.request.location.id.as_str();
        let candidates: Vec<&Species> = self.catalog.species_for_location(location_id);
        let attracted = bite
            .attracted
            .as_ref()
            .and_then(|a| self.catalog.species(&a.species_id).ok());
        let ctx = CatchContext {
            candidates: &candidates,
            bait_id: &cast.request.bait.id,
            location_id,
            hook_size: cast.request.loadout.hook.size,
            hour: self.hour,
        };

        let Some((species, fish)) = catch_roll::resolve_catch(&mut self.rng, attracted, &ctx)
        else {
            warn!("no species to hook at {location_id}");
            return self.finish(FightOutcome::FishEscaped);
        };
        let profile = FightProfile::new(&cast.request.loadout, species, fish.weight_kg);

        if let Some(a) = &bite.attracted {
            let _ = self.world.despawn(a.entity);
        }
        info!(
            "hooked {} ({:.2}kg, {:.1}cm, rank {:?})",
            fish.species_id, fish.weight_kg, fish.length_cm, fish.rank
        );
        self.events.push(FishingEvent::Hooked { fish: fish.clone() });
        FightPhase::Reeling(Box::new(FightSession::new(fish, profile)))
    }

    /// Run all systems for the current phase.
    fn run_systems(&mut self, dt: f64) {
        let phase = std::mem::take(&mut self.phase);
        self.phase = match phase {
            FightPhase::Casting {
                stage,
                mut stage_timer,
            } => {
                if !stage_timer.advance(dt) {
                    FightPhase::Casting { stage, stage_timer }
                } else if let Some(next) = stage.next() {
                    FightPhase::Casting {
                        stage: next,
                        stage_timer: Countdown::new(next.duration_secs()),
                    }
                } else {
                    debug!("line settled");
                    self.events.push(FishingEvent::LineSettled);
                    FightPhase::Waiting {
                        next_check: Countdown::new(FIRST_ATTRACTION_DELAY_SECS),
                    }
                }
            }
            FightPhase::Waiting { mut next_check } => {
                if !next_check.advance(dt) {
                    FightPhase::Waiting { next_check }
                } else {
                    match self.check_attraction() {
                        Some(bite) => self.start_bite(bite),
                        None => FightPhase::Waiting {
                            next_check: Countdown::new(ATTRACTION_INTERVAL_SECS),
                        },
                    }
                }
            }
            FightPhase::Nibbling {
                mut until_bite,
                bite,
            } => {
                if until_bite.advance(dt) {
                    self.biting(bite)
                } else {
                    FightPhase::Nibbling { until_bite, bite }
                }
            }
            FightPhase::Biting { mut window, bite } => {
                if window.advance(dt) {
                    debug!("bite window closed");
                    self.events.push(FishingEvent::BiteMissed);
                    self.cast = None;
                    FightPhase::Idle
                } else {
                    FightPhase::Biting { window, bite }
                }
            }
            FightPhase::Reeling(mut session) => {
                match systems::fight::run(
                    &mut session,
                    self.pulling,
                    dt,
                    &mut self.rng,
                    &mut self.events,
                ) {
                    None => FightPhase::Reeling(session),
                    Some(terminal) => {
                        let outcome = match terminal {
                            Terminal::Landed => FightOutcome::Caught {
                                fish: session.fish.clone(),
                            },
                            Terminal::LineBroken => FightOutcome::LineBroken,
                            Terminal::Escaped => FightOutcome::FishEscaped,
                        };
                        self.finish(outcome)
                    }
                }
            }
            settled @ (FightPhase::Idle | FightPhase::Caught(_) | FightPhase::Lost) => settled,
        };
    }

    fn check_attraction(&mut self) -> Option<Bite> {
        let cast = self.cast.as_ref()?;
        let location_has_fish = self
            .catalog
            .species
            .iter()
            .any(|s| s.lives_in(&cast.request.location.id));
        let bait = BaitInWater {
            point: cast.point,
            bait: &cast.request.bait,
            location_has_fish,
        };
        systems::attraction::check(&mut self.world, &mut self.rng, &self.catalog, &bait)
    }

    /// A fish took interest: usually it nibbles first.
    fn start_bite(&mut self, bite: Bite) -> FightPhase {
        if self.rng.gen_bool(NIBBLE_FIRST_CHANCE) {
            let delay = self.rng.gen_range(NIBBLE_MIN_SECS..=NIBBLE_MAX_SECS);
            debug!("nibble for {delay:.2}s");
            self.events.push(FishingEvent::Nibble {
                species_id: bite.species_id(),
            });
            FightPhase::Nibbling {
                until_bite: Countdown::new(delay),
                bite,
            }
        } else {
            self.biting(bite)
        }
    }

    fn biting(&mut self, bite: Bite) -> FightPhase {
        debug!("bite");
        self.events.push(FishingEvent::Bite {
            species_id: bite.species_id(),
        });
        FightPhase::Biting {
            window: Countdown::new(BITE_WINDOW_SECS),
            bite,
        }
    }
}
