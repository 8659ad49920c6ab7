//! A simple angler that plays the game from telemetry alone.
//!
//! It keeps tension between two thresholds, hits whenever the charge is full,
//! strikes on a bite and acknowledges every result.

use log::{info, warn};
use serde::Serialize;

use tightline_core::commands::{CastRequest, PlayerCommand};
use tightline_core::constants::HIT_CHARGE_MAX;
use tightline_core::enums::GameStateKind;
use tightline_core::events::{FightOutcome, FishingEvent};
use tightline_core::state::FightTelemetry;
use tightline_core::supplies::SupplyLedger;
use tightline_core::types::{FishInstance, GameClock};

use crate::session::AnglingSession;

/// Start pulling when tension drops below this.
pub const PULL_BELOW: f64 = 45.0;
/// Let go when tension climbs above this.
pub const RELEASE_ABOVE: f64 = 55.0;
/// Idle ticks between cast attempts, so a refused cast is not spammed.
const CAST_RETRY_TICKS: u32 = 30;

pub struct Autopilot {
    request: CastRequest,
    casts_left: u32,
    pulling: bool,
    idle_ticks: u32,
    casts_made: u32,
    caught: Vec<FishInstance>,
    lost: Vec<FightOutcome>,
    missed_bites: u32,
}

/// What an autopilot session achieved.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub casts: u32,
    pub caught: Vec<FishInstance>,
    pub lost: Vec<FightOutcome>,
    pub missed_bites: u32,
    pub energy_left: u32,
    pub elapsed_secs: f64,
    pub clock: GameClock,
}

impl Autopilot {
    pub fn new(request: CastRequest, casts: u32) -> Self {
        Self {
            request,
            casts_left: casts,
            pulling: false,
            idle_ticks: 0,
            casts_made: 0,
            caught: Vec::new(),
            lost: Vec::new(),
            missed_bites: 0,
        }
    }

    pub fn casts_left(&self) -> u32 {
        self.casts_left
    }

    /// Out of casts and back on the bank.
    pub fn is_done(&self, state: GameStateKind) -> bool {
        self.casts_left == 0 && state == GameStateKind::Idle
    }

    /// Read one telemetry snapshot and decide what to press.
    pub fn decide(&mut self, telemetry: &FightTelemetry) -> Vec<PlayerCommand> {
        self.record(&telemetry.events);

        let mut commands = Vec::new();
        if telemetry.state != GameStateKind::Idle {
            self.idle_ticks = 0;
        }
        if telemetry.state != GameStateKind::Reeling {
            self.pulling = false;
        }

        match telemetry.state {
            GameStateKind::Idle if self.casts_left > 0 => {
                if self.idle_ticks % CAST_RETRY_TICKS == 0 {
                    commands.push(PlayerCommand::Cast {
                        request: self.request.clone(),
                    });
                }
                self.idle_ticks += 1;
            }
            GameStateKind::Biting => commands.push(PlayerCommand::SetHook),
            GameStateKind::Reeling => {
                if let Some(fight) = &telemetry.fight {
                    let want = if fight.tension < PULL_BELOW {
                        true
                    } else if fight.tension > RELEASE_ABOVE {
                        false
                    } else {
                        self.pulling
                    };
                    if want != self.pulling {
                        self.pulling = want;
                        commands.push(PlayerCommand::SetPull { active: want });
                    }
                    if fight.hit_charge >= HIT_CHARGE_MAX && !fight.is_stunned {
                        commands.push(PlayerCommand::Hit);
                    }
                }
            }
            GameStateKind::Caught | GameStateKind::Lost => commands.push(PlayerCommand::Acknowledge),
            _ => {}
        }
        commands
    }

    fn record(&mut self, events: &[FishingEvent]) {
        for event in events {
            match event {
                FishingEvent::CastStarted { .. } => {
                    self.casts_left = self.casts_left.saturating_sub(1);
                    self.casts_made += 1;
                }
                FishingEvent::BiteMissed => self.missed_bites += 1,
                FishingEvent::Outcome { outcome } => match outcome {
                    FightOutcome::Caught { fish } => {
                        info!(
                            "landed {} {:.1}cm {:.2}kg rank {:?}",
                            fish.species_id, fish.length_cm, fish.weight_kg, fish.rank
                        );
                        self.caught.push(fish.clone());
                    }
                    other => {
                        info!("lost: {other:?}");
                        self.lost.push(other.clone());
                    }
                },
                _ => {}
            }
        }
    }

    pub fn report(&self, session: &AnglingSession) -> SessionReport {
        SessionReport {
            casts: self.casts_made,
            caught: self.caught.clone(),
            lost: self.lost.clone(),
            missed_bites: self.missed_bites,
            energy_left: session.supplies().energy(),
            elapsed_secs: session.engine().time().elapsed_secs,
            clock: session.clock(),
        }
    }
}

/// Play `session` in-process until the autopilot is done or `max_ticks` pass.
/// Returns the number of ticks run.
pub fn run_headless(session: &mut AnglingSession, autopilot: &mut Autopilot, dt: f64, max_ticks: u64) -> u64 {
    for ticks in 0..max_ticks {
        let telemetry = session.step(dt);
        let state = telemetry.state;
        for command in autopilot.decide(&telemetry) {
            if let Err(e) = session.execute(command) {
                warn!("autopilot command rejected: {e}");
            }
        }
        if autopilot.is_done(state) {
            return ticks + 1;
        }
    }
    warn!("autopilot stopped after {max_ticks} ticks with {} casts left", autopilot.casts_left());
    max_ticks
}
