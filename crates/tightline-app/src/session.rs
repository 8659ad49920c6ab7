//! One angler at one location: the engine plus the timers that run beside it.

use tightline_core::catalog::Catalog;
use tightline_core::commands::PlayerCommand;
use tightline_core::error::ActionRejected;
use tightline_core::state::FightTelemetry;
use tightline_core::supplies::PlayerSupplies;
use tightline_core::types::GameClock;
use tightline_sim::FishingEngine;

use crate::config::{AppConfig, RegenConfig};

/// Energy trickles back on a fixed interval of wall time.
#[derive(Debug, Clone)]
struct EnergyRegen {
    config: RegenConfig,
    elapsed: f64,
}

impl EnergyRegen {
    /// Number of regen intervals completed during `dt`.
    fn advance(&mut self, dt: f64) -> u32 {
        if self.config.interval_secs <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut pulses = 0;
        while self.elapsed >= self.config.interval_secs {
            self.elapsed -= self.config.interval_secs;
            pulses += 1;
        }
        pulses
    }
}

pub struct AnglingSession {
    engine: FishingEngine,
    supplies: PlayerSupplies,
    clock: GameClock,
    clock_speed: f64,
    regen: EnergyRegen,
}

impl AnglingSession {
    pub fn new(config: &AppConfig, catalog: Catalog) -> Result<Self, ActionRejected> {
        let mut engine = FishingEngine::new(config.sim.clone(), catalog);
        engine.enter_location(&config.location)?;
        let clock = GameClock::at_minute(config.clock.start_minute);
        engine.set_hour(clock.hour());
        Ok(Self {
            engine,
            supplies: config.supplies.clone(),
            clock,
            clock_speed: config.clock.minutes_per_real_minute,
            regen: EnergyRegen {
                config: config.energy_regen.clone(),
                elapsed: 0.0,
            },
        })
    }

    /// Run the background timers, then tick the engine.
    pub fn step(&mut self, dt: f64) -> FightTelemetry {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock.advance(dt, self.clock_speed);
        self.engine.set_hour(self.clock.hour());
        for _ in 0..self.regen.advance(dt) {
            self.supplies.regenerate(self.regen.config.amount);
        }
        self.engine.tick(dt)
    }

    pub fn execute(&mut self, command: PlayerCommand) -> Result<(), ActionRejected> {
        self.engine.execute(command, &mut self.supplies)
    }

    pub fn engine(&self) -> &FishingEngine {
        &self.engine
    }

    pub fn supplies(&self) -> &PlayerSupplies {
        &self.supplies
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }
}
