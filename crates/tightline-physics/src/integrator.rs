//! Per-tick tension and distance integration for a hooked fish.
//!
//! `step` runs the whole update in a fixed order. The individual stages
//! are public so a caller can hold one quantity steady and drive the rest.

use tightline_core::catalog::{Loadout, Species};
use tightline_core::constants::*;
use tightline_core::error::HitError;
use tightline_core::types::HitOutcome;

use crate::bands::{charge_rate, classify, distance_rate};
use crate::pressure::{
    base_pressure, effective_pressure, fight_probability, gear_mitigation, hit_effectiveness,
    toggle_chance,
};

/// Fish and tackle numbers fixed at hook-set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FightProfile {
    pub rod_power: f64,
    pub line_test_lb: f64,
    pub reel_drag_lb: f64,
    pub rod_max_line_lb: f64,
    pub max_distance: f64,
    pub weight_kg: f64,
    pub aggression: f64,
    pub fight_strength: f64,
}

impl FightProfile {
    pub fn new(loadout: &Loadout, species: &Species, weight_kg: f64) -> Self {
        Self {
            rod_power: loadout.rod_power(),
            line_test_lb: loadout.line.test_weight_lb,
            reel_drag_lb: loadout.reel.max_drag_lb,
            rod_max_line_lb: loadout.rod.max_line_weight_lb,
            max_distance: loadout.max_distance(),
            weight_kg,
            aggression: species.aggression,
            fight_strength: species.fight_strength,
        }
    }

    pub fn effective_pressure(&self) -> f64 {
        effective_pressure(
            base_pressure(self.weight_kg, self.aggression, self.fight_strength),
            gear_mitigation(self.rod_power, self.line_test_lb, self.reel_drag_lb),
        )
    }

    /// Heavy fish are harder to pull against.
    pub fn weight_penalty(&self) -> f64 {
        (1.0 - (self.weight_kg / PULL_PENALTY_WEIGHT_KG) * 0.3).max(PULL_PENALTY_FLOOR)
    }

    pub fn pull_power(&self) -> f64 {
        PULL_POWER_BASE * self.rod_power * self.weight_penalty()
    }

    pub fn relax_rate(&self) -> f64 {
        RELAX_RATE_BASE + self.weight_kg * RELAX_RATE_PER_KG
    }

    /// Distance at which the fish is gone.
    pub fn escape_distance(&self) -> f64 {
        self.max_distance * ESCAPE_DISTANCE_FACTOR
    }

    fn load_lb(&self) -> f64 {
        self.weight_kg * KG_TO_LB
    }
}

/// The mutable meters of a fight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FightMeters {
    pub tension: f64,
    pub line_tension: f64,
    pub rod_tension: f64,
    pub distance: f64,
    pub hit_charge: f64,
    pub is_fighting: bool,
    pub is_stunned: bool,
    pub stun_time_left: f64,
    pub high_tension_timer: f64,
    pub slack_timer: f64,
}

impl FightMeters {
    /// Fresh meters: mid-band tension, fish at full range and already fighting.
    pub fn at_hook_set(profile: &FightProfile) -> Self {
        let mut meters = Self {
            tension: TENSION_AT_HOOK_SET,
            line_tension: 0.0,
            rod_tension: 0.0,
            distance: profile.max_distance,
            hit_charge: 0.0,
            is_fighting: true,
            is_stunned: false,
            stun_time_left: 0.0,
            high_tension_timer: 0.0,
            slack_timer: 0.0,
        };
        update_stress_meters(&mut meters, profile, false);
        meters
    }
}

/// Inputs sampled for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    pub dt: f64,
    pub pulling: bool,
    /// Uniform draw in `[0, 1)` for the fight toggle. `1.0` never toggles.
    pub toggle_draw: f64,
}

/// How a fight ended, from the physics point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Landed,
    LineBroken,
    Escaped,
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub terminal: Option<Terminal>,
    pub toggled: bool,
    pub stun_expired: bool,
}

/// Advance the fight by one step.
pub fn step(meters: &mut FightMeters, profile: &FightProfile, input: &StepInput) -> StepReport {
    let mut report = StepReport {
        stun_expired: tick_stun(meters, input.dt),
        ..Default::default()
    };
    report.toggled = roll_fight_toggle(meters, profile, input);
    update_tension(meters, profile, input.pulling, input.dt);
    update_stress_meters(meters, profile, input.pulling);
    advance_distance(meters, profile, input.dt);
    report.terminal = tick_danger_timers(meters, input.dt).or_else(|| check_distance(meters, profile));
    report
}

/// Count the stun down. Returns true on the step it wears off.
pub fn tick_stun(meters: &mut FightMeters, dt: f64) -> bool {
    if !meters.is_stunned {
        return false;
    }
    meters.stun_time_left -= dt;
    if meters.stun_time_left <= 0.0 {
        meters.is_stunned = false;
        meters.stun_time_left = 0.0;
        return true;
    }
    false
}

/// Possibly flip `is_fighting`. A stunned fish never starts fighting.
pub fn roll_fight_toggle(meters: &mut FightMeters, profile: &FightProfile, input: &StepInput) -> bool {
    if meters.is_stunned {
        return false;
    }
    let probability = fight_probability(
        profile.aggression,
        profile.fight_strength,
        meters.tension,
        input.pulling,
    );
    if input.toggle_draw < toggle_chance(probability, input.dt) {
        meters.is_fighting = !meters.is_fighting;
        return true;
    }
    false
}

pub fn update_tension(meters: &mut FightMeters, profile: &FightProfile, pulling: bool, dt: f64) {
    let fighting = meters.is_fighting && !meters.is_stunned;
    let pressure = profile.effective_pressure();
    let mut delta = 0.0;
    if pulling {
        delta += profile.pull_power() * dt;
        if fighting {
            delta += pressure * (1.0 + profile.aggression / 10.0 * 1.5) * dt;
        }
    } else {
        delta -= profile.relax_rate() * dt;
        if fighting {
            delta += pressure * RELAXED_PRESSURE_SHARE * dt;
        }
    }
    meters.tension = (meters.tension + delta).clamp(0.0, TENSION_MAX);
}

/// Recompute line and rod stress from the current tension.
pub fn update_stress_meters(meters: &mut FightMeters, profile: &FightProfile, pulling: bool) {
    let line_load = profile.load_lb() / profile.line_test_lb;
    let rod_load = profile.load_lb() / profile.rod_max_line_lb;
    let (line, rod) = if pulling {
        (
            meters.tension * 0.4 + line_load * 60.0,
            meters.tension * 0.5 + rod_load * 50.0,
        )
    } else {
        (
            meters.tension * 0.3 + line_load * 30.0,
            meters.tension * 0.2 + rod_load * 20.0,
        )
    };
    meters.line_tension = line.clamp(0.0, TENSION_MAX);
    meters.rod_tension = rod.clamp(0.0, TENSION_MAX);
}

/// Reel in (or lose line) according to the tension band, and build hit charge.
pub fn advance_distance(meters: &mut FightMeters, profile: &FightProfile, dt: f64) {
    let band = classify(meters.tension);
    let mut delta = distance_rate(band, profile.rod_power, profile.fight_strength) * dt;
    meters.hit_charge = (meters.hit_charge + charge_rate(band) * dt).min(HIT_CHARGE_MAX);
    if meters.is_fighting && !meters.is_stunned {
        delta += FIGHT_PULLBACK_RATE * (profile.fight_strength / 5.0) * dt;
    }
    meters.distance = (meters.distance + delta).clamp(0.0, profile.escape_distance());
}

/// Break and slack timers. The break timer is checked first.
pub fn tick_danger_timers(meters: &mut FightMeters, dt: f64) -> Option<Terminal> {
    if meters.tension > TENSION_BREAK {
        meters.high_tension_timer += dt;
        if meters.high_tension_timer > HIGH_TENSION_LIMIT_SECS {
            return Some(Terminal::LineBroken);
        }
    } else {
        meters.high_tension_timer = (meters.high_tension_timer - dt * HIGH_TENSION_DECAY).max(0.0);
    }

    if meters.tension < TENSION_SLACK_LOW {
        meters.slack_timer += dt;
        if meters.slack_timer > SLACK_LIMIT_SECS {
            return Some(Terminal::Escaped);
        }
    } else {
        meters.slack_timer = (meters.slack_timer - dt * SLACK_DECAY).max(0.0);
    }
    None
}

pub fn check_distance(meters: &FightMeters, profile: &FightProfile) -> Option<Terminal> {
    if meters.distance <= CAPTURE_DISTANCE {
        Some(Terminal::Landed)
    } else if meters.distance >= profile.escape_distance() {
        Some(Terminal::Escaped)
    } else {
        None
    }
}

/// Spend a full charge to stun the fish.
pub fn trigger_hit(meters: &mut FightMeters, profile: &FightProfile) -> Result<HitOutcome, HitError> {
    if meters.hit_charge < HIT_CHARGE_MAX {
        return Err(HitError::NotCharged {
            charge: meters.hit_charge,
        });
    }
    let outcome = hit_effectiveness(
        HIT_CHARGE_MAX,
        profile.weight_kg,
        profile.fight_strength,
        profile.rod_power,
    );
    meters.hit_charge = 0.0;
    meters.is_stunned = true;
    meters.is_fighting = false;
    meters.stun_time_left = outcome.stun_secs();
    Ok(outcome)
}
