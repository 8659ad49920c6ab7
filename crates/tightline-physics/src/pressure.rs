//! How hard a fish pulls, and how much of it the tackle absorbs.

use rand::Rng;

use tightline_core::constants::*;
use tightline_core::types::HitOutcome;

/// Raw struggle pressure of a fish.
pub fn base_pressure(weight_kg: f64, aggression: f64, fight_strength: f64) -> f64 {
    weight_kg.max(0.0).sqrt()
        * (1.0 + aggression / 10.0 * 0.5)
        * (1.0 + fight_strength / 10.0 * 0.8)
}

/// Divisor applied to fish pressure by the equipped rod, line and reel.
pub fn gear_mitigation(rod_power: f64, line_test_lb: f64, reel_drag_lb: f64) -> f64 {
    let raw = rod_power * 0.4
        + (line_test_lb / GEAR_LINE_REFERENCE_LB) * 0.3
        + (reel_drag_lb / GEAR_DRAG_REFERENCE_LB) * 0.3;
    raw.clamp(GEAR_MITIGATION_MIN, GEAR_MITIGATION_MAX)
}

pub fn effective_pressure(base: f64, mitigation: f64) -> f64 {
    base / mitigation
}

/// Per-second chance that the fish flips between fighting and resting.
pub fn fight_probability(aggression: f64, fight_strength: f64, tension: f64, pulling: bool) -> f64 {
    let mut p = aggression / 10.0 * 0.4;
    p += ((tension - 50.0) / 100.0).max(0.0);
    p += if pulling { 0.2 } else { -0.1 };
    p += fight_strength / 10.0 * 0.2;
    p.clamp(FIGHT_PROBABILITY_MIN, FIGHT_PROBABILITY_MAX)
}

/// Chance of a toggle within one step of `dt` seconds, clamped to a valid probability.
pub fn toggle_chance(probability: f64, dt: f64) -> f64 {
    (probability * dt * FIGHT_TOGGLE_RATE).clamp(0.0, 1.0)
}

/// Uniform draw in `[0, 1)` compared against [`toggle_chance`].
pub fn draw_toggle(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Stun produced by a hit of `hit_power` (0–100).
pub fn hit_effectiveness(
    hit_power: f64,
    weight_kg: f64,
    fight_strength: f64,
    rod_power: f64,
) -> HitOutcome {
    let effectiveness = (hit_power / 100.0) * rod_power;
    let resistance = weight_kg.max(0.0).sqrt() * (fight_strength / 10.0);
    let ratio = effectiveness / resistance.max(HIT_RESISTANCE_FLOOR);
    HitOutcome {
        stun_duration_ms: (ratio * STUN_MS_PER_RATIO).clamp(STUN_MIN_MS, STUN_MAX_MS),
        was_effective: ratio > HIT_EFFECTIVE_RATIO,
    }
}
