//! Simulation constants and tuning parameters.

/// Largest step a single `tick` will integrate (seconds). Longer frames are truncated.
pub const MAX_STEP_SECS: f64 = 0.1;

/// Kilograms to pounds.
pub const KG_TO_LB: f64 = 2.205;

// --- Tension ---

/// Upper bound of every stress meter.
pub const TENSION_MAX: f64 = 100.0;

/// Tension the line starts at when the hook is set (middle of the safe band).
pub const TENSION_AT_HOOK_SET: f64 = 50.0;

/// Lower edge of the safe reeling band.
pub const TENSION_SAFE_LOW: f64 = 35.0;

/// Upper edge of the safe reeling band.
pub const TENSION_SAFE_HIGH: f64 = 65.0;

/// Above this the reel stalls.
pub const TENSION_DANGER_HIGH: f64 = 85.0;

/// Below this the line is slack and the fish swims away.
pub const TENSION_SLACK_LOW: f64 = 20.0;

/// Above this the line-break timer accumulates.
pub const TENSION_BREAK: f64 = 90.0;

/// Tension gained per second of pulling, before rod and weight scaling.
pub const PULL_POWER_BASE: f64 = 12.0;

/// Tension lost per second when not pulling, before fish weight is added.
pub const RELAX_RATE_BASE: f64 = 18.0;

/// Extra relax rate per kilogram of fish.
pub const RELAX_RATE_PER_KG: f64 = 0.8;

/// Fish weight (kg) at which the pull penalty reaches its full 30%.
pub const PULL_PENALTY_WEIGHT_KG: f64 = 30.0;

/// Floor of the pull weight penalty.
pub const PULL_PENALTY_FLOOR: f64 = 0.5;

/// Share of fish pressure that still reaches the line while the player eases off.
pub const RELAXED_PRESSURE_SHARE: f64 = 0.4;

// --- Danger timers ---

/// Seconds above `TENSION_BREAK` before the line snaps.
pub const HIGH_TENSION_LIMIT_SECS: f64 = 2.0;

/// High-tension timer decay multiplier outside the break zone.
pub const HIGH_TENSION_DECAY: f64 = 2.0;

/// Seconds below `TENSION_SLACK_LOW` before the fish shakes the hook.
pub const SLACK_LIMIT_SECS: f64 = 4.0;

/// Slack timer decay multiplier outside the slack zone.
pub const SLACK_DECAY: f64 = 1.0;

// --- Distance ---

/// Fish is landed at or below this distance.
pub const CAPTURE_DISTANCE: f64 = 0.3;

/// Fish escapes at `ESCAPE_DISTANCE_FACTOR × max distance`.
pub const ESCAPE_DISTANCE_FACTOR: f64 = 1.5;

/// Reel speed in the safe band, per unit of rod power.
pub const REEL_RATE_SAFE: f64 = 0.6;

/// Reel speed between the safe band and the danger band, per unit of rod power.
pub const REEL_RATE_UPPER_EDGE: f64 = 0.3;

/// Reel speed between the slack zone and the safe band, per unit of rod power.
pub const REEL_RATE_LOWER_EDGE: f64 = 0.2;

/// Distance the fish gains per second of slack, per point of fight strength.
pub const SLACK_DRIFT_PER_STRENGTH: f64 = 0.4;

/// Distance an actively fighting fish takes back per second at fight strength 5.
pub const FIGHT_PULLBACK_RATE: f64 = 0.25;

// --- Hit charge and stun ---

/// Charge needed to trigger a hit.
pub const HIT_CHARGE_MAX: f64 = 100.0;

/// Charge gained per second in the safe band.
pub const HIT_CHARGE_SAFE: f64 = 15.0;

/// Charge gained per second next to the safe band.
pub const HIT_CHARGE_EDGE: f64 = 8.0;

/// Charge gained per second while the reel is stalled.
pub const HIT_CHARGE_STALLED: f64 = 5.0;

/// Shortest stun a hit can produce (ms).
pub const STUN_MIN_MS: f64 = 500.0;

/// Longest stun a hit can produce (ms).
pub const STUN_MAX_MS: f64 = 3000.0;

/// Stun milliseconds per unit of effectiveness ratio.
pub const STUN_MS_PER_RATIO: f64 = 1500.0;

/// Ratio above which a hit counts as effective.
pub const HIT_EFFECTIVE_RATIO: f64 = 0.5;

/// Floor of the fish's resistance to a hit.
pub const HIT_RESISTANCE_FLOOR: f64 = 0.5;

// --- Fight toggling ---

/// Lowest per-second fight probability.
pub const FIGHT_PROBABILITY_MIN: f64 = 0.05;

/// Highest per-second fight probability.
pub const FIGHT_PROBABILITY_MAX: f64 = 0.9;

/// Toggle draws per second of simulated time.
pub const FIGHT_TOGGLE_RATE: f64 = 2.0;

// --- Gear mitigation ---

/// Lowest gear mitigation factor.
pub const GEAR_MITIGATION_MIN: f64 = 0.5;

/// Highest gear mitigation factor.
pub const GEAR_MITIGATION_MAX: f64 = 2.0;

/// Reference line strength (lb) for mitigation.
pub const GEAR_LINE_REFERENCE_LB: f64 = 20.0;

/// Reference reel drag (lb) for mitigation.
pub const GEAR_DRAG_REFERENCE_LB: f64 = 15.0;

// --- Casting ---

/// Energy spent per cast.
pub const CAST_ENERGY_COST: u32 = 5;

/// Rod drawn back.
pub const CAST_WINDUP_SECS: f64 = 0.3;

/// Rod swung forward.
pub const CAST_THROW_SECS: f64 = 0.3;

/// Line in flight.
pub const CAST_LINE_SECS: f64 = 0.4;

/// Bait hits the water.
pub const CAST_SPLASH_SECS: f64 = 0.4;

// --- Waiting and biting ---

/// Delay between the bait settling and the first attraction check.
pub const FIRST_ATTRACTION_DELAY_SECS: f64 = 1.0;

/// Interval between attraction checks.
pub const ATTRACTION_INTERVAL_SECS: f64 = 0.25;

/// Bite chance for an in-range fish that prefers the bait.
pub const BITE_CHANCE_PREFERRED: f64 = 0.85;

/// Bite chance for an in-range fish that does not prefer the bait.
pub const BITE_CHANCE_OTHER: f64 = 0.5;

/// Bite chance per second of waiting when no school is in the water.
pub const AMBIENT_BITE_RATE: f64 = 0.5;

/// Probability that a bite starts with a nibble.
pub const NIBBLE_FIRST_CHANCE: f64 = 0.6;

/// Shortest nibble (seconds).
pub const NIBBLE_MIN_SECS: f64 = 0.4;

/// Longest nibble (seconds).
pub const NIBBLE_MAX_SECS: f64 = 1.0;

/// How long a fish holds the bait before letting go.
pub const BITE_WINDOW_SECS: f64 = 1.5;

/// Attraction radius for baits that do not declare one (water units × 10).
pub const DEFAULT_ATTRACTION_RADIUS: f64 = 50.0;

/// Bait radius units per water unit.
pub const ATTRACTION_RADIUS_SCALE: f64 = 10.0;

// --- Water and school ---

/// Smallest school spawned at a location.
pub const SCHOOL_MIN: usize = 5;

/// Largest school spawned at a location.
pub const SCHOOL_MAX: usize = 10;

/// Water bounds (percent of the scene).
pub const WATER_MIN_X: f64 = 10.0;
pub const WATER_MAX_X: f64 = 90.0;
pub const WATER_MIN_Y: f64 = 30.0;
pub const WATER_MAX_Y: f64 = 80.0;

/// Where the bait lands when no target is given.
pub const DEFAULT_CAST_X: f64 = 50.0;
pub const DEFAULT_CAST_Y: f64 = 55.0;

/// Swim speed per attraction step at aggression 10.
pub const SWIM_SPEED_FACTOR: f64 = 0.5;

/// Shortest time a fish keeps its heading.
pub const HEADING_MIN_SECS: f64 = 2.0;

/// Longest time a fish keeps its heading.
pub const HEADING_MAX_SECS: f64 = 5.0;

// --- Catch roll ---

/// Lowest catch chance score.
pub const CHANCE_MIN: i32 = 2;

/// Highest catch chance score, and the die size.
pub const CHANCE_MAX: i32 = 20;

/// Bonus when the species prefers the selected bait.
pub const CHANCE_BAIT_BONUS: i32 = 5;

/// Bonus when the species is active at the current hour.
pub const CHANCE_ACTIVE_BONUS: i32 = 5;

/// Penalty when the species is inactive at the current hour.
pub const CHANCE_INACTIVE_PENALTY: i32 = 2;

// --- Rank thresholds (length percentile) ---

pub const RANK_S_PERCENTILE: f64 = 95.0;
pub const RANK_A_PERCENTILE: f64 = 80.0;
pub const RANK_B_PERCENTILE: f64 = 50.0;

// --- Player supplies and clock ---

/// Energy cap.
pub const ENERGY_MAX: u32 = 100;

/// Seconds between energy regeneration ticks.
pub const ENERGY_REGEN_INTERVAL_SECS: f64 = 3.0;

/// Energy restored per regeneration tick.
pub const ENERGY_REGEN_AMOUNT: u32 = 1;

/// Game clock start (minutes after midnight, 08:00).
pub const CLOCK_START_MINUTE: f64 = 480.0;

/// Game minutes that pass per real minute.
pub const CLOCK_MINUTES_PER_REAL_MINUTE: f64 = 12.0;

/// Minutes in a game day.
pub const MINUTES_PER_DAY: f64 = 1440.0;
