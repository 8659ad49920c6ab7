//! School movement: straight lines, bouncing off the banks, occasional turns.

use hecs::World;
use rand::Rng;

use tightline_core::components::{Swim, WaterPosition};
use tightline_core::constants::*;

use crate::school::random_heading;

/// Move every fish one step. `step_secs` counts toward heading changes.
pub fn run(world: &mut World, rng: &mut impl Rng, step_secs: f64) {
    for (_entity, (position, swim)) in world.query_mut::<(&mut WaterPosition, &mut Swim)>() {
        swim.turn_in_secs -= step_secs;
        if swim.turn_in_secs <= 0.0 {
            swim.velocity = random_heading(rng) * swim.speed;
            swim.turn_in_secs = rng.gen_range(HEADING_MIN_SECS..HEADING_MAX_SECS);
        }

        let mut next = position.0 + swim.velocity;
        if !(WATER_MIN_X..=WATER_MAX_X).contains(&next.x) {
            swim.velocity.x = -swim.velocity.x;
            next.x = next.x.clamp(WATER_MIN_X, WATER_MAX_X);
        }
        if !(WATER_MIN_Y..=WATER_MAX_Y).contains(&next.y) {
            swim.velocity.y = -swim.velocity.y;
            next.y = next.y.clamp(WATER_MIN_Y, WATER_MAX_Y);
        }
        position.0 = next;
    }
}
