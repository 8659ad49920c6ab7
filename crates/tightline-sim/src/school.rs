//! Spawn factories for the school of fish swimming around the bait.

use glam::DVec2;
use hecs::World;
use rand::Rng;

use tightline_core::catalog::Species;
use tightline_core::components::{Swim, Swimmer, WaterPosition};
use tightline_core::constants::*;

/// Replace the school with `min..=max` fish drawn uniformly from `species`.
/// Returns the number spawned (zero when the location has no species).
pub fn respawn_school(
    world: &mut World,
    rng: &mut impl Rng,
    species: &[&Species],
    min: usize,
    max: usize,
) -> usize {
    clear_school(world);
    if species.is_empty() {
        return 0;
    }
    let count = rng.gen_range(min..=max.max(min));
    for _ in 0..count {
        let pick = species[rng.gen_range(0..species.len())];
        let position = DVec2::new(
            rng.gen_range(WATER_MIN_X..WATER_MAX_X),
            rng.gen_range(WATER_MIN_Y..WATER_MAX_Y),
        );
        spawn_swimmer(world, rng, pick, position);
    }
    count
}

/// Spawn one fish heading in a random direction.
pub fn spawn_swimmer(
    world: &mut World,
    rng: &mut impl Rng,
    species: &Species,
    position: DVec2,
) -> hecs::Entity {
    let speed = species.aggression / 10.0 * SWIM_SPEED_FACTOR;
    world.spawn((
        Swimmer {
            species_id: species.id.clone(),
        },
        WaterPosition(position),
        Swim {
            velocity: random_heading(rng) * speed,
            speed,
            turn_in_secs: rng.gen_range(HEADING_MIN_SECS..HEADING_MAX_SECS),
        },
    ))
}

pub fn clear_school(world: &mut World) {
    let fish: Vec<hecs::Entity> = world
        .query::<&Swimmer>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in fish {
        let _ = world.despawn(entity);
    }
}

pub fn school_size(world: &World) -> usize {
    world.query::<&Swimmer>().iter().count()
}

pub(crate) fn random_heading(rng: &mut impl Rng) -> DVec2 {
    DVec2::from_angle(rng.gen_range(0.0..std::f64::consts::TAU))
}
