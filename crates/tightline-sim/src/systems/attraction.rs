//! Attraction check run periodically while the bait sits in the water.

use glam::DVec2;
use hecs::World;
use rand::Rng;

use tightline_core::catalog::{Bait, Catalog};
use tightline_core::components::{Swimmer, WaterPosition};
use tightline_core::constants::*;

use crate::phase::{Attracted, Bite};
use crate::school::school_size;
use crate::systems::swimming;

/// Where the bait landed and what is on the hook.
pub struct BaitInWater<'a> {
    pub point: DVec2,
    pub bait: &'a Bait,
    /// Whether any species lives here at all.
    pub location_has_fish: bool,
}

/// Move the school one step, then see whether anything bites.
///
/// The first fish in range that accepts the bait bites. With no school in
/// the water a flat ambient chance applies instead.
pub fn check(
    world: &mut World,
    rng: &mut impl Rng,
    catalog: &Catalog,
    bait: &BaitInWater,
) -> Option<Bite> {
    if school_size(world) == 0 {
        let ambient = AMBIENT_BITE_RATE * ATTRACTION_INTERVAL_SECS;
        return (bait.location_has_fish && rng.gen_bool(ambient)).then_some(Bite { attracted: None });
    }

    swimming::run(world, rng, ATTRACTION_INTERVAL_SECS);

    let radius = bait.bait.attraction_radius() / ATTRACTION_RADIUS_SCALE;
    for (entity, (swimmer, position)) in world.query::<(&Swimmer, &WaterPosition)>().iter() {
        if position.0.distance(bait.point) > radius {
            continue;
        }
        let prefers = catalog
            .species(&swimmer.species_id)
            .map(|s| s.prefers_bait(&bait.bait.id))
            .unwrap_or(false);
        let chance = if prefers {
            BITE_CHANCE_PREFERRED
        } else {
            BITE_CHANCE_OTHER
        };
        if rng.gen::<f64>() < chance {
            return Some(Bite {
                attracted: Some(Attracted {
                    entity,
                    species_id: swimmer.species_id.clone(),
                }),
            });
        }
    }
    None
}

/// Clamp a requested landing point into the water.
pub fn cast_point(target: Option<DVec2>) -> DVec2 {
    let point = target.unwrap_or(DVec2::new(DEFAULT_CAST_X, DEFAULT_CAST_Y));
    DVec2::new(
        point.x.clamp(WATER_MIN_X, WATER_MAX_X),
        point.y.clamp(WATER_MIN_Y, WATER_MAX_Y),
    )
}
