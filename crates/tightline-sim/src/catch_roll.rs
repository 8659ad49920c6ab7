//! Which fish took the bait, and how big it is.
//!
//! All randomness comes from the caller's RNG so outcomes are reproducible.

use rand::Rng;

use tightline_core::catalog::Species;
use tightline_core::constants::*;
use tightline_core::enums::{FishRank, FishSex};
use tightline_core::types::FishInstance;

/// How likely a species is to be the one on the line, on a 2–20 scale.
pub fn chance_score(species: &Species, bait_id: &str, hour: u32) -> i32 {
    let mut chance = price_tier(species.price) + (species.aggression / 3.0).floor() as i32;
    if species.prefers_bait(bait_id) {
        chance += CHANCE_BAIT_BONUS;
    }
    if species.is_active_at(hour) {
        chance += CHANCE_ACTIVE_BONUS;
    } else {
        chance = (chance - CHANCE_INACTIVE_PENALTY).max(CHANCE_MIN);
    }
    chance.clamp(CHANCE_MIN, CHANCE_MAX)
}

/// Cheap fish are common.
fn price_tier(price: f64) -> i32 {
    if price <= 20.0 {
        18
    } else if price <= 50.0 {
        14
    } else if price <= 100.0 {
        8
    } else {
        4
    }
}

/// Pick a species for a d20 `roll`.
///
/// Candidates whose score meets the roll qualify, and the rarest qualifier wins.
/// If nothing qualifies, the most common candidate is taken. Ties go to the later entry.
pub fn pick_by_roll<'a>(scored: &[(&'a Species, i32)], roll: i32) -> Option<&'a Species> {
    let qualifying: Vec<&(&Species, i32)> = scored.iter().filter(|(_, c)| *c >= roll).collect();
    let picked = if qualifying.is_empty() {
        scored.iter().max_by_key(|(_, c)| *c)
    } else {
        qualifying.into_iter().rev().min_by_key(|(_, c)| *c)
    };
    picked.map(|(species, _)| *species)
}

pub fn roll_species<'a>(
    rng: &mut impl Rng,
    candidates: &[&'a Species],
    bait_id: &str,
    hour: u32,
) -> Option<&'a Species> {
    let scored: Vec<(&Species, i32)> = candidates
        .iter()
        .map(|s| (*s, chance_score(s, bait_id, hour)))
        .collect();
    let roll = rng.gen_range(1..=CHANCE_MAX);
    pick_by_roll(&scored, roll)
}

/// Roll sex, size and rank for one fish of `species` caught at `location_id`.
pub fn spawn_fish(rng: &mut impl Rng, species: &Species, location_id: &str) -> FishInstance {
    let stats = &species.stats;
    let sex = if rng.gen::<f64>() > 0.5 {
        FishSex::Male
    } else {
        FishSex::Female
    };
    let sex_multiplier = match sex {
        FishSex::Male => stats.male_multiplier,
        FishSex::Female => stats.female_multiplier,
    };
    // Squared draw favours small fish.
    let percentile = rng.gen::<f64>().powi(2);

    let (max_length, max_weight) = match species.location_size_limit.get(location_id) {
        Some(&cap) => {
            let ratio = cap / stats.max_length;
            (
                stats.max_length.min(cap),
                stats.min_weight + (stats.max_weight - stats.min_weight) * ratio.powi(3),
            )
        }
        None => (stats.max_length, stats.max_weight),
    };

    let length = round_to(
        (stats.min_length + (max_length - stats.min_length) * percentile) * sex_multiplier,
        1,
    );
    let weight = round_to(
        (stats.min_weight + (max_weight - stats.min_weight) * percentile) * sex_multiplier,
        2,
    );

    let largest = stats.max_length * stats.male_multiplier.max(stats.female_multiplier);
    let length_percentile = (length / largest * 100.0).min(100.0);

    FishInstance {
        species_id: species.id.clone(),
        sex,
        length_cm: length,
        weight_kg: weight,
        rank: FishRank::from_percentile(length_percentile),
        percentile: length_percentile.round() as u32,
    }
}

/// Small hooks cannot land trophy fish of some species. Only ever downgrades.
pub fn cap_rank(species: &Species, hook_size: i32, rank: FishRank) -> FishRank {
    match species.max_rank_by_hook_size.get(&hook_size) {
        Some(&cap) if rank > cap => cap,
        _ => rank,
    }
}

/// Everything the catch roll needs to know about the cast.
pub struct CatchContext<'a> {
    pub candidates: &'a [&'a Species],
    pub bait_id: &'a str,
    pub location_id: &'a str,
    pub hook_size: i32,
    pub hour: u32,
}

/// Fix the fish at hook-set. An attracted species skips the roll.
pub fn resolve_catch<'a>(
    rng: &mut impl Rng,
    attracted: Option<&'a Species>,
    ctx: &CatchContext<'a>,
) -> Option<(&'a Species, FishInstance)> {
    let species = match attracted {
        Some(species) => species,
        None => roll_species(rng, ctx.candidates, ctx.bait_id, ctx.hour)?,
    };
    let mut fish = spawn_fish(rng, species, ctx.location_id);
    fish.rank = cap_rank(species, ctx.hook_size, fish.rank);
    Some((species, fish))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
