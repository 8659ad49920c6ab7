//! Tests for the fishing engine, state machine, attraction and catch resolution.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tightline_core::catalog::{Catalog, Species};
use tightline_core::commands::{CastRequest, PlayerCommand};
use tightline_core::constants::*;
use tightline_core::enums::*;
use tightline_core::error::{ActionRejected, CastError, CatalogError, HitError, HookError};
use tightline_core::events::{FightOutcome, FishingEvent};
use tightline_core::state::FightTelemetry;
use tightline_core::supplies::{PlayerSupplies, SupplyLedger};
use tightline_core::types::ActiveHours;

use crate::catch_roll::*;
use crate::countdown::Countdown;
use crate::engine::{FishingEngine, SchoolConfig, SimConfig};
use crate::phase::{Bite, FightPhase};
use crate::school;

const DT: f64 = 0.1;

fn catalog() -> Catalog {
    Catalog::embedded().unwrap()
}

fn engine_with(seed: u64, school_enabled: bool) -> FishingEngine {
    let config = SimConfig {
        seed,
        school: SchoolConfig {
            enabled: school_enabled,
            ..Default::default()
        },
        ..Default::default()
    };
    FishingEngine::new(config, catalog())
}

fn request(location_id: &str, rod_id: &str, bait_id: &str) -> CastRequest {
    let catalog = catalog();
    CastRequest {
        loadout: catalog
            .loadout(rod_id, "mono_medium", "spinning_basic", "hook_6")
            .unwrap(),
        bait: catalog.bait(bait_id).unwrap().clone(),
        location: catalog.location(location_id).unwrap().clone(),
        target: None,
    }
}

fn pond_worm() -> CastRequest {
    request("pond", "fiber_float", "worm")
}

fn supplies() -> PlayerSupplies {
    PlayerSupplies::default().with_bait("worm", 10)
}

/// Tick until `state` is reached. Returns the telemetry of every tick.
fn tick_until(engine: &mut FishingEngine, state: GameStateKind, max_ticks: usize) -> Vec<FightTelemetry> {
    let mut out = Vec::new();
    for _ in 0..max_ticks {
        let t = engine.tick(DT);
        let done = t.state == state;
        out.push(t);
        if done {
            return out;
        }
    }
    panic!("never reached {state:?}");
}

fn events(telemetry: &[FightTelemetry]) -> Vec<FishingEvent> {
    telemetry.iter().flat_map(|t| t.events.clone()).collect()
}

/// Cast at the pond and wait for the bait to settle.
fn waiting_engine(seed: u64) -> (FishingEngine, PlayerSupplies) {
    let mut engine = engine_with(seed, false);
    let mut supplies = supplies();
    engine.start_cast(pond_worm(), &mut supplies).unwrap();
    tick_until(&mut engine, GameStateKind::Waiting, 20);
    (engine, supplies)
}

fn reeling_engine(seed: u64) -> FishingEngine {
    let (mut engine, _) = waiting_engine(seed);
    engine.force_phase(FightPhase::Biting {
        window: Countdown::new(BITE_WINDOW_SECS),
        bite: Bite { attracted: None },
    });
    assert_eq!(engine.set_hook_intent(), Ok(GameStateKind::Reeling));
    engine
}

/// Simple scripted angler used by the determinism tests.
fn drive(engine: &mut FishingEngine, supplies: &mut PlayerSupplies, t: &FightTelemetry) {
    match t.state {
        GameStateKind::Idle => {
            let _ = engine.start_cast(pond_worm(), supplies);
        }
        GameStateKind::Biting => {
            let _ = engine.set_hook_intent();
        }
        GameStateKind::Reeling => {
            if let Some(fight) = &t.fight {
                engine.set_pull_input(fight.tension < 50.0);
                if fight.hit_charge >= HIT_CHARGE_MAX {
                    engine.trigger_hit().unwrap();
                }
            }
        }
        GameStateKind::Caught | GameStateKind::Lost => engine.acknowledge().unwrap(),
        _ => {}
    }
}

fn play(seed: u64, school_enabled: bool, ticks: usize) -> Vec<String> {
    let mut engine = engine_with(seed, school_enabled);
    engine.enter_location("pond").unwrap();
    let mut supplies = supplies().with_bait("worm", 1000);
    let mut out = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let t = engine.tick(1.0 / 60.0);
        drive(&mut engine, &mut supplies, &t);
        supplies.regenerate(1);
        out.push(serde_json::to_string(&t).unwrap());
    }
    out
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let a = play(12345, true, 6000);
    let b = play(12345, true, 6000);
    for (i, (ja, jb)) in a.iter().zip(&b).enumerate() {
        assert_eq!(ja, jb, "Telemetry diverged at tick {i} with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let a = play(111, false, 6000);
    let b = play(222, false, 6000);
    assert_ne!(a, b, "Different seeds should produce different sessions");
}

// ---- Casting ----

#[test]
fn test_cast_spends_energy_and_bait() {
    let mut engine = engine_with(1, true);
    let mut supplies = supplies();
    engine.start_cast(pond_worm(), &mut supplies).unwrap();
    assert_eq!(engine.state(), GameStateKind::Casting);
    assert_eq!(supplies.energy(), ENERGY_MAX - CAST_ENERGY_COST);
    assert_eq!(supplies.bait_count("worm"), 9);
    assert!(school::school_size(engine.world()) >= SCHOOL_MIN);
}

#[test]
fn test_unlimited_bait_not_consumed() {
    let mut engine = engine_with(1, true);
    let mut supplies = PlayerSupplies::default();
    engine
        .start_cast(request("river", "pro_baitcast", "lure"), &mut supplies)
        .unwrap();
    assert_eq!(supplies.bait_count("lure"), 0);
    assert_eq!(engine.state(), GameStateKind::Casting);
}

#[test]
fn test_cast_rejections_leave_state_untouched() {
    let mut engine = engine_with(1, true);

    let mut empty = PlayerSupplies::default();
    assert_eq!(
        engine.start_cast(pond_worm(), &mut empty),
        Err(CastError::NoBait {
            bait_id: "worm".into()
        })
    );

    let mut tired = PlayerSupplies {
        energy: 4,
        ..supplies()
    };
    assert_eq!(
        engine.start_cast(pond_worm(), &mut tired),
        Err(CastError::NoEnergy {
            available: 4,
            required: CAST_ENERGY_COST
        })
    );
    assert_eq!(tired.bait_count("worm"), 10, "Rejected cast must not consume bait");

    let mut full = supplies();
    assert_eq!(
        engine.start_cast(request("creek", "carbon_baitcast", "worm"), &mut full),
        Err(CastError::IncompatibleGearForLocation {
            location_id: "creek".into()
        })
    );
    assert_eq!(full.energy(), ENERGY_MAX);
    assert_eq!(engine.state(), GameStateKind::Idle);

    engine.start_cast(pond_worm(), &mut full).unwrap();
    assert_eq!(
        engine.start_cast(pond_worm(), &mut full),
        Err(CastError::NotIdle {
            state: GameStateKind::Casting
        })
    );
}

#[test]
fn test_casting_stages_then_waiting() {
    let mut engine = engine_with(1, true);
    let mut supplies = supplies();
    engine.start_cast(pond_worm(), &mut supplies).unwrap();

    let ticks = tick_until(&mut engine, GameStateKind::Waiting, 20);
    assert_eq!(ticks.len(), 14, "Cast sequence lasts 1.4s");
    assert_eq!(ticks[0].casting_stage, Some(CastingStage::Windup));
    assert_eq!(ticks[2].casting_stage, Some(CastingStage::Cast));
    assert_eq!(ticks[5].casting_stage, Some(CastingStage::Line));
    assert_eq!(ticks[9].casting_stage, Some(CastingStage::Splash));
    assert!(events(&ticks).contains(&FishingEvent::LineSettled));
}

#[test]
fn test_tick_step_is_capped() {
    let mut engine = engine_with(1, true);
    let t = engine.tick(5.0);
    assert!((t.time.elapsed_secs - MAX_STEP_SECS).abs() < 1e-12);
    assert_eq!(t.time.tick, 1);
}

#[test]
fn test_non_finite_step_is_ignored() {
    let mut engine = reeling_engine(5);
    let before = engine.time().elapsed_secs;
    for dt in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let t = engine.tick(dt);
        assert_eq!(t.state, GameStateKind::Reeling);
        assert_eq!(t.time.elapsed_secs, before, "{dt} must not advance time");
        let fight = t.fight.unwrap();
        assert_eq!(fight.tension, TENSION_AT_HOOK_SET);
        assert!(fight.distance.is_finite());
    }

    for _ in 0..100 {
        let t = engine.tick(DT);
        let Some(fight) = t.fight else { break };
        assert!(fight.tension.is_finite() && fight.distance.is_finite());
        assert!((0.0..=TENSION_MAX).contains(&fight.tension));
        engine.set_pull_input(fight.tension < 50.0);
    }
    assert!(engine.time().elapsed_secs.is_finite());
}

// ---- Waiting and biting ----

#[test]
fn test_ambient_bite_without_school() {
    let (mut engine, _) = waiting_engine(7);
    let ticks = tick_until(&mut engine, GameStateKind::Biting, 3000);
    let evs = events(&ticks);
    assert!(evs.contains(&FishingEvent::Bite { species_id: None }));
}

#[test]
fn test_school_fish_at_bait_bites_and_leaves_school() {
    let (mut engine, _) = waiting_engine(3);
    let swimmer = engine.spawn_test_swimmer("tilapia", DVec2::new(DEFAULT_CAST_X, DEFAULT_CAST_Y));

    let ticks = tick_until(&mut engine, GameStateKind::Biting, 200);
    assert!(events(&ticks).contains(&FishingEvent::Bite {
        species_id: Some("tilapia".into())
    }));

    engine.set_hook_intent().unwrap();
    let t = engine.tick(DT);
    let fight = t.fight.expect("fight view while reeling");
    assert_eq!(fight.fish.species_id, "tilapia");
    assert!(!engine.world().contains(swimmer), "Hooked fish leaves the school");
}

#[test]
fn test_fish_out_of_range_ignores_bait() {
    let (mut engine, _) = waiting_engine(3);
    engine.spawn_test_swimmer("tilapia", DVec2::new(WATER_MIN_X, WATER_MAX_Y));
    for _ in 0..300 {
        assert_eq!(engine.tick(DT).state, GameStateKind::Waiting);
    }
}

#[test]
fn test_bite_window_expires_to_idle() {
    let (mut engine, _) = waiting_engine(1);
    engine.force_phase(FightPhase::Biting {
        window: Countdown::new(BITE_WINDOW_SECS),
        bite: Bite { attracted: None },
    });
    for _ in 0..14 {
        assert_eq!(engine.tick(DT).state, GameStateKind::Biting);
    }
    let t = engine.tick(DT);
    assert_eq!(t.state, GameStateKind::Idle);
    assert!(t.events.contains(&FishingEvent::BiteMissed));
}

#[test]
fn test_nibble_turns_into_bite() {
    let (mut engine, _) = waiting_engine(1);
    engine.force_phase(FightPhase::Nibbling {
        until_bite: Countdown::new(0.5),
        bite: Bite { attracted: None },
    });
    let ticks = tick_until(&mut engine, GameStateKind::Biting, 10);
    assert_eq!(ticks.len(), 5);
}

#[test]
fn test_early_strike_loses_fish() {
    let (mut engine, _) = waiting_engine(1);
    engine.force_phase(FightPhase::Nibbling {
        until_bite: Countdown::new(0.8),
        bite: Bite { attracted: None },
    });
    assert_eq!(engine.set_hook_intent(), Ok(GameStateKind::Lost));

    let t = engine.tick(DT);
    assert_eq!(t.state, GameStateKind::Lost);
    assert!(t.events.contains(&FishingEvent::Outcome {
        outcome: FightOutcome::StrikeTooEarly
    }));
    assert!(!t.events.iter().any(|e| matches!(e, FishingEvent::Hooked { .. })));
    assert!(t.landed.is_none() && t.fight.is_none());
}

#[test]
fn test_hook_outside_bite_is_rejected() {
    let (mut engine, _) = waiting_engine(1);
    assert_eq!(
        engine.set_hook_intent(),
        Err(HookError::NothingOnTheLine {
            state: GameStateKind::Waiting
        })
    );
    assert_eq!(engine.state(), GameStateKind::Waiting);
}

// ---- Cancellation ----

#[test]
fn test_abandon_cancels_pending_timers() {
    let (mut engine, mut supplies) = waiting_engine(7);
    engine.abandon().unwrap();
    let mut all = Vec::new();
    for _ in 0..500 {
        let t = engine.tick(DT);
        assert_eq!(t.state, GameStateKind::Idle);
        all.push(t);
    }
    let evs = events(&all);
    assert!(!evs
        .iter()
        .any(|e| matches!(e, FishingEvent::Nibble { .. } | FishingEvent::Bite { .. })));

    // A fresh cast starts from the beginning
    engine.start_cast(pond_worm(), &mut supplies).unwrap();
    let ticks = tick_until(&mut engine, GameStateKind::Waiting, 20);
    assert_eq!(ticks.len(), 14);
}

#[test]
fn test_travel_refused_during_cast_or_fight() {
    let mut engine = reeling_engine(5);
    engine.tick(DT);
    assert_eq!(
        engine.enter_location("river"),
        Err(ActionRejected::WrongState {
            action: "travel",
            state: GameStateKind::Reeling
        })
    );
    let t = engine.tick(DT);
    assert_eq!(t.state, GameStateKind::Reeling, "The fight goes on");
    assert!(t.fight.is_some());

    let (mut waiting, _) = waiting_engine(5);
    assert!(waiting.enter_location("river").is_err());
    assert_eq!(waiting.state(), GameStateKind::Waiting);
}

#[test]
fn test_travel_after_result_or_when_idle() {
    let mut engine = reeling_engine(4);
    engine.session_mut().unwrap().meters.tension = 100.0;
    engine.set_pull_input(true);
    tick_until(&mut engine, GameStateKind::Lost, 40);

    engine.enter_location("river").unwrap();
    let t = engine.tick(DT);
    assert_eq!(t.state, GameStateKind::Idle);
    assert!(t.events.is_empty(), "The outcome was already reported");

    assert_eq!(
        engine.enter_location("ocean"),
        Err(ActionRejected::Catalog(CatalogError::UnknownLocation("ocean".into())))
    );
}

#[test]
fn test_abandon_not_allowed_while_reeling() {
    let mut engine = reeling_engine(1);
    assert_eq!(
        engine.abandon(),
        Err(ActionRejected::WrongState {
            action: "abandon",
            state: GameStateKind::Reeling
        })
    );
    assert_eq!(
        engine.execute(PlayerCommand::Acknowledge, &mut supplies()),
        Err(ActionRejected::WrongState {
            action: "acknowledge",
            state: GameStateKind::Reeling
        })
    );
}

// ---- Fight ----

#[test]
fn test_hook_set_initialises_session() {
    let mut engine = reeling_engine(5);
    let t = engine.tick(0.0);
    let fight = t.fight.unwrap();
    assert_eq!(fight.tension, TENSION_AT_HOOK_SET);
    assert_eq!(fight.max_distance, 20.0, "Fiber float rod range");
    assert_eq!(fight.distance, 20.0);
    assert_eq!(fight.hit_charge, 0.0);
    assert_eq!(fight.high_tension_secs, 0.0);
    assert_eq!(fight.slack_secs, 0.0);
}

#[test]
fn test_hit_rejections() {
    let mut engine = engine_with(1, true);
    assert_eq!(engine.trigger_hit(), Err(HitError::NotReeling));

    let mut engine = reeling_engine(1);
    assert_eq!(
        engine.trigger_hit(),
        Err(HitError::NotCharged { charge: 0.0 })
    );
}

#[test]
fn test_stun_keeps_fish_from_fighting() {
    let mut engine = reeling_engine(9);
    engine.session_mut().unwrap().meters.hit_charge = HIT_CHARGE_MAX;
    let outcome = engine.trigger_hit().unwrap();
    assert!(outcome.stun_secs() >= STUN_MIN_MS / 1000.0);

    let mut saw_expiry = false;
    for _ in 0..100 {
        let t = engine.tick(DT);
        let fight = t.fight.expect("still reeling");
        if fight.is_stunned {
            assert!(!fight.is_fighting, "Stunned fish cannot fight");
        }
        if t.events.contains(&FishingEvent::StunExpired) {
            saw_expiry = true;
            break;
        }
        engine.set_pull_input(fight.tension < 50.0);
    }
    assert!(saw_expiry);
}

#[test]
fn test_landing_a_fish() {
    let mut engine = reeling_engine(2);
    {
        let session = engine.session_mut().unwrap();
        session.meters.distance = 0.35;
        session.meters.is_fighting = false;
        session.meters.is_stunned = true;
        session.meters.stun_time_left = 5.0;
    }
    engine.set_pull_input(true);
    let t = engine.tick(DT);
    assert_eq!(t.state, GameStateKind::Caught);
    let landed = t.landed.clone().unwrap();
    assert!(t.events.contains(&FishingEvent::Outcome {
        outcome: FightOutcome::Caught { fish: landed }
    }));

    engine.acknowledge().unwrap();
    assert_eq!(engine.state(), GameStateKind::Idle);
}

#[test]
fn test_line_breaks_under_sustained_tension() {
    let mut engine = reeling_engine(4);
    engine.session_mut().unwrap().meters.tension = 100.0;
    engine.set_pull_input(true);

    let mut outcome = None;
    for _ in 0..40 {
        let t = engine.tick(DT);
        if let Some(FishingEvent::Outcome { outcome: o }) = t.events.last() {
            outcome = Some(o.clone());
            break;
        }
    }
    assert_eq!(outcome, Some(FightOutcome::LineBroken));
    assert_eq!(engine.state(), GameStateKind::Lost);
}

#[test]
fn test_outcome_emitted_once() {
    let out = play(77, false, 20_000);
    let outcomes = out.iter().filter(|j| j.contains("\"Outcome\"")).count();
    let hooked = out.iter().filter(|j| j.contains("\"Hooked\"")).count();
    assert!(hooked > 0, "Scripted angler should hook something");
    assert!(
        outcomes <= hooked && outcomes + 1 >= hooked,
        "{outcomes} outcomes for {hooked} hooked fish"
    );
}

// ---- Catch resolution ----

fn test_species(id: &str, price: f64, aggression: f64) -> Species {
    let mut species = catalog().species("lambari").unwrap().clone();
    species.id = id.to_string();
    species.price = price;
    species.aggression = aggression;
    species.preferred_baits.clear();
    species.active_hours = Some(ActiveHours { start: 0, end: 1 });
    species
}

#[test]
fn test_chance_scores() {
    let catalog = catalog();
    let tilapia = catalog.species("tilapia").unwrap();
    let traira = catalog.species("traira").unwrap();
    let tucunare = catalog.species("tucunare").unwrap();
    assert_eq!(chance_score(tilapia, "worm", 10), CHANCE_MAX);
    assert_eq!(chance_score(traira, "worm", 12), 15);
    assert_eq!(chance_score(tucunare, "lure", 12), 10);
    assert_eq!(chance_score(&test_species("rare", 200.0, 0.0), "worm", 12), CHANCE_MIN);
}

#[test]
fn test_catch_roll_fallback_picks_most_common() {
    let a = test_species("a", 200.0, 0.0);
    let b = test_species("b", 200.0, 0.0);
    let scored = vec![(&a, 2), (&b, 2)];
    assert_eq!(pick_by_roll(&scored, 20).map(|s| s.id.as_str()), Some("b"));
    let reversed = vec![(&b, 2), (&a, 2)];
    assert_eq!(
        pick_by_roll(&reversed, 20).map(|s| s.id.as_str()),
        Some("a"),
        "Ties go to the later candidate"
    );

    let c = test_species("c", 200.0, 0.0);
    let scored = vec![(&a, 2), (&b, 5), (&c, 3)];
    assert_eq!(pick_by_roll(&scored, 20).map(|s| s.id.as_str()), Some("b"));
}

#[test]
fn test_catch_roll_prefers_rarest_qualifier() {
    let a = test_species("a", 10.0, 0.0);
    let b = test_species("b", 10.0, 0.0);
    let c = test_species("c", 10.0, 0.0);
    let scored = vec![(&a, 18), (&b, 10), (&c, 14)];
    assert_eq!(pick_by_roll(&scored, 9).map(|s| s.id.as_str()), Some("b"));
    assert_eq!(pick_by_roll(&scored, 12).map(|s| s.id.as_str()), Some("c"));
    assert_eq!(pick_by_roll(&scored, 18).map(|s| s.id.as_str()), Some("a"));
    assert!(pick_by_roll(&[], 1).is_none());
}

#[test]
fn test_spawned_fish_respects_location_size_limit() {
    let catalog = catalog();
    let cascudo = catalog.species("cascudo").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let stats = &cascudo.stats;
    let cap_weight = stats.min_weight + (stats.max_weight - stats.min_weight) * (10.0f64 / 45.0).powi(3);
    for _ in 0..200 {
        let fish = spawn_fish(&mut rng, cascudo, "creek");
        assert!(fish.length_cm <= 10.0 * 1.1 + 1e-9, "length {}", fish.length_cm);
        assert!(fish.weight_kg <= cap_weight * 1.1 + 0.005, "weight {}", fish.weight_kg);
        assert_eq!(fish.rank, FishRank::C, "A creek cascudo is never a trophy");
        assert_eq!(fish.length_cm, (fish.length_cm * 10.0).round() / 10.0);
    }
}

#[test]
fn test_spawned_fish_within_species_range() {
    let catalog = catalog();
    let carp = catalog.species("carpa").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut sexes = std::collections::HashSet::new();
    for _ in 0..500 {
        let fish = spawn_fish(&mut rng, carp, "river");
        assert!(fish.length_cm >= 25.0 && fish.length_cm <= 99.0 + 1e-9);
        assert!(fish.weight_kg >= 1.0 && fish.weight_kg <= 22.0 + 1e-9);
        assert!(fish.percentile <= 100);
        sexes.insert(format!("{:?}", fish.sex));
    }
    assert_eq!(sexes.len(), 2);
}

#[test]
fn test_rank_cap_by_hook_size() {
    let mut trophy = catalog().species("cascudo").unwrap().clone();
    trophy.stats.min_length = trophy.stats.max_length;
    trophy.stats.male_multiplier = 1.0;
    trophy.stats.female_multiplier = 1.0;
    trophy.location_size_limit.clear();

    let candidates = [&trophy];
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let ctx = |hook_size| CatchContext {
        candidates: &candidates,
        bait_id: "bread",
        location_id: "river",
        hook_size,
        hour: 12,
    };

    let (_, capped) = resolve_catch(&mut rng, Some(&trophy), &ctx(0)).unwrap();
    assert_eq!(capped.rank, FishRank::B, "Hook 1/0 caps cascudo at B");

    let (_, uncapped) = resolve_catch(&mut rng, Some(&trophy), &ctx(-1)).unwrap();
    assert_eq!(uncapped.rank, FishRank::S);

    assert_eq!(cap_rank(&trophy, 0, FishRank::C), FishRank::C, "Never upgrades");
}

#[test]
fn test_roll_without_candidates() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let ctx = CatchContext {
        candidates: &[],
        bait_id: "worm",
        location_id: "pond",
        hook_size: 6,
        hour: 12,
    };
    assert!(resolve_catch(&mut rng, None, &ctx).is_none());
}
