use crate::catalog::Catalog;
use crate::commands::PlayerCommand;
use crate::constants::*;
use crate::enums::*;
use crate::error::{ActionRejected, CastError, CatalogError};
use crate::supplies::{PlayerSupplies, SupplyLedger};
use crate::types::{ActiveHours, GameClock};

// ---- Catalog ----

#[test]
fn test_embedded_catalog_loads() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.species.len(), 10);
    assert_eq!(catalog.locations.len(), 3);
    assert!(catalog.bait("lure").unwrap().unlimited);
}

#[test]
fn test_species_for_location() {
    let catalog = Catalog::embedded().unwrap();
    let creek: Vec<&str> = catalog
        .species_for_location("creek")
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(creek, vec!["lambari", "cara", "cascudo", "mandi"]);
    assert!(catalog.species_for_location("ocean").is_empty());
}

#[test]
fn test_hook_rank_caps_parse_signed_keys() {
    let catalog = Catalog::embedded().unwrap();
    let cascudo = catalog.species("cascudo").unwrap();
    assert_eq!(cascudo.max_rank_by_hook_size.get(&0), Some(&FishRank::B));
    assert_eq!(cascudo.max_rank_by_hook_size.get(&2), Some(&FishRank::C));
    assert_eq!(cascudo.max_rank_by_hook_size.get(&-1), None);
    assert_eq!(cascudo.location_size_limit.get("creek"), Some(&10.0));
}

#[test]
fn test_creek_is_float_only() {
    let catalog = Catalog::embedded().unwrap();
    let creek = catalog.location("creek").unwrap();
    assert!(creek.permits(FishingType::Float));
    assert!(!creek.permits(FishingType::Baitcasting));
    let river = catalog.location("river").unwrap();
    assert!(river.permits(FishingType::Bottom), "No restriction means all");
}

#[test]
fn test_bait_attraction_radius_default() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.bait("worm").unwrap().attraction_radius(), 80.0);
    assert_eq!(catalog.bait("bread").unwrap().attraction_radius(), 60.0);
    assert_eq!(catalog.bait("lure").unwrap().attraction_radius(), 40.0);
    assert_eq!(
        catalog.bait("corn").unwrap().attraction_radius(),
        DEFAULT_ATTRACTION_RADIUS
    );
}

#[test]
fn test_loadout_resolution() {
    let catalog = Catalog::embedded().unwrap();
    let loadout = catalog
        .loadout("fiber_float", "mono_medium", "spinning_basic", "hook_6")
        .unwrap();
    assert_eq!(loadout.rod_power(), 1.0);
    assert_eq!(loadout.max_distance(), 20.0);
    assert_eq!(loadout.hook.size, 6);

    let err = catalog
        .loadout("fiber_float", "mono_medium", "missing_reel", "hook_6")
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownGear {
            kind: "reel",
            id: "missing_reel".into()
        }
    );
}

#[test]
fn test_catalog_rejects_dangling_location() {
    let json = r#"{
        "species": [{
            "id": "ghost", "name": "Ghost", "locations": ["nowhere"],
            "price": 1, "fight_strength": 1, "aggression": 1,
            "stats": { "min_length": 1, "max_length": 2, "min_weight": 0.1,
                       "max_weight": 0.2, "male_multiplier": 1, "female_multiplier": 1 }
        }],
        "baits": [], "locations": [], "rods": [], "lines": [], "reels": [], "hooks": []
    }"#;
    assert_eq!(
        Catalog::from_json(json).unwrap_err(),
        CatalogError::UnknownLocation("nowhere".into())
    );
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

// ---- Enums ----

#[test]
fn test_rod_power_multipliers() {
    assert_eq!(RodPower::Ultralight.multiplier(), 0.5);
    assert_eq!(RodPower::Light.multiplier(), 0.75);
    assert_eq!(RodPower::Medium.multiplier(), 1.0);
    assert_eq!(RodPower::Heavy.multiplier(), 1.3);
    assert_eq!(RodPower::ExtraHeavy.multiplier(), 1.6);
    let json = serde_json::to_string(&RodPower::ExtraHeavy).unwrap();
    assert_eq!(json, "\"extra-heavy\"");
}

#[test]
fn test_rank_order_and_thresholds() {
    assert!(FishRank::C < FishRank::B);
    assert!(FishRank::A < FishRank::S);
    assert_eq!(FishRank::from_percentile(95.0), FishRank::S);
    assert_eq!(FishRank::from_percentile(94.9), FishRank::A);
    assert_eq!(FishRank::from_percentile(80.0), FishRank::A);
    assert_eq!(FishRank::from_percentile(50.0), FishRank::B);
    assert_eq!(FishRank::from_percentile(49.9), FishRank::C);
}

#[test]
fn test_casting_stages_total_duration() {
    let mut stage = Some(CastingStage::Windup);
    let mut total = 0.0;
    while let Some(s) = stage {
        total += s.duration_secs();
        stage = s.next();
    }
    assert!((total - 1.4).abs() < 1e-9, "Cast sequence should take 1.4s");
}

#[test]
fn test_state_kind_groups() {
    assert!(GameStateKind::Biting.is_cancellable());
    assert!(!GameStateKind::Reeling.is_cancellable());
    assert!(GameStateKind::Lost.is_terminal());
    assert!(!GameStateKind::Idle.is_terminal());
}

// ---- Types ----

#[test]
fn test_active_hours_wrap_midnight() {
    let night = ActiveHours { start: 18, end: 6 };
    assert!(night.contains(22));
    assert!(night.contains(0));
    assert!(!night.contains(6), "End hour is exclusive");
    assert!(!night.contains(12));

    let day = ActiveHours { start: 6, end: 18 };
    assert!(day.contains(6));
    assert!(!day.contains(18));
}

#[test]
fn test_active_hours_equal_bounds_cover_whole_day() {
    let always = ActiveHours { start: 7, end: 7 };
    for hour in 0..24 {
        assert!(always.contains(hour), "hour {hour} should be active");
    }
}

#[test]
fn test_game_clock() {
    let mut clock = GameClock::default();
    assert_eq!(clock.hour(), 8);
    // 5 real minutes at 12x is one game hour
    clock.advance(300.0, CLOCK_MINUTES_PER_REAL_MINUTE);
    assert_eq!(clock.hour(), 9);

    let mut late = GameClock::at_minute(1430.0);
    late.advance(60.0, CLOCK_MINUTES_PER_REAL_MINUTE);
    assert_eq!(late.hour(), 0, "Clock wraps at midnight");
}

// ---- Supplies ----

#[test]
fn test_supplies_ledger() {
    let mut supplies = PlayerSupplies {
        energy: 98,
        ..Default::default()
    }
    .with_bait("worm", 1);
    supplies.regenerate(5);
    assert_eq!(supplies.energy(), ENERGY_MAX);

    supplies.spend_energy(CAST_ENERGY_COST);
    assert_eq!(supplies.energy(), 95);

    supplies.consume_bait("worm");
    supplies.consume_bait("worm");
    assert_eq!(supplies.bait_count("worm"), 0);
    assert_eq!(supplies.bait_count("corn"), 0);
}

#[test]
fn test_regenerate_saturates_huge_energy() {
    let mut supplies = PlayerSupplies {
        energy: u32::MAX - 1,
        ..Default::default()
    };
    supplies.regenerate(5);
    assert_eq!(supplies.energy(), ENERGY_MAX);
}

// ---- Commands and errors ----

#[test]
fn test_command_tagging() {
    let json = serde_json::to_string(&PlayerCommand::SetPull { active: true }).unwrap();
    assert_eq!(json, r#"{"type":"SetPull","active":true}"#);
    let back: PlayerCommand = serde_json::from_str(r#"{"type":"Hit"}"#).unwrap();
    assert_eq!(back, PlayerCommand::Hit);
}

#[test]
fn test_action_rejected_wraps_cast_error() {
    let rejected: ActionRejected = CastError::NoEnergy {
        available: 3,
        required: CAST_ENERGY_COST,
    }
    .into();
    assert_eq!(
        rejected.to_string(),
        "not enough energy to cast (have 3, need 5)"
    );
}
