//! The fight in progress. Created at hook-set, dropped at the terminal state.

use tightline_core::state::FightView;
use tightline_core::types::FishInstance;
use tightline_physics::bands::classify;
use tightline_physics::integrator::{FightMeters, FightProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct FightSession {
    pub fish: FishInstance,
    pub profile: FightProfile,
    pub meters: FightMeters,
}

impl FightSession {
    pub fn new(fish: FishInstance, profile: FightProfile) -> Self {
        Self {
            meters: FightMeters::at_hook_set(&profile),
            fish,
            profile,
        }
    }

    pub fn view(&self) -> FightView {
        let m = &self.meters;
        FightView {
            tension: m.tension,
            line_tension: m.line_tension,
            rod_tension: m.rod_tension,
            distance: m.distance,
            max_distance: self.profile.max_distance,
            hit_charge: m.hit_charge,
            is_fighting: m.is_fighting,
            is_stunned: m.is_stunned,
            stun_time_left: m.stun_time_left,
            high_tension_secs: m.high_tension_timer,
            slack_secs: m.slack_timer,
            band: classify(m.tension),
            fish: self.fish.clone(),
        }
    }
}
