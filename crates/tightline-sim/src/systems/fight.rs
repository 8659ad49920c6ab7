//! One integrator step for the fight in progress.

use rand::Rng;

use tightline_core::events::FishingEvent;
use tightline_physics::integrator::{self, StepInput, Terminal};
use tightline_physics::pressure::draw_toggle;

use crate::session::FightSession;

pub fn run(
    session: &mut FightSession,
    pulling: bool,
    dt: f64,
    rng: &mut impl Rng,
    events: &mut Vec<FishingEvent>,
) -> Option<Terminal> {
    let input = StepInput {
        dt,
        pulling,
        toggle_draw: draw_toggle(rng),
    };
    let report = integrator::step(&mut session.meters, &session.profile, &input);
    if report.stun_expired {
        events.push(FishingEvent::StunExpired);
    }
    if report.toggled {
        events.push(FishingEvent::FightToggled {
            is_fighting: session.meters.is_fighting,
        });
    }
    report.terminal
}
