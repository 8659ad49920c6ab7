//! Packages the current phase and drained events into a telemetry snapshot.

use tightline_core::events::FishingEvent;
use tightline_core::state::FightTelemetry;
use tightline_core::types::SimTime;

use crate::phase::FightPhase;

pub fn build_telemetry(time: SimTime, phase: &FightPhase, events: Vec<FishingEvent>) -> FightTelemetry {
    let mut telemetry = FightTelemetry {
        time,
        state: phase.kind(),
        events,
        ..Default::default()
    };
    match phase {
        FightPhase::Casting { stage, .. } => telemetry.casting_stage = Some(*stage),
        FightPhase::Biting { window, .. } => telemetry.bite_window_secs = Some(window.remaining()),
        FightPhase::Reeling(session) => telemetry.fight = Some(session.view()),
        FightPhase::Caught(fish) => telemetry.landed = Some(fish.clone()),
        _ => {}
    }
    telemetry
}
