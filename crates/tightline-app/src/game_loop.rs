//! Game loop thread: steps the session at a fixed rate and publishes telemetry.
//!
//! The session moves into the thread and comes back out through the join
//! handle. Commands arrive via `mpsc` channel and are applied before each tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, warn};

use tightline_core::state::FightTelemetry;

use crate::session::AnglingSession;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick at `tick_rate_hz`.
pub fn tick_duration(tick_rate_hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate_hz.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle that yields the session on exit.
pub fn spawn_game_loop(
    session: AnglingSession,
    tick_rate_hz: u32,
    latest_telemetry: Arc<Mutex<Option<FightTelemetry>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<AnglingSession>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tightline-game-loop".into())
        .spawn(move || run_game_loop(session, tick_rate_hz, cmd_rx, &latest_telemetry))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut session: AnglingSession,
    tick_rate_hz: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_telemetry: &Mutex<Option<FightTelemetry>>,
) -> AnglingSession {
    let tick = tick_duration(tick_rate_hz);
    let mut next_tick_time = Instant::now();
    debug!("game loop started at {tick_rate_hz} Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    if let Err(e) = session.execute(cmd) {
                        warn!("command rejected: {e}");
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("game loop stopped");
                    return session;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Background timers and one engine tick
        let telemetry = session.step(tick.as_secs_f64());

        // 3. Publish, keeping events the reader has not collected yet
        if let Ok(mut lock) = latest_telemetry.lock() {
            let unread = lock.take();
            *lock = Some(merge_unread(unread, telemetry));
        }

        // 4. Sleep until next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Newest telemetry wins, but events from an unread snapshot are kept in front.
pub(crate) fn merge_unread(unread: Option<FightTelemetry>, mut newest: FightTelemetry) -> FightTelemetry {
    if let Some(previous) = unread {
        let mut events = previous.events;
        events.append(&mut newest.events);
        newest.events = events;
    }
    newest
}
