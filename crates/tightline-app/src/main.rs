use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use tightline_app::autopilot::{self, Autopilot};
use tightline_app::config::AppConfig;
use tightline_app::error::LoopError;
use tightline_app::game_loop;
use tightline_app::session::AnglingSession;
use tightline_app::state::AppState;
use tightline_core::catalog::Catalog;

/// Let an autopilot angler fish a session and print what it caught.
#[derive(Debug, Parser)]
#[command(name = "tightline", version)]
struct Args {
    /// JSON config file. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Location id (creek, pond, river).
    #[arg(long)]
    location: Option<String>,
    /// Number of casts before stopping.
    #[arg(long)]
    casts: Option<u32>,
    /// Run on the game loop thread at wall-clock speed instead of as fast as possible.
    #[arg(long)]
    realtime: bool,
}

/// Upper bound on a headless run: one simulated hour at 60 Hz.
const MAX_HEADLESS_TICKS: u64 = 60 * 60 * 60;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?.with_overrides(args.seed, args.location, args.casts);
    let catalog = Catalog::embedded()?;
    let request = config.cast_request(&catalog)?;
    let session = AnglingSession::new(&config, catalog)?;
    let mut pilot = Autopilot::new(request, config.casts);
    info!(
        "fishing {} with seed {} for {} casts",
        config.location, config.sim.seed, config.casts
    );

    let session = if args.realtime {
        run_realtime(session, &mut pilot, config.tick_rate_hz)?
    } else {
        let mut session = session;
        let ticks = autopilot::run_headless(&mut session, &mut pilot, config.step_secs(), MAX_HEADLESS_TICKS);
        info!("finished after {ticks} ticks");
        session
    };

    println!("{}", serde_json::to_string_pretty(&pilot.report(&session))?);
    Ok(())
}

/// Drive the session through the game loop thread, polling once per tick.
fn run_realtime(session: AnglingSession, pilot: &mut Autopilot, tick_rate_hz: u32) -> Result<AnglingSession, LoopError> {
    let state = AppState::new();
    state.start(session, tick_rate_hz)?;
    let poll = game_loop::tick_duration(tick_rate_hz);
    loop {
        std::thread::sleep(poll);
        let Some(telemetry) = state.take_telemetry()? else {
            continue;
        };
        for command in pilot.decide(&telemetry) {
            state.send_command(command)?;
        }
        if pilot.is_done(telemetry.state) {
            break;
        }
    }
    state.shutdown()
}
