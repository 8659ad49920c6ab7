//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tightline_core::commands::PlayerCommand;
use tightline_core::state::FightTelemetry;

use crate::error::LoopError;
use crate::game_loop;
use crate::session::AnglingSession;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle on a running game loop.
///
/// - `command_tx` is `None` until `start`
/// - `latest_telemetry` is written by the loop after every tick and
///   keeps accumulating events until someone takes it
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_telemetry: Arc<Mutex<Option<FightTelemetry>>>,
    pub running: Mutex<bool>,
    handle: Mutex<Option<JoinHandle<AnglingSession>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_telemetry: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop for `session`. Fails if one is already running.
    pub fn start(&self, session: AnglingSession, tick_rate_hz: u32) -> Result<(), LoopError> {
        let mut running = self.running.lock().map_err(|_| LoopError::Poisoned)?;
        if *running {
            return Err(LoopError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(session, tick_rate_hz, self.latest_telemetry.clone());

        *self.command_tx.lock().map_err(|_| LoopError::Poisoned)? = Some(cmd_tx);
        *self.handle.lock().map_err(|_| LoopError::Poisoned)? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), LoopError> {
        let tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| LoopError::Disconnected),
            None => Err(LoopError::NotStarted),
        }
    }

    /// Take the newest telemetry, with every event since the previous take.
    pub fn take_telemetry(&self) -> Result<Option<FightTelemetry>, LoopError> {
        let mut lock = self.latest_telemetry.lock().map_err(|_| LoopError::Poisoned)?;
        Ok(lock.take())
    }

    /// Stop the loop and hand back the session it was running.
    pub fn shutdown(&self) -> Result<AnglingSession, LoopError> {
        let mut running = self.running.lock().map_err(|_| LoopError::Poisoned)?;
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| LoopError::Poisoned)?
            .take()
            .ok_or(LoopError::NotStarted)?;
        // The loop may already have exited on its own; joining covers both.
        let _ = tx.send(GameLoopCommand::Shutdown);
        let handle = self
            .handle
            .lock()
            .map_err(|_| LoopError::Poisoned)?
            .take()
            .ok_or(LoopError::NotStarted)?;
        *running = false;
        handle.join().map_err(|_| LoopError::Disconnected)
    }
}
