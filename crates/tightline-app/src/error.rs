//! Errors raised by the runner itself. Simulation rejections live in the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// The config file could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The game loop thread is not in the state the caller expected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoopError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("shared state lock poisoned")]
    Poisoned,
}
