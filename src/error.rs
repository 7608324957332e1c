use std::path::PathBuf;

use thiserror::Error;

/// Top-level application errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Audio subsystem errors. These never reach the user; the ambience
/// degrades to silence instead.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no output device available")]
    NoDevice,

    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),

    #[error("failed to start stream: {0}")]
    Play(#[from] cpal::PlayStreamError),

    #[error("failed to pause stream: {0}")]
    Pause(#[from] cpal::PauseStreamError),

    #[error("audio callback is not accepting notes")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, Error>;
