// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UmaskdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The blocking read on the event channel failed. This is the one
    /// fatal condition of normal operation; there is no retry.
    #[error("event stream read failed: {0}")]
    ReadFailed(std::io::Error),

    /// An event referenced a watch handle no registration ever produced.
    /// Reaching this means the registry and the event source have
    /// desynchronized and the process state can no longer be trusted.
    #[error("event references unregistered watch handle {0}")]
    UnknownHandle(i32),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, UmaskdError>;
