//! Error type shared by the CPU crates.

use thiserror::Error;

/// Errors from configuration and host-facing plumbing.
///
/// Flag evaluation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported CPU model: {0}")]
    UnsupportedModel(u32),

    #[error("interrupt level {0} is not wired on this CPU")]
    InvalidLevel(u8),

    #[error("no component recognises binding {0:?}")]
    UnknownBinding(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
