use std::path::PathBuf;

use thiserror::Error;

pub type HostResult<T> = Result<T, HostError>;

/// Errors raised while wiring a host. The accessors themselves never fail.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error [{}]: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("platform error: {0}")]
    Platform(String),

    #[error("winit error: {0}")]
    Winit(String),
}

impl From<toml::de::Error> for HostError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
