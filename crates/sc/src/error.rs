//! CLI error types.

use sc_config::ConfigError;
use sc_media::MediaError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Media(#[from] MediaError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
