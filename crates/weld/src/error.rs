//! CLI error types.

use weld_config::ConfigError;
use weld_content::ContentError;
use weld_emit::EmitError;
use weld_nav::{IntegrityError, NavError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Integrity(#[from] IntegrityError),

    #[error("{0}")]
    Emit(#[from] EmitError),

    #[error("File watcher error: {0}")]
    Watch(String),
}
