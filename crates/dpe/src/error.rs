//! CLI error types.

use dpe_config::ConfigError;
use dpe_document::PipelineError;
use dpe_render::ColorError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Color(#[from] ColorError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}
