use daftar_config::ConfigError;
use daftar_core::CoreError;
use thiserror::Error;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
