use config::ConfigError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub type SimaticResult<T, E = SimaticError> = anyhow::Result<T, E>;

/// Process-level error for the simatic tooling.
///
/// Address and channel validation failures are reported by
/// `simatic-address` with their own error type and are folded into
/// [`SimaticError::ValidationError`] when they cross into this layer.
#[derive(Error, Debug, Default)]
pub enum SimaticError {
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    Msg(String),
    #[error("Logger error: {0}")]
    LoggerError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown error")]
    #[default]
    None,
}

impl From<String> for SimaticError {
    #[inline]
    fn from(e: String) -> Self {
        SimaticError::Msg(e)
    }
}

impl From<&str> for SimaticError {
    #[inline]
    fn from(e: &str) -> Self {
        SimaticError::Msg(e.to_string())
    }
}

impl From<&SimaticError> for SimaticError {
    #[inline]
    fn from(e: &SimaticError) -> Self {
        SimaticError::Msg(e.to_string())
    }
}
