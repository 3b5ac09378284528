//! # Plinth Core Application Errors
//!
//! Defines the top-level error type for the application core. Subsystem
//! errors ([`PluginSystemError`], [`ConfigError`], [`ProvisionError`])
//! convert into [`Error`] via `#[from]`, so the init protocol can use a
//! single `Result` alias end to end.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::plugin::error::PluginSystemError;
use crate::provision::error::ProvisionError;

/// Top-level error type for the Plinth application core
#[derive(Debug, ThisError)]
pub enum Error {
    /// Typed plugin system error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    /// Typed configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Typed provisioning error (directory creation, feature reconciliation)
    #[error("Provisioning error: {0}")]
    Provision(#[from] ProvisionError),

    /// `init` was invoked on an instance that already ran its init sequence
    #[error("Application init already attempted; instances are not re-initializable")]
    AlreadyInitialized,

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
