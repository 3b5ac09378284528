//! # Plinth Plugin System Errors
//!
//! [`PluginSystemError`] covers failures raised by the orchestrator
//! (missing or duplicate registrations, failed initializations), while
//! [`PluginSystemErrorSource`] is the error a plugin itself reports from
//! its init operation; the orchestrator wraps the latter with the plugin
//! name before propagating.

use crate::config::error::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Plugin not found: {plugin}")]
    NotFound { plugin: String },

    #[error("Plugin already registered: {plugin}")]
    AlreadyRegistered { plugin: String },

    #[error("Plugin initialization error for '{plugin}': {source}")]
    InitializationError {
        plugin: String,
        #[source]
        source: Box<PluginSystemErrorSource>,
    },

    #[error("Internal plugin system error: {0}")]
    InternalError(String),
}

/// Failure reported by a plugin's own init operation
#[derive(Debug, thiserror::Error)]
pub enum PluginSystemErrorSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Message(String),
}

impl From<String> for PluginSystemErrorSource {
    fn from(msg: String) -> Self {
        PluginSystemErrorSource::Message(msg)
    }
}

impl From<&str> for PluginSystemErrorSource {
    fn from(msg: &str) -> Self {
        PluginSystemErrorSource::Message(msg.to_string())
    }
}
