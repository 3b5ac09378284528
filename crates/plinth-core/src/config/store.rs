use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::config::data::ConfigData;
use crate::config::error::ConfigError;

/// Shared handle to the application's configuration.
///
/// Cloning the store clones the handle, not the data; all clones observe
/// the same underlying [`ConfigData`]. Plugins write through it during
/// attach, later stages read from it.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    inner: Arc<RwLock<ConfigData>>,
}

impl ConfigStore {
    /// Create a store around an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a configuration value
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.inner.read().await.get(key)
    }

    /// Get a configuration value with default
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.inner.read().await.get_or(key, default)
    }

    /// Set a configuration value
    pub async fn set<T: Serialize>(&self, key: &str, value: T) -> Result<(), ConfigError> {
        self.inner.write().await.set(key, value)
    }

    /// Check if key exists
    pub async fn contains_key(&self, key: &str) -> bool {
        self.inner.read().await.contains_key(key)
    }

    /// Get all keys
    pub async fn keys(&self) -> Vec<String> {
        self.inner.read().await.keys()
    }

    /// Merge configuration data in, overriding existing values
    pub async fn merge(&self, other: ConfigData) {
        self.inner.write().await.merge(&other);
    }

    /// Clone out the current configuration state
    pub async fn snapshot(&self) -> ConfigData {
        self.inner.read().await.clone()
    }
}
