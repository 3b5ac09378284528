use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::plugin::error::PluginSystemError;
use crate::plugin::traits::Plugin;

/// Registry for managing plugins, scoped to one application instance.
///
/// Holds the name-to-implementation mapping and tracks which plugins
/// have completed initialization. Membership in `initialized` means the
/// plugin's attach completed without error; entries are never removed.
pub struct PluginRegistry {
    /// Registered plugins (Arc for shared ownership during concurrent attach)
    pub plugins: HashMap<String, Arc<dyn Plugin>>,
    /// Names of plugins whose attach completed without error
    pub initialized: HashSet<String>,
}

impl PluginRegistry {
    /// Create a new, empty plugin registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            initialized: HashSet::new(),
        }
    }

    /// Register a plugin under its own name. Names are unique; a second
    /// registration under the same name is an error.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), PluginSystemError> {
        let name = plugin.name().to_string();
        if self.plugins.contains_key(&name) {
            return Err(PluginSystemError::AlreadyRegistered { plugin: name });
        }
        self.plugins.insert(name, plugin);
        Ok(())
    }

    /// Check if a plugin is registered by name
    pub fn has(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get a plugin Arc by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    /// Registered plugin names, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Record that the named plugin completed initialization
    pub fn mark_initialized(&mut self, name: &str) {
        self.initialized.insert(name.to_string());
    }

    /// Whether the named plugin has completed initialization
    pub fn is_initialized(&self, name: &str) -> bool {
        self.initialized.contains(name)
    }

    /// All registered plugins outside the given core set, paired with
    /// their names, in no particular order.
    pub fn non_core(&self, core: &[&str]) -> Vec<(String, Arc<dyn Plugin>)> {
        self.plugins
            .iter()
            .filter(|(name, _)| !core.contains(&name.as_str()))
            .map(|(name, plugin)| (name.clone(), plugin.clone()))
            .collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .field("initialized", &self.initialized)
            .finish()
    }
}
