use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::context::AppContext;
use crate::plugin::error::{PluginSystemError, PluginSystemErrorSource};
use crate::plugin::registry::PluginRegistry;
use crate::plugin::traits::Plugin;

struct NamedPlugin {
    name: &'static str,
}

#[async_trait]
impl Plugin for NamedPlugin {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn init(
        &self,
        _context: &AppContext,
        _options: &Value,
    ) -> std::result::Result<(), PluginSystemErrorSource> {
        Ok(())
    }
}

fn plugin(name: &'static str) -> Arc<NamedPlugin> {
    Arc::new(NamedPlugin { name })
}

#[test]
fn test_register_and_lookup() {
    let mut registry = PluginRegistry::new();
    assert!(registry.is_empty());

    registry.register(plugin("config")).expect("register failed");
    registry.register(plugin("metrics")).expect("register failed");

    assert_eq!(registry.len(), 2);
    assert!(registry.has("config"));
    assert!(registry.has("metrics"));
    assert!(!registry.has("log"));
    assert!(registry.get("metrics").is_some());
    assert!(registry.get("log").is_none());

    let mut names = registry.names();
    names.sort();
    assert_eq!(names, vec!["config", "metrics"]);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut registry = PluginRegistry::new();
    registry.register(plugin("metrics")).expect("register failed");

    let result = registry.register(plugin("metrics"));
    match result {
        Err(PluginSystemError::AlreadyRegistered { ref plugin }) => {
            assert_eq!(plugin, "metrics");
        }
        other => panic!("Expected AlreadyRegistered, got {other:?}"),
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_initialization_tracking() {
    let mut registry = PluginRegistry::new();
    registry.register(plugin("config")).expect("register failed");

    assert!(!registry.is_initialized("config"));
    registry.mark_initialized("config");
    assert!(registry.is_initialized("config"));

    // Marking twice is harmless; membership is what the record means.
    registry.mark_initialized("config");
    assert_eq!(registry.initialized.len(), 1);
}

#[test]
fn test_non_core_excludes_the_core_set() {
    let mut registry = PluginRegistry::new();
    registry.register(plugin("config")).expect("register failed");
    registry.register(plugin("log")).expect("register failed");
    registry.register(plugin("metrics")).expect("register failed");
    registry.register(plugin("cache")).expect("register failed");

    let mut names: Vec<String> = registry
        .non_core(&["config", "log"])
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["cache", "metrics"]);
}
