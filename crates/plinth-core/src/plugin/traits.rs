use async_trait::async_trait;
use serde_json::Value;

use crate::app::context::AppContext;
use crate::plugin::error::PluginSystemErrorSource;

/// Core trait that all plugins must implement.
///
/// A plugin is identified by a unique name and exposes one capability:
/// an async initialization operation. The orchestrator invokes `init` at
/// most once per application instance, passing the shared [`AppContext`]
/// and whatever options were supplied for this plugin (or `Value::Null`
/// when none were).
///
/// Plugins do not get a shutdown hook; the orchestrator owns no plugin
/// lifecycle beyond the single init call.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// The unique name of the plugin
    fn name(&self) -> &'static str;

    /// Initialize the plugin against the given application context
    async fn init(
        &self,
        context: &AppContext,
        options: &Value,
    ) -> std::result::Result<(), PluginSystemErrorSource>;
}
