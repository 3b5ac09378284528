use async_trait::async_trait;
use serde_json::Value;

use crate::app::constants;
use crate::app::context::AppContext;
use crate::plugin::error::PluginSystemErrorSource;
use crate::plugin::traits::Plugin;

/// Default logging plugin.
///
/// Installs `env_logger` as the process-wide `log` backend. The optional
/// `level` option forces a filter level (otherwise `RUST_LOG` applies).
/// A logger already being installed is tolerated, so several application
/// instances can share one process.
#[derive(Debug, Default)]
pub struct LogPlugin;

#[async_trait]
impl Plugin for LogPlugin {
    fn name(&self) -> &'static str {
        constants::LOG_PLUGIN
    }

    async fn init(
        &self,
        _context: &AppContext,
        options: &Value,
    ) -> std::result::Result<(), PluginSystemErrorSource> {
        let mut builder = env_logger::Builder::from_default_env();

        if let Some(level) = options.get("level").and_then(Value::as_str) {
            let filter = level.parse::<log::LevelFilter>().map_err(|e| {
                PluginSystemErrorSource::Message(format!("invalid log level '{level}': {e}"))
            })?;
            builder.filter_level(filter);
        }

        if builder.try_init().is_err() {
            log::debug!("Global logger already installed; keeping the existing one");
        }
        Ok(())
    }
}
