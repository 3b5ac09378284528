use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::constants;
use crate::app::context::AppContext;
use crate::config::ConfigData;
use crate::plugin::error::PluginSystemErrorSource;
use crate::plugin::traits::Plugin;

/// Default configuration plugin.
///
/// Populates the context's [`ConfigStore`](crate::config::ConfigStore)
/// from its init options. An optional `file` key names a config file to
/// load (format chosen by extension, resolved against the application
/// root); every other option key is merged in as an inline value, with
/// inline values overriding the file's.
#[derive(Debug, Default)]
pub struct ConfigPlugin;

#[async_trait]
impl Plugin for ConfigPlugin {
    fn name(&self) -> &'static str {
        constants::CONFIG_PLUGIN
    }

    async fn init(
        &self,
        context: &AppContext,
        options: &Value,
    ) -> std::result::Result<(), PluginSystemErrorSource> {
        let mut data = ConfigData::new();

        if let Some(file) = options.get("file").and_then(Value::as_str) {
            let path = context.resolve_path(Path::new(file));
            data.merge(&ConfigData::load(&path).await?);
        }

        if let Some(object) = options.as_object() {
            for (key, value) in object {
                if key == "file" {
                    continue;
                }
                data.set(key, value.clone())?;
            }
        }

        context.config().merge(data).await;
        log::debug!(
            "Configuration loaded: {} keys",
            context.config().keys().await.len()
        );
        Ok(())
    }
}
