use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;

use crate::app::constants;
use crate::app::context::AppContext;
use crate::app::error::{Error, Result};
use crate::config::ConfigStore;
use crate::event::{AppEvent, EventBus};
use crate::plugin::Plugin;
use crate::plugin::builtin::{ConfigPlugin, LogPlugin};
use crate::plugin::error::PluginSystemError;
use crate::plugin::registry::PluginRegistry;
use crate::provision;

/// Per-plugin initialization options, keyed by plugin name.
pub type InitOptions = HashMap<String, Value>;

/// Options accepted by [`Application::new`].
///
/// `plugins` supplies the initial registry; the default `config` and `log`
/// plugins are injected for any core name the caller did not provide.
/// `options` are construction-time per-plugin init options, overridable
/// per key by the options later passed to [`Application::init`].
#[derive(Default)]
pub struct AppOptions {
    pub root: Option<PathBuf>,
    pub plugins: Vec<Arc<dyn Plugin>>,
    pub options: InitOptions,
}

/// Main application object: owns the plugin registry and drives the
/// initialization protocol.
///
/// Lifecycle: [`Application::new`] fixes the root and the plugin set;
/// [`Application::init`] attaches the core plugins in order, attaches the
/// remaining plugins concurrently, provisions the configured directories
/// and reconciles declared features. After `init` returns, the instance
/// is either ready or left partially initialized; there is no resume.
#[derive(Debug)]
pub struct Application {
    context: AppContext,
    registry: PluginRegistry,
    pending_options: InitOptions,
    ready: bool,
    init_attempted: bool,
}

impl Application {
    /// Create a new application instance.
    ///
    /// Registers the caller-supplied plugins (duplicate names are an
    /// error) and seeds the mandatory `config` and `log` plugins where
    /// the caller did not supply its own.
    pub fn new(options: AppOptions) -> Result<Self> {
        log::info!("Creating {} v{}", constants::APP_NAME, constants::APP_VERSION);

        let AppOptions {
            root,
            plugins,
            options: pending_options,
        } = options;

        let mut registry = PluginRegistry::new();
        for plugin in plugins {
            registry.register(plugin)?;
        }
        if !registry.has(constants::CONFIG_PLUGIN) {
            registry.register(Arc::new(ConfigPlugin))?;
        }
        if !registry.has(constants::LOG_PLUGIN) {
            registry.register(Arc::new(LogPlugin))?;
        }

        Ok(Application {
            context: AppContext::new(root),
            registry,
            pending_options,
            ready: false,
            init_attempted: false,
        })
    }

    /// Run the initialization sequence.
    ///
    /// Core plugins (`config`, then `log`) attach strictly in order; the
    /// remaining plugins attach concurrently. On full success the
    /// configured directories are created, declared features reconciled,
    /// pending options discarded, and the instance becomes ready. The
    /// first failure at any stage aborts the sequence, is emitted on the
    /// event bus as [`AppEvent::InitError`], and is returned to the
    /// caller. A second `init` call on the same instance is rejected.
    pub async fn init(&mut self, options: InitOptions) -> Result<()> {
        if self.init_attempted {
            return Err(Error::AlreadyInitialized);
        }
        self.init_attempted = true;

        match self.run_init(options).await {
            Ok(()) => {
                self.pending_options.clear();
                self.ready = true;
                log::info!("Application initialized");
                Ok(())
            }
            Err(err) => {
                log::error!("Application init failed: {err}");
                self.context
                    .events()
                    .emit(&AppEvent::InitError {
                        message: err.to_string(),
                    })
                    .await;
                Err(err)
            }
        }
    }

    async fn run_init(&mut self, overrides: InitOptions) -> Result<()> {
        // The init call's options win over construction-time options,
        // per plugin name.
        let mut options = self.pending_options.clone();
        options.extend(overrides);

        self.attach_core(&options).await?;
        self.attach_remaining(&options).await?;

        let directories: Vec<PathBuf> = self
            .context
            .config()
            .get(constants::DIRECTORIES_KEY)
            .await
            .unwrap_or_default();
        provision::directories::create(&self.context, &directories).await?;
        provision::features::ensure(&self.context).await?;
        Ok(())
    }

    /// Attach the core plugins strictly sequentially, in the fixed order
    /// given by [`constants::CORE_PLUGINS`]. The second attach starts
    /// only after the first has completed successfully.
    async fn attach_core(&mut self, options: &InitOptions) -> Result<()> {
        for name in constants::CORE_PLUGINS {
            let opts = options.get(name).cloned().unwrap_or(Value::Null);
            Self::attach(&mut self.registry, &self.context, name, &opts).await?;
        }
        Ok(())
    }

    /// Attach every non-core plugin concurrently: all init futures are
    /// started before any is awaited, and no ordering holds among them.
    /// Completions are recorded as they arrive; the first failure is
    /// authoritative, and dropping the set cancels in-flight siblings.
    async fn attach_remaining(&mut self, options: &InitOptions) -> Result<()> {
        let remaining = self.registry.non_core(&constants::CORE_PLUGINS);
        if remaining.is_empty() {
            return Ok(());
        }

        let context = &self.context;
        let registry = &mut self.registry;
        let mut attaching: FuturesUnordered<_> = remaining
            .into_iter()
            .map(|(name, plugin)| {
                let opts = options.get(&name).cloned().unwrap_or(Value::Null);
                async move {
                    log::debug!("Attaching plugin '{name}'");
                    match plugin.init(context, &opts).await {
                        Ok(()) => Ok(name),
                        Err(source) => Err(PluginSystemError::InitializationError {
                            plugin: name,
                            source: Box::new(source),
                        }),
                    }
                }
            })
            .collect();

        while let Some(completed) = attaching.next().await {
            match completed {
                Ok(name) => registry.mark_initialized(&name),
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Attach a single plugin: look it up by name, run its init
    /// operation, and record completion. A name absent from the registry
    /// surfaces as [`PluginSystemError::NotFound`]; a failed init leaves
    /// the plugin unrecorded.
    async fn attach(
        registry: &mut PluginRegistry,
        context: &AppContext,
        name: &str,
        options: &Value,
    ) -> std::result::Result<(), PluginSystemError> {
        let plugin = registry.get(name).ok_or_else(|| PluginSystemError::NotFound {
            plugin: name.to_string(),
        })?;

        log::debug!("Attaching plugin '{name}'");
        plugin
            .init(context, options)
            .await
            .map_err(|source| PluginSystemError::InitializationError {
                plugin: name.to_string(),
                source: Box::new(source),
            })?;

        registry.mark_initialized(name);
        Ok(())
    }

    /// The shared context handed to plugins during attach
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The application's base directory, if one was configured
    pub fn root(&self) -> Option<&Path> {
        self.context.root()
    }

    /// The shared configuration store
    pub fn config(&self) -> &ConfigStore {
        self.context.config()
    }

    /// The application event bus
    pub fn events(&self) -> &EventBus {
        self.context.events()
    }

    /// The plugin registry
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Whether the full init sequence completed successfully
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Construction-time per-plugin options not yet consumed by `init`
    pub fn pending_options(&self) -> &InitOptions {
        &self.pending_options
    }
}
