use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::event::EventBus;

/// Shared services handed to every plugin during attach.
///
/// The context is cheap to clone (the store and bus are handles around
/// `Arc`s) and is passed by reference into [`Plugin::init`]. Plugins that
/// need to mutate shared state do so through the store's and bus's own
/// interior locking; the context itself is immutable.
///
/// [`Plugin::init`]: crate::plugin::Plugin::init
#[derive(Debug, Clone)]
pub struct AppContext {
    root: Option<PathBuf>,
    config: ConfigStore,
    events: EventBus,
}

impl AppContext {
    /// Create a context with an empty config store and a fresh event bus
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            config: ConfigStore::new(),
            events: EventBus::new(),
        }
    }

    /// The application's base directory, if one was configured
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The shared configuration store
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// The application event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Resolve a path against the application root.
    ///
    /// Absolute paths pass through unchanged; relative paths are joined
    /// onto `root` when one is set, otherwise onto the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }
}
