/// Application name
pub const APP_NAME: &str = "Plinth";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the core configuration plugin
pub const CONFIG_PLUGIN: &str = "config";

/// Name of the core logging plugin
pub const LOG_PLUGIN: &str = "log";

/// Core plugins, in the order they are attached
pub const CORE_PLUGINS: [&str; 2] = [CONFIG_PLUGIN, LOG_PLUGIN];

/// Config key holding the directory list to provision
pub const DIRECTORIES_KEY: &str = "directories";

/// Config key holding the declared feature requirements
pub const FEATURES_KEY: &str = "features";
