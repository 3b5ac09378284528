//! # Plinth Core
//!
//! Core library for the Plinth application framework: a small
//! plugin-lifecycle orchestrator. An [`Application`] owns a registry of
//! named plugins and drives them through an ordered initialization
//! sequence (core plugins first, the rest concurrently), then provisions
//! the configured directory layout and reconciles declared features.

pub mod app;
pub mod config;
pub mod event;
pub mod plugin;
pub mod provision;

// Re-export key public types for easier use by the binary and plugins
pub use app::bootstrap::{AppOptions, Application, InitOptions};
pub use app::context::AppContext;
pub use app::error::{Error, Result};
pub use config::{ConfigData, ConfigStore};
pub use event::{AppEvent, EventBus};
pub use plugin::{Plugin, PluginRegistry};
