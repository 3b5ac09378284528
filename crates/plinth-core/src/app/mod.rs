//! # Plinth Application Core
//!
//! The `app` module forms the heart of `plinth-core`. It is responsible
//! for bootstrapping an application instance and driving the plugin
//! initialization protocol.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Bootstrap & init protocol**: [`Application`](bootstrap::Application)
//!   owns the plugin registry and runs the core-then-rest attach sequence,
//!   followed by directory provisioning and feature reconciliation.
//! - **Shared context**: [`AppContext`](context::AppContext) bundles the
//!   services handed to every plugin during init (root path, config store,
//!   event bus).
//! - **Core Constants**: plugin names and config keys via the `constants`
//!   submodule.
//! - **Error Handling**: the aggregate [`Error`](error::Error) and the
//!   crate `Result` alias in the `error` submodule.
pub mod bootstrap;
pub mod constants;
pub mod context;
pub mod error;

pub use bootstrap::{AppOptions, Application, InitOptions};
pub use context::AppContext;
pub use error::{Error, Result};
// Test module declaration
#[cfg(test)]
mod tests;
