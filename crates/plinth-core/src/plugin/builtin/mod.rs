//! Default plugins seeded into every application registry.
//!
//! [`Application::new`](crate::app::bootstrap::Application::new) injects
//! [`ConfigPlugin`] under `config` and [`LogPlugin`] under `log` for any
//! core name the caller did not supply itself.
pub mod config;
pub mod log;

pub use config::ConfigPlugin;
pub use log::LogPlugin;
