//! # Plinth Event System
//!
//! A typed publish/subscribe channel for application lifecycle events.
//! The core emits a single event kind today ([`AppEvent::InitError`],
//! wire name `error:init`); subscribers receive every emitted event and
//! match on the kind they care about. There is no queuing or replay:
//! subscribers registered after an emission never observe it.
pub mod bus;

/// Events broadcast by the application core
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The initialization sequence failed; carries the rendered error
    InitError { message: String },
}

impl AppEvent {
    /// Stable wire name of this event kind
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::InitError { .. } => "error:init",
        }
    }
}

/// Re-export important types
pub use bus::{BoxFuture, EventBus, EventHandler, EventId, sync_handler};
