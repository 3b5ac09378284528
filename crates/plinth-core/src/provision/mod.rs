//! # Plinth Provisioning
//!
//! The two follow-up stages the orchestrator runs after every plugin has
//! attached: creating the directory layout named under the `directories`
//! config key, and reconciling the filesystem entries declared under the
//! `features` key. Both stages resolve relative paths against the
//! application root and abort on the first failure.
pub mod directories;
pub mod error;
pub mod features;

pub use error::ProvisionError;
pub use features::{FeatureKind, FeatureRequirement};

// Test module declaration
#[cfg(test)]
mod tests;
