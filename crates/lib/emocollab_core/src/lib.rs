//! # emocollab_core
//!
//! Core domain logic for EmoCollab.

pub mod chat;
pub mod clock;
pub mod error;
pub mod face;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
