//! Public API surface for runtime consumers.
pub mod errors;
pub mod providers;

pub use errors::{CopilotError, Result};
pub use providers::{InputDriver, SettingsStore, WorldStateProvider};
