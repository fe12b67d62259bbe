//! Unified error type surfaced by the runtime.
//!
//! Wraps failures from the world-state provider, the input driver and the
//! settings store. `Copilot::tick` never lets one escape; the other entry
//! points return it so callers can decide.
use copilot_core::{InputError, ProviderError, SettingsError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CopilotError>;

#[derive(Debug, Error)]
pub enum CopilotError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("party panel not available")]
    PartyPanelMissing,
}
