//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimConfig {
    pub scenario: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub seed: u64,
    pub session_id: Option<String>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COPILOT_SCENARIO` - Scenario file to replay (RON)
    /// - `COPILOT_SETTINGS` - Settings file (RON, default: built-in defaults)
    /// - `COPILOT_SEED` - Planner RNG seed (default: 0)
    /// - `COPILOT_SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            scenario: read("COPILOT_SCENARIO").map(PathBuf::from),
            settings: read("COPILOT_SETTINGS").map(PathBuf::from),
            seed: read("COPILOT_SEED")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or_default(),
            session_id: read("COPILOT_SESSION_ID"),
        }
    }
}
