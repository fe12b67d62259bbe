//! Recorded snapshot sequences for dry runs.
use std::path::Path;

use anyhow::{Context, Result};
use copilot_core::WorldSnapshot;
use serde::{Deserialize, Serialize};

/// One recorded tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Clock time of the tick.
    pub at_ms: u64,
    /// The host reported a zone transition just before this tick.
    #[serde(default)]
    pub area_change: bool,
    #[serde(default)]
    pub snapshot: WorldSnapshot,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub frames: Vec<Frame>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }
}
