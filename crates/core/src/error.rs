//! Failure types for the collaborators the follow bot talks to.
//!
//! None of these are fatal to the decision loop: the runtime logs them and
//! skips the tick.
use std::path::PathBuf;

use thiserror::Error;

use crate::key::Key;

/// Failures while reading game state through the host.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("world snapshot unavailable: {reason}")]
    SnapshotUnavailable { reason: String },

    #[error("projection failed for world point ({x}, {y}, {z})")]
    ProjectionFailed { x: f32, y: f32, z: f32 },
}

impl ProviderError {
    pub fn snapshot_unavailable(reason: impl Into<String>) -> Self {
        Self::SnapshotUnavailable {
            reason: reason.into(),
        }
    }

    pub fn projection_failed(point: glam::Vec3) -> Self {
        Self::ProjectionFailed {
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}

/// Failures while injecting synthetic input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("pointer move rejected by host")]
    PointerRejected,

    #[error("key {0} rejected by host")]
    KeyRejected(Key),
}

/// Failures while loading or persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize settings")]
    Serialize(#[from] ron::Error),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
