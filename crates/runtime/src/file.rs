//! RON-file backed settings store.
use std::path::{Path, PathBuf};

use copilot_core::{FollowSettings, SettingsError, SettingsLoader};

use crate::api::SettingsStore;

/// Settings persisted to a RON file after every write.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    settings: FollowSettings,
}

impl FileSettingsStore {
    /// Loads `path`, or starts from defaults when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = if path.exists() {
            SettingsLoader::load(&path)?
        } else {
            tracing::info!(path = %path.display(), "settings file not found, using defaults");
            FollowSettings::default()
        };
        Ok(Self { path, settings })
    }

    /// Writes `settings` to `path` immediately.
    pub fn create(path: impl Into<PathBuf>, settings: FollowSettings) -> Result<Self, SettingsError> {
        let store = Self {
            path: path.into(),
            settings,
        };
        store.save()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        SettingsLoader::save(&self.path, &self.settings)
    }
}

impl SettingsStore for FileSettingsStore {
    fn settings(&self) -> &FollowSettings {
        &self.settings
    }

    fn set_paused(&mut self, paused: bool) -> Result<(), SettingsError> {
        self.settings.paused = paused;
        self.save()
    }

    fn set_target_player(&mut self, name: &str) -> Result<(), SettingsError> {
        self.settings.target_player_name = name.trim().to_string();
        self.save()
    }

    fn publish_party_members(&mut self, names: Vec<String>) -> Result<(), SettingsError> {
        self.settings.party_members = names;
        self.save()
    }
}
