use copilot_core::{FollowSettings, SettingsError};

use crate::api::SettingsStore;

/// Settings held in memory only.
#[derive(Clone, Debug, Default)]
pub struct InMemorySettings {
    settings: FollowSettings,
}

impl InMemorySettings {
    pub fn new(settings: FollowSettings) -> Self {
        Self { settings }
    }

    pub fn settings_mut(&mut self) -> &mut FollowSettings {
        &mut self.settings
    }
}

impl SettingsStore for InMemorySettings {
    fn settings(&self) -> &FollowSettings {
        &self.settings
    }

    fn set_paused(&mut self, paused: bool) -> Result<(), SettingsError> {
        self.settings.paused = paused;
        Ok(())
    }

    fn set_target_player(&mut self, name: &str) -> Result<(), SettingsError> {
        self.settings.target_player_name = name.trim().to_string();
        Ok(())
    }

    fn publish_party_members(&mut self, names: Vec<String>) -> Result<(), SettingsError> {
        self.settings.party_members = names;
        Ok(())
    }
}
