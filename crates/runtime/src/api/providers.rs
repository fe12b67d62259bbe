//! Collaborators the follow bot is driven through.
//!
//! The host plugs in implementations so the same decision loop can run
//! against the live game, a recorded scenario, or a test fixture.
use std::time::Duration;

use copilot_core::{
    FollowSettings, InputError, Key, ProviderError, ScreenPoint, SettingsError, WorldSnapshot,
};
use glam::Vec3;

/// Read access to the game.
pub trait WorldStateProvider {
    /// Captures everything the planner needs for one tick.
    fn snapshot(&mut self) -> Result<WorldSnapshot, ProviderError>;

    /// Projects a world point through the current camera, client-relative.
    fn world_to_screen(&self, point: Vec3) -> Result<ScreenPoint, ProviderError>;
}

/// Synthetic mouse and keyboard input. Points are absolute screen
/// coordinates.
pub trait InputDriver {
    fn move_pointer(&mut self, to: ScreenPoint) -> Result<(), InputError>;

    /// Moves to `at`, waits `settle`, then clicks.
    fn click(&mut self, at: ScreenPoint, settle: Duration) -> Result<(), InputError>;

    fn press_key(&mut self, key: Key) -> Result<(), InputError>;

    /// Blocks the tick thread briefly so a pointer move registers before a
    /// dependent key press.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Where user settings live.
///
/// The planner only reads; the writers exist for the pause hotkey, manual
/// target selection and the party list refresh.
pub trait SettingsStore {
    fn settings(&self) -> &FollowSettings;

    fn set_paused(&mut self, paused: bool) -> Result<(), SettingsError>;

    fn set_target_player(&mut self, name: &str) -> Result<(), SettingsError>;

    fn publish_party_members(&mut self, names: Vec<String>) -> Result<(), SettingsError>;
}
