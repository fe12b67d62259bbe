//! User-tunable follow bot settings.
//!
//! [`FollowSettings`] is what the settings surface edits and what the planner
//! reads each tick. Every field has a default, so partial RON files load.
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};
use crate::key::Key;
use crate::world::UiLayout;

/// Every tunable the follow bot reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSettings {
    pub enable: bool,
    pub paused: bool,
    /// Hotkey the host watches to toggle `paused`.
    pub toggle_pause_key: Key,
    pub target_player_name: String,
    /// Names discovered by the last party refresh, for manual selection.
    pub party_members: Vec<String>,

    /// Stop moving once the leader is at most this far away.
    pub follow_distance: f32,
    /// Global pacing between issued actions.
    pub action_cooldown_ms: u64,
    /// Beyond this the leader is assumed to be in another zone.
    pub long_range_distance: f32,
    /// Cooldown after clicking a portal, covering the zone load.
    pub portal_transition_cooldown_ms: u64,
    pub teleport_request_cooldown_ms: u64,
    /// Quiet period after an area change or resurrection.
    pub area_change_grace_ms: u64,
    pub dismiss_key: Key,
    pub escape_key: Key,

    pub blink: BlinkSettings,
    pub pickup: PickupSettings,
    pub combat: CombatSettings,
    pub movement: MovementSettings,
    pub hideout: HideoutSettings,
    pub layout: UiLayout,
}

impl FollowSettings {
    pub const DEFAULT_FOLLOW_DISTANCE: f32 = 200.0;
    pub const DEFAULT_ACTION_COOLDOWN_MS: u64 = 100;
    pub const DEFAULT_LONG_RANGE_DISTANCE: f32 = 3000.0;
    pub const DEFAULT_PORTAL_TRANSITION_COOLDOWN_MS: u64 = 4000;
    pub const DEFAULT_TELEPORT_REQUEST_COOLDOWN_MS: u64 = 500;
    pub const DEFAULT_AREA_CHANGE_GRACE_MS: u64 = 3000;

    pub fn new() -> Self {
        Self {
            enable: true,
            paused: false,
            toggle_pause_key: Key::F5,
            target_player_name: String::new(),
            party_members: Vec::new(),
            follow_distance: Self::DEFAULT_FOLLOW_DISTANCE,
            action_cooldown_ms: Self::DEFAULT_ACTION_COOLDOWN_MS,
            long_range_distance: Self::DEFAULT_LONG_RANGE_DISTANCE,
            portal_transition_cooldown_ms: Self::DEFAULT_PORTAL_TRANSITION_COOLDOWN_MS,
            teleport_request_cooldown_ms: Self::DEFAULT_TELEPORT_REQUEST_COOLDOWN_MS,
            area_change_grace_ms: Self::DEFAULT_AREA_CHANGE_GRACE_MS,
            dismiss_key: Key::Space,
            escape_key: Key::Escape,
            blink: BlinkSettings::default(),
            pickup: PickupSettings::default(),
            combat: CombatSettings::default(),
            movement: MovementSettings::default(),
            hideout: HideoutSettings::default(),
            layout: UiLayout::default(),
        }
    }

    /// Settings following `name` with everything else at defaults.
    pub fn following(name: impl Into<String>) -> Self {
        Self {
            target_player_name: name.into(),
            ..Self::new()
        }
    }

    /// Applies overrides from process environment variables.
    ///
    /// Environment variables:
    /// - `COPILOT_ENABLE` - Master switch
    /// - `COPILOT_TARGET` - Leader name
    /// - `COPILOT_FOLLOW_DISTANCE` - Follow distance in world units
    /// - `COPILOT_ACTION_COOLDOWN_MS` - Global action cooldown
    /// - `COPILOT_USE_MOUSE` - Click to move instead of the move key
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable source. Unparseable
    /// values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(enable) = read("COPILOT_ENABLE").and_then(|v| v.trim().parse().ok()) {
            self.enable = enable;
        }
        if let Some(target) = read("COPILOT_TARGET") {
            self.target_player_name = target.trim().to_string();
        }
        if let Some(distance) =
            read("COPILOT_FOLLOW_DISTANCE").and_then(|v| v.trim().parse::<f32>().ok())
        {
            self.follow_distance = distance.max(0.0);
        }
        if let Some(cooldown) =
            read("COPILOT_ACTION_COOLDOWN_MS").and_then(|v| v.trim().parse().ok())
        {
            self.action_cooldown_ms = cooldown;
        }
        if let Some(use_mouse) = read("COPILOT_USE_MOUSE").and_then(|v| v.trim().parse().ok()) {
            self.movement.use_mouse = use_mouse;
        }
    }
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Blink / dash gap-closer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkSettings {
    pub enable: bool,
    /// Dash only when the leader is farther than this.
    pub range: f32,
    pub cooldown_ms: u64,
    pub key: Key,
    /// Pause between aiming and pressing the key.
    pub settle_ms: u64,
}

impl BlinkSettings {
    pub const DEFAULT_RANGE: f32 = 400.0;
    pub const DEFAULT_COOLDOWN_MS: u64 = 1500;
    pub const DEFAULT_SETTLE_MS: u64 = 50;
}

impl Default for BlinkSettings {
    fn default() -> Self {
        Self {
            enable: false,
            range: Self::DEFAULT_RANGE,
            cooldown_ms: Self::DEFAULT_COOLDOWN_MS,
            key: Key::Space,
            settle_ms: Self::DEFAULT_SETTLE_MS,
        }
    }
}

/// Ground item pickup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupSettings {
    pub enable: bool,
    /// Comma-separated substrings of item labels to pick up.
    pub filter: String,
    pub range: f32,
    /// Skip looting while the leader is farther than this.
    pub leader_leash: f32,
    /// Rank items from the leader rather than from the player.
    pub use_target_position: bool,
    pub settle_ms: u64,
}

impl PickupSettings {
    pub const DEFAULT_RANGE: f32 = 600.0;
    pub const DEFAULT_LEADER_LEASH: f32 = 1000.0;
    pub const DEFAULT_SETTLE_MS: u64 = 50;
}

impl Default for PickupSettings {
    fn default() -> Self {
        Self {
            enable: false,
            filter: String::new(),
            range: Self::DEFAULT_RANGE,
            leader_leash: Self::DEFAULT_LEADER_LEASH,
            use_target_position: false,
            settle_ms: Self::DEFAULT_SETTLE_MS,
        }
    }
}

/// Reaction to Rare and Unique monsters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatSettings {
    pub enable: bool,
    pub range: f32,
    pub cooldown_ms: u64,
    pub skill_key: Key,
    pub follow_up_key: Option<Key>,
    /// Max distance from the combat target to a tracked projectile.
    pub follow_up_range: f32,
    pub projectile_metadata: String,
    pub aim_settle_ms: u64,
}

impl CombatSettings {
    pub const DEFAULT_RANGE: f32 = 800.0;
    pub const DEFAULT_COOLDOWN_MS: u64 = 1000;
    pub const DEFAULT_FOLLOW_UP_RANGE: f32 = 300.0;
    pub const DEFAULT_PROJECTILE_METADATA: &'static str = "Metadata/Projectiles/BallLightningPlayer";
    pub const DEFAULT_AIM_SETTLE_MS: u64 = 100;
}

impl Default for CombatSettings {
    fn default() -> Self {
        Self {
            enable: false,
            range: Self::DEFAULT_RANGE,
            cooldown_ms: Self::DEFAULT_COOLDOWN_MS,
            skill_key: Key::Q,
            follow_up_key: Some(Key::W),
            follow_up_range: Self::DEFAULT_FOLLOW_UP_RANGE,
            projectile_metadata: Self::DEFAULT_PROJECTILE_METADATA.to_string(),
            aim_settle_ms: Self::DEFAULT_AIM_SETTLE_MS,
        }
    }
}

/// How movement and clicks are issued.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Click to move; otherwise aim and press `move_key`.
    pub use_mouse: bool,
    pub move_key: Key,
    pub click_settle_ms: u64,
    pub portal_click_settle_ms: u64,
    pub ui_click_settle_ms: u64,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            use_mouse: true,
            move_key: Key::T,
            click_settle_ms: 20,
            portal_click_settle_ms: 300,
            ui_click_settle_ms: 100,
        }
    }
}

/// Leaving a hideout while the leader is elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HideoutSettings {
    /// Take a nearby portal before trying the party teleport. When off,
    /// hideout portals are picked at random.
    pub prefer_nearby_portal: bool,
    pub nearby_portal_range: f32,
}

impl Default for HideoutSettings {
    fn default() -> Self {
        Self {
            prefer_nearby_portal: false,
            nearby_portal_range: 1000.0,
        }
    }
}

/// Loader for follow settings stored as RON.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Reads settings from `path`. Missing fields take their defaults.
    pub fn load(path: &Path) -> SettingsResult<FollowSettings> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            leader = %settings.target_player_name,
            "loaded follow settings"
        );
        Ok(settings)
    }

    pub fn parse(content: &str) -> SettingsResult<FollowSettings> {
        Ok(ron::from_str(content)?)
    }

    pub fn to_ron(settings: &FollowSettings) -> SettingsResult<String> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        Ok(ron::ser::to_string_pretty(settings, pretty)?)
    }

    /// Writes `settings` to `path`, replacing any existing file.
    pub fn save(path: &Path, settings: &FollowSettings) -> SettingsResult<()> {
        let content = Self::to_ron(settings)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
