//! Per-tick view of the game the planner decides from.
//!
//! A [`WorldSnapshot`] is captured once at the start of a tick by the host's
//! world-state provider and dropped at the end of it. Everything is plain
//! data, so scenarios can be recorded to RON and replayed.
mod party;
mod ui;

pub use party::{PartyEntry, leader_entry, party_members};
pub use ui::{UiLayout, UiNode, UiPath};

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::ScreenPoint;

/// Host-window and session status flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostStatus {
    pub focused: bool,
    pub loading: bool,
    pub player_present: bool,
    /// Pause hotkey was pressed since the last tick.
    pub pause_toggle_pressed: bool,
    /// Top-left of the client area on screen.
    pub window_origin: ScreenPoint,
}

impl HostStatus {
    /// Focused, loaded, player in game.
    pub fn ready() -> Self {
        Self {
            focused: true,
            loading: false,
            player_present: true,
            pause_toggle_pressed: false,
            window_origin: ScreenPoint::ORIGIN,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaInfo {
    pub name: String,
    pub is_town: bool,
    pub is_hideout: bool,
}

impl AreaInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_town: false,
            is_hideout: false,
        }
    }

    pub fn town(name: impl Into<String>) -> Self {
        Self {
            is_town: true,
            ..Self::new(name)
        }
    }

    pub fn hideout(name: impl Into<String>) -> Self {
        Self {
            is_hideout: true,
            ..Self::new(name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub name: String,
    pub position: Vec3,
}

impl PlayerEntity {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Rarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
}

impl Rarity {
    /// Rare and Unique monsters trigger the combat reaction.
    pub const fn is_boss(self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Unique)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterEntity {
    pub position: Vec3,
    pub alive: bool,
    pub rarity: Rarity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileEntity {
    pub metadata: String,
    pub position: Vec3,
}

/// Marker drawn over an item or portal lying in the world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundLabel {
    pub position: Vec3,
    #[serde(default)]
    pub text: Option<String>,
    pub metadata: String,
}

impl GroundLabel {
    pub fn portal(metadata: impl Into<String>, position: Vec3) -> Self {
        Self {
            position,
            text: None,
            metadata: metadata.into(),
        }
    }

    pub fn item(text: impl Into<String>, position: Vec3) -> Self {
        Self {
            position,
            text: Some(text.into()),
            metadata: "Metadata/MiscellaneousObjects/WorldItem".to_string(),
        }
    }
}

bitflags! {
    /// Visible UI panels.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UiPanels: u8 {
        const CHECKPOINT  = 1 << 0;
        const MARKET      = 1 << 1;
        const LEFT_PANEL  = 1 << 2;
        const RIGHT_PANEL = 1 << 3;
        const WORLD_MAP   = 1 << 4;
        const NPC_DIALOG  = 1 << 5;

        /// Panels that swallow movement and click input while open.
        const BLOCKING = Self::CHECKPOINT.bits()
            | Self::MARKET.bits()
            | Self::LEFT_PANEL.bits()
            | Self::RIGHT_PANEL.bits()
            | Self::WORLD_MAP.bits()
            | Self::NPC_DIALOG.bits();
    }
}

impl UiPanels {
    pub fn is_blocking(self) -> bool {
        self.intersects(Self::BLOCKING)
    }
}

/// Death screen with its two respawn buttons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResurrectPanel {
    pub visible: bool,
    pub at_checkpoint: Option<UiNode>,
    pub in_town: Option<UiNode>,
}

impl ResurrectPanel {
    /// Checkpoint button if present, otherwise the town button.
    pub fn preferred_button(&self) -> Option<&UiNode> {
        self.at_checkpoint.as_ref().or(self.in_town.as_ref())
    }
}

/// Everything the planner may read during one tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSnapshot {
    pub host: HostStatus,
    pub player_position: Vec3,
    pub area: AreaInfo,
    pub players: Vec<PlayerEntity>,
    pub monsters: Vec<MonsterEntity>,
    pub projectiles: Vec<ProjectileEntity>,
    pub ground_labels: Vec<GroundLabel>,
    pub panels: UiPanels,
    pub resurrect: Option<ResurrectPanel>,
    pub party_panel: Option<UiNode>,
    pub popup: Option<UiNode>,
}

impl WorldSnapshot {
    /// Ready host, player at `player_position`, in a non-town area.
    pub fn in_area(area: AreaInfo, player_position: Vec3) -> Self {
        Self {
            host: HostStatus::ready(),
            player_position,
            area,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: PlayerEntity) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_monster(mut self, monster: MonsterEntity) -> Self {
        self.monsters.push(monster);
        self
    }

    pub fn with_label(mut self, label: GroundLabel) -> Self {
        self.ground_labels.push(label);
        self
    }

    pub fn with_projectile(mut self, projectile: ProjectileEntity) -> Self {
        self.projectiles.push(projectile);
        self
    }

    pub fn with_panels(mut self, panels: UiPanels) -> Self {
        self.panels |= panels;
        self
    }

    pub fn with_party_panel(mut self, panel: UiNode) -> Self {
        self.party_panel = Some(panel);
        self
    }

    pub fn with_popup(mut self, popup: UiNode) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn with_resurrect(mut self, panel: ResurrectPanel) -> Self {
        self.resurrect = Some(panel);
        self
    }

    /// Resurrect panel, only while shown.
    pub fn visible_resurrect(&self) -> Option<&ResurrectPanel> {
        self.resurrect.as_ref().filter(|panel| panel.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_covers_every_modal_panel() {
        for panel in [
            UiPanels::CHECKPOINT,
            UiPanels::MARKET,
            UiPanels::LEFT_PANEL,
            UiPanels::RIGHT_PANEL,
            UiPanels::WORLD_MAP,
            UiPanels::NPC_DIALOG,
        ] {
            assert!(panel.is_blocking(), "{panel:?}");
        }
        assert!(!UiPanels::empty().is_blocking());
    }

    #[test]
    fn resurrect_prefers_checkpoint_button() {
        let checkpoint = UiNode::button("checkpoint", crate::ScreenRect::new(0, 0, 10, 10));
        let town = UiNode::button("town", crate::ScreenRect::new(50, 0, 10, 10));

        let both = ResurrectPanel {
            visible: true,
            at_checkpoint: Some(checkpoint.clone()),
            in_town: Some(town.clone()),
        };
        assert_eq!(both.preferred_button(), Some(&checkpoint));

        let town_only = ResurrectPanel {
            visible: true,
            at_checkpoint: None,
            in_town: Some(town.clone()),
        };
        assert_eq!(town_only.preferred_button(), Some(&town));
    }

    #[test]
    fn hidden_resurrect_panel_is_ignored() {
        let snapshot = WorldSnapshot::default().with_resurrect(ResurrectPanel::default());
        assert!(snapshot.visible_resurrect().is_none());
    }

    #[test]
    fn snapshot_round_trips_through_ron() {
        let snapshot = WorldSnapshot::in_area(AreaInfo::hideout("Hideout"), Vec3::ZERO)
            .with_player(PlayerEntity::new("Bob", Vec3::new(10.0, 0.0, 0.0)))
            .with_panels(UiPanels::WORLD_MAP);

        let text = ron::to_string(&snapshot).expect("serialize");
        let back: WorldSnapshot = ron::from_str(&text).expect("parse");
        assert_eq!(back, snapshot);
    }
}
