//! The single output of one planning tick.
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::ScreenPoint;
use crate::key::Key;

/// Secondary skill chained after a combat cast, aimed at a tracked
/// projectile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub position: Vec3,
    pub key: Key,
}

/// What the bot does this tick.
///
/// `ScreenPoint`s are relative to the client window; world positions go
/// through the host's camera projection at execution time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Close a modal panel or stale popup with one key press.
    DismissUi { key: Key },
    Resurrect { button: ScreenPoint },
    /// Accept a pending teleport-to-player popup.
    ConfirmTeleport { button: ScreenPoint },
    /// Press the party panel's teleport control for the leader.
    RequestTeleport { button: ScreenPoint },
    ClickPortal { position: Vec3 },
    PickUpItem { position: Vec3, label: String },
    CastOnTarget {
        target: Vec3,
        key: Key,
        follow_up: Option<FollowUp>,
    },
    /// Gap-closer toward the leader.
    Dash { toward: Vec3, key: Key },
    MoveToward { position: Vec3 },
    Idle,
}

impl Action {
    /// Short stable name for logs and tallies.
    pub const fn label(&self) -> &'static str {
        match self {
            Action::DismissUi { .. } => "dismiss_ui",
            Action::Resurrect { .. } => "resurrect",
            Action::ConfirmTeleport { .. } => "confirm_teleport",
            Action::RequestTeleport { .. } => "request_teleport",
            Action::ClickPortal { .. } => "click_portal",
            Action::PickUpItem { .. } => "pick_up_item",
            Action::CastOnTarget { .. } => "cast_on_target",
            Action::Dash { .. } => "dash",
            Action::MoveToward { .. } => "move_toward",
            Action::Idle => "idle",
        }
    }

    /// True for actions that walk or dash toward the leader.
    pub const fn is_movement(&self) -> bool {
        matches!(self, Action::MoveToward { .. } | Action::Dash { .. })
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }

    /// World point the character heads toward, if any.
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            Action::MoveToward { position } => Some(*position),
            Action::Dash { toward, .. } => Some(*toward),
            _ => None,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walking_and_dashing_count_as_movement() {
        let toward = Vec3::new(1.0, 2.0, 0.0);
        assert!(Action::MoveToward { position: toward }.is_movement());
        assert!(Action::Dash { toward, key: Key::Space }.is_movement());
        assert!(!Action::ClickPortal { position: toward }.is_movement());
        assert!(!Action::Idle.is_movement());
    }

    #[test]
    fn destination_follows_movement() {
        let toward = Vec3::new(5.0, 0.0, 0.0);
        assert_eq!(Action::Dash { toward, key: Key::E }.destination(), Some(toward));
        assert_eq!(Action::DismissUi { key: Key::Space }.destination(), None);
    }
}
