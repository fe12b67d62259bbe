//! Blackboard for one planning pass.
//!
//! [`PlannerContext`] owns the tick's snapshot and a copy of the memory, and
//! shares the planner's settings, so the priority tree can be built once and
//! ticked against a fresh context every frame. Leader lookups that several
//! branches need are resolved up front.
use std::sync::Arc;

use copilot_core::targeting::{find_leader, teleport_confirmation};
use copilot_core::world::leader_entry;
use copilot_core::{
    Action, CooldownKind, FollowSettings, Millis, PartyEntry, ScreenPoint, WorldSnapshot,
};
use glam::Vec3;
use rand::rngs::StdRng;

use super::decision::{Arm, Arms, Decision};
use super::PlannerMemory;

pub struct PlannerContext {
    pub snapshot: WorldSnapshot,
    pub settings: Arc<FollowSettings>,
    pub now: Millis,
    pub memory: PlannerMemory,
    pub rng: StdRng,

    leader: Option<Vec3>,
    leader_entry: Option<PartyEntry>,
    confirmation: Option<ScreenPoint>,
    anchor_seeded: bool,

    chosen: Option<(Action, Arms)>,
    throttles: Arms,
}

impl PlannerContext {
    pub fn new(
        snapshot: WorldSnapshot,
        settings: Arc<FollowSettings>,
        mut memory: PlannerMemory,
        now: Millis,
        rng: StdRng,
    ) -> Self {
        let name = settings.target_player_name.as_str();
        let leader = find_leader(&snapshot.players, name).map(|player| player.position);
        let leader_entry = snapshot
            .party_panel
            .as_ref()
            .and_then(|panel| leader_entry(panel, &settings.layout, name));
        let confirmation = snapshot
            .popup
            .as_ref()
            .and_then(|popup| teleport_confirmation(popup, &settings.layout))
            .map(|button| button.click_point());

        let mut anchor_seeded = false;
        if let Some(position) = leader
            && memory.last_target_position.is_none()
        {
            memory.last_target_position = Some(position);
            anchor_seeded = true;
        }

        Self {
            snapshot,
            settings,
            now,
            memory,
            rng,
            leader,
            leader_entry,
            confirmation,
            anchor_seeded,
            chosen: None,
            throttles: Arms::new(),
        }
    }

    pub fn player_position(&self) -> Vec3 {
        self.snapshot.player_position
    }

    /// Leader's position, if the leader is in the entity list.
    pub fn leader(&self) -> Option<Vec3> {
        self.leader
    }

    pub fn distance_to_leader(&self) -> Option<f32> {
        self.leader
            .map(|leader| self.player_position().distance(leader))
    }

    /// Party panel entry for the leader.
    pub fn leader_entry(&self) -> Option<&PartyEntry> {
        self.leader_entry.as_ref()
    }

    /// Visible teleport control of the leader's party entry.
    pub fn teleport_button(&self) -> Option<ScreenPoint> {
        self.leader_entry
            .as_ref()
            .and_then(PartyEntry::teleport_button)
            .map(|button| button.click_point())
    }

    /// Confirm button of a pending teleport popup.
    pub fn confirmation(&self) -> Option<ScreenPoint> {
        self.confirmation
    }

    /// Reference point for portal ranking.
    pub fn portal_anchor(&self) -> Vec3 {
        self.memory
            .last_target_position
            .unwrap_or(self.snapshot.player_position)
    }

    pub fn is_ready(&self, kind: CooldownKind) -> bool {
        self.memory.cooldowns.is_ready(kind, self.now)
    }

    /// Records the tick's action and the cooldowns to arm once it runs.
    pub fn set_action(&mut self, action: Action, arms: impl Into<Arms>) {
        debug_assert!(
            self.chosen.is_none(),
            "action already chosen this tick: {:?}",
            self.chosen
        );
        self.chosen = Some((action, arms.into()));
    }

    /// Stays idle this tick, arming nothing.
    pub fn stay_idle(&mut self) {
        self.set_action(Action::Idle, Arms::new());
    }

    /// Arms `kind` regardless of what the tick ends up doing.
    pub fn throttle(&mut self, kind: CooldownKind, duration_ms: u64) {
        self.throttles.push(Arm::new(kind, duration_ms));
    }

    pub fn has_action(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn into_decision(self, branch: &'static str) -> Decision {
        let (action, arms) = self.chosen.unwrap_or((Action::Idle, Arms::new()));
        Decision {
            branch,
            action,
            arms,
            throttles: self.throttles,
            anchor: self
                .anchor_seeded
                .then_some(self.memory.last_target_position)
                .flatten(),
        }
    }
}
