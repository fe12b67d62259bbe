#![allow(dead_code)]

use copilot_core::{
    AreaInfo, FollowSettings, GroundLabel, Millis, PlayerEntity, ScreenPoint, ScreenRect, UiLayout,
    UiNode, Vec3, WorldSnapshot,
};
use copilot_runtime::{Decision, Planner, PlannerMemory};

pub const LEADER: &str = "Bob";
pub const NOW: Millis = Millis(10_000);

pub fn at(x: f32, y: f32) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

/// Ready host in a regular zone, player at the origin.
pub fn field() -> WorldSnapshot {
    WorldSnapshot::in_area(AreaInfo::new("The Coast"), Vec3::ZERO)
}

pub fn with_leader_at(x: f32) -> WorldSnapshot {
    field().with_player(PlayerEntity::new(LEADER, at(x, 0.0)))
}

pub fn settings() -> FollowSettings {
    FollowSettings::following(LEADER)
}

pub fn portal(x: f32, y: f32) -> GroundLabel {
    GroundLabel::portal("Metadata/MiscellaneousObjects/AreaTransition", at(x, y))
}

pub fn teleport_button() -> UiNode {
    UiNode::button("teleport", ScreenRect::new(40, 200, 20, 20))
}

pub fn party_entry(name: &str, zone: &str, teleport: Option<UiNode>) -> UiNode {
    let mut children = vec![
        UiNode::label(name),
        UiNode::default(),
        UiNode::default(),
        UiNode::label(zone),
    ];
    children.extend(teleport);
    UiNode::container(children)
}

/// Party panel laid out the way [`UiLayout::default`] expects.
pub fn party_panel(entries: Vec<UiNode>) -> UiNode {
    UiNode::container(vec![UiNode::container(vec![UiNode::container(entries)])])
}

/// Party panel listing the leader with a visible teleport control.
pub fn leader_party_panel() -> UiNode {
    party_panel(vec![party_entry(LEADER, "The Mud Flats", Some(teleport_button()))])
}

/// Party panel placing the leader in another zone, teleport control hidden.
pub fn leader_elsewhere_panel() -> UiNode {
    party_panel(vec![party_entry(LEADER, "The Mud Flats", Some(teleport_button().hidden()))])
}

pub fn confirm_button() -> UiNode {
    UiNode::button("accept", ScreenRect::new(600, 400, 100, 30))
}

pub fn popup(message: &str) -> UiNode {
    let dialog = UiNode::container(vec![
        UiNode::label(message),
        UiNode::default(),
        UiNode::default(),
        UiNode::container(vec![confirm_button()]),
    ]);
    UiNode::container(vec![UiNode::container(vec![dialog])])
}

pub fn teleport_popup() -> UiNode {
    popup(UiLayout::DEFAULT_TELEPORT_PROMPT)
}

pub fn center(node: &UiNode) -> ScreenPoint {
    node.click_point()
}

pub fn plan_with(snapshot: WorldSnapshot, settings: &FollowSettings, memory: &PlannerMemory) -> Decision {
    Planner::new(7).plan(snapshot, settings, memory, NOW)
}

pub fn plan(snapshot: WorldSnapshot, settings: &FollowSettings) -> Decision {
    plan_with(snapshot, settings, &PlannerMemory::default())
}
