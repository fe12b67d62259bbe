//! The priority chain, highest priority first.
use behavior_tree::builder::{condition, guard, named, selector, sequence};
use behavior_tree::{Behavior, Selector};

use super::PlannerContext;
use super::nodes::conditions::*;
use super::nodes::*;

type Node = Box<dyn Behavior<PlannerContext>>;

fn when(name: &'static str, predicate: fn(&PlannerContext) -> bool, then: Node) -> Node {
    named(name, sequence(vec![condition(name, predicate), then]))
}

/// Leader not in the entity list: reach them through the party panel or a
/// portal. Portals are only taken toward a leader the party panel places
/// in another zone.
fn leader_absent_branch() -> Node {
    let hideout_portal = guard(
        hideout_portal_preferred,
        guard(in_hideout, Box::new(TakeNearbyPortal)),
    );
    when(
        "leader_absent",
        leader_absent,
        selector(vec![
            guard(leader_in_other_zone, hideout_portal),
            Box::new(ConfirmTeleport),
            Box::new(RequestTeleport),
            guard(leader_in_other_zone, Box::new(TakeBestPortal)),
            Box::new(StayIdle),
        ]),
    )
}

pub fn follow_policy() -> Selector<PlannerContext> {
    Selector::new(vec![
        when("gating", is_gated, Box::new(StayIdle)),
        when("dismiss_ui", blocking_panel_open, Box::new(DismissPanel)),
        when("resurrect", resurrect_panel_shown, Box::new(ClickResurrect)),
        leader_absent_branch(),
        when("town", in_town, Box::new(StayIdle)),
        named("combat", guard(combat_enabled, Box::new(CombatReaction))),
        named(
            "loot",
            guard(
                pickup_enabled,
                sequence(vec![
                    condition("leader_within_leash", leader_within_leash),
                    Box::new(PickUpLoot),
                ]),
            ),
        ),
        when("in_range", leader_within_follow_distance, Box::new(StayIdle)),
        when(
            "stale_confirmation",
            stale_confirmation,
            Box::new(DismissConfirmation),
        ),
        when(
            "long_range",
            leader_beyond_long_range,
            selector(vec![Box::new(TakeBestPortal), Box::new(WaitForCooldown)]),
        ),
        named(
            "dash",
            guard(
                blink_enabled,
                sequence(vec![
                    condition("blink_wanted", blink_wanted),
                    Box::new(DashTowardLeader),
                ]),
            ),
        ),
        named("move", Box::new(MoveTowardLeader)),
    ])
    .with_name("follow")
}
