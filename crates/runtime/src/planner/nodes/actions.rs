//! Action nodes. Each one either chooses the tick's action (Success) or
//! leaves the context untouched (Failure).
use behavior_tree::{Behavior, Status};
use copilot_core::targeting::{
    LootFilter, portal_within, select_boss, select_loot, select_portal, select_projectile,
};
use copilot_core::{Action, CooldownKind, FollowUp};

use crate::planner::PlannerContext;
use crate::planner::decision::{Arm, Arms};

fn general(ctx: &PlannerContext) -> Arm {
    Arm::new(CooldownKind::Action, ctx.settings.action_cooldown_ms)
}

/// Does nothing this tick. Always succeeds.
pub struct StayIdle;

impl Behavior<PlannerContext> for StayIdle {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        ctx.stay_idle();
        Status::Success
    }

    fn name(&self) -> &'static str {
        "stay_idle"
    }
}

/// Idle, but still paces the next attempt with the general cooldown.
pub struct WaitForCooldown;

impl Behavior<PlannerContext> for WaitForCooldown {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let arm = general(ctx);
        ctx.set_action(Action::Idle, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "wait_for_cooldown"
    }
}

/// Closes a modal panel with the dismiss key.
pub struct DismissPanel;

impl Behavior<PlannerContext> for DismissPanel {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let action = Action::DismissUi {
            key: ctx.settings.dismiss_key,
        };
        let arm = general(ctx);
        ctx.set_action(action, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "dismiss_panel"
    }
}

/// Closes a leftover teleport popup with the escape key.
pub struct DismissConfirmation;

impl Behavior<PlannerContext> for DismissConfirmation {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let action = Action::DismissUi {
            key: ctx.settings.escape_key,
        };
        let arm = general(ctx);
        ctx.set_action(action, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "dismiss_confirmation"
    }
}

/// Clicks the checkpoint (or town) respawn button.
///
/// Respawning loads the area again, so it arms the same grace window an
/// area change does.
pub struct ClickResurrect;

impl Behavior<PlannerContext> for ClickResurrect {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let button = ctx
            .snapshot
            .visible_resurrect()
            .and_then(|panel| panel.preferred_button())
            .filter(|button| button.visible)
            .map(|button| button.click_point());

        match button {
            Some(button) => {
                let grace = ctx.settings.area_change_grace_ms;
                ctx.set_action(
                    Action::Resurrect { button },
                    [
                        Arm::new(CooldownKind::AreaChange, grace),
                        Arm::new(CooldownKind::Action, grace),
                    ],
                );
            }
            None => {
                tracing::debug!("resurrect panel without a usable button");
                ctx.stay_idle();
            }
        }
        Status::Success
    }

    fn name(&self) -> &'static str {
        "click_resurrect"
    }
}

/// Accepts a pending teleport-to-player popup.
pub struct ConfirmTeleport;

impl Behavior<PlannerContext> for ConfirmTeleport {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let Some(button) = ctx.confirmation() else {
            return Status::Failure;
        };
        let arm = Arm::new(
            CooldownKind::Action,
            ctx.settings.teleport_request_cooldown_ms,
        );
        ctx.set_action(Action::ConfirmTeleport { button }, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "confirm_teleport"
    }
}

/// Presses the leader's teleport control in the party panel.
pub struct RequestTeleport;

impl Behavior<PlannerContext> for RequestTeleport {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let Some(button) = ctx.teleport_button() else {
            return Status::Failure;
        };
        if let Some(entry) = ctx.leader_entry() {
            tracing::debug!(
                leader = %entry.player_name,
                zone = entry.zone_name.as_deref().unwrap_or("?"),
                "requesting teleport to leader"
            );
        }
        let arm = Arm::new(
            CooldownKind::Action,
            ctx.settings.teleport_request_cooldown_ms,
        );
        ctx.set_action(Action::RequestTeleport { button }, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "request_teleport"
    }
}

/// Clicks the best portal ranked from the last known leader position.
pub struct TakeBestPortal;

impl Behavior<PlannerContext> for TakeBestPortal {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let anchor = ctx.portal_anchor();
        let is_hideout = ctx.snapshot.area.is_hideout;
        let Some(position) = select_portal(
            &ctx.snapshot.ground_labels,
            anchor,
            is_hideout,
            &mut ctx.rng,
        )
        .map(|label| label.position) else {
            return Status::Failure;
        };

        let arm = Arm::new(
            CooldownKind::Action,
            ctx.settings.portal_transition_cooldown_ms,
        );
        ctx.set_action(Action::ClickPortal { position }, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "take_best_portal"
    }
}

/// In a hideout, takes a portal close to the player before anything else.
pub struct TakeNearbyPortal;

impl Behavior<PlannerContext> for TakeNearbyPortal {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let range = ctx.settings.hideout.nearby_portal_range;
        let Some(position) = portal_within(
            &ctx.snapshot.ground_labels,
            ctx.player_position(),
            range,
        )
        .map(|label| label.position) else {
            return Status::Failure;
        };

        let arm = Arm::new(
            CooldownKind::Action,
            ctx.settings.portal_transition_cooldown_ms,
        );
        ctx.set_action(Action::ClickPortal { position }, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "take_nearby_portal"
    }
}

/// Casts at the nearest Rare or Unique monster in range.
///
/// The scan itself is throttled by the combat cooldown, so a miss still
/// blocks the next scan.
pub struct CombatReaction;

impl Behavior<PlannerContext> for CombatReaction {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        if !ctx.is_ready(CooldownKind::Combat) {
            return Status::Failure;
        }
        ctx.throttle(CooldownKind::Combat, ctx.settings.combat.cooldown_ms);

        let combat = &ctx.settings.combat;
        let player = ctx.snapshot.player_position;
        let Some(target) = select_boss(&ctx.snapshot.monsters, player)
            .map(|monster| monster.position)
            .filter(|target| target.distance(player) <= combat.range)
        else {
            return Status::Failure;
        };

        let follow_up = combat.follow_up_key.and_then(|key| {
            select_projectile(&ctx.snapshot.projectiles, &combat.projectile_metadata, target)
                .filter(|projectile| projectile.position.distance(target) <= combat.follow_up_range)
                .map(|projectile| FollowUp {
                    position: projectile.position,
                    key,
                })
        });

        let action = Action::CastOnTarget {
            target,
            key: combat.skill_key,
            follow_up,
        };
        let arm = general(ctx);
        ctx.set_action(action, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "combat_reaction"
    }
}

/// Clicks the nearest ground item matching the loot filter.
pub struct PickUpLoot;

impl Behavior<PlannerContext> for PickUpLoot {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let pickup = &ctx.settings.pickup;
        let filter = LootFilter::parse(&pickup.filter);
        let origin = match ctx.leader() {
            Some(leader) if pickup.use_target_position => leader,
            _ => ctx.player_position(),
        };

        let Some(item) = select_loot(&ctx.snapshot.ground_labels, &filter, origin)
            .filter(|label| label.position.distance(origin) <= pickup.range)
        else {
            return Status::Failure;
        };

        let action = Action::PickUpItem {
            position: item.position,
            label: item.text.clone().unwrap_or_default(),
        };
        let arm = general(ctx);
        ctx.set_action(action, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "pick_up_loot"
    }
}

/// Gap-closer toward the leader.
pub struct DashTowardLeader;

impl Behavior<PlannerContext> for DashTowardLeader {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let Some(toward) = ctx.leader() else {
            return Status::Failure;
        };
        let blink = &ctx.settings.blink;
        let arms = Arms::from([
            Arm::new(CooldownKind::Blink, blink.cooldown_ms),
            general(ctx),
        ]);
        let action = Action::Dash {
            toward,
            key: blink.key,
        };
        ctx.set_action(action, arms);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "dash_toward_leader"
    }
}

/// Walks toward the leader.
pub struct MoveTowardLeader;

impl Behavior<PlannerContext> for MoveTowardLeader {
    fn tick(&self, ctx: &mut PlannerContext) -> Status {
        let Some(position) = ctx.leader() else {
            return Status::Failure;
        };
        let arm = general(ctx);
        ctx.set_action(Action::MoveToward { position }, [arm]);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "move_toward_leader"
    }
}
