//! Predicates read by the priority chain. None of them mutate the context.
use copilot_core::CooldownKind;

use crate::planner::PlannerContext;

/// Any reason to sit this tick out entirely.
pub fn is_gated(ctx: &PlannerContext) -> bool {
    let host = &ctx.snapshot.host;
    let reason = if !ctx.settings.enable {
        "disabled"
    } else if ctx.settings.paused {
        "paused"
    } else if !host.focused {
        "window not focused"
    } else if host.loading {
        "loading"
    } else if !host.player_present {
        "no player"
    } else if !ctx.is_ready(CooldownKind::AreaChange) {
        "area change grace"
    } else if !ctx.is_ready(CooldownKind::Action) {
        "action cooldown"
    } else {
        return false;
    };
    tracing::trace!(reason, "tick gated");
    true
}

pub fn blocking_panel_open(ctx: &PlannerContext) -> bool {
    ctx.snapshot.panels.is_blocking()
}

pub fn resurrect_panel_shown(ctx: &PlannerContext) -> bool {
    ctx.snapshot.visible_resurrect().is_some()
}

pub fn leader_absent(ctx: &PlannerContext) -> bool {
    ctx.leader().is_none()
}

/// Leader listed in the party panel as being in another zone.
///
/// Without a configured name or a party entry there is nobody to chase
/// through a portal.
pub fn leader_in_other_zone(ctx: &PlannerContext) -> bool {
    if ctx.settings.target_player_name.trim().is_empty() {
        return false;
    }
    ctx.leader_entry().is_some_and(|entry| {
        entry
            .zone_name
            .as_deref()
            .is_none_or(|zone| !zone.trim().eq_ignore_ascii_case(ctx.snapshot.area.name.trim()))
    })
}

pub fn in_town(ctx: &PlannerContext) -> bool {
    ctx.snapshot.area.is_town
}

pub fn in_hideout(ctx: &PlannerContext) -> bool {
    ctx.snapshot.area.is_hideout
}

pub fn combat_enabled(ctx: &PlannerContext) -> bool {
    ctx.settings.combat.enable
}

pub fn pickup_enabled(ctx: &PlannerContext) -> bool {
    ctx.settings.pickup.enable
}

pub fn blink_enabled(ctx: &PlannerContext) -> bool {
    ctx.settings.blink.enable
}

pub fn hideout_portal_preferred(ctx: &PlannerContext) -> bool {
    ctx.settings.hideout.prefer_nearby_portal
}

/// Leader close enough that looting does not lose them.
pub fn leader_within_leash(ctx: &PlannerContext) -> bool {
    ctx.distance_to_leader()
        .is_some_and(|distance| distance <= ctx.settings.pickup.leader_leash)
}

/// Leader at or inside the follow distance.
pub fn leader_within_follow_distance(ctx: &PlannerContext) -> bool {
    ctx.distance_to_leader()
        .is_some_and(|distance| distance <= ctx.settings.follow_distance)
}

/// Teleport popup open although the leader's teleport control is still
/// offered, which a stale click leaves behind.
pub fn stale_confirmation(ctx: &PlannerContext) -> bool {
    ctx.confirmation().is_some() && ctx.teleport_button().is_some()
}

pub fn leader_beyond_long_range(ctx: &PlannerContext) -> bool {
    ctx.distance_to_leader()
        .is_some_and(|distance| distance > ctx.settings.long_range_distance)
}

pub fn blink_wanted(ctx: &PlannerContext) -> bool {
    ctx.is_ready(CooldownKind::Blink)
        && ctx
            .distance_to_leader()
            .is_some_and(|distance| distance > ctx.settings.blink.range)
}
