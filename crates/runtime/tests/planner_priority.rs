mod common;

use common::*;
use copilot_core::{
    Action, AreaInfo, CooldownKind, FollowUp, GroundLabel, Key, Millis, MonsterEntity,
    PlayerEntity, ProjectileEntity, Rarity, ResurrectPanel, ScreenRect, UiNode, UiPanels, Vec3,
    WorldSnapshot,
};
use copilot_runtime::{Planner, PlannerMemory};

fn rare_at(x: f32) -> MonsterEntity {
    MonsterEntity {
        position: at(x, 0.0),
        alive: true,
        rarity: Rarity::Rare,
    }
}

#[test]
fn blocking_panel_wins_over_reachable_leader() {
    for panel in [UiPanels::CHECKPOINT, UiPanels::MARKET, UiPanels::WORLD_MAP, UiPanels::NPC_DIALOG] {
        let snapshot = with_leader_at(1_000.0).with_panels(panel);
        let decision = plan(snapshot, &settings());

        assert_eq!(decision.branch, "dismiss_ui");
        assert_eq!(decision.action, Action::DismissUi { key: Key::Space });
        assert_eq!(decision.arms.get(CooldownKind::Action), Some(100));
    }
}

#[test]
fn follow_distance_is_inclusive() {
    let settings = settings();

    let at_boundary = plan(with_leader_at(200.0), &settings);
    assert_eq!(at_boundary.branch, "in_range");
    assert_eq!(at_boundary.action, Action::Idle);

    let just_outside = plan(with_leader_at(201.0), &settings);
    assert_eq!(just_outside.action, Action::MoveToward { position: at(201.0, 0.0) });
}

#[test]
fn leader_found_by_name_is_walked_to() {
    let mut settings = settings();
    settings.follow_distance = 150.0;
    let snapshot = field()
        .with_player(PlayerEntity::new("Alice", at(50.0, 0.0)))
        .with_player(PlayerEntity::new("bob", at(0.0, 200.0)));

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.branch, "move");
    assert_eq!(decision.action, Action::MoveToward { position: at(0.0, 200.0) });
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(settings.action_cooldown_ms));
}

#[test]
fn unset_anchor_is_seeded_from_leader() {
    let decision = plan(with_leader_at(500.0), &settings());
    assert_eq!(decision.anchor, Some(at(500.0, 0.0)));

    let memory = PlannerMemory {
        last_target_position: Some(at(1.0, 1.0)),
        ..PlannerMemory::default()
    };
    let decision = plan_with(with_leader_at(500.0), &settings(), &memory);
    assert_eq!(decision.anchor, None);
}

#[test]
fn gating_reasons_all_idle() {
    let base = with_leader_at(1_000.0);

    let mut disabled = settings();
    disabled.enable = false;
    let mut paused = settings();
    paused.paused = true;

    let mut unfocused = base.clone();
    unfocused.host.focused = false;
    let mut loading = base.clone();
    loading.host.loading = true;
    let mut no_player = base.clone();
    no_player.host.player_present = false;

    let cases: Vec<(WorldSnapshot, _)> = vec![
        (base.clone(), disabled),
        (base.clone(), paused),
        (unfocused, settings()),
        (loading, settings()),
        (no_player, settings()),
    ];
    for (snapshot, settings) in cases {
        let decision = plan(snapshot, &settings);
        assert_eq!(decision.branch, "gating");
        assert_eq!(decision.action, Action::Idle);
        assert!(decision.arms.is_empty());
    }
}

#[test]
fn pending_cooldowns_gate_the_tick() {
    for kind in [CooldownKind::Action, CooldownKind::AreaChange] {
        let mut memory = PlannerMemory::default();
        memory.cooldowns.arm(kind, NOW, 1);

        let decision = plan_with(with_leader_at(1_000.0).with_panels(UiPanels::MARKET), &settings(), &memory);
        assert_eq!(decision.branch, "gating", "{kind}");
        assert_eq!(decision.action, Action::Idle);
    }
}

#[test]
fn resurrect_prefers_checkpoint_and_arms_grace() {
    let checkpoint = UiNode::button("checkpoint", ScreenRect::new(100, 100, 50, 20));
    let town = UiNode::button("town", ScreenRect::new(300, 100, 50, 20));
    let panel = ResurrectPanel {
        visible: true,
        at_checkpoint: Some(checkpoint.clone()),
        in_town: Some(town.clone()),
    };

    let decision = plan(with_leader_at(1_000.0).with_resurrect(panel), &settings());

    assert_eq!(decision.branch, "resurrect");
    assert_eq!(decision.action, Action::Resurrect { button: center(&checkpoint) });
    assert_eq!(decision.arms.get(CooldownKind::AreaChange), Some(3_000));
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(3_000));

    let town_only = ResurrectPanel {
        visible: true,
        at_checkpoint: None,
        in_town: Some(town.clone()),
    };
    let decision = plan(field().with_resurrect(town_only), &settings());
    assert_eq!(decision.action, Action::Resurrect { button: center(&town) });
}

#[test]
fn resurrect_without_button_waits() {
    let panel = ResurrectPanel {
        visible: true,
        ..ResurrectPanel::default()
    };
    let decision = plan(with_leader_at(1_000.0).with_resurrect(panel), &settings());

    assert_eq!(decision.branch, "resurrect");
    assert_eq!(decision.action, Action::Idle);
    assert!(decision.arms.is_empty());
}

#[test]
fn absent_leader_prefers_pending_confirmation() {
    let snapshot = field()
        .with_party_panel(leader_party_panel())
        .with_popup(teleport_popup())
        .with_label(portal(100.0, 0.0));

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.branch, "leader_absent");
    assert_eq!(decision.action, Action::ConfirmTeleport { button: center(&confirm_button()) });
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(500));
}

#[test]
fn absent_leader_requests_teleport_from_party_panel() {
    let snapshot = field()
        .with_party_panel(leader_party_panel())
        .with_label(portal(100.0, 0.0));

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.action, Action::RequestTeleport { button: center(&teleport_button()) });
}

#[test]
fn unrelated_popup_is_not_a_confirmation() {
    let snapshot = field()
        .with_party_panel(leader_party_panel())
        .with_popup(popup("Are you sure you want to leave the party?"));

    let decision = plan(snapshot, &settings());

    assert!(matches!(decision.action, Action::RequestTeleport { .. }));
}

#[test]
fn absent_leader_falls_back_to_portal_then_idle() {
    let hidden_button = party_panel(vec![party_entry(LEADER, "Town", Some(teleport_button().hidden()))]);

    let with_portal = field()
        .with_party_panel(hidden_button.clone())
        .with_label(portal(300.0, 0.0));
    let decision = plan(with_portal, &settings());
    assert_eq!(decision.action, Action::ClickPortal { position: at(300.0, 0.0) });
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(4_000));

    let nothing = field().with_party_panel(hidden_button);
    let decision = plan(nothing, &settings());
    assert_eq!(decision.branch, "leader_absent");
    assert_eq!(decision.action, Action::Idle);
}

#[test]
fn absent_leader_needs_a_target_name_to_take_portals() {
    let mut settings = settings();
    settings.target_player_name.clear();
    let snapshot = field()
        .with_party_panel(leader_elsewhere_panel())
        .with_label(portal(300.0, 0.0));

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.branch, "leader_absent");
    assert_eq!(decision.action, Action::Idle);
    assert!(decision.arms.is_empty());
}

#[test]
fn absent_leader_missing_from_party_panel_stays_put() {
    let strangers = party_panel(vec![party_entry("Alice", "The Mud Flats", None)]);

    for snapshot in [
        field().with_party_panel(strangers).with_label(portal(300.0, 0.0)),
        field().with_label(portal(300.0, 0.0)),
    ] {
        let decision = plan(snapshot, &settings());
        assert_eq!(decision.action, Action::Idle);
    }
}

#[test]
fn absent_leader_in_the_same_zone_is_not_chased_through_portals() {
    let same_zone = party_panel(vec![party_entry(LEADER, "The Coast", None)]);
    let snapshot = field()
        .with_party_panel(same_zone)
        .with_label(portal(300.0, 0.0));

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.action, Action::Idle);
}

#[test]
fn absent_leader_portal_ranks_from_last_known_position() {
    let memory = PlannerMemory {
        last_target_position: Some(at(1_000.0, 0.0)),
        ..PlannerMemory::default()
    };
    let snapshot = field()
        .with_party_panel(leader_elsewhere_panel())
        .with_label(portal(10.0, 0.0))
        .with_label(portal(900.0, 0.0));

    let decision = plan_with(snapshot, &settings(), &memory);

    assert_eq!(decision.action, Action::ClickPortal { position: at(900.0, 0.0) });
}

#[test]
fn hideout_preference_takes_nearby_portal_first() {
    let mut settings = settings();
    settings.hideout.prefer_nearby_portal = true;
    let hideout = || {
        WorldSnapshot::in_area(AreaInfo::hideout("Coastal Hideout"), Vec3::ZERO)
            .with_party_panel(leader_party_panel())
            .with_label(portal(800.0, 0.0))
    };

    let decision = plan(hideout(), &settings);
    assert_eq!(decision.action, Action::ClickPortal { position: at(800.0, 0.0) });

    settings.hideout.nearby_portal_range = 500.0;
    let decision = plan(hideout(), &settings);
    assert!(matches!(decision.action, Action::RequestTeleport { .. }));
}

#[test]
fn hideout_portal_choice_varies() {
    let snapshot = WorldSnapshot::in_area(AreaInfo::hideout("Hideout"), Vec3::ZERO)
        .with_party_panel(leader_elsewhere_panel())
        .with_label(portal(100.0, 0.0))
        .with_label(portal(200.0, 0.0))
        .with_label(portal(300.0, 0.0));
    let settings = settings();
    let mut planner = Planner::new(99);
    let memory = PlannerMemory::default();

    let mut counts = [0usize; 3];
    for _ in 0..600 {
        match planner.plan(snapshot.clone(), &settings, &memory, NOW).action {
            Action::ClickPortal { position } => counts[(position.x / 100.0) as usize - 1] += 1,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert!(counts.iter().all(|&count| count > 120), "{counts:?}");
}

#[test]
fn town_keeps_still_when_leader_present() {
    let snapshot = WorldSnapshot::in_area(AreaInfo::town("Lioneye's Watch"), Vec3::ZERO)
        .with_player(PlayerEntity::new(LEADER, at(2_000.0, 0.0)));

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.branch, "town");
    assert_eq!(decision.action, Action::Idle);
}

#[test]
fn combat_casts_at_rare_with_follow_up() {
    let mut settings = settings();
    settings.combat.enable = true;
    let snapshot = with_leader_at(100.0)
        .with_monster(rare_at(500.0))
        .with_monster(MonsterEntity {
            position: at(50.0, 0.0),
            alive: true,
            rarity: Rarity::Normal,
        })
        .with_projectile(ProjectileEntity {
            metadata: settings.combat.projectile_metadata.clone(),
            position: at(400.0, 0.0),
        });

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.branch, "combat");
    assert_eq!(
        decision.action,
        Action::CastOnTarget {
            target: at(500.0, 0.0),
            key: Key::Q,
            follow_up: Some(FollowUp {
                position: at(400.0, 0.0),
                key: Key::W,
            }),
        }
    );
    assert_eq!(decision.throttles.get(CooldownKind::Combat), Some(1_000));
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(100));
}

#[test]
fn combat_skips_follow_up_when_projectile_far_from_target() {
    let mut settings = settings();
    settings.combat.enable = true;
    let snapshot = with_leader_at(100.0)
        .with_monster(rare_at(500.0))
        .with_projectile(ProjectileEntity {
            metadata: settings.combat.projectile_metadata.clone(),
            position: at(-500.0, 0.0),
        });

    let decision = plan(snapshot, &settings);

    assert!(matches!(decision.action, Action::CastOnTarget { follow_up: None, .. }));
}

#[test]
fn combat_scan_is_throttled_even_without_target() {
    let mut settings = settings();
    settings.combat.enable = true;
    let snapshot = with_leader_at(1_000.0).with_monster(rare_at(5_000.0));

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.branch, "move");
    assert_eq!(decision.throttles.get(CooldownKind::Combat), Some(1_000));
}

#[test]
fn combat_waits_for_its_cooldown() {
    let mut settings = settings();
    settings.combat.enable = true;
    let mut memory = PlannerMemory::default();
    memory.cooldowns.arm(CooldownKind::Combat, NOW, 500);

    let decision = plan_with(with_leader_at(1_000.0).with_monster(rare_at(100.0)), &settings, &memory);

    assert_eq!(decision.branch, "move");
    assert!(decision.throttles.is_empty());
}

#[test]
fn loot_is_picked_up_near_the_leader() {
    let mut settings = settings();
    settings.pickup.enable = true;
    settings.pickup.filter = "Divine, Exalted".into();
    let snapshot = with_leader_at(900.0)
        .with_label(GroundLabel::item("Exalted Orb", at(0.0, 300.0)))
        .with_label(GroundLabel::item("Scroll of Wisdom", at(0.0, 10.0)));

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.branch, "loot");
    assert_eq!(
        decision.action,
        Action::PickUpItem {
            position: at(0.0, 300.0),
            label: "Exalted Orb".into(),
        }
    );
}

#[test]
fn loot_is_skipped_when_leader_beyond_leash() {
    let mut settings = settings();
    settings.pickup.enable = true;
    settings.pickup.filter = "Divine".into();
    let snapshot = with_leader_at(1_500.0).with_label(GroundLabel::item("Divine Orb", at(0.0, 10.0)));

    let decision = plan(snapshot, &settings);

    assert_eq!(decision.action, Action::MoveToward { position: at(1_500.0, 0.0) });
}

#[test]
fn loot_out_of_range_or_unfiltered_is_ignored() {
    let mut settings = settings();
    settings.pickup.enable = true;
    let snapshot = with_leader_at(500.0).with_label(GroundLabel::item("Divine Orb", at(0.0, 10.0)));

    settings.pickup.filter = String::new();
    assert_eq!(plan(snapshot.clone(), &settings).branch, "move");

    settings.pickup.filter = "Divine".into();
    settings.pickup.range = 5.0;
    assert_eq!(plan(snapshot, &settings).branch, "move");
}

#[test]
fn loot_can_rank_from_the_leader() {
    let mut settings = settings();
    settings.pickup.enable = true;
    settings.pickup.filter = "Orb".into();
    settings.pickup.use_target_position = true;
    let snapshot = with_leader_at(800.0)
        .with_label(GroundLabel::item("Chaos Orb", at(100.0, 0.0)))
        .with_label(GroundLabel::item("Divine Orb", at(750.0, 0.0)));

    let decision = plan(snapshot, &settings);

    assert!(matches!(
        decision.action,
        Action::PickUpItem { position, .. } if position == at(750.0, 0.0)
    ));
}

#[test]
fn stale_confirmation_is_escaped() {
    let snapshot = with_leader_at(500.0)
        .with_party_panel(leader_party_panel())
        .with_popup(teleport_popup());

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.branch, "stale_confirmation");
    assert_eq!(decision.action, Action::DismissUi { key: Key::Escape });
}

#[test]
fn stale_confirmation_needs_visible_teleport_control() {
    let snapshot = with_leader_at(500.0).with_popup(teleport_popup());
    assert_eq!(plan(snapshot, &settings()).branch, "move");
}

#[test]
fn long_range_takes_a_portal() {
    let snapshot = with_leader_at(5_000.0)
        .with_label(portal(200.0, 0.0))
        .with_label(portal(4_000.0, 0.0));

    let decision = plan(snapshot, &settings());

    assert_eq!(decision.branch, "long_range");
    assert_eq!(decision.action, Action::ClickPortal { position: at(4_000.0, 0.0) });
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(4_000));
}

#[test]
fn long_range_threshold_is_configurable() {
    let mut settings = settings();
    settings.long_range_distance = 4_000.0;
    let snapshot = with_leader_at(3_500.0).with_label(portal(200.0, 0.0));

    assert_eq!(plan(snapshot, &settings).branch, "move");
}

#[test]
fn long_range_without_portal_waits_a_cooldown() {
    let decision = plan(with_leader_at(5_000.0), &settings());

    assert_eq!(decision.branch, "long_range");
    assert_eq!(decision.action, Action::Idle);
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(100));
}

#[test]
fn dash_closes_the_gap_when_ready() {
    let mut settings = settings();
    settings.blink.enable = true;
    settings.blink.key = Key::E;

    let decision = plan(with_leader_at(401.0), &settings);
    assert_eq!(decision.branch, "dash");
    assert_eq!(decision.action, Action::Dash { toward: at(401.0, 0.0), key: Key::E });
    assert_eq!(decision.arms.get(CooldownKind::Blink), Some(1_500));
    assert_eq!(decision.arms.get(CooldownKind::Action), Some(100));

    let decision = plan(with_leader_at(400.0), &settings);
    assert_eq!(decision.branch, "move");
}

#[test]
fn dash_respects_its_cooldown_and_switch() {
    let mut settings = settings();
    let mut memory = PlannerMemory::default();
    memory.cooldowns.arm(CooldownKind::Blink, Millis(0), NOW.0 + 1);

    settings.blink.enable = true;
    assert_eq!(plan_with(with_leader_at(1_000.0), &settings, &memory).branch, "move");

    settings.blink.enable = false;
    assert_eq!(plan(with_leader_at(1_000.0), &settings).branch, "move");
}
