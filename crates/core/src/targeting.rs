//! Ranking heuristics: who to follow, which portal to take, what to loot and
//! what to shoot.
//!
//! Every selector is a pure function of snapshot data. Distances are
//! Euclidean in world space; ties keep the first candidate in input order.
use glam::Vec3;
use rand::Rng;

use crate::world::{GroundLabel, MonsterEntity, PlayerEntity, ProjectileEntity, UiLayout, UiNode};

const PORTAL_MARKERS: [&str; 2] = ["areatransition", "portal"];
const PORTAL_SUFFIX: &str = "ultimatumentrance";

/// Player entity named `name`, compared case-insensitively.
pub fn find_leader<'a>(players: &'a [PlayerEntity], name: &str) -> Option<&'a PlayerEntity> {
    if name.is_empty() {
        return None;
    }
    players
        .iter()
        .find(|player| player.name.eq_ignore_ascii_case(name))
}

/// True for labels marking a zone transition.
pub fn is_portal(label: &GroundLabel) -> bool {
    let metadata = label.metadata.to_ascii_lowercase();
    PORTAL_MARKERS.iter().any(|marker| metadata.contains(marker))
        || metadata.ends_with(PORTAL_SUFFIX)
}

fn nearest_by<T>(
    items: impl Iterator<Item = T>,
    origin: Vec3,
    position: impl Fn(&T) -> Vec3,
) -> Option<T> {
    items
        .fold(None, |best: Option<(T, f32)>, item| {
            let distance = position(&item).distance(origin);
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((item, distance)),
            }
        })
        .map(|(item, _)| item)
}

/// Portal labels ordered by distance to `anchor`, nearest first.
pub fn portal_candidates(labels: &[GroundLabel], anchor: Vec3) -> Vec<&GroundLabel> {
    let mut portals: Vec<&GroundLabel> = labels.iter().filter(|label| is_portal(label)).collect();
    portals.sort_by(|a, b| {
        a.position
            .distance(anchor)
            .total_cmp(&b.position.distance(anchor))
    });
    portals
}

/// Picks the portal to click.
///
/// Hideouts tend to have several equivalent exits, so the pick there is
/// uniform among all candidates; elsewhere it is the one nearest `anchor`.
pub fn select_portal<'a, R: Rng + ?Sized>(
    labels: &'a [GroundLabel],
    anchor: Vec3,
    is_hideout: bool,
    rng: &mut R,
) -> Option<&'a GroundLabel> {
    let candidates = portal_candidates(labels, anchor);
    if candidates.is_empty() {
        return None;
    }
    let index = if is_hideout {
        rng.gen_range(0..candidates.len())
    } else {
        0
    };
    candidates.get(index).copied()
}

/// Nearest portal to `origin` within `range`.
pub fn portal_within<'a>(
    labels: &'a [GroundLabel],
    origin: Vec3,
    range: f32,
) -> Option<&'a GroundLabel> {
    portal_candidates(labels, origin)
        .into_iter()
        .next()
        .filter(|label| label.position.distance(origin) <= range)
}

/// Substrings an item label must contain to be picked up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LootFilter {
    needles: Vec<String>,
}

impl LootFilter {
    /// Parses a comma-separated list; blanks are dropped.
    pub fn parse(raw: &str) -> Self {
        let needles = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        Self { needles }
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.needles
    }

    /// An empty filter matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        self.needles.iter().any(|needle| text.contains(needle.as_str()))
    }
}

/// Nearest item label to `origin` whose text passes `filter`.
pub fn select_loot<'a>(
    labels: &'a [GroundLabel],
    filter: &LootFilter,
    origin: Vec3,
) -> Option<&'a GroundLabel> {
    if filter.is_empty() {
        return None;
    }
    let matching = labels.iter().filter(|label| {
        label
            .text
            .as_deref()
            .is_some_and(|text| filter.matches(text))
    });
    nearest_by(matching, origin, |label| label.position)
}

/// Nearest living Rare or Unique monster to `origin`.
pub fn select_boss(monsters: &[MonsterEntity], origin: Vec3) -> Option<&MonsterEntity> {
    let bosses = monsters
        .iter()
        .filter(|monster| monster.alive && monster.rarity.is_boss());
    nearest_by(bosses, origin, |monster| monster.position)
}

/// Nearest projectile to `near` with exactly `metadata`.
pub fn select_projectile<'a>(
    projectiles: &'a [ProjectileEntity],
    metadata: &str,
    near: Vec3,
) -> Option<&'a ProjectileEntity> {
    let tracked = projectiles
        .iter()
        .filter(|projectile| projectile.metadata == metadata);
    nearest_by(tracked, near, |projectile| projectile.position)
}

/// Confirm button of a pending teleport-to-player popup.
///
/// Any other popup, or one whose shape differs from `layout`, means no
/// confirmation is pending.
pub fn teleport_confirmation<'a>(popup: &'a UiNode, layout: &UiLayout) -> Option<&'a UiNode> {
    if !popup.visible {
        return None;
    }
    let dialog = popup.resolve(&layout.popup_dialog)?;
    let message = dialog.resolve(&layout.popup_message)?.text()?;
    if !message.trim().eq_ignore_ascii_case(&layout.teleport_prompt) {
        return None;
    }
    dialog.resolve(&layout.popup_confirm)
}
