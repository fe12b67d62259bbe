//! Named cooldown timers gating classes of action.
//!
//! Each [`CooldownKind`] owns one "next allowed" deadline. A kind is ready
//! once the current time reaches its deadline; a kind that was never armed is
//! always ready.
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::clock::Millis;

/// Classes of action that share a timer.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum CooldownKind {
    /// Global pacing between any two issued actions.
    Action,
    /// Blink / dash gap-closer.
    Blink,
    /// Combat skill reaction (and its target scan).
    Combat,
    /// Settling window after a zone transition or resurrection.
    AreaChange,
}

impl CooldownKind {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Deadlines for every [`CooldownKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownRegistry {
    deadlines: [Option<Millis>; CooldownKind::COUNT],
}

impl CooldownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `kind` may fire at `now`.
    pub fn is_ready(&self, kind: CooldownKind, now: Millis) -> bool {
        match self.deadlines[kind.index()] {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// Blocks `kind` until `now + duration_ms`.
    ///
    /// The new deadline replaces the old one even if it is earlier.
    pub fn arm(&mut self, kind: CooldownKind, now: Millis, duration_ms: u64) {
        self.deadlines[kind.index()] = Some(now + duration_ms);
    }

    /// Makes `kind` ready from `now` on.
    pub fn reset(&mut self, kind: CooldownKind, now: Millis) {
        self.deadlines[kind.index()] = Some(now);
    }

    /// Resets every kind to `now`.
    pub fn reset_all(&mut self, now: Millis) {
        for kind in CooldownKind::iter() {
            self.reset(kind, now);
        }
    }

    /// Milliseconds until `kind` becomes ready (zero when ready).
    pub fn remaining(&self, kind: CooldownKind, now: Millis) -> u64 {
        self.deadlines[kind.index()]
            .map(|deadline| deadline.saturating_since(now))
            .unwrap_or(0)
    }

    pub fn deadline(&self, kind: CooldownKind) -> Option<Millis> {
        self.deadlines[kind.index()]
    }

    /// All kinds with their current deadline.
    pub fn iter(&self) -> impl Iterator<Item = (CooldownKind, Option<Millis>)> + '_ {
        CooldownKind::iter().map(|kind| (kind, self.deadline(kind)))
    }
}
