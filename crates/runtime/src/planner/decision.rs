//! What one planning pass hands back to the orchestrator.
use arrayvec::ArrayVec;
use copilot_core::{Action, CooldownKind, CooldownRegistry, Millis};
use glam::Vec3;
use strum::EnumCount;

/// Request to block a cooldown kind for `duration_ms` from the tick time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arm {
    pub kind: CooldownKind,
    pub duration_ms: u64,
}

impl Arm {
    pub const fn new(kind: CooldownKind, duration_ms: u64) -> Self {
        Self { kind, duration_ms }
    }
}

/// At most one arm per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arms(ArrayVec<Arm, { CooldownKind::COUNT }>);

impl Arms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `arm`, replacing an earlier arm of the same kind.
    pub fn push(&mut self, arm: Arm) {
        match self.0.iter_mut().find(|existing| existing.kind == arm.kind) {
            Some(existing) => *existing = arm,
            None => self.0.push(arm),
        }
    }

    pub fn get(&self, kind: CooldownKind) -> Option<u64> {
        self.0
            .iter()
            .find(|arm| arm.kind == kind)
            .map(|arm| arm.duration_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arm> {
        self.0.iter()
    }

    pub fn apply(&self, cooldowns: &mut CooldownRegistry, now: Millis) {
        for arm in &self.0 {
            cooldowns.arm(arm.kind, now, arm.duration_ms);
        }
    }
}

impl<const N: usize> From<[Arm; N]> for Arms {
    fn from(arms: [Arm; N]) -> Self {
        let mut out = Self::new();
        for arm in arms {
            out.push(arm);
        }
        out
    }
}

/// Result of one planning pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// Name of the priority branch that produced the action.
    pub branch: &'static str,
    pub action: Action,
    /// Applied only once the action has been executed.
    pub arms: Arms,
    /// Applied whether or not anything executes.
    pub throttles: Arms,
    /// New last-known leader position to remember, if any.
    pub anchor: Option<Vec3>,
}
