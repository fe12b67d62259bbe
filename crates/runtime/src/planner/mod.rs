//! Priority planner: picks at most one action per tick.
//!
//! The policy is a [`Selector`](behavior_tree::Selector) of named branches
//! evaluated from scratch every tick (see [`tree::follow_policy`]). The only
//! state carried between ticks is [`PlannerMemory`], which the caller passes
//! in and updates from the returned [`Decision`].
mod context;
mod decision;
pub mod nodes;
pub mod tree;

pub use context::PlannerContext;
pub use decision::{Arm, Arms, Decision};

use std::sync::Arc;

use behavior_tree::Selector;
use copilot_core::{CooldownRegistry, FollowSettings, Millis, WorldSnapshot};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// State carried from one tick to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlannerMemory {
    /// Where the leader was last seen or walked toward; anchors portal
    /// ranking while the leader is out of sight.
    pub last_target_position: Option<Vec3>,
    pub cooldowns: CooldownRegistry,
}

pub struct Planner {
    policy: Selector<PlannerContext>,
    rng: StdRng,
    /// Last settings handed to the blackboard.
    settings: Arc<FollowSettings>,
}

impl Planner {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Planner with an OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            policy: tree::follow_policy(),
            rng,
            settings: Arc::default(),
        }
    }

    /// Shares `settings` with the blackboard, copying only when they changed
    /// since the previous tick.
    fn share_settings(&mut self, settings: &FollowSettings) -> Arc<FollowSettings> {
        if *self.settings != *settings {
            self.settings = Arc::new(settings.clone());
        }
        Arc::clone(&self.settings)
    }

    /// Evaluates the priority chain against `snapshot`.
    ///
    /// Never touches `memory`; the caller applies the decision's arms,
    /// throttles and anchor.
    pub fn plan(
        &mut self,
        snapshot: WorldSnapshot,
        settings: &FollowSettings,
        memory: &PlannerMemory,
        now: Millis,
    ) -> Decision {
        let rng = StdRng::seed_from_u64(self.rng.next_u64());
        let settings = self.share_settings(settings);
        let mut ctx = PlannerContext::new(snapshot, settings, *memory, now, rng);

        match self.policy.evaluate(&mut ctx) {
            Some(branch) => {
                let decision = ctx.into_decision(branch);
                if branch != "gating" {
                    tracing::debug!(
                        branch,
                        action = decision.action.label(),
                        "planned action"
                    );
                }
                decision
            }
            None => {
                tracing::debug!("no branch handled the tick");
                ctx.into_decision("none")
            }
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_settings_are_shared_between_ticks() {
        let mut planner = Planner::new(1);
        let mut settings = FollowSettings::following("Bob");

        let first = planner.share_settings(&settings);
        let second = planner.share_settings(&settings);
        assert!(Arc::ptr_eq(&first, &second));

        settings.follow_distance = 50.0;
        let third = planner.share_settings(&settings);
        assert!(!Arc::ptr_eq(&second, &third));
        assert_eq!(third.follow_distance, 50.0);
    }
}
