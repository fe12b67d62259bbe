//! Node library for the follow policy.
//!
//! Conditions are plain predicates over [`PlannerContext`](super::PlannerContext)
//! wrapped with [`behavior_tree::builder::condition`]. Action nodes choose the
//! tick's [`Action`](copilot_core::Action) and the cooldowns it arms.
pub mod actions;
pub mod conditions;

pub use actions::*;
