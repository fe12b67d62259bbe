//! Lightweight behavior tree library for reflex-style decision loops.
//!
//! The tree is rebuilt from nothing each tick: every node completes within the
//! call that evaluates it, so there is no `Running` state to resume.
//!
//! - **Priority first**: [`Selector`] tries branches in order and stops at the
//!   first one that handles the tick
//! - **Named nodes**: every node reports a [`Behavior::name`], so callers can
//!   log which branch fired
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Guard`], [`Named`]
//! - Leaf nodes: [`Condition`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{Guard, Named};
pub use leaf::Condition;
pub use status::Status;
