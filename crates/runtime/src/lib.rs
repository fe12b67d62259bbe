//! Runtime for the follow bot.
//!
//! This crate drives the pure pieces of `copilot-core` against the host:
//! [`Copilot`] captures a snapshot through a [`WorldStateProvider`], asks the
//! [`Planner`] for at most one action, and hands it to the [`InputExecutor`],
//! which talks to an [`InputDriver`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the collaborator traits and the error type
//! - [`planner`] hosts the priority chain and its nodes
//! - [`executor`] turns actions into pointer and key events
//! - [`memory`] and [`file`] provide collaborator implementations
pub mod api;
pub mod copilot;
pub mod executor;
pub mod file;
pub mod memory;
pub mod planner;

pub use api::{CopilotError, InputDriver, Result, SettingsStore, WorldStateProvider};
pub use copilot::Copilot;
pub use executor::{Execution, InputExecutor};
pub use file::FileSettingsStore;
pub use memory::{InMemorySettings, InputEvent, LinearProjection, RecordingInput, StaticWorld};
pub use planner::{Arm, Arms, Decision, Planner, PlannerContext, PlannerMemory};
