//! Data model and pure decision helpers for the follow bot.
//!
//! `copilot-core` knows nothing about the host process: it describes what a
//! tick can observe ([`WorldSnapshot`]), what it can do ([`Action`]), the
//! timers that gate it ([`CooldownRegistry`]) and the ranking heuristics used
//! to pick leaders, portals, loot and combat targets ([`targeting`]).
//! The runtime crate drives these pieces against real collaborators.
pub mod action;
pub mod clock;
pub mod config;
pub mod cooldown;
pub mod error;
pub mod geometry;
pub mod key;
pub mod targeting;
pub mod world;

pub use action::{Action, FollowUp};
pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use config::{
    BlinkSettings, CombatSettings, FollowSettings, HideoutSettings, MovementSettings,
    PickupSettings, SettingsLoader,
};
pub use cooldown::{CooldownKind, CooldownRegistry};
pub use error::{InputError, ProviderError, SettingsError};
pub use geometry::{ScreenPoint, ScreenRect};
pub use glam::Vec3;
pub use key::Key;
pub use targeting::LootFilter;
pub use world::{
    AreaInfo, GroundLabel, HostStatus, MonsterEntity, PartyEntry, PlayerEntity, ProjectileEntity,
    Rarity, ResurrectPanel, UiLayout, UiNode, UiPanels, UiPath, WorldSnapshot,
};
