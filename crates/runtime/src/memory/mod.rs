//! In-memory collaborators for tests, scenario replay and local runs.
mod input;
mod settings;
mod world;

pub use input::{InputEvent, RecordingInput};
pub use settings::InMemorySettings;
pub use world::{LinearProjection, StaticWorld};
