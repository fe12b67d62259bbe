//! Replays a recorded scenario through the follow bot and logs every
//! decision, without touching a real game or real input.
mod config;
mod logging;
mod replay;
mod scenario;

use anyhow::{Context, Result};
use copilot_core::{FollowSettings, SettingsLoader};

use crate::config::SimConfig;
use crate::scenario::Scenario;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = SimConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config.scenario = Some(path.into());
    }

    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let mut settings = match &config.settings {
        Some(path) => SettingsLoader::load(path)
            .with_context(|| format!("failed to load settings {}", path.display()))?,
        None => FollowSettings::default(),
    };
    settings.apply_env();

    let scenario_path = config
        .scenario
        .context("no scenario given (pass a path or set COPILOT_SCENARIO)")?;
    let scenario = Scenario::load(&scenario_path)?;

    tracing::info!(
        scenario = %scenario.name,
        frames = scenario.frames.len(),
        leader = %settings.target_player_name,
        seed = config.seed,
        "starting replay"
    );

    let summary = replay::run(&scenario, settings, config.seed);
    for (label, count) in &summary.tally {
        tracing::info!(action = label, count, "tally");
    }

    Ok(())
}
