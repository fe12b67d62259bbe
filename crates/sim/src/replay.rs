//! Drives a [`Copilot`] through a [`Scenario`] on a manual clock.
use std::collections::BTreeMap;
use std::sync::Arc;

use copilot_core::{FollowSettings, ManualClock, Millis, ScreenPoint};
use copilot_runtime::{Copilot, InMemorySettings, LinearProjection, RecordingInput, StaticWorld};

use crate::scenario::Scenario;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: usize,
    pub input_events: usize,
    /// Count per action label.
    pub tally: BTreeMap<&'static str, usize>,
}

pub fn run(scenario: &Scenario, settings: FollowSettings, seed: u64) -> ReplaySummary {
    let clock = ManualClock::new(Millis::ZERO);
    // 1920x1080 client, player at the centre.
    let world = StaticWorld::new(Default::default())
        .with_projection(LinearProjection::new(ScreenPoint::new(960, 540), 1.0));
    let mut copilot = Copilot::new(
        world,
        RecordingInput::new().with_logging(),
        InMemorySettings::new(settings),
    )
    .with_clock(Arc::new(clock.clone()))
    .with_seed(seed);

    let mut summary = ReplaySummary::default();
    for frame in &scenario.frames {
        clock.set(Millis(frame.at_ms));
        copilot.world_mut().set_snapshot(frame.snapshot.clone());
        if frame.area_change {
            copilot.on_area_change(&frame.snapshot.area);
        }

        let action = copilot.tick();
        tracing::info!(at_ms = frame.at_ms, action = action.label(), detail = ?action, "tick");

        summary.ticks += 1;
        *summary.tally.entry(action.label()).or_default() += 1;
    }
    summary.input_events = copilot.input().events().len();

    tracing::info!(
        scenario = %scenario.name,
        ticks = summary.ticks,
        input_events = summary.input_events,
        "replay finished"
    );
    summary
}
