//! Tick orchestrator tying the collaborators, planner and executor together.
use std::sync::Arc;

use copilot_core::world::party_members;
use copilot_core::{Action, AreaInfo, Clock, CooldownKind, Millis, SystemClock};

use crate::api::{CopilotError, InputDriver, Result, SettingsStore, WorldStateProvider};
use crate::executor::{Execution, InputExecutor};
use crate::planner::{Planner, PlannerMemory};

/// Follow bot driven one tick at a time by the host.
///
/// All state that survives between ticks lives in [`PlannerMemory`]; the
/// collaborators are owned and reachable through the accessors.
pub struct Copilot<W, I, S> {
    world: W,
    input: I,
    settings: S,
    clock: Arc<dyn Clock>,
    planner: Planner,
    memory: PlannerMemory,
}

impl<W, I, S> Copilot<W, I, S>
where
    W: WorldStateProvider,
    I: InputDriver,
    S: SettingsStore,
{
    pub fn new(world: W, input: I, settings: S) -> Self {
        Self {
            world,
            input,
            settings,
            clock: Arc::new(SystemClock::new()),
            planner: Planner::from_entropy(),
            memory: PlannerMemory::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seeds the planner's RNG (hideout portal choice).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.planner = Planner::new(seed);
        self
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    /// Runs one tick and returns what was done.
    ///
    /// Collaborator failures are logged and reported as [`Action::Idle`].
    pub fn tick(&mut self) -> Action {
        match self.try_tick() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(error = %err, "tick skipped");
                Action::Idle
            }
        }
    }

    fn try_tick(&mut self) -> Result<Action> {
        let now = self.clock.now();
        let snapshot = self.world.snapshot()?;

        if snapshot.host.focused && snapshot.host.pause_toggle_pressed {
            let paused = !self.settings.settings().paused;
            self.settings.set_paused(paused)?;
            tracing::info!(paused, "pause toggled");
        }

        let window_origin = snapshot.host.window_origin;
        let decision = self
            .planner
            .plan(snapshot, self.settings.settings(), &self.memory, now);

        decision.throttles.apply(&mut self.memory.cooldowns, now);
        if let Some(anchor) = decision.anchor {
            self.memory.last_target_position = Some(anchor);
        }
        if decision.action.is_idle() {
            decision.arms.apply(&mut self.memory.cooldowns, now);
            return Ok(Action::Idle);
        }

        let execution = InputExecutor::new(window_origin).run(
            &decision.action,
            &self.world,
            &mut self.input,
            self.settings.settings(),
        );
        match execution {
            Execution::Completed => {}
            // Partial input counts as executed.
            Execution::Interrupted(err) => {
                tracing::warn!(
                    error = %err,
                    action = decision.action.label(),
                    "action interrupted after input was sent"
                );
            }
            Execution::Failed(err) => return Err(err),
        }

        decision
            .arms
            .apply(&mut self.memory.cooldowns, self.clock.now());
        if let Some(destination) = decision.action.destination() {
            self.memory.last_target_position = Some(destination);
        }
        Ok(decision.action)
    }

    /// Zone transition: forget the anchor and hold still for the grace
    /// window.
    pub fn on_area_change(&mut self, area: &AreaInfo) {
        let now = self.clock.now();
        let grace = self.settings.settings().area_change_grace_ms;

        self.memory.last_target_position = None;
        self.memory.cooldowns.reset_all(now);
        self.memory.cooldowns.arm(CooldownKind::AreaChange, now, grace);
        self.memory.cooldowns.arm(CooldownKind::Action, now, grace);

        tracing::info!(
            area = %area.name,
            town = area.is_town,
            hideout = area.is_hideout,
            "area changed"
        );
    }

    /// Re-reads the party panel and publishes the member names.
    pub fn refresh_party_list(&mut self) -> Result<Vec<String>> {
        let snapshot = self.world.snapshot()?;
        let panel = snapshot
            .party_panel
            .as_ref()
            .ok_or(CopilotError::PartyPanelMissing)?;
        let names = party_members(panel, &self.settings.settings().layout);

        self.settings.publish_party_members(names.clone())?;
        tracing::info!(count = names.len(), members = ?names, "party list refreshed");
        Ok(names)
    }

    /// Follows `name` from now on.
    pub fn select_target(&mut self, name: &str) -> Result<()> {
        self.settings.set_target_player(name)?;
        self.memory.last_target_position = None;
        tracing::info!(
            leader = %self.settings.settings().target_player_name,
            "follow target selected"
        );
        Ok(())
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    pub fn memory(&self) -> &PlannerMemory {
        &self.memory
    }
}
