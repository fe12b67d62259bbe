//! Turns an [`Action`] into pointer and key events.
//!
//! UI button points and projected world points are both client-relative;
//! the executor shifts them by the window origin before they reach the
//! [`InputDriver`].
use std::time::Duration;

use copilot_core::{Action, FollowSettings, InputError, Key, ScreenPoint};
use glam::Vec3;

use crate::api::{CopilotError, InputDriver, Result, WorldStateProvider};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// How far an action got before returning.
#[derive(Debug)]
pub enum Execution {
    Completed,
    /// Some input reached the host before a later step failed.
    Interrupted(CopilotError),
    /// Failed before any input was sent.
    Failed(CopilotError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputExecutor {
    window_origin: ScreenPoint,
}

impl InputExecutor {
    pub const fn new(window_origin: ScreenPoint) -> Self {
        Self { window_origin }
    }

    /// Absolute screen point of a client-relative UI point.
    pub fn ui_point(&self, point: ScreenPoint) -> ScreenPoint {
        point.offset(self.window_origin)
    }

    /// Absolute screen point of a world position.
    pub fn project<W>(&self, world: &W, position: Vec3) -> Result<ScreenPoint>
    where
        W: WorldStateProvider + ?Sized,
    {
        Ok(world.world_to_screen(position)?.offset(self.window_origin))
    }

    /// Executes `action`, telling a clean failure apart from one that
    /// already injected part of the action.
    pub fn run<W, I>(
        &self,
        action: &Action,
        world: &W,
        input: &mut I,
        settings: &FollowSettings,
    ) -> Execution
    where
        W: WorldStateProvider + ?Sized,
        I: InputDriver + ?Sized,
    {
        let mut tracked = IssuedInput {
            inner: input,
            issued: false,
        };
        match self.execute(action, world, &mut tracked, settings) {
            Ok(()) => Execution::Completed,
            Err(err) if tracked.issued => Execution::Interrupted(err),
            Err(err) => Execution::Failed(err),
        }
    }

    pub fn execute<W, I>(
        &self,
        action: &Action,
        world: &W,
        input: &mut I,
        settings: &FollowSettings,
    ) -> Result<()>
    where
        W: WorldStateProvider + ?Sized,
        I: InputDriver + ?Sized,
    {
        let movement = &settings.movement;
        match action {
            Action::Idle => {}
            Action::DismissUi { key } => input.press_key(*key)?,
            Action::Resurrect { button }
            | Action::ConfirmTeleport { button }
            | Action::RequestTeleport { button } => {
                input.click(self.ui_point(*button), ms(movement.ui_click_settle_ms))?;
            }
            Action::ClickPortal { position } => {
                let at = self.project(world, *position)?;
                input.click(at, ms(movement.portal_click_settle_ms))?;
            }
            Action::PickUpItem { position, .. } => {
                let at = self.project(world, *position)?;
                input.click(at, ms(settings.pickup.settle_ms))?;
            }
            Action::CastOnTarget {
                target,
                key,
                follow_up,
            } => {
                let settle = ms(settings.combat.aim_settle_ms);
                self.aim_and_press(world, input, *target, settle, *key)?;
                if let Some(follow_up) = follow_up {
                    self.aim_and_press(world, input, follow_up.position, settle, follow_up.key)?;
                }
            }
            Action::Dash { toward, key } => {
                self.walk(world, input, *toward, settings)?;
                input.pause(ms(settings.blink.settle_ms));
                input.press_key(*key)?;
            }
            Action::MoveToward { position } => self.walk(world, input, *position, settings)?,
        }
        Ok(())
    }

    fn aim_and_press<W, I>(
        &self,
        world: &W,
        input: &mut I,
        position: Vec3,
        settle: Duration,
        key: Key,
    ) -> Result<()>
    where
        W: WorldStateProvider + ?Sized,
        I: InputDriver + ?Sized,
    {
        let at = self.project(world, position)?;
        input.move_pointer(at)?;
        input.pause(settle);
        input.press_key(key)?;
        Ok(())
    }

    /// Points at `position`, then clicks or presses the move key.
    fn walk<W, I>(
        &self,
        world: &W,
        input: &mut I,
        position: Vec3,
        settings: &FollowSettings,
    ) -> Result<()>
    where
        W: WorldStateProvider + ?Sized,
        I: InputDriver + ?Sized,
    {
        let movement = &settings.movement;
        let at = self.project(world, position)?;
        input.move_pointer(at)?;
        if movement.use_mouse {
            input.click(at, ms(movement.click_settle_ms))?;
        } else {
            input.press_key(movement.move_key)?;
        }
        Ok(())
    }
}

/// Remembers whether any event made it through.
struct IssuedInput<'a, I: ?Sized> {
    inner: &'a mut I,
    issued: bool,
}

impl<I: InputDriver + ?Sized> InputDriver for IssuedInput<'_, I> {
    fn move_pointer(&mut self, to: ScreenPoint) -> std::result::Result<(), InputError> {
        self.inner.move_pointer(to)?;
        self.issued = true;
        Ok(())
    }

    fn click(&mut self, at: ScreenPoint, settle: Duration) -> std::result::Result<(), InputError> {
        self.inner.click(at, settle)?;
        self.issued = true;
        Ok(())
    }

    fn press_key(&mut self, key: Key) -> std::result::Result<(), InputError> {
        self.inner.press_key(key)?;
        self.issued = true;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.inner.pause(duration);
    }
}
