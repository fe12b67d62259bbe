use std::time::Duration;

use copilot_core::{InputError, Key, ScreenPoint};

use crate::api::InputDriver;

/// One synthetic input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(ScreenPoint),
    Click { at: ScreenPoint, settle_ms: u64 },
    Key(Key),
    Pause { ms: u64 },
}

/// Input driver that records events instead of injecting them.
///
/// Pauses are recorded, not slept.
#[derive(Clone, Debug, Default)]
pub struct RecordingInput {
    events: Vec<InputEvent>,
    reject: bool,
    reject_keys: bool,
    log: bool,
}

impl RecordingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emits each event as an `info` trace.
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Makes every subsequent event fail.
    pub fn set_reject(&mut self, reject: bool) {
        self.reject = reject;
    }

    /// Makes key presses fail while pointer events still go through.
    pub fn set_reject_keys(&mut self, reject: bool) {
        self.reject_keys = reject;
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: InputEvent) {
        if self.log {
            tracing::info!(?event, "input");
        }
        self.events.push(event);
    }
}

impl InputDriver for RecordingInput {
    fn move_pointer(&mut self, to: ScreenPoint) -> Result<(), InputError> {
        if self.reject {
            return Err(InputError::PointerRejected);
        }
        self.record(InputEvent::Move(to));
        Ok(())
    }

    fn click(&mut self, at: ScreenPoint, settle: Duration) -> Result<(), InputError> {
        if self.reject {
            return Err(InputError::PointerRejected);
        }
        self.record(InputEvent::Click {
            at,
            settle_ms: settle.as_millis() as u64,
        });
        Ok(())
    }

    fn press_key(&mut self, key: Key) -> Result<(), InputError> {
        if self.reject || self.reject_keys {
            return Err(InputError::KeyRejected(key));
        }
        self.record(InputEvent::Key(key));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.record(InputEvent::Pause {
            ms: duration.as_millis() as u64,
        });
    }
}
