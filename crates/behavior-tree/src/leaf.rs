//! Leaf nodes built from plain functions.

use crate::{Behavior, Status};

/// A read-only check over the context.
///
/// Conditions never modify the context; they return `Success` when the
/// predicate holds.
pub struct Condition<C> {
    name: &'static str,
    predicate: fn(&C) -> bool,
}

impl<C> Condition<C> {
    /// Creates a named condition.
    pub fn new(name: &'static str, predicate: fn(&C) -> bool) -> Self {
        Self { name, predicate }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
