//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Guard`] (conditional execution) and [`Named`]
//! (reporting name).

use crate::{Behavior, Status};

/// Evaluates its child only when a predicate over the context holds.
///
/// - Predicate false: returns `Failure` without touching the child
/// - Predicate true: returns whatever the child returns
///
/// Guards keep feature switches (e.g. "looting enabled") out of the nodes
/// themselves.
pub struct Guard<C> {
    predicate: fn(&C) -> bool,
    child: Box<dyn Behavior<C>>,
}

impl<C> Guard<C> {
    /// Creates a guard around `child`.
    pub fn new(predicate: fn(&C) -> bool, child: Box<dyn Behavior<C>>) -> Self {
        Self { predicate, child }
    }
}

impl<C> Behavior<C> for Guard<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            self.child.tick(ctx)
        } else {
            Status::Failure
        }
    }

    fn name(&self) -> &'static str {
        self.child.name()
    }
}

/// Passes evaluation through to its child but reports a different name.
pub struct Named<C> {
    name: &'static str,
    child: Box<dyn Behavior<C>>,
}

impl<C> Named<C> {
    /// Wraps `child` under `name`.
    pub fn new(name: &'static str, child: Box<dyn Behavior<C>>) -> Self {
        Self { name, child }
    }
}

impl<C> Behavior<C> for Named<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
