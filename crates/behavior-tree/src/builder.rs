//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing verbose `Box::new(Selector::new(vec![...]))`, you can use
//! shorter functions like `selector(vec![...])`.

use crate::{Behavior, Condition, Guard, Named, Selector, Sequence};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a guard that only evaluates `child` when `predicate` holds.
#[inline]
pub fn guard<C: 'static>(
    predicate: fn(&C) -> bool,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Guard::new(predicate, child))
}

/// Creates a condition leaf.
#[inline]
pub fn condition<C: 'static>(name: &'static str, predicate: fn(&C) -> bool) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(name, predicate))
}

/// Gives `child` a reporting name.
#[inline]
pub fn named<C: 'static>(name: &'static str, child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Named::new(name, child))
}
