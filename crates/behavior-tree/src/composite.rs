//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors:
//! [`Sequence`] (AND logic) and [`Selector`] (ordered fallback).

use crate::{Behavior, Status};

/// Executes child behaviors in order until one fails.
///
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            name: "sequence",
            children,
        }
    }

    /// Sets the name reported by [`Behavior::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Tries child behaviors in priority order until one succeeds.
///
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// Earlier children strictly dominate later ones, which makes a selector
/// the natural shape for a priority-ordered reflex policy.
pub struct Selector<C> {
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            name: "selector",
            children,
        }
    }

    /// Sets the name reported by [`Behavior::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Evaluates the children in order and returns the name of the first one
    /// that succeeded, or `None` if every child failed.
    pub fn evaluate(&self, ctx: &mut C) -> Option<&'static str> {
        self.children
            .iter()
            .find(|child| child.tick(ctx).is_success())
            .map(|child| child.name())
    }

    /// Names of the children in priority order.
    pub fn branch_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.children.iter().map(|child| child.name())
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool(self.evaluate(ctx).is_some())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }

        fn name(&self) -> &'static str {
            "increment"
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value -= 1;
            Status::Success
        }

        fn name(&self) -> &'static str {
            "decrement"
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_reports_first_successful_branch() {
        let sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.evaluate(&mut ctx), Some("increment"));
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(sel.evaluate(&mut ctx), None);
    }

    #[test]
    fn branch_names_follow_priority_order() {
        let sel = Selector::new(vec![Box::new(Decrement), Box::new(Increment)])
            .with_name("root");

        let names: Vec<_> = sel.branch_names().collect();
        assert_eq!(names, ["decrement", "increment"]);
        assert_eq!(sel.name(), "root");
    }
}
