//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node completes within a single tick:
/// - Conditions evaluate immediately (e.g., "Is a blocking panel open?")
/// - Action nodes record their decision and return at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node handled the tick.
    ///
    /// For conditions: The condition was met.
    /// For actions: A decision was recorded.
    Success,

    /// The node did not apply.
    Failure,
}

impl Status {
    /// Maps a boolean onto a status: `true` is `Success`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}
