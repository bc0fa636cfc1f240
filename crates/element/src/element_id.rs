use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-scoped identifier for an element.
///
/// Ids are handed out by [`crate::ElementRegistry`] from a counter that
/// only ever increases, so an id is never reused within a session.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// The id given to the first element of a session.
    pub const FIRST: ElementId = ElementId(1);

    /// Create an ElementId from a raw value (useful for tests).
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
