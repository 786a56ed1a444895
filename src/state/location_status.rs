//! Lifecycle states of a queued prerender location
//!
//! Only `Pending` is ever assigned by the queue builder. The crawl loop that
//! renders pages moves entries on to `Processing` and `Complete`.

use std::fmt;

/// Represents the current state of a location in the prerender queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationStatus {
    /// Location was discovered and is waiting to be rendered
    #[default]
    Pending,

    /// Location is currently being rendered
    Processing,

    /// Location has been rendered (successfully or not)
    Complete,
}

impl LocationStatus {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Converts the status to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
