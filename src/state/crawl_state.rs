/// Crawl state definitions for tracking per-address progress
///
/// An address that has never been claimed has no entry in the state store;
/// absence is the implicit "untouched" state.
use std::fmt;

/// Represents the current state of an address in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    /// The address has been claimed and its fetch is in progress
    InFlight,

    /// The address was fetched and its children recorded
    Completed,

    /// The fetch failed after all retries; the branch stopped here
    Failed,
}

impl CrawlState {
    /// Returns true if this is a terminal state (no further processing happens)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InFlight)
    }

    /// Returns true if this represents a successful fetch
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if this represents a failed fetch
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Short label used in logs and the stats report
    pub fn label(&self) -> &'static str {
        match self {
            Self::InFlight => "in_flight",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
