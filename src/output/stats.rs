//! Crawl state aggregation
//!
//! Pure counting over a state-store snapshot, producing the per-state totals
//! reported at the end of a run.

use crate::state::CrawlState;
use std::collections::HashMap;
use std::fmt;

/// Per-state address counts for a finished crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrawlStats {
    /// Addresses fetched and recorded successfully
    pub completed: usize,

    /// Addresses claimed but never resolved; nonzero only if the snapshot
    /// was taken before the completion tracker reported idle
    pub in_flight: usize,

    /// Addresses whose fetch failed after all retries
    pub failed: usize,
}

impl CrawlStats {
    /// Total number of addresses ever claimed
    pub fn total(&self) -> usize {
        self.completed + self.in_flight + self.failed
    }
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "completed = {}, in_flight = {}, failed = {}",
            self.completed, self.in_flight, self.failed
        )
    }
}

/// Counts addresses per crawl state in a snapshot
pub fn aggregate(snapshot: &HashMap<String, CrawlState>) -> CrawlStats {
    let mut stats = CrawlStats::default();

    for state in snapshot.values() {
        match state {
            CrawlState::Completed => stats.completed += 1,
            CrawlState::InFlight => stats.in_flight += 1,
            CrawlState::Failed => stats.failed += 1,
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_mixed_snapshot() {
        let mut snapshot = HashMap::new();
        for (address, state) in [
            ("u1", CrawlState::Completed),
            ("u2", CrawlState::Completed),
            ("u3", CrawlState::Completed),
            ("u4", CrawlState::InFlight),
            ("u5", CrawlState::Failed),
            ("u6", CrawlState::InFlight),
            ("u7", CrawlState::InFlight),
            ("u8", CrawlState::Failed),
            ("u9", CrawlState::Completed),
        ] {
            snapshot.insert(address.to_string(), state);
        }

        let stats = aggregate(&snapshot);
        assert_eq!(stats.completed, 4);
        assert_eq!(stats.in_flight, 3);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.total(), 9);
    }

    #[test]
    fn test_aggregate_empty_snapshot() {
        let stats = aggregate(&HashMap::new());
        assert_eq!(stats, CrawlStats::default());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_display() {
        let stats = CrawlStats {
            completed: 4,
            in_flight: 3,
            failed: 2,
        };
        assert_eq!(
            format!("{}", stats),
            "completed = 4, in_flight = 3, failed = 2"
        );
    }
}
