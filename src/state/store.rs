//! Per-address crawl state with the at-most-once claim
//!
//! The store is the dedup boundary of the whole engine: two tasks that
//! discover the same address concurrently race on `try_claim`, and exactly
//! one of them wins the right to fetch it.

use crate::state::CrawlState;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared per-address crawl state
///
/// An address absent from the map is untouched. Once claimed it holds exactly
/// one `CrawlState` value until the end of the run.
#[derive(Debug, Default)]
pub struct StateStore {
    states: Mutex<HashMap<String, CrawlState>>,
}

impl StateStore {
    /// Creates an empty state store
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims an address for fetching
    ///
    /// Checks for an existing state and, if there is none, marks the address
    /// `InFlight` in the same critical section. A separate "read, then write"
    /// pair would let two concurrent discoverers both observe the address as
    /// untouched and both fetch it; the entry API keeps check and set
    /// indivisible under one lock guard.
    ///
    /// Returns true if the caller won the claim and owns the fetch.
    pub fn try_claim(&self, address: &str) -> bool {
        let mut states = self.states.lock().expect("state store lock poisoned");
        match states.entry(address.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(CrawlState::InFlight);
                true
            }
        }
    }

    /// Overwrites the state of an already-claimed address
    ///
    /// Used for the `InFlight` -> `Completed`/`Failed` transitions.
    pub fn set_state(&self, address: &str, state: CrawlState) {
        let mut states = self.states.lock().expect("state store lock poisoned");
        states.insert(address.to_string(), state);
    }

    /// Returns the current state of an address, if it was ever claimed
    pub fn get(&self, address: &str) -> Option<CrawlState> {
        let states = self.states.lock().expect("state store lock poisoned");
        states.get(address).copied()
    }

    /// Returns a read-only copy of the full state map
    ///
    /// Only meaningful once the completion tracker has reported idle;
    /// before that the map is still being mutated concurrently.
    pub fn snapshot(&self) -> HashMap<String, CrawlState> {
        let states = self.states.lock().expect("state store lock poisoned");
        states.clone()
    }

    /// Number of addresses that have ever been claimed
    pub fn len(&self) -> usize {
        let states = self.states.lock().expect("state store lock poisoned");
        states.len()
    }

    /// Returns true if no address has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all state between independent runs (tests and benchmarks)
    pub fn clear(&self) {
        let mut states = self.states.lock().expect("state store lock poisoned");
        states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_claim_untouched_address() {
        let store = StateStore::new();
        assert!(store.try_claim("https://example.com/a"));
        assert_eq!(store.get("https://example.com/a"), Some(CrawlState::InFlight));
    }

    #[test]
    fn test_second_claim_fails() {
        let store = StateStore::new();
        assert!(store.try_claim("https://example.com/a"));
        assert!(!store.try_claim("https://example.com/a"));
    }

    #[test]
    fn test_claim_fails_for_any_existing_state() {
        let store = StateStore::new();
        assert!(store.try_claim("https://example.com/a"));
        store.set_state("https://example.com/a", CrawlState::Completed);
        assert!(!store.try_claim("https://example.com/a"));

        assert!(store.try_claim("https://example.com/b"));
        store.set_state("https://example.com/b", CrawlState::Failed);
        assert!(!store.try_claim("https://example.com/b"));
    }

    #[test]
    fn test_set_state_transitions() {
        let store = StateStore::new();
        store.try_claim("https://example.com/a");
        store.set_state("https://example.com/a", CrawlState::Completed);
        assert_eq!(
            store.get("https://example.com/a"),
            Some(CrawlState::Completed)
        );
    }

    #[test]
    fn test_snapshot() {
        let store = StateStore::new();
        store.try_claim("u1");
        store.set_state("u1", CrawlState::Completed);
        store.try_claim("u2");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("u1"), Some(&CrawlState::Completed));
        assert_eq!(snapshot.get("u2"), Some(&CrawlState::InFlight));
    }

    #[test]
    fn test_clear() {
        let store = StateStore::new();
        store.try_claim("u1");
        store.clear();
        assert!(store.is_empty());
        assert!(store.try_claim("u1"));
    }

    #[test]
    fn test_concurrent_claims_single_winner() {
        // Hammer one address from many threads; exactly one claim may win.
        let store = Arc::new(StateStore::new());
        let mut handles = Vec::new();

        for _ in 0..32 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.try_claim("https://example.com/contended") as usize
            }));
        }

        let wins: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(wins, 1);
    }
}
