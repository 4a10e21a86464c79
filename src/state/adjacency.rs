//! Adjacency store recording the discovered link graph
//!
//! Each entry maps a fetched address to the ordered list of child addresses
//! found on its page. Entries are written once, by the task that won the
//! claim for that address, and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Mutex;

/// Shared link-graph store keyed by address
#[derive(Debug, Default)]
pub struct AdjacencyStore {
    edges: Mutex<HashMap<String, Vec<String>>>,
}

impl AdjacencyStore {
    /// Creates an empty adjacency store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the ordered child list for an address
    ///
    /// The scheduler only calls this after a successful claim and fetch, so
    /// each address is recorded at most once per run. An existing entry is
    /// left untouched.
    pub fn record(&self, address: &str, children: Vec<String>) {
        let mut edges = self.edges.lock().expect("adjacency store lock poisoned");
        edges.entry(address.to_string()).or_insert(children);
    }

    /// Returns the recorded children of an address, preserving discovery order
    pub fn children(&self, address: &str) -> Option<Vec<String>> {
        let edges = self.edges.lock().expect("adjacency store lock poisoned");
        edges.get(address).cloned()
    }

    /// Number of addresses with a recorded child list
    pub fn len(&self) -> usize {
        let edges = self.edges.lock().expect("adjacency store lock poisoned");
        edges.len()
    }

    /// Returns true if no entry has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entries between independent runs (tests and benchmarks)
    pub fn clear(&self) {
        let mut edges = self.edges.lock().expect("adjacency store lock poisoned");
        edges.clear();
    }
}
