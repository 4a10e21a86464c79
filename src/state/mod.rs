//! State module for tracking crawl progress
//!
//! This module owns the shared mutable state of a crawl run:
//!
//! - `CrawlState`: the per-address lifecycle value (in-flight, completed, failed)
//! - `StateStore`: per-address state with the atomic at-most-once claim
//! - `AdjacencyStore`: the discovered link graph, written once per address
//! - `CompletionTracker`: the counting join the top-level caller waits on

mod adjacency;
mod crawl_state;
mod store;
mod tracker;

// Re-export main types
pub use adjacency::AdjacencyStore;
pub use crawl_state::CrawlState;
pub use store::StateStore;
pub use tracker::CompletionTracker;
