//! Output module for rendering crawl results
//!
//! This module handles:
//! - Rendering the adjacency store as an indented site-map tree
//! - Aggregating crawl state counts for the final report

mod sitemap;
mod stats;

pub use sitemap::render_site_map;
pub use stats::{aggregate, CrawlStats};
