//! Crawler module for concurrent page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - The traversal engine with its job queue and bounded fan-out
//! - The retry-aware fetch contract
//! - The HTTP transport boundary
//! - HTML link extraction and normalization

mod engine;
mod fetcher;
mod parser;
mod transport;

pub use engine::Crawler;
pub use fetcher::{Fetch, PageFetcher, RETRY_DELAY};
pub use parser::{extract_links, filter_link};
pub use transport::{HttpTransport, Transport};

use crate::config::CrawlConfig;
use crate::Result;
use url::Url;

/// Builds the production engine for a validated configuration
///
/// Wires the `reqwest` transport into a retrying page fetcher restricted to
/// the seed's host, and hands it to a fresh traversal engine.
pub fn build_crawler(config: &CrawlConfig) -> Result<Crawler<PageFetcher<HttpTransport>>> {
    let seed = Url::parse(&config.url)?;
    let base_host = seed
        .host_str()
        .ok_or(crate::UrlError::MissingHost)?
        .to_string();

    let transport = HttpTransport::new(&config.user_agent())?;
    let fetcher = PageFetcher::new(transport, base_host, config.max_retries);

    Ok(Crawler::new(fetcher, config.concurrency))
}
