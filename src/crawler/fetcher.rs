//! Page fetcher implementing the retry-aware fetch contract
//!
//! A fetch retrieves one page through the transport, retrying transient
//! failures on a linear schedule, then extracts and normalizes the page's
//! child addresses.

use crate::crawler::parser::extract_links;
use crate::crawler::transport::Transport;
use crate::{CrawlError, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Fixed delay between retry attempts
pub const RETRY_DELAY: Duration = Duration::from_millis(100);

/// The fetch contract the traversal engine drives
///
/// Given an address, returns the ordered set of normalized child addresses
/// reachable from that page, or the error the last attempt failed with.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches a page and returns its normalized child addresses
    async fn fetch(&self, address: &str) -> Result<Vec<String>>;
}

/// Transport-backed fetcher with linear retry
///
/// Retries up to `max_retries` additional attempts after the first failure,
/// sleeping a fixed delay between attempts and short-circuiting on the first
/// success. Every error kind is retried alike; there is no classification of
/// transient versus permanent failures.
pub struct PageFetcher<T> {
    transport: T,
    base_host: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl<T: Transport> PageFetcher<T> {
    /// Creates a fetcher crawling within the given base host
    pub fn new(transport: T, base_host: impl Into<String>, max_retries: u32) -> Self {
        Self {
            transport,
            base_host: base_host.into(),
            max_retries,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Overrides the inter-attempt delay (tests use a shorter one)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// The host this fetcher restricts the crawl to
    pub fn base_host(&self) -> &str {
        &self.base_host
    }

    async fn get_with_retry(&self, address: &str) -> Result<String> {
        let mut attempts_left = self.max_retries;

        loop {
            match self.transport.get(address).await {
                Ok(body) => return Ok(body),
                Err(e) if attempts_left > 0 => {
                    tracing::debug!(
                        "Fetch attempt for {} failed ({} retries left): {}",
                        address,
                        attempts_left,
                        e
                    );
                    attempts_left -= 1;
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => {
                    return Err(CrawlError::RetriesExhausted {
                        url: address.to_string(),
                        last_error: e.to_string(),
                    });
                }
            }
        }
    }
}

#[async_trait]
impl<T: Transport> Fetch for PageFetcher<T> {
    async fn fetch(&self, address: &str) -> Result<Vec<String>> {
        let body = self.get_with_retry(address).await?;

        let page_url = Url::parse(address)?;
        Ok(extract_links(&body, &page_url, &self.base_host))
    }
}
