//! HTTP transport boundary
//!
//! The engine never talks to the network directly; it goes through the
//! `Transport` trait so tests can substitute canned responses for the real
//! `reqwest` client.

use crate::{CrawlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Raw page retrieval: one address in, one response body out
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the response body for an address
    async fn get(&self, address: &str) -> Result<String>;
}

/// `reqwest`-backed transport used by the real crawler
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with the crawler's HTTP client configuration
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, address: &str) -> Result<String> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|source| CrawlError::Http {
                url: address.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::HttpStatus {
                url: address.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| CrawlError::Http {
            url: address.to_string(),
            source,
        })
    }
}
