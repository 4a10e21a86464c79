//! Configuration validation
//!
//! Checks a merged configuration before a crawl starts, so bad values fail
//! fast at the CLI boundary instead of mid-traversal.

use crate::config::CrawlConfig;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates every field of a crawl configuration
pub fn validate_config(config: &CrawlConfig) -> ConfigResult<()> {
    validate_seed_url(&config.url)?;

    if config.depth == 0 {
        return Err(ConfigError::Validation(
            "depth must be at least 1; a depth of 0 crawls nothing".to_string(),
        ));
    }

    if config.concurrency == 0 {
        return Err(ConfigError::Validation(
            "concurrency must be at least 1".to_string(),
        ));
    }

    if config.output.is_empty() {
        return Err(ConfigError::Validation(
            "output path must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that the seed is a parseable http(s) URL with a host
///
/// The host is what the crawl restricts itself to, so a seed without one
/// cannot be crawled at all.
fn validate_seed_url(url: &str) -> ConfigResult<()> {
    let parsed =
        Url::parse(url).map_err(|e| ConfigError::InvalidSeed(format!("{}: {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidSeed(format!(
            "{}: only http and https schemes are supported",
            url
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidSeed(format!("{}: missing host", url)));
    }

    Ok(())
}
