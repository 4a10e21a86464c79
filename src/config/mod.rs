//! Configuration module for webtree
//!
//! Crawl settings come from CLI flags, optionally seeded from a TOML file.
//! Flags always win over file values; either way the merged configuration is
//! validated before a crawl starts.

mod types;
mod validation;

pub use types::CrawlConfig;
pub use validation::validate_config;

use crate::ConfigResult;
use std::path::Path;

/// Loads and validates a configuration from a TOML file
pub fn load_config(path: &Path) -> ConfigResult<CrawlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: CrawlConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
url = "https://example.com/"
depth = 3
output = "map.txt"
max-retries = 2
concurrency = 16
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.url, "https://example.com/");
        assert_eq!(config.depth, 3);
        assert_eq!(config.output, "map.txt");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.concurrency, 16);
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"url = "https://example.com/""#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.depth, 5);
        assert_eq!(config.output, "out.txt");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "url = ").unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"url = "ftp://example.com/""#).unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
