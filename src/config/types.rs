use serde::Deserialize;

/// Crawl configuration
///
/// Defaults match the reference CLI: the sample seed site, depth 5, three
/// retries per fetch, output to `out.txt`.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Seed address the crawl starts from
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum traversal depth from the seed
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// File path the rendered site map is written to
    #[serde(default = "default_output")]
    pub output: String,

    /// Additional fetch attempts after the first failure
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Upper bound on simultaneously in-flight fetches
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_url() -> String {
    "https://monzo.com/".to_string()
}

fn default_depth() -> u32 {
    5
}

fn default_output() -> String {
    "out.txt".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_concurrency() -> usize {
    64
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            depth: default_depth(),
            output: default_output(),
            max_retries: default_max_retries(),
            concurrency: default_concurrency(),
        }
    }
}

impl CrawlConfig {
    /// User agent string sent with every request
    pub fn user_agent(&self) -> String {
        format!("webtree/{}", env!("CARGO_PKG_VERSION"))
    }
}
