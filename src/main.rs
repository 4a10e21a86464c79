//! Webtree main entry point
//!
//! This is the command-line interface for the webtree site-map crawler.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use webtree::config::{load_config, validate_config, CrawlConfig};
use webtree::crawler::build_crawler;
use webtree::output::{aggregate, render_site_map};

/// Webtree: a concurrent site-map crawler
///
/// Webtree crawls a website from a seed address up to a bounded depth and
/// writes the discovered link graph as an indented tree, reporting per-state
/// counts for every address it touched.
#[derive(Parser, Debug)]
#[command(name = "webtree")]
#[command(version)]
#[command(about = "A concurrent site-map crawler", long_about = None)]
struct Cli {
    /// Seed address to crawl from
    #[arg(long)]
    url: Option<String>,

    /// Maximum depth to crawl to
    #[arg(long)]
    depth: Option<u32>,

    /// File to write the site map to
    #[arg(long)]
    output: Option<PathBuf>,

    /// Additional fetch attempts after the first failure
    #[arg(long)]
    max_retries: Option<u32>,

    /// Upper bound on simultaneously in-flight fetches
    #[arg(long)]
    concurrency: Option<usize>,

    /// Path to a TOML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    tracing::info!(
        "Crawling {} to depth {} with {} retries, up to {} concurrent fetches",
        config.url,
        config.depth,
        config.max_retries,
        config.concurrency
    );

    let crawler = build_crawler(&config)?;

    let start = Instant::now();
    crawler.run(&config.url, config.depth).await;
    println!("Crawl took: {:?}", start.elapsed());

    let start = Instant::now();
    let stats = aggregate(&crawler.states().snapshot());
    println!("Metric aggregation took: {:?}", start.elapsed());
    println!("Stats: {}", stats);

    let start = Instant::now();
    let site_map = render_site_map(crawler.adjacency(), &config.url, config.depth, 1);
    match std::fs::write(&config.output, site_map) {
        Ok(()) => println!("Writing the site map took: {:?}", start.elapsed()),
        // Losing the file does not fail the run; everything else succeeded.
        Err(e) => eprintln!("Cannot write to the output file {}: {}", config.output, e),
    }

    Ok(())
}

/// Merges the optional config file with CLI flags; flags win
fn resolve_config(cli: &Cli) -> anyhow::Result<CrawlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };

    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(output) = &cli.output {
        config.output = output.display().to_string();
    }
    if let Some(max_retries) = cli.max_retries {
        config.max_retries = max_retries;
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }

    validate_config(&config)?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webtree=info,warn"),
            1 => EnvFilter::new("webtree=debug,info"),
            2 => EnvFilter::new("webtree=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
