//! Shelfscrape main entry point
//!
//! This is the command-line interface for the shelfscrape catalog crawler.

use clap::Parser;
use shelfscrape::config::load_config_with_hash;
use shelfscrape::crawler::crawl;
use shelfscrape::store::JsonStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shelfscrape: a paginated catalog scraper
///
/// Crawls a catalog website page by page, follows every item link, extracts
/// structured records from detail pages, and persists them to a JSON
/// collection without duplicates.
#[derive(Parser, Debug)]
#[command(name = "shelfscrape")]
#[command(about = "A paginated catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_crawl(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelfscrape=info,warn"),
            1 => EnvFilter::new("shelfscrape=debug,info"),
            2 => EnvFilter::new("shelfscrape=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &shelfscrape::config::Config) {
    println!("=== Shelfscrape Dry Run ===\n");

    println!("Catalog:");
    println!("  Start URL: {}", config.catalog.start_url);

    println!("\nCrawler:");
    match config.crawler.max_concurrent_fetches {
        Some(limit) => println!("  Max concurrent fetches: {}", limit),
        None => println!("  Max concurrent fetches: unbounded (one per item link)"),
    }
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Store: {}", config.output.store_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: shelfscrape::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // First-run convenience: the crawl core itself requires the store file
    // to exist, so bootstrap an empty collection from the CLI layer.
    JsonStore::initialize(Path::new(&config.output.store_path))?;

    tracing::info!("Starting crawl of {}", config.catalog.start_url);

    match crawl(config).await {
        Ok(report) => {
            println!(
                "Crawl complete: {} pages visited, {} books extracted, {} appended, {} duplicates skipped in {:.1}s",
                report.pages_visited,
                report.books_extracted,
                report.books_appended,
                report.duplicates_skipped,
                report.elapsed.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
