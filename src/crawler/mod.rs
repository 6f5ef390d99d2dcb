//! Crawler module for catalog traversal and record extraction.
//!
//! This module contains the core crawling logic:
//! - HTTP fetching for listing and detail pages
//! - Listing-page navigation (item links, next-page link)
//! - Record extraction from detail pages
//! - Concurrent per-item fetch pipeline
//! - Page-serial crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod navigator;
mod pipeline;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use extractor::extract_book;
pub use fetcher::{build_http_client, fetch_page};
pub use navigator::{extract_item_links, extract_next_page_link, parse_listing, PageLinks};
pub use pipeline::{fetch_and_extract, process_batch};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation.
///
/// Visits every listing page from the configured catalog root, follows
/// every item link, extracts records, and persists them with duplicate-safe
/// appends. Returns the crawl summary.
pub async fn crawl(config: Config) -> Result<CrawlReport> {
    run_crawl(config).await
}
