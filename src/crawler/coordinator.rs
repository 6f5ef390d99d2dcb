//! Crawl coordination - the page-serial control loop.
//!
//! The coordinator drives the crawl one listing page at a time: fetch the
//! page, extract item links and the next-page link, resolve them, run the
//! item batch through the fetch pipeline, then advance. A page's batch
//! completes in full before the next listing page is fetched; the
//! next-page link is only known once the current page is parsed, so pages
//! are never pipelined.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::navigator::parse_listing;
use crate::crawler::pipeline::process_batch;
use crate::store::{BookStore, JsonStore};
use crate::url::resolve;
use crate::Result;
use reqwest::Client;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use url::Url;

/// Summary of a finished crawl.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Listing pages visited.
    pub pages_visited: usize,

    /// Records extracted from detail pages.
    pub books_extracted: usize,

    /// Records newly appended to the store.
    pub books_appended: usize,

    /// Records skipped because their unique key was already persisted.
    pub duplicates_skipped: usize,

    /// Wall-clock duration of the crawl.
    pub elapsed: Duration,
}

/// Crawl coordinator.
pub struct Coordinator {
    config: Config,
    client: Client,
    store: Arc<Mutex<JsonStore>>,
    base: Url,
}

impl Coordinator {
    /// Creates a coordinator from a validated configuration.
    ///
    /// Opens the store (which must already exist and hold a valid
    /// collection), parses the catalog root URL, and builds the shared
    /// HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let base = Url::parse(&config.catalog.start_url)?;
        let store = JsonStore::open(Path::new(&config.output.store_path))?;
        let client =
            build_http_client(&config.user_agent, config.crawler.request_timeout_secs)?;

        Ok(Self {
            config,
            client,
            store: Arc::new(Mutex::new(store)),
            base,
        })
    }

    /// Runs the crawl to completion.
    ///
    /// Terminates when a listing page carries no next-page control.
    /// Transport and store failures propagate immediately; records
    /// persisted before the failure remain valid and deduplicated.
    pub async fn run(&self) -> Result<CrawlReport> {
        let started = Instant::now();
        let initial_count = self.store.lock().unwrap().count()?;

        let mut pages_visited = 0;
        let mut books_extracted = 0;
        let mut page_url = self.base.clone();

        loop {
            tracing::info!("fetching listing page {}", page_url);
            let body = fetch_page(&self.client, page_url.as_str()).await?;

            let links = parse_listing(&body);
            let item_urls = links
                .items
                .iter()
                .map(|href| resolve(&self.base, href))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            tracing::debug!("{} item links on {}", item_urls.len(), page_url);
            let books = process_batch(
                &self.client,
                &self.store,
                item_urls,
                self.config.crawler.max_concurrent_fetches,
            )
            .await?;

            books_extracted += books.len();
            pages_visited += 1;

            match links.next {
                Some(href) => page_url = resolve(&self.base, &href)?,
                None => break,
            }
        }

        let final_count = self.store.lock().unwrap().count()?;
        let books_appended = final_count.saturating_sub(initial_count);
        let report = CrawlReport {
            pages_visited,
            books_extracted,
            books_appended,
            duplicates_skipped: books_extracted.saturating_sub(books_appended),
            elapsed: started.elapsed(),
        };

        tracing::info!(
            "crawl complete: {} pages, {} extracted, {} appended, {} duplicates in {:?}",
            report.pages_visited,
            report.books_extracted,
            report.books_appended,
            report.duplicates_skipped,
            report.elapsed
        );

        Ok(report)
    }
}

/// Runs a crawl with the given configuration.
pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
