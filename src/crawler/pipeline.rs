//! Concurrent per-item fetch pipeline.
//!
//! For one listing page's batch of item URLs, fetches fan out concurrently
//! while each item's extract-and-persist step runs as soon as its own fetch
//! completes. Results come back in completion order; persistence is
//! idempotent per unique key, so ordering carries no meaning.

use crate::book::Book;
use crate::crawler::extractor::extract_book;
use crate::crawler::fetcher::fetch_page;
use crate::store::{BookStore, JsonStore};
use crate::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use scraper::Html;
use std::sync::{Arc, Mutex};
use url::Url;

/// Fetches one detail page and extracts its record.
pub async fn fetch_and_extract(client: &Client, url: &Url) -> Result<Book> {
    let body = fetch_page(client, url.as_str()).await?;

    // The parsed document is not Send; keep it inside a scope with no
    // await points.
    let book = {
        let doc = Html::parse_document(&body);
        extract_book(&doc)
    };

    Ok(book)
}

/// Fetches, extracts, and persists a whole batch of item URLs.
///
/// `limit` caps the number of in-flight fetches; `None` fans out fully,
/// one concurrent fetch per URL. Each record is appended to the store
/// right after its own fetch completes; store calls are serialized through
/// the mutex so concurrent items cannot race the dedup scan.
///
/// The first transport or store failure propagates and cancels the rest of
/// the batch. Records persisted before the failure remain in the store.
pub async fn process_batch(
    client: &Client,
    store: &Arc<Mutex<JsonStore>>,
    urls: Vec<Url>,
    limit: Option<usize>,
) -> Result<Vec<Book>> {
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let limit = limit.unwrap_or(urls.len());

    stream::iter(urls)
        .map(|url| {
            let client = client.clone();
            let store = Arc::clone(store);
            async move {
                let book = fetch_and_extract(&client, &url).await?;

                let appended = {
                    let mut store = store.lock().unwrap();
                    store.append(&book)?
                };

                if appended {
                    tracing::info!("recorded \"{}\" (upc {})", book.name, book.upc);
                } else {
                    tracing::debug!("duplicate upc {} at {}, skipping", book.upc, url);
                }

                Ok(book)
            }
        })
        .buffer_unordered(limit)
        .try_collect()
        .await
}
