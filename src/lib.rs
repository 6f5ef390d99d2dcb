//! Shelfscrape: a paginated catalog scraper
//!
//! This crate crawls a catalog website page by page, follows every item
//! link found on each listing page, extracts structured records from the
//! item detail pages, and persists them to a durable JSON collection with
//! duplicate-safe appends.

pub mod book;
pub mod config;
pub mod crawler;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for shelfscrape operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for shelfscrape operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use book::{Book, FIELD_MISSING};
pub use config::Config;
pub use crawler::{crawl, CrawlReport};
pub use store::{BookStore, JsonStore, StoreError};
