//! Store trait and error types.

use crate::book::Book;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read, or does not hold a valid
    /// collection. Fatal: the crawl must not continue against a store it
    /// cannot trust.
    #[error("store file {path} is unreadable or not a valid collection: {reason}")]
    Corrupt { path: String, reason: String },

    /// The updated collection could not be durably written. The prior
    /// contents of the store file are left intact.
    #[error("failed to persist store file {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for duplicate-safe record stores.
///
/// Every operation loads the full collection from durable storage and, for
/// writes, replaces it in full. That makes each call O(collection size); the
/// cost is accepted so that no partial-write state is ever visible between
/// calls.
pub trait BookStore {
    /// Appends a record unless one with the same unique key already exists.
    ///
    /// Returns `Ok(true)` if the record was appended, `Ok(false)` if an
    /// existing record owns the key and the call was a no-op. A duplicate is
    /// part of the contract, not an error. Records whose key is the missing
    /// sentinel never match each other.
    fn append(&mut self, book: &Book) -> StoreResult<bool>;

    /// Loads the full collection.
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Counts the records currently persisted.
    fn count(&self) -> StoreResult<usize>;
}
