//! Durable record store.
//!
//! The store owns the persisted collection of extracted records. It accepts
//! new records, ignores duplicates by unique key, and replaces the backing
//! file atomically so readers never observe a partially written collection.

mod json;
mod traits;

pub use json::JsonStore;
pub use traits::{BookStore, StoreError, StoreResult};
