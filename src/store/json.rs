//! JSON-file store implementation.
//!
//! The backing file holds one JSON object with a single `"books"` field
//! mapping to an array of records. Appends rewrite the whole file through a
//! temporary file in the same directory followed by an atomic rename, so a
//! failed write leaves the durable state exactly as it was.

use crate::book::Book;
use crate::store::traits::{BookStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// On-disk collection shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Catalog {
    books: Vec<Book>,
}

/// JSON-file store backend.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens an existing store file.
    ///
    /// The file must already exist and parse as a collection; the crawl
    /// core never creates the store from nothing. Fails with
    /// [`StoreError::Corrupt`] otherwise.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        store.read_catalog()?;
        Ok(store)
    }

    /// Writes an empty collection if the file does not exist yet.
    ///
    /// This is the CLI-layer bootstrap; the crawl path only ever goes
    /// through [`JsonStore::open`]. An existing file is left untouched.
    pub fn initialize(path: &Path) -> StoreResult<()> {
        if path.exists() {
            return Ok(());
        }
        write_catalog(path, &Catalog::default())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_catalog(&self) -> StoreResult<Catalog> {
        let corrupt = |reason: String| StoreError::Corrupt {
            path: self.path.display().to_string(),
            reason,
        };

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| corrupt(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))
    }
}

impl BookStore for JsonStore {
    fn append(&mut self, book: &Book) -> StoreResult<bool> {
        let mut catalog = self.read_catalog()?;

        // Sentinel keys never match each other; see Book::has_upc.
        if book.has_upc() && catalog.books.iter().any(|b| b.upc == book.upc) {
            return Ok(false);
        }

        catalog.books.push(book.clone());
        write_catalog(&self.path, &catalog)?;
        Ok(true)
    }

    fn load(&self) -> StoreResult<Vec<Book>> {
        Ok(self.read_catalog()?.books)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read_catalog()?.books.len())
    }
}

/// Serializes the collection and atomically replaces the store file.
fn write_catalog(path: &Path, catalog: &Catalog) -> StoreResult<()> {
    let persist_err = |source: std::io::Error| StoreError::Persistence {
        path: path.display().to_string(),
        source,
    };

    // The temp file must live on the same filesystem as the target for the
    // rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let body = serde_json::to_string_pretty(catalog)
        .map_err(|e| persist_err(std::io::Error::from(e)))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(persist_err)?;
    tmp.write_all(body.as_bytes()).map_err(persist_err)?;
    tmp.persist(path).map_err(|e| persist_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::FIELD_MISSING;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("books.json")
    }

    fn sample_book(upc: &str) -> Book {
        Book {
            name: "Sharp Objects".to_string(),
            availability: "In stock (20 available)".to_string(),
            upc: upc.to_string(),
            price_exc_tax: "£47.82".to_string(),
            tax: "£0.00".to_string(),
        }
    }

    #[test]
    fn test_open_requires_existing_file() {
        let dir = TempDir::new().unwrap();
        let result = JsonStore::open(&store_path(&dir));
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_initialize_creates_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        JsonStore::initialize(&path).unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_initialize_leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        store.append(&sample_book("upc-1")).unwrap();

        JsonStore::initialize(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_append_and_load() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        assert!(store.append(&sample_book("upc-1")).unwrap());

        let books = store.load().unwrap();
        assert_eq!(books, vec![sample_book("upc-1")]);
    }

    #[test]
    fn test_append_is_idempotent_per_key() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        assert!(store.append(&sample_book("UPC123")).unwrap());
        assert!(!store.append(&sample_book("UPC123")).unwrap());

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_key_keeps_first_record() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        store.append(&sample_book("UPC123")).unwrap();

        let mut changed = sample_book("UPC123");
        changed.name = "A different title".to_string();
        assert!(!store.append(&changed).unwrap());

        let books = store.load().unwrap();
        assert_eq!(books[0].name, "Sharp Objects");
    }

    #[test]
    fn test_sentinel_keys_never_deduplicate() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        let mut first = sample_book(FIELD_MISSING);
        first.name = "First unkeyed book".to_string();
        let mut second = sample_book(FIELD_MISSING);
        second.name = "Second unkeyed book".to_string();

        assert!(store.append(&first).unwrap());
        assert!(store.append(&second).unwrap());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "not json at all").unwrap();

        let result = JsonStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, r#"{"records": []}"#).unwrap();

        let result = JsonStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_file_stays_valid_json_after_appends() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        JsonStore::initialize(&path).unwrap();

        let mut store = JsonStore::open(&path).unwrap();
        store.append(&sample_book("upc-1")).unwrap();
        store.append(&sample_book("upc-2")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["books"].as_array().unwrap().len(), 2);
    }
}
