//! The record type extracted from catalog detail pages.

use serde::{Deserialize, Serialize};

/// Sentinel value recorded for any field that could not be extracted.
///
/// Extraction is best-effort: a partially unparseable detail page still
/// yields a record, with this placeholder in every field that was missing.
pub const FIELD_MISSING: &str = "none";

/// One extracted catalog item.
///
/// All fields are plain text, matching the durable store format. Fields the
/// extractor could not locate hold [`FIELD_MISSING`] rather than being
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub availability: String,
    /// Catalog-assigned unique identifier; the dedup key.
    pub upc: String,
    pub price_exc_tax: String,
    pub tax: String,
}

impl Book {
    /// Returns true if the dedup key was actually extracted.
    ///
    /// Records without a usable key are never treated as duplicates of each
    /// other, so distinct items that both failed key extraction all persist.
    pub fn has_upc(&self) -> bool {
        !self.upc.is_empty() && self.upc != FIELD_MISSING
    }
}
