//! Record extraction from detail pages.
//!
//! Extraction is total: every well-formed document yields a record. Each
//! field is read from a fixed structural location; when the location is
//! missing the field collapses to the sentinel at record construction, and
//! a partially unparseable page still produces a usable record.

use crate::book::{Book, FIELD_MISSING};
use scraper::{Html, Selector};

/// The item name is the first page heading.
const NAME_SELECTOR: &str = "h1";
const NAME_INDEX: usize = 0;

/// Cells of the product information table, in document order.
const INFO_CELL_SELECTOR: &str = "table tr td";
const UPC_CELL: usize = 0;
const PRICE_EXC_TAX_CELL: usize = 3;
const TAX_CELL: usize = 4;
const AVAILABILITY_CELL: usize = 5;

/// Extracts a record from a parsed detail page.
///
/// Never fails: fields whose structural location is missing hold
/// [`FIELD_MISSING`] instead.
pub fn extract_book(doc: &Html) -> Book {
    Book {
        name: field_text(doc, NAME_SELECTOR, NAME_INDEX).unwrap_or_else(missing),
        availability: field_text(doc, INFO_CELL_SELECTOR, AVAILABILITY_CELL)
            .unwrap_or_else(missing),
        upc: field_text(doc, INFO_CELL_SELECTOR, UPC_CELL).unwrap_or_else(missing),
        price_exc_tax: field_text(doc, INFO_CELL_SELECTOR, PRICE_EXC_TAX_CELL)
            .unwrap_or_else(missing),
        tax: field_text(doc, INFO_CELL_SELECTOR, TAX_CELL).unwrap_or_else(missing),
    }
}

fn missing() -> String {
    FIELD_MISSING.to_string()
}

/// Reads the normalized text of the index-th element matching `selector`.
///
/// Returns `None` when the selector matches nothing, the index is out of
/// range, or the element's text is whitespace-only. The miss is surfaced
/// here as a typed absence and collapsed to the sentinel only by the
/// caller.
fn field_text(doc: &Html, selector: &str, index: usize) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = doc.select(&selector).nth(index)?;

    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
