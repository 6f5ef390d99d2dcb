//! Listing-page navigation.
//!
//! Given a parsed listing page, this module produces the item links on that
//! page in document order and the link to the next listing page, if any.
//! The hrefs come out exactly as written in the markup; resolution to
//! absolute URLs happens in the coordinator.

use scraper::{Html, Selector};

/// Anchor of each item summary on a listing page.
const ITEM_LINK_SELECTOR: &str = "article.product_pod h3 a";

/// Anchor of the next-page pagination control.
const NEXT_PAGE_SELECTOR: &str = "li.next a";

/// Links extracted from one listing page.
///
/// Ephemeral: owned by the coordinator iteration that produced it and
/// discarded once its URLs are resolved. A `None` next link marks the
/// terminal page; absence is typed, never a placeholder string.
#[derive(Debug, Clone)]
pub struct PageLinks {
    /// Item hrefs in document order. Empty is a valid listing page.
    pub items: Vec<String>,

    /// Href of the next listing page, if the pagination control is present.
    pub next: Option<String>,
}

/// Parses a listing page body and extracts its links.
pub fn parse_listing(html: &str) -> PageLinks {
    let doc = Html::parse_document(html);
    PageLinks {
        items: extract_item_links(&doc),
        next: extract_next_page_link(&doc),
    }
}

/// Extracts every item anchor href on the page, in document order.
///
/// An empty result is a valid empty listing page, not an error. Anchors
/// without an href attribute are skipped.
pub fn extract_item_links(doc: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(ITEM_LINK_SELECTOR) {
        for element in doc.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Extracts the href of the next-page control, if present.
pub fn extract_next_page_link(doc: &Html) -> Option<String> {
    let selector = Selector::parse(NEXT_PAGE_SELECTOR).ok()?;
    doc.select(&selector)
        .next()?
        .value()
        .attr("href")
        .map(str::to_string)
}
