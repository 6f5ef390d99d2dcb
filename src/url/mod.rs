//! URL handling for the catalog crawl.
//!
//! Hrefs found in catalog markup are relative and inconsistent: listing
//! pages under the catalog path emit bare item hrefs, while the root page
//! emits hrefs that already carry the path segment. This module makes every
//! href absolute and fetchable before a request is attempted.

mod normalize;

pub use normalize::{normalize, resolve};
