use url::Url;

/// Path segment that identifies detail and listing pages within the catalog.
const CATALOGUE_PATH_MARKER: &str = "catalogue";

/// Normalizes an href found in catalog markup.
///
/// Hrefs emitted from pages inside the catalog path omit the path segment;
/// hrefs emitted from the root carry it. If `raw` already contains the
/// marker it is returned unchanged, otherwise the segment is prefixed.
///
/// Pure and infallible: every input maps to some output, the empty string
/// included, and the function is a fixed point under repeated application.
///
/// # Examples
///
/// ```
/// use shelfscrape::url::normalize;
///
/// assert_eq!(normalize("page-2.html"), "catalogue/page-2.html");
/// assert_eq!(normalize("catalogue/page-2.html"), "catalogue/page-2.html");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.contains(CATALOGUE_PATH_MARKER) {
        return raw.to_string();
    }

    format!("{}/{}", CATALOGUE_PATH_MARKER, raw)
}

/// Resolves an href to the absolute URL to fetch.
///
/// Normalizes `raw` and joins it against the catalog root, so both
/// root-relative and catalogue-relative hrefs land on the same absolute
/// form.
pub fn resolve(base: &Url, raw: &str) -> Result<Url, url::ParseError> {
    base.join(&normalize(raw))
}
