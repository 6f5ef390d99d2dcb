//! HTTP transport for the crawler.
//!
//! This module handles all HTTP requests:
//! - Building the shared HTTP client with a proper user agent string
//! - GET requests for listing and detail pages
//! - Classifying failures as transport errors that abort the crawl

use crate::config::UserAgentConfig;
use crate::{Result, ShelfError};
use reqwest::Client;
use std::time::Duration;

/// Connect timeout applied to every request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by all fetches.
///
/// The client carries the user agent string, a total request timeout from
/// the crawler configuration, and a fixed connect timeout.
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `request_timeout_secs` - Total per-request timeout in seconds
pub fn build_http_client(
    config: &UserAgentConfig,
    request_timeout_secs: u64,
) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(Duration::from_secs(request_timeout_secs))
        .connect_timeout(CONNECT_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text.
///
/// Any non-success outcome is a transport failure: a network-level error
/// maps to [`ShelfError::Http`], a non-2xx response to
/// [`ShelfError::Status`]. Both propagate to the caller and abort the
/// current batch.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ShelfError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShelfError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ShelfError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = UserAgentConfig::default();
        assert!(build_http_client(&config, 30).is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&UserAgentConfig::default(), 5).unwrap();
        let result = fetch_page(&client, &format!("{}/missing", server.uri())).await;

        assert!(matches!(
            result,
            Err(ShelfError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&UserAgentConfig::default(), 5).unwrap();
        let body = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<html>hello</html>");
    }
}
