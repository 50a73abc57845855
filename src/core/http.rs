//! HTTP utilities for transaction sources

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout for every source
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; nba-trade-tree/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Headers sent with every page request
pub fn html_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h
}

/// Build the shared client used by all sources
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(html_headers())
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// GET a page and return its body, failing on non-success status
pub async fn get_text(client: &Client, url: &str, query: &[(&str, String)]) -> Result<String> {
    tracing::debug!(url, "fetching page");
    let body = client
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_headers() {
        let headers = html_headers();
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.contains("nba-trade-tree"));
    }
}
