//! HTTP fetching
//!
//! Builds the shared reqwest client and performs single-page GETs, mapping
//! HTTP status failures and transport failures into [`FetchError`] values.

use crate::config::CrawlConfig;
use crate::FetchError;
use reqwest::Client;

/// Builds the HTTP client shared by all fetches of one crawl.
///
/// Timeouts come from the configuration; redirects follow reqwest's default
/// policy, and compressed responses are decoded transparently.
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("hostscope/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches `url` and returns the body text.
///
/// A 4xx/5xx response becomes `FetchError::Status` carrying the numeric
/// code; network-level failures (DNS, connect, timeout) become
/// `FetchError::Transport`. Both carry the request URL so the orchestrator
/// can attach the error at the right position in the result tree.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = CrawlConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_unresolvable_host_is_transport_error() {
        let config = CrawlConfig {
            request_timeout: std::time::Duration::from_secs(2),
            connect_timeout: std::time::Duration::from_secs(2),
            ..CrawlConfig::default()
        };
        let client = build_http_client(&config).unwrap();

        let err = fetch_page(&client, "http://host.invalid")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(err.url(), "http://host.invalid");
    }
}
