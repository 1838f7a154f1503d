//! Hostscope: a recursive same-host link crawler
//!
//! This crate discovers and classifies every hyperlink reachable from a seed
//! URL, staying within the seed's host scope, down to a configurable depth,
//! with a global bound on in-flight HTTP requests. The result is a nested
//! tree mapping each fetched page to the outcome of every link found on it.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error produced while fetching a single page.
///
/// A fetch failure is a value, not a crash: except for the seed URL, it is
/// embedded in the result tree at the position of the page that failed and
/// never aborts sibling branches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Network-level failure: unreachable host, DNS, timeout, bad TLS.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch produced this error.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } => url,
            FetchError::Transport { url, .. } => url,
        }
    }

    /// Classifies a reqwest error for `url`.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timeout".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        FetchError::Transport {
            url: url.to_string(),
            message,
        }
    }
}

// Error values inside the result tree are rendered through their Display
// string, both in JSON and in the text tree.
impl Serialize for FetchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Re-export commonly used types
pub use config::{ConfigError, CrawlConfig};
pub use crawler::{Crawler, LinkMap, Outcome, Status};
pub use url::{in_scope, normalize, resolve};
