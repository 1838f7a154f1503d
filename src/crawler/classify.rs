//! Link classification and crawl selection
//!
//! Pure functions deciding what happens to each discovered link: a terminal
//! status, or eligibility for further traversal.

use crate::crawler::Status;
use crate::url::in_scope;
use std::collections::HashSet;

/// Classifies a discovered link against the crawl's scope and history.
///
/// The precedence is fixed:
///
/// 1. already in the crawled set -> `AlreadyCrawled`
/// 2. not an http(s) URL -> `InvalidProtocol`
/// 3. outside the seed's host scope -> `DifferentHost`
/// 4. otherwise -> `DepthLimit`
///
/// `DepthLimit` is provisional: the orchestrator may later overwrite it with
/// the nested result of actually crawling the link, or with a fetch error.
pub fn classify(found_url: &str, base_url: &str, crawled_urls: &HashSet<String>) -> Status {
    if crawled_urls.contains(found_url) {
        Status::AlreadyCrawled
    } else if !found_url.starts_with("http://") && !found_url.starts_with("https://") {
        Status::InvalidProtocol
    } else if !in_scope(base_url, found_url) {
        Status::DifferentHost
    } else {
        Status::DepthLimit
    }
}

/// Filters `found_urls` down to the ones worth recursing into: not yet
/// crawled and inside the seed's host scope. Input order is preserved.
pub fn select_for_crawl(
    base_url: &str,
    found_urls: &[String],
    crawled_urls: &HashSet<String>,
) -> Vec<String> {
    found_urls
        .iter()
        .filter(|url| !crawled_urls.contains(*url) && in_scope(base_url, url))
        .cloned()
        .collect()
}
