//! Crawl orchestration
//!
//! The [`Crawler`] owns the recursive traversal: fetch a page under the
//! global concurrency gate, extract its links, classify each one, recurse
//! concurrently into the eligible ones, and merge child results back into
//! the parent's map. A fetch failure on one branch becomes a value in the
//! tree; it never cancels siblings or aborts the crawl.

use crate::config::{ConfigError, CrawlConfig};
use crate::crawler::classify::{classify, select_for_crawl};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::extract_links;
use crate::crawler::{LinkMap, Outcome};
use crate::url::normalize;
use crate::FetchError;
use futures::future::{join_all, BoxFuture};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;

/// Errors from constructing a [`Crawler`]
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Recursive, depth-limited, concurrency-bounded crawler.
///
/// One instance can run any number of crawls; the crawled set and result
/// tree are created per [`Crawler::crawl`] call and discarded with it.
pub struct Crawler {
    client: Client,
    fetch_gate: Arc<Semaphore>,
    depth_limit: u32,
}

impl Crawler {
    /// Creates a crawler from a validated configuration.
    pub fn new(config: &CrawlConfig) -> Result<Self, InitError> {
        config.validate()?;
        Ok(Self {
            client: build_http_client(config)?,
            fetch_gate: Arc::new(Semaphore::new(config.workers)),
            depth_limit: config.depth_limit,
        })
    }

    /// Fetches one page and returns the links found on it.
    ///
    /// The concurrency gate covers only the fetch; link extraction runs on
    /// the blocking pool so CPU-bound parsing never holds up other fetches.
    pub async fn crawl_url(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let body = {
            let _permit = self
                .fetch_gate
                .acquire()
                .await
                .expect("fetch gate is never closed");
            fetch_page(&self.client, url).await?
        };

        let base = url.to_string();
        tokio::task::spawn_blocking(move || extract_links(&base, &body))
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: format!("link extraction failed: {e}"),
            })
    }

    /// Crawls `seed_url` and returns the full result tree, keyed by the
    /// normalized seed.
    ///
    /// Only a failure to fetch the seed itself propagates as an error;
    /// every other fetch failure is embedded in the tree at the position of
    /// the page that failed.
    pub async fn crawl(&self, seed_url: &str) -> Result<LinkMap, FetchError> {
        let seed = normalize(seed_url);
        let mut crawled_urls = HashSet::new();
        crawled_urls.insert(seed.clone());

        let (url, links) = self
            .crawl_recursive(&seed, seed.clone(), crawled_urls, 0)
            .await?;

        let mut tree = LinkMap::new();
        tree.insert(url, Outcome::Page(links));
        Ok(tree)
    }

    /// One traversal node: fetch, classify, recurse, merge.
    ///
    /// `crawled_urls` is this branch's snapshot of the crawl history; it is
    /// extended with the whole sibling set before any child starts, so no
    /// child can re-expand a sibling. Two branches under different parents
    /// can still race on the same yet-uncommitted URL; that duplicate fetch
    /// is accepted behavior.
    fn crawl_recursive<'a>(
        &'a self,
        target_url: &'a str,
        current_url: String,
        crawled_urls: HashSet<String>,
        depth: u32,
    ) -> BoxFuture<'a, Result<(String, LinkMap), FetchError>> {
        Box::pin(async move {
            let found_urls = self.crawl_url(&current_url).await?;
            tracing::debug!(url = %current_url, found = found_urls.len(), "extracted links");

            // Every discovered link gets an entry immediately, in extraction
            // order; recursion below may overwrite the provisional ones
            let mut result: LinkMap = found_urls
                .iter()
                .map(|url| {
                    let status = classify(url, target_url, &crawled_urls);
                    (url.clone(), Outcome::Terminal(status))
                })
                .collect();

            if depth >= self.depth_limit {
                tracing::debug!(depth, url = %current_url, "depth limit reached, not crawling further");
                return Ok((current_url, result));
            }

            let to_crawl = select_for_crawl(target_url, &found_urls, &crawled_urls);
            tracing::debug!(url = %current_url, queued = to_crawl.len(), "crawling recursively");

            // Pre-register all siblings before any of them starts; each
            // child gets the same snapshot of the set
            let mut snapshot = crawled_urls;
            snapshot.extend(to_crawl.iter().cloned());

            let children = to_crawl.iter().map(|url| {
                self.crawl_recursive(target_url, url.clone(), snapshot.clone(), depth + 1)
            });

            for child in join_all(children).await {
                match child {
                    Ok((child_url, child_map)) => {
                        // The child's own links become its value directly,
                        // replacing the provisional marker in place
                        result.insert(child_url, Outcome::Page(child_map));
                    }
                    Err(err) => {
                        result.insert(err.url().to_string(), Outcome::Failed(err));
                    }
                }
            }

            Ok((current_url, result))
        })
    }
}
