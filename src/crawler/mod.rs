//! Crawler module
//!
//! This module contains the core crawling logic:
//! - HTTP fetching under a global concurrency gate
//! - HTML link extraction
//! - Per-link classification and crawl selection
//! - The recursive crawl orchestrator and its result-tree types

mod classify;
mod coordinator;
mod fetcher;
mod outcome;
mod parser;

pub use classify::{classify, select_for_crawl};
pub use coordinator::{Crawler, InitError};
pub use fetcher::{build_http_client, fetch_page};
pub use outcome::{LinkMap, Outcome, Status};
pub use parser::extract_links;
