//! Result-tree types
//!
//! A crawl produces a nested map: each fetched page maps every link it
//! contains to either a terminal status, a fetch error, or the nested map of
//! the page that link led to. The value type therefore recursively contains
//! itself; `Outcome` is the tagged variant over those three cases.

use crate::FetchError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Terminal classification of a discovered link.
///
/// A link assigned one of these is not traversed further. These are not
/// errors: each is a successful decision to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The link points to a page this crawl has already expanded (or has
    /// pre-registered for expansion).
    AlreadyCrawled,
    /// The link does not use http or https.
    InvalidProtocol,
    /// The link leaves the seed's host scope.
    DifferentHost,
    /// The link was in scope but the depth limit stopped recursion. Also the
    /// provisional marker for links the orchestrator may still expand.
    DepthLimit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::AlreadyCrawled => "already crawled",
            Status::InvalidProtocol => "invalid protocol",
            Status::DifferentHost => "different host",
            Status::DepthLimit => "depth limit",
        };
        f.write_str(label)
    }
}

/// Per-link outcome inside a page's result map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The link was crawled; the value is that page's own result map.
    Page(LinkMap),
    /// The link was classified terminal and never fetched.
    Terminal(Status),
    /// The link was fetched and the fetch failed.
    Failed(FetchError),
}

/// Links discovered on one page, in extraction order, each with its outcome.
pub type LinkMap = IndexMap<String, Outcome>;
