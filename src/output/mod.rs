//! Output rendering for crawl result trees
//!
//! Two renderings of the same tree: pretty-printed JSON (terminal statuses
//! as their variant names, errors as their display strings) and an indented
//! text tree for human eyes.

use crate::crawler::{LinkMap, Outcome};
use std::fmt::Write;

/// Serializes the result tree as pretty-printed JSON.
pub fn to_json_pretty(tree: &LinkMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

/// Renders the result tree as an indented text listing.
///
/// Crawled pages appear as bare URLs with their links nested below;
/// terminal links and fetch failures are annotated inline.
pub fn render_text(tree: &LinkMap) -> String {
    let mut out = String::new();
    render_level(tree, 0, &mut out);
    out
}

fn render_level(map: &LinkMap, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    for (url, outcome) in map {
        match outcome {
            Outcome::Page(links) => {
                let _ = writeln!(out, "{pad}{url}");
                render_level(links, indent + 1, out);
            }
            Outcome::Terminal(status) => {
                let _ = writeln!(out, "{pad}{url} [{status}]");
            }
            Outcome::Failed(err) => {
                let _ = writeln!(out, "{pad}{url} [error: {err}]");
            }
        }
    }
}
