//! HTML link extraction
//!
//! Pulls the ordered, de-duplicated list of normalized absolute URLs out of
//! a page body. Parsing is forgiving: anything that is not HTML simply
//! yields no links.

use crate::url::resolve;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Extracts every anchor href from `html`, resolved against `base_url`.
///
/// Hrefs equal to the literal `#` placeholder are skipped. Duplicates are
/// dropped, first occurrence wins, document order is preserved. Malformed,
/// empty, or non-HTML input degrades to an empty vec rather than an error.
pub fn extract_links(base_url: &str, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // a[href] is a valid selector, so the parse cannot fail
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        // Bare "#" is a JS-only placeholder, not a link
        if href == "#" {
            continue;
        }
        if let Some(url) = resolve(base_url, href) {
            if seen.insert(url.clone()) {
                links.push(url);
            }
        }
    }

    links
}
