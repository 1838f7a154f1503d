//! Host-scope membership test

/// Returns true when `candidate` falls inside the crawl scope defined by
/// `base`.
///
/// This is a deliberately strict, order-sensitive literal prefix test over
/// the normalized string forms, not a host-field comparison: a candidate
/// with a different scheme fails it, and swapping the arguments changes the
/// answer. The empty candidate is never in scope.
///
/// # Examples
///
/// ```
/// use hostscope::url::in_scope;
///
/// assert!(in_scope("https://example.com", "https://example.com/blog"));
/// assert!(!in_scope("https://example.com/blog", "https://example.com"));
/// assert!(!in_scope("http://x.com", "https://x.com/y"));
/// ```
pub fn in_scope(base: &str, candidate: &str) -> bool {
    !candidate.is_empty() && candidate.starts_with(base)
}
