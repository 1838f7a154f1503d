//! URL normalization and relative-reference resolution
//!
//! Normalization produces the canonical string form used as a key across one
//! crawl: query string and fragment dropped, a single trailing path slash
//! removed, everything else preserved as given.

use url::Url;

/// Normalizes a URL string into its canonical key form.
///
/// # Normalization Steps
///
/// 1. Drop the query string
/// 2. Drop the fragment
/// 3. Drop a single trailing `/` from the path
/// 4. Reassemble as `scheme://[userinfo@]host[:port]path`
///
/// The function is total: input the `url` crate cannot parse is normalized
/// at the string level instead of producing an error. It is idempotent on
/// anything it has already produced.
///
/// # Examples
///
/// ```
/// use hostscope::url::normalize;
///
/// assert_eq!(normalize("https://example.com/abc#cba?query"), "https://example.com/abc");
/// assert_eq!(normalize("https://example.com/"), "https://example.com");
/// ```
pub fn normalize(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => normalize_parsed(&parsed),
        Err(_) => normalize_lexical(url),
    }
}

/// Resolves `href` against `base` and normalizes the result.
///
/// An `href` that already carries a scheme is treated as absolute and `base`
/// is ignored. A scheme-less `href` is joined against `base` with standard
/// base+relative resolution semantics (absolute paths replace, relative
/// segments join, `.` and `..` collapse).
///
/// Returns `None` only when neither interpretation yields a parseable URL.
pub fn resolve(base: &str, href: &str) -> Option<String> {
    let resolved = match Url::parse(href) {
        Ok(absolute) => absolute,
        // No scheme (or otherwise not parseable on its own): join against base
        Err(_) => Url::parse(base).ok()?.join(href).ok()?,
    };
    Some(normalize_parsed(&resolved))
}

/// Reassembles a parsed URL without its query and fragment.
fn normalize_parsed(url: &Url) -> String {
    let mut out = format!("{}://", url.scheme());

    if !url.username().is_empty() {
        out.push_str(url.username());
        if let Some(password) = url.password() {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }

    if let Some(host) = url.host_str() {
        out.push_str(host);
    }
    if let Some(port) = url.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }

    out.push_str(url.path().strip_suffix('/').unwrap_or(url.path()));
    out
}

/// String-level fallback for input the parser rejects: cut at the first `?`
/// or `#`, then drop one trailing slash.
fn normalize_lexical(url: &str) -> String {
    let end = url
        .find(['?', '#'])
        .unwrap_or(url.len());
    let trimmed = &url[..end];
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(normalize("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_removes_trailing_slash() {
        assert_eq!(normalize("https://example.com/"), "https://example.com");
        assert_eq!(normalize("https://example.com/abc/"), "https://example.com/abc");
    }

    #[test]
    fn test_normalize_preserves_path() {
        assert_eq!(normalize("https://example.com/abc"), "https://example.com/abc");
    }

    #[test]
    fn test_normalize_removes_fragment() {
        assert_eq!(normalize("https://example.com#"), "https://example.com");
        assert_eq!(
            normalize("https://example.com/page#section"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_removes_query() {
        assert_eq!(
            normalize("https://example.com/abc?query"),
            "https://example.com/abc"
        );
    }

    #[test]
    fn test_normalize_removes_fragment_and_query() {
        assert_eq!(
            normalize("https://example.com/abc#cba?query"),
            "https://example.com/abc"
        );
    }

    #[test]
    fn test_normalize_keeps_port() {
        assert_eq!(
            normalize("http://127.0.0.1:8080/page/"),
            "http://127.0.0.1:8080/page"
        );
    }

    #[test]
    fn test_normalize_preserves_case() {
        assert_eq!(normalize("https://example.com/Page"), "https://example.com/Page");
    }

    #[test]
    fn test_normalize_idempotent() {
        let urls = [
            "https://example.com/abc#cba?query",
            "https://example.com/",
            "http://127.0.0.1:8080/x/y/",
            "mailto:someone@example.com",
        ];
        for url in urls {
            let once = normalize(url);
            assert_eq!(normalize(&once), once, "not idempotent for {}", url);
        }
    }

    #[test]
    fn test_normalize_unparseable_input() {
        assert_eq!(normalize("not a url/?q=1#frag"), "not a url");
    }

    #[test]
    fn test_resolve_empty_reference() {
        assert_eq!(
            resolve("https://example.com", "").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_resolve_root_path() {
        assert_eq!(
            resolve("https://example.com", "/").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve("https://example.com", "abc").as_deref(),
            Some("https://example.com/abc")
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve("https://example.com", "/blog").as_deref(),
            Some("https://example.com/blog")
        );
        assert_eq!(
            resolve("http://example.com", "/blog").as_deref(),
            Some("http://example.com/blog")
        );
    }

    #[test]
    fn test_resolve_full_url_ignores_base() {
        assert_eq!(
            resolve("https://example.com", "https://www.google.com").as_deref(),
            Some("https://www.google.com")
        );
    }

    #[test]
    fn test_resolve_dot_segments_collapse() {
        assert_eq!(
            resolve("https://example.com/a/b/", "../c").as_deref(),
            Some("https://example.com/a/c")
        );
    }

    #[test]
    fn test_resolve_normalizes_result() {
        assert_eq!(
            resolve("https://example.com", "/about/#team").as_deref(),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_resolve_mailto_kept_absolute() {
        assert_eq!(
            resolve("https://example.com", "mailto:someone@example.com").as_deref(),
            Some("mailto://someone@example.com")
        );
    }
}
