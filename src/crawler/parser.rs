//! HTML link extraction and normalization
//!
//! Pulls anchor-tag targets out of a fetched page and runs each one through
//! the filter pipeline the engine depends on:
//!
//! 1. Reject empty hrefs, self links, `/`, and fragment-only anchors
//! 2. Resolve relative references against the page's own address
//! 3. Reject targets on a different host than the crawl's base host
//! 4. Strip the trailing slash
//! 5. Deduplicate within the page, preserving first-seen order

use crate::{UrlError, UrlResult};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the normalized, same-host child addresses of a page
///
/// Links that fail any filter step are dropped silently; a page whose links
/// all get filtered out yields an empty list, not an error.
pub fn extract_links(html: &str, page_url: &Url, base_host: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut children = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            match filter_link(href, page_url, base_host) {
                Ok(address) => {
                    if seen.insert(address.clone()) {
                        children.push(address);
                    }
                }
                Err(reason) => {
                    tracing::trace!("Dropping link {:?} on {}: {}", href, page_url, reason);
                }
            }
        }
    }

    children
}

/// Normalizes a single raw link target against its page
///
/// Returns the absolute, same-host address with no trailing slash, or the
/// reason the link was rejected.
pub fn filter_link(href: &str, page_url: &Url, base_host: &str) -> UrlResult<String> {
    if href.is_empty() || href == page_url.as_str() || href == "/" || href.starts_with('#') {
        return Err(UrlError::Rejected(href.to_string()));
    }

    let resolved = page_url
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    match resolved.host_str() {
        Some(host) if host == base_host => {}
        Some(_) => return Err(UrlError::CrossHost(href.to_string())),
        None => return Err(UrlError::MissingHost),
    }

    let mut address = resolved.to_string();
    if address.ends_with('/') {
        address.pop();
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/doc").unwrap()
    }

    #[test]
    fn test_reject_empty_link() {
        let result = filter_link("", &page_url(), "example.com");
        assert!(matches!(result, Err(UrlError::Rejected(_))));
    }

    #[test]
    fn test_reject_root_link() {
        let result = filter_link("/", &page_url(), "example.com");
        assert!(matches!(result, Err(UrlError::Rejected(_))));
    }

    #[test]
    fn test_reject_fragment_link() {
        let result = filter_link("#question", &page_url(), "example.com");
        assert!(matches!(result, Err(UrlError::Rejected(_))));
    }

    #[test]
    fn test_reject_self_link() {
        let result = filter_link("https://example.com/doc", &page_url(), "example.com");
        assert!(matches!(result, Err(UrlError::Rejected(_))));
    }

    #[test]
    fn test_reject_cross_host_link() {
        let result = filter_link("https://twitter.com", &page_url(), "example.com");
        assert!(matches!(result, Err(UrlError::CrossHost(_))));
    }

    #[test]
    fn test_resolve_relative_link() {
        let result = filter_link("/help", &page_url(), "example.com").unwrap();
        assert_eq!(result, "https://example.com/help");
    }

    #[test]
    fn test_strip_trailing_slash() {
        let result = filter_link("/blog/", &page_url(), "example.com").unwrap();
        assert_eq!(result, "https://example.com/blog");
    }

    #[test]
    fn test_extract_dedupes_within_page() {
        let html = r#"
            <html><body>
                <a href="/blog/">blog</a>
                <a href="/blog">blog again</a>
                <a href="/about">about</a>
                <a href="/blog">blog a third time</a>
            </body></html>
        "#;
        let links = extract_links(html, &page_url(), "example.com");
        assert_eq!(
            links,
            vec![
                "https://example.com/blog".to_string(),
                "https://example.com/about".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_filters_fixture_page() {
        // Relative, fragment, self, duplicate, and cross-host links mixed.
        let html = r##"
            <html><body>
                <a href="">empty</a>
                <a href="/">home</a>
                <a href="#question">anchor</a>
                <a href="https://example.com/doc">self</a>
                <a href="https://twitter.com">external</a>
                <a href="/help">help</a>
                <a href="/help">help again</a>
                <a href="/Career">career</a>
            </body></html>
        "##;
        let links = extract_links(html, &page_url(), "example.com");
        assert_eq!(
            links,
            vec![
                "https://example.com/help".to_string(),
                "https://example.com/Career".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_preserves_first_seen_order() {
        let html = r#"
            <html><body>
                <a href="/c">c</a>
                <a href="/a">a</a>
                <a href="/b">b</a>
            </body></html>
        "#;
        let links = extract_links(html, &page_url(), "example.com");
        assert_eq!(
            links,
            vec![
                "https://example.com/c".to_string(),
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_nothing_from_linkless_page() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        let links = extract_links(html, &page_url(), "example.com");
        assert!(links.is_empty());
    }
}
