// src/crawl/urls.rs
// =============================================================================
// This module cleans up seed input and resolves links found on pages.
//
// Two jobs:
// 1. clean_url: turn whatever the caller typed ("example.com", " https://x ")
//    into a well-formed absolute URL, or reject it
// 2. resolve_link: turn an href value (absolute or relative) into an
//    absolute URL against the page it was found on
//
// Both functions are pure string/URL work - no network access happens here.
//
// Rust concepts:
// - Option<T>: "a URL or nothing" - invalid input simply yields None
// - The url crate: parsing, normalizing and joining URLs (RFC 3986)
// =============================================================================

use url::Url;

// Cleans and validates a raw domain/URL string.
//
// Steps:
// 1. Trim whitespace; an empty string is rejected
// 2. If there is no http:// or https:// prefix (case-insensitive),
//    assume http://
// 3. Parse; anything without a host is rejected
//
// Parameters:
//   raw: whatever the caller supplied ("example.com", "https://a.b/c", ...)
//
// Returns: Some(normalized absolute URL) or None if the input is unusable
//
// Examples:
//   "example.com"         -> Some("http://example.com/")
//   "  HTTPS://Site.es  " -> Some("https://site.es/")
//   ""                    -> None
pub fn clean_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Default to http:// when no scheme was given. The check is
    // case-insensitive so "HTTP://..." does not get prefixed twice.
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    // Parsing also normalizes (lowercased host, resolved path dots).
    // A URL without a host is useless for crawling, so it is rejected
    // even if it technically parsed.
    match Url::parse(&candidate) {
        Ok(url) if url.host_str().is_some() => Some(url),
        _ => None,
    }
}

// Resolves an href value to an absolute URL.
//
// Parameters:
//   link: the href value as found in the page (may be relative)
//   base: the URL of the page the link was found on
//
// Returns: Some(absolute URL with a host) or None
//
// Examples:
//   base = "http://example.com/page"
//   "/docs"             -> Some("http://example.com/docs")
//   "../other"          -> Some("http://example.com/other")
//   "https://other.com" -> Some("https://other.com/")  (kept as-is)
//   "mailto:a@b.com"    -> None  (no host, nothing to fetch)
pub fn resolve_link(link: &str, base: &Url) -> Option<Url> {
    if link.is_empty() {
        return None;
    }

    // Already absolute with a real host? Keep it as parsed, without
    // re-resolving against the base.
    if let Ok(url) = Url::parse(link) {
        if url.host_str().is_some() {
            return Some(url);
        }
    }

    // Otherwise resolve it relative to the current page, following the
    // standard RFC 3986 rules ("../" segments, query, fragment).
    // Scheme-only references like mailto: or javascript: come out of the
    // join without a host and are rejected here.
    match base.join(link) {
        Ok(url) if url.host_str().is_some() => Some(url),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option instead of Result?
//    - There is only one way these functions fail: the input is not a
//      usable URL
//    - The caller never needs a reason, it just moves on, so None says
//      everything there is to say
//
// 2. What does Url::parse normalize?
//    - Hosts are lowercased ("Example.COM" -> "example.com")
//    - A missing path becomes "/" ("http://a.com" -> "http://a.com/")
//    - Dot segments in absolute URLs are resolved
//    - This matters for deduplication: two spellings of the same page
//      collapse into one string
//
// 3. What is base.join()?
//    - The same resolution a browser performs for an href
//    - "http://a.com/x/y".join("z") -> "http://a.com/x/z"
//    - "http://a.com/x/y".join("/z") -> "http://a.com/z"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_bare_domain_gets_http_prefix() {
        let url = clean_url("example.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_clean_keeps_existing_scheme() {
        let url = clean_url("https://example.com/contact").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.as_str(), "https://example.com/contact");
    }

    #[test]
    fn test_clean_scheme_check_is_case_insensitive() {
        // "HTTPS://..." must not come out as "http://HTTPS://..."
        let url = clean_url("HTTPS://Example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_clean_trims_whitespace() {
        let url = clean_url("   example.com  ").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_clean_rejects_empty_input() {
        assert_eq!(clean_url(""), None);
        assert_eq!(clean_url("   "), None);
    }

    #[test]
    fn test_clean_rejects_hostless_input() {
        assert_eq!(clean_url("http://"), None);
        assert_eq!(clean_url("https:// "), None);
    }

    #[test]
    fn test_resolve_keeps_absolute_links() {
        let base = Url::parse("http://example.com/page").unwrap();
        let url = resolve_link("https://other.com/profile", &base).unwrap();
        assert_eq!(url.as_str(), "https://other.com/profile");
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = Url::parse("http://example.com/page").unwrap();
        let url = resolve_link("/docs", &base).unwrap();
        assert_eq!(url.as_str(), "http://example.com/docs");
    }

    #[test]
    fn test_resolve_parent_segments() {
        let base = Url::parse("http://example.com/a/b/c").unwrap();
        let url = resolve_link("../other", &base).unwrap();
        assert_eq!(url.as_str(), "http://example.com/a/other");
    }

    #[test]
    fn test_resolve_fragment_stays_on_page() {
        let base = Url::parse("http://example.com/page").unwrap();
        let url = resolve_link("#team", &base).unwrap();
        assert_eq!(url.as_str(), "http://example.com/page#team");
    }

    #[test]
    fn test_resolve_rejects_empty_link() {
        let base = Url::parse("http://example.com/").unwrap();
        assert_eq!(resolve_link("", &base), None);
    }

    #[test]
    fn test_resolve_rejects_hostless_schemes() {
        let base = Url::parse("http://example.com/").unwrap();
        assert_eq!(resolve_link("mailto:info@example.com", &base), None);
        assert_eq!(resolve_link("javascript:void(0)", &base), None);
        assert_eq!(resolve_link("tel:+34911222333", &base), None);
    }
}
