// src/crawl/queue.rs
// =============================================================================
// This module implements the bounded website crawl with a breadth-first
// approach.
//
// How it works:
// 1. Validate the seed and check the domain answers HTTP at all
// 2. Start with the seed URL in a queue at depth 0
// 3. Fetch a page, harvest emails and social profile links from it
// 4. Below the depth limit, queue up to 10 same-host child links
// 5. Repeat until the queue is empty or 50 pages have been processed
//
// Hard bounds (the crawl can never run away):
// - MAX_PAGES: total successfully processed pages
// - MAX_DEPTH: link hops away from the seed
// - MAX_CHILD_LINKS: children taken from any single page
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - BTreeSet/BTreeMap: Sorted, deduplicated result collections
// =============================================================================

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use url::Url;

use crate::crawl::fetch::{build_client, domain_responds, fetch_page};
use crate::crawl::urls::{clean_url, resolve_link};
use crate::extract::{
    empty_social_sets, extract_emails, extract_social_links, ExtractRules, Platform,
};

// Stop after this many successfully processed pages
pub const MAX_PAGES: usize = 50;

// How many link hops away from the seed we will look for children.
// Pages AT this depth are still fetched; their links are not followed.
pub const MAX_DEPTH: usize = 2;

// How many child links to take from any single page
pub const MAX_CHILD_LINKS: usize = 10;

// Represents a page waiting in the crawl queue
#[derive(Debug, Clone)]
struct CrawlItem {
    url: Url,
    depth: usize, // 0 = the seed page itself
}

// Why a crawl could not run at all.
//
// Once the crawl is underway, individual page failures are absorbed;
// these three cover everything that stops it before the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    /// The seed input could not be turned into a usable URL
    InvalidUrl,
    /// The domain produced no HTTP response at all
    DomainUnreachable,
    /// Unexpected fault (e.g. the HTTP client could not be built)
    Internal(String),
}

impl std::fmt::Display for CrawlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrawlError::InvalidUrl => write!(f, "Invalid URL"),
            CrawlError::DomainUnreachable => write!(f, "Domain unreachable"),
            CrawlError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

// Everything a finished crawl produced.
//
// Both collections are sorted and deduplicated; social_links always
// carries all seven platform keys, empty or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub emails: Vec<String>,
    pub social_links: BTreeMap<Platform, Vec<String>>,
}

// The flat report shape consumers parse.
//
// On success: error=false, message="Crawl finished", both collections
// present. On failure: error=true, message says why, and the collection
// fields are omitted from the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<BTreeMap<Platform, Vec<String>>>,
}

impl CrawlReport {
    pub fn from_result(result: &Result<CrawlSummary, CrawlError>) -> Self {
        match result {
            Ok(summary) => CrawlReport {
                error: false,
                message: "Crawl finished".to_string(),
                emails: Some(summary.emails.clone()),
                social_links: Some(summary.social_links.clone()),
            },
            Err(e) => CrawlReport {
                error: true,
                message: e.to_string(),
                emails: None,
                social_links: None,
            },
        }
    }
}

// Crawls one website and collects contact emails and social links
//
// Parameters:
//   seed: the domain or URL to start from ("example.com" is fine)
//   rules: compiled extraction rules, shared across crawls
//
// Returns: a CrawlSummary, or a CrawlError when the crawl could not
// even start. Page-level failures after that never fail the crawl.
//
// The traversal is breadth-first and single-threaded: one page in
// flight at a time, state owned entirely by this invocation.
pub async fn crawl_domain(seed: &str, rules: &ExtractRules) -> Result<CrawlSummary, CrawlError> {
    // Validate and normalize the seed
    let start = match clean_url(seed) {
        Some(url) => url,
        None => return Err(CrawlError::InvalidUrl),
    };

    // The host we will stay on for the whole crawl
    let seed_host = match start.host_str() {
        Some(host) => host.to_string(),
        None => return Err(CrawlError::InvalidUrl),
    };

    let client = build_client().map_err(|e| CrawlError::Internal(e.to_string()))?;

    // One cheap request up front: if nothing answers, fail fast instead
    // of timing out on every queued page
    if !domain_responds(&client, &start).await {
        return Err(CrawlError::DomainUnreachable);
    }

    // Queue of pages to crawl, breadth-first
    let mut queue = VecDeque::new();
    queue.push_back(CrawlItem {
        url: start,
        depth: 0,
    });

    // Track visited URLs so no page is fetched twice
    let mut visited: HashSet<String> = HashSet::new();

    // Accumulated findings
    let mut emails: BTreeSet<String> = BTreeSet::new();
    let mut social = empty_social_sets();

    // Only pages that were fetched and had content count against the
    // budget; failures and empty bodies are free
    let mut pages_processed = 0;

    while let Some(item) = queue.pop_front() {
        if pages_processed >= MAX_PAGES {
            break;
        }

        // Skip if already visited (queued twice before the first visit)
        let url_key = item.url.to_string();
        if visited.contains(&url_key) {
            continue;
        }
        visited.insert(url_key);

        // Progress goes to stderr so stdout stays clean for reports
        eprintln!("  Crawling [depth {}]: {}", item.depth, item.url);

        let text = match fetch_page(&client, &item.url).await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("  Warning: Failed to fetch {}: {}", item.url, e);
                continue;
            }
        };

        if text.is_empty() {
            continue;
        }

        // Harvest this page
        emails.extend(extract_emails(&text, &rules.emails));
        for (platform, links) in extract_social_links(&text, &rules.social) {
            if let Some(set) = social.get_mut(&platform) {
                set.extend(links);
            }
        }

        // Queue children while below the depth limit
        if item.depth < MAX_DEPTH {
            let mut added = 0;
            for link in page_links(&text, &item.url) {
                // Stay on the seed's host
                if link.host_str() != Some(seed_host.as_str()) {
                    continue;
                }
                if visited.contains(link.as_str()) {
                    continue;
                }

                queue.push_back(CrawlItem {
                    url: link,
                    depth: item.depth + 1,
                });

                added += 1;
                if added >= MAX_CHILD_LINKS {
                    break;
                }
            }
        }

        pages_processed += 1;
    }

    Ok(CrawlSummary {
        emails: emails.into_iter().collect(),
        social_links: social
            .into_iter()
            .map(|(platform, links)| (platform, links.into_iter().collect()))
            .collect(),
    })
}

// Collects child link candidates from page HTML in document order
//
// Parameters:
//   html: the page body
//   base: the URL of the page (for resolving relative links)
//
// Returns: absolute URLs; same-host filtering happens in the caller
fn page_links(html: &str, base: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    // Parse the HTML (tolerates any markup, never fails)
    let document = Html::parse_document(html);

    // Select all <a> tags with href. The selector is a constant, so
    // parse can't fail.
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_link(href, base) {
                links.push(url);
            }
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is VecDeque?
//    - A double-ended queue
//    - push_back() adds to the end, pop_front() removes from the start
//    - First-in-first-out order is exactly breadth-first traversal:
//      all depth-1 pages before any depth-2 page
//
// 2. What is HashSet?
//    - A set of unique items with O(1) membership checks
//    - Visited URLs go in as normalized strings, so two spellings of
//      the same page collapse into one entry
//
// 3. Why check visited twice (at enqueue AND at dequeue)?
//    - Two different pages can both link to /contact before it has
//      been crawled, so the queue may hold duplicates
//    - The dequeue check is the one that guarantees a single fetch;
//      the enqueue check just keeps the queue small
//
// 4. Why count only successful, non-empty pages?
//    - The page budget is a work budget, not a request budget
//    - A dead link or empty response taught us nothing, so it does not
//      use up one of the 50 slots
//
// 5. Why BTreeSet for results instead of HashSet?
//    - Iteration order is sorted, so the final report is stable across
//      runs without a separate sort step
// -----------------------------------------------------------------------------
