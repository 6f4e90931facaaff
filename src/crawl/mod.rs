// src/crawl/mod.rs
// =============================================================================
// This module handles the bounded website crawl.
//
// Submodules:
// - urls: Cleans seed input and resolves links found on pages
// - fetch: Downloads pages with a timeout and a size cap
// - queue: The breadth-first traversal that ties it all together
//
// Features:
// - Breadth-first crawling starting from a seed domain
// - Respects same-host restriction (doesn't crawl external sites)
// - Hard limits on depth, page count, and download size
// - Collects emails and social profile links from every fetched page
//
// Rust concepts:
// - Async programming: For network requests
// - Collections: HashSet for tracking visited URLs, VecDeque for queue
// =============================================================================

mod fetch;
mod queue;
mod urls;

// Re-export what the rest of the application needs
pub use queue::{crawl_domain, CrawlError, CrawlReport, CrawlSummary};
