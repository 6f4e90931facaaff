// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages over HTTP with hard safety limits.
//
// Key functionality:
// - One GET per page with a 15 second timeout
// - Streams the body and aborts past 2 MiB (no giant downloads)
// - Decodes whatever arrives as UTF-8, replacing invalid bytes
// - A cheap reachability probe used before a crawl starts
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E> with a custom error enum: Callers see WHY a fetch failed
// - Streams: Reading the body chunk by chunk instead of all at once
// =============================================================================

use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// How long to wait for a server before giving up on a request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// Maximum body size we are willing to download (2 MiB)
pub const MAX_DOWNLOAD_SIZE: usize = 2 * 1024 * 1024;

// Why a page could not be fetched
//
// A failed page is never fatal to a crawl: the caller logs it and moves on.
#[derive(Debug)]
pub enum FetchError {
    /// The body grew past MAX_DOWNLOAD_SIZE
    TooLarge,
    /// Anything else: transport error, timeout, non-2xx status
    Failed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::TooLarge => write!(f, "body larger than {} bytes", MAX_DOWNLOAD_SIZE),
            FetchError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

// Builds the HTTP client used for a single crawl
//
// The timeout lives on the client so every request made through it
// inherits the limit.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

// Fetches one page and returns its text content
//
// Parameters:
//   client: HTTP client (carries the timeout)
//   url: absolute URL of the page
//
// Returns: the decoded body, or a FetchError describing the failure
//
// The body is read as a stream of chunks so we can stop as soon as the
// 2 MiB cap is crossed, instead of buffering an arbitrarily large
// response first. A body of exactly 2 MiB is still accepted.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| FetchError::Failed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Failed(format!("HTTP {}", status)));
    }

    let mut body: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Failed(e.to_string()))?;
        if body.len() + chunk.len() > MAX_DOWNLOAD_SIZE {
            // Partial bytes are dropped along with `body` here
            return Err(FetchError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }

    // Real pages lie about encodings all the time; lossy decoding keeps
    // the crawl going and only mangles the bytes that were broken anyway
    Ok(String::from_utf8_lossy(&body).into_owned())
}

// Checks whether a domain answers HTTP at all
//
// Returns true as soon as the server produces ANY response. An error
// status like 404 or 500 still means somebody is listening, so it counts
// as reachable; only transport-level failures (DNS, refused connection,
// timeout) return false.
//
// The body is never read, the response is dropped after the headers.
pub async fn domain_responds(client: &Client, url: &Url) -> bool {
    client.get(url.as_str()).send().await.is_ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why stream the body?
//    - response.text() would buffer the whole body before we see a byte
//    - bytes_stream() hands us chunks as they arrive
//    - We can count bytes and bail out the moment the cap is crossed
//
// 2. What is String::from_utf8_lossy?
//    - Converts bytes to a String without failing
//    - Invalid UTF-8 sequences become the replacement character
//    - A crawler prefers slightly mangled text over a dead page
//
// 3. Why is the timeout on the client and not per request?
//    - Client::builder().timeout(...) applies to every request made
//      through that client
//    - One place to set it, impossible to forget on a call site
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html>hello</html>")
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&format!("{}/page", server.url())).unwrap();
        let body = fetch_page(&client, &url).await.unwrap();

        assert_eq!(body, "<html>hello</html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&format!("{}/missing", server.url())).unwrap();
        let err = fetch_page(&client, &url).await.unwrap_err();

        match err {
            FetchError::Failed(msg) => assert!(msg.contains("404")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_oversized_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/big")
            .with_status(200)
            .with_body("a".repeat(MAX_DOWNLOAD_SIZE + 1))
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&format!("{}/big", server.url())).unwrap();
        let err = fetch_page(&client, &url).await.unwrap_err();

        assert!(matches!(err, FetchError::TooLarge));
    }

    #[tokio::test]
    async fn test_fetch_allows_body_at_exact_cap() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/edge")
            .with_status(200)
            .with_body("a".repeat(MAX_DOWNLOAD_SIZE))
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&format!("{}/edge", server.url())).unwrap();
        let body = fetch_page(&client, &url).await.unwrap();

        assert_eq!(body.len(), MAX_DOWNLOAD_SIZE);
    }

    #[tokio::test]
    async fn test_fetch_decodes_invalid_utf8_lossily() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/latin")
            .with_status(200)
            .with_body(vec![b'o', b'k', 0xff, 0xfe])
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&format!("{}/latin", server.url())).unwrap();
        let body = fetch_page(&client, &url).await.unwrap();

        assert!(body.starts_with("ok"));
        assert!(body.contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_domain_responds_counts_error_status_as_alive() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = Url::parse(&server.url()).unwrap();
        assert!(domain_responds(&client, &url).await);
    }

    #[tokio::test]
    async fn test_domain_responds_false_when_nothing_listens() {
        let client = build_client().unwrap();
        // Port 1 on loopback: connection refused, no network needed
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        assert!(!domain_responds(&client, &url).await);
    }
}
