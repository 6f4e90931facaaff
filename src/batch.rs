// src/batch.rs
// =============================================================================
// This module crawls a whole list of domains from a plain-text file.
//
// How it works:
// 1. Read the file: one domain per line, blank lines skipped
// 2. Run up to N crawls at once (each crawl owns all its state)
// 3. Re-validate each successful crawl's emails and apply the caller's
//    exclusion words
// 4. Hand back one outcome per input domain, in input order
//
// Rust concepts:
// - Streams with buffered(N): A worker pool with a concurrency cap
//   that still yields results in submission order
// - serde flatten: DomainOutcome serializes as one flat JSON object
// =============================================================================

use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::checker::validate_email_list;
use crate::crawl::{crawl_domain, CrawlReport};
use crate::exclusions::filter_emails;
use crate::extract::ExtractRules;

// How many crawls run at once unless --workers says otherwise
pub const DEFAULT_WORKERS: usize = 10;

// The outcome for one input domain
#[derive(Debug, Clone, Serialize)]
pub struct DomainOutcome {
    /// The domain exactly as it appeared in the input file
    pub domain: String,
    /// The crawl report for it
    #[serde(flatten)] // This merges the report fields into DomainOutcome
    pub report: CrawlReport,
}

// Reads the batch input file
//
// Parameters:
//   path: text file with one domain per line
//
// Returns: trimmed, non-empty lines in file order
pub fn read_domains_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;

    let domains = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    Ok(domains)
}

// Crawls every domain with a bounded worker pool
//
// Parameters:
//   domains: seeds to crawl, one outcome each
//   rules: compiled extraction rules, shared read-only by all crawls
//   excluded: caller exclusion words (may be empty)
//   workers: maximum crawls in flight at once
//
// Returns: outcomes in the same order as `domains`, whatever order the
// crawls actually finished in. A failed domain produces an error report,
// never a missing entry.
pub async fn process_domains(
    domains: &[String],
    rules: &ExtractRules,
    excluded: &HashSet<String>,
    workers: usize,
) -> Vec<DomainOutcome> {
    let workers = workers.max(1);

    let tasks = domains.iter().map(|domain| async move {
        let mut result = crawl_domain(domain, rules).await;

        // The crawler's extractor is loose on purpose; before a result
        // is reported here it goes through the strict syntax check and
        // the caller's exclusion words
        if let Ok(summary) = &mut result {
            let validated = validate_email_list(&summary.emails.join(", "));
            summary.emails = filter_emails(&validated, excluded);
        }

        DomainOutcome {
            domain: domain.clone(),
            report: CrawlReport::from_result(&result),
        }
    });

    // buffered (not buffer_unordered): run up to `workers` at once but
    // keep submission order in the output
    stream::iter(tasks).buffered(workers).collect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_domains_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("domains.txt");
        fs::write(&file, "one.example\n\n   two.example   \n\n").unwrap();

        let domains = read_domains_file(&file).unwrap();

        assert_eq!(domains, vec!["one.example", "two.example"]);
    }

    #[test]
    fn test_read_domains_missing_file_is_an_error() {
        let result = read_domains_file(Path::new("/no/such/file.txt"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_outcomes_preserve_input_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("hello@acme.es")
            .create_async()
            .await;

        // Middle domain refuses connections; the good one still comes
        // back in its slot
        let domains = vec![
            server.url(),
            "http://127.0.0.1:1".to_string(),
            "".to_string(),
        ];

        let rules = ExtractRules::new();
        let outcomes = process_domains(&domains, &rules, &HashSet::new(), 2).await;

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].domain, domains[0]);
        assert!(!outcomes[0].report.error);
        assert_eq!(outcomes[1].report.message, "Domain unreachable");
        assert_eq!(outcomes[2].report.message, "Invalid URL");
    }

    #[tokio::test]
    async fn test_exclusions_applied_to_each_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("keep@acme.es noreply@acme.es")
            .create_async()
            .await;

        let domains = vec![server.url()];
        let excluded: HashSet<String> = ["noreply".to_string()].into_iter().collect();

        let rules = ExtractRules::new();
        let outcomes = process_domains(&domains, &rules, &excluded, 1).await;

        assert_eq!(
            outcomes[0].report.emails.as_deref(),
            Some(["keep@acme.es".to_string()].as_slice())
        );
    }

    #[tokio::test]
    async fn test_empty_domain_list_yields_no_outcomes() {
        let rules = ExtractRules::new();
        let outcomes = process_domains(&[], &rules, &HashSet::new(), 4).await;
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let report = CrawlReport {
            error: true,
            message: "Domain unreachable".to_string(),
            emails: None,
            social_links: None,
        };
        let outcome = DomainOutcome {
            domain: "dead.example".to_string(),
            report,
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();

        // domain sits next to the report fields, not nested under it
        assert_eq!(json["domain"], "dead.example");
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "Domain unreachable");
    }
}
