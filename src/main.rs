// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Run the crawl(s) and print the findings
// 4. Exit with proper code (0 = success, 1 = crawl failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because crawling is network-bound work
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod batch;      // src/batch.rs - multi-domain processing
mod checker;    // src/checker/ - email syntax validation
mod cli;        // src/cli.rs - command-line parsing
mod crawl;      // src/crawl/ - website crawling logic
mod exclusions; // src/exclusions.rs - caller exclusion words
mod extract;    // src/extract/ - email and social link extraction

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use crawl::{crawl_domain, CrawlError, CrawlReport};
use extract::ExtractRules;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// Used when the prompt gets no answer (handy for demos and dry runs)
const FALLBACK_DOMAIN: &str = "centraldecomunicacion.es";

// How long the prompt waits for a domain on stdin
const PROMPT_TIMEOUT: Duration = Duration::from_secs(5);

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl(s) finished
//   Ok(1) = a crawl could not run (invalid URL, unreachable domain)
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Site {
            domain,
            json,
            exclusions,
        } => handle_site(domain, json, exclusions).await,
        Commands::Batch {
            file,
            json,
            exclusions,
            workers,
        } => handle_batch(&file, json, exclusions, workers).await,
    }
}

// Handles the 'site' subcommand
// Parameters:
//   domain: seed to crawl, or None to ask on stdin
//   json: whether to output JSON format
//   exclusions: optional path with caller exclusion keywords
async fn handle_site(
    domain: Option<String>,
    json: bool,
    exclusions: Option<PathBuf>,
) -> Result<i32> {
    let seed = match domain {
        Some(domain) => domain,
        None => prompt_for_domain().await,
    };

    println!("🔍 Crawling website: {}", seed);

    let rules = ExtractRules::new();
    let mut result = crawl_domain(&seed, &rules).await;

    // With --exclusions, the findings go through the strict syntax
    // check and the caller's keyword filter before being reported
    if let (Ok(summary), Some(path)) = (&mut result, &exclusions) {
        let excluded = exclusions::load_exclusions(path);
        let validated = checker::validate_email_list(&summary.emails.join(", "));
        summary.emails = exclusions::filter_emails(&validated, &excluded);
    }

    let report = CrawlReport::from_result(&result);

    if json {
        // Serialize the report to JSON and print
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_site_report(&report);
    }

    match &result {
        Ok(_) => Ok(0),
        Err(CrawlError::Internal(_)) => Ok(2),
        Err(_) => Ok(1),
    }
}

// Handles the 'batch' subcommand
// Parameters:
//   file: text file with one domain per line
//   json: whether to output JSON format
//   exclusions: optional path with caller exclusion keywords
//   workers: how many crawls to run at once
async fn handle_batch(
    file: &Path,
    json: bool,
    exclusions: Option<PathBuf>,
    workers: usize,
) -> Result<i32> {
    let domains = batch::read_domains_file(file)?;

    if domains.is_empty() {
        println!("⚠️  No domains found in {}", file.display());
        return Ok(0);
    }

    println!(
        "🔍 Crawling {} domain(s), up to {} at a time",
        domains.len(),
        workers.max(1)
    );

    let excluded = match &exclusions {
        Some(path) => exclusions::load_exclusions(path),
        None => HashSet::new(),
    };

    let rules = ExtractRules::new();
    let outcomes = batch::process_domains(&domains, &rules, &excluded, workers).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_batch_table(&outcomes);
    }

    // Count how many domains failed
    let failed_count = outcomes.iter().filter(|o| o.report.error).count();

    if failed_count > 0 {
        Ok(1) // Exit code 1 = at least one domain failed
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Asks for a domain on stdin, falling back after a few seconds
//
// This keeps the tool usable both interactively and in scripts that
// pipe nothing in: an empty answer or a timeout means the fallback.
async fn prompt_for_domain() -> String {
    println!(
        "Enter a domain to crawl ({}s timeout, then {} is used):",
        PROMPT_TIMEOUT.as_secs(),
        FALLBACK_DOMAIN
    );

    let read_line = async {
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(0) => None, // EOF: stdin is closed (piped input ran out)
            Ok(_) => Some(line),
            Err(_) => None,
        }
    };

    match tokio::time::timeout(PROMPT_TIMEOUT, read_line).await {
        Ok(Some(line)) if !line.trim().is_empty() => line.trim().to_string(),
        _ => {
            println!("⏱️  No input, using {}", FALLBACK_DOMAIN);
            FALLBACK_DOMAIN.to_string()
        }
    }
}

// Prints one crawl's findings in a human-readable form
fn print_site_report(report: &CrawlReport) {
    if report.error {
        println!("❌ Crawl failed: {}", report.message);
        return;
    }

    let emails = report.emails.as_deref().unwrap_or(&[]);

    println!("\n📧 Emails ({})", emails.len());
    if emails.is_empty() {
        println!("   (none found)");
    }
    for email in emails {
        println!("   {}", email);
    }

    let mut social_count = 0;
    println!("\n🌐 Social profiles");
    if let Some(social) = &report.social_links {
        for (platform, links) in social {
            if links.is_empty() {
                continue;
            }
            println!("   {}:", platform.label());
            for link in links {
                println!("      {}", link);
            }
            social_count += links.len();
        }
    }
    if social_count == 0 {
        println!("   (none found)");
    }

    println!("\n📊 Summary:");
    println!("   📧 Emails: {}", emails.len());
    println!("   🔗 Social links: {}", social_count);
}

// Prints batch results as a human-readable table in the terminal
fn print_batch_table(outcomes: &[batch::DomainOutcome]) {
    // Print table header
    println!(
        "{:<40} {:<8} {:<8} {:<25}",
        "DOMAIN", "EMAILS", "SOCIAL", "STATUS"
    );
    println!("{}", "=".repeat(84));

    // Print each result
    for outcome in outcomes {
        let email_count = outcome.report.emails.as_ref().map_or(0, |e| e.len());
        let social_count = outcome
            .report
            .social_links
            .as_ref()
            .map_or(0, |s| s.values().map(|links| links.len()).sum::<usize>());

        let status = if outcome.report.error {
            format!("❌ {}", outcome.report.message)
        } else {
            "✅ OK".to_string()
        };

        // Truncate the domain if too long for display
        let domain_display = if outcome.domain.chars().count() > 37 {
            let prefix: String = outcome.domain.chars().take(37).collect();
            format!("{}...", prefix)
        } else {
            outcome.domain.clone()
        };

        println!(
            "{:<40} {:<8} {:<8} {:<25}",
            domain_display, email_count, social_count, status
        );
    }

    println!();

    // Print summary
    let ok_count = outcomes.iter().filter(|o| !o.report.error).count();

    println!("📊 Summary:");
    println!("   ✅ Succeeded: {}", ok_count);
    println!("   ❌ Failed: {}", outcomes.len() - ok_count);
    println!("   📋 Total: {}", outcomes.len());
}
