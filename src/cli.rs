// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::batch::DEFAULT_WORKERS;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "contact-scout",
    version = "0.1.0",
    about = "A CLI tool to crawl websites and extract contact emails and social profile links",
    long_about = "contact-scout crawls one website at a time within hard limits (crawl depth, \
                  page count, download size) and collects the contact emails and social-network \
                  profile links it finds along the way."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (site, batch)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl one website and report the contacts found on it
    ///
    /// Example: contact-scout site example.com --json
    Site {
        /// Domain or URL to crawl (e.g., example.com)
        ///
        /// Optional: when omitted, the tool asks on stdin and falls
        /// back to a demo domain after 5 seconds
        domain: Option<String>,

        /// Output results in JSON format instead of a summary
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Exclusion keywords: a folder of .txt files or one file,
        /// one word per line
        ///
        /// Emails containing any of these words are dropped from the
        /// report after the crawl
        #[arg(long)]
        exclusions: Option<PathBuf>,
    },

    /// Crawl every domain listed in a file, one per line
    ///
    /// Example: contact-scout batch domains.txt --workers 5
    Batch {
        /// Path to the domain list (blank lines are skipped)
        file: PathBuf,

        /// Output results as a JSON array instead of a table
        #[arg(long)]
        json: bool,

        /// Exclusion keywords: a folder of .txt files or one file,
        /// one word per line
        #[arg(long)]
        exclusions: Option<PathBuf>,

        /// How many crawls to run at once
        ///
        /// #[arg(long, default_value_t = ...)] creates --workers with a default
        #[arg(long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "site OR batch")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why Option<String> for the domain?
//    - An omitted positional argument parses to None
//    - The handler decides what None means (here: prompt on stdin)
//
// 4. Why PathBuf instead of String for paths?
//    - PathBuf is the owned filesystem path type
//    - clap converts the argument for us, and everything downstream
//      takes a Path
// -----------------------------------------------------------------------------
