// src/extract/emails.rs
// =============================================================================
// This module finds contact email addresses in page text.
//
// How it works:
// 1. Scan the text with an email-shaped regex
// 2. Lowercase every match (emails are case-insensitive in practice)
// 3. Drop matches containing noise words (legal boilerplate, image names)
// 4. Collect into a sorted, deduplicated set
//
// Rust concepts:
// - Regex compiled once, reused for every page
// - BTreeSet: a set that iterates in sorted order (free deduplication
//   AND stable output order)
// =============================================================================

use regex::Regex;
use std::collections::BTreeSet;

// Email shape: local part, @, domain with at least one dot and an
// alphabetic top-level domain of 2+ letters
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

// Matches containing any of these are discarded. They are almost always
// privacy-notice mailboxes (the Spanish data-protection vocabulary) or
// image filenames like logo@2x.png that happen to look like emails.
const EXCLUDED_EMAIL_WORDS: &[&str] = &["legal", "datos", "proteccion", "lopd", "rgpd", "png"];

// Compiled email matching rules, built once per process
pub struct EmailRules {
    pattern: Regex,
}

impl EmailRules {
    pub fn new() -> Self {
        EmailRules {
            // The pattern is a constant, so parse can't fail
            pattern: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }
}

impl Default for EmailRules {
    fn default() -> Self {
        Self::new()
    }
}

// Extracts candidate contact emails from page text
//
// Parameters:
//   text: raw page body (HTML or anything else)
//   rules: compiled rules from EmailRules::new()
//
// Returns: lowercase, filtered, deduplicated emails in sorted order
//
// This is purely syntactic. Whether a mailbox actually exists is a
// different question answered elsewhere (if at all).
pub fn extract_emails(text: &str, rules: &EmailRules) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    for m in rules.pattern.find_iter(text) {
        let email = m.as_str().to_lowercase();

        // Substring check on the lowercased match, so "LEGAL@x.es"
        // and "info@protecciondatos.es" are both dropped
        let excluded = EXCLUDED_EMAIL_WORDS
            .iter()
            .any(|word| email.contains(word));

        if !excluded {
            found.insert(email);
        }
    }

    found
}
