// src/checker/email.rs
// =============================================================================
// This module validates email address syntax.
//
// The crawler's extractor is deliberately loose (it scans messy page
// text), so anything that gets re-used downstream goes through this
// stricter check first: the WHOLE string has to look like one email,
// not merely contain one.
//
// Input is a free-form list ("a@b.com, c@d.es; junk") because that is
// how address lists arrive from files and from crawler output joined
// for review.
//
// Rust concepts:
// - Anchored regex (^...$): Matches the entire string or nothing
// - Tuples: partition_email_list returns (valid, invalid) in one value
// =============================================================================

use regex::Regex;

// Anchored: the complete entry must be one address
const VALID_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

// Splits a free-form list and keeps only syntactically valid entries
//
// Parameters:
//   input: entries separated by commas and/or semicolons
//
// Returns: the valid entries, trimmed, in input order
pub fn validate_email_list(input: &str) -> Vec<String> {
    partition_email_list(input).0
}

// Splits a free-form list into valid and invalid entries
//
// Parameters:
//   input: entries separated by commas and/or semicolons
//
// Returns: (valid, invalid), both trimmed and in input order. Empty
// entries (from doubled separators or trailing commas) are dropped
// entirely and appear in neither list.
//
// Example:
//   "a@b.com, junk; c@d.es" -> (["a@b.com", "c@d.es"], ["junk"])
pub fn partition_email_list(input: &str) -> (Vec<String>, Vec<String>) {
    // The pattern is a constant, so parse can't fail
    let pattern = Regex::new(VALID_EMAIL_PATTERN).unwrap();

    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for entry in input.split([',', ';']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if pattern.is_match(entry) {
            valid.push(entry.to_string());
        } else {
            invalid.push(entry.to_string());
        }
    }

    (valid, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_valid_drops_junk() {
        let valid = validate_email_list("a@b.com, bad; c@d.es");
        assert_eq!(valid, vec!["a@b.com", "c@d.es"]);
    }

    #[test]
    fn test_partition_reports_both_sides() {
        let (valid, invalid) = partition_email_list("info@acme.es; not-an-email, sales@acme.es");
        assert_eq!(valid, vec!["info@acme.es", "sales@acme.es"]);
        assert_eq!(invalid, vec!["not-an-email"]);
    }

    #[test]
    fn test_entries_are_trimmed() {
        let valid = validate_email_list("   a@b.co   ,   c@d.co  ");
        assert_eq!(valid, vec!["a@b.co", "c@d.co"]);
    }

    #[test]
    fn test_doubled_separators_are_ignored() {
        let (valid, invalid) = partition_email_list("a@b.com,,;;c@d.es");
        assert_eq!(valid.len(), 2);
        assert!(invalid.is_empty());
    }

    #[test]
    fn test_match_is_anchored() {
        // Contains an email but is not one
        let (valid, invalid) = partition_email_list("contact a@b.com today");
        assert!(valid.is_empty());
        assert_eq!(invalid, vec!["contact a@b.com today"]);
    }

    #[test]
    fn test_rejects_missing_tld_and_double_at() {
        let (valid, invalid) = partition_email_list("a@b, a@@b.com");
        assert!(valid.is_empty());
        assert_eq!(invalid.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let (valid, invalid) = partition_email_list("");
        assert!(valid.is_empty());
        assert!(invalid.is_empty());
    }
}
