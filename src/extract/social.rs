// src/extract/social.rs
// =============================================================================
// This module finds social-network profile links in page text.
//
// How it works:
// 1. Each platform has a regex describing what a profile URL looks like
// 2. The path part after the platform host is captured
// 3. Matches whose path starts with a known non-profile section
//    (login pages, share widgets and the like) are dropped
// 4. Survivors are grouped per platform into sorted sets
//
// The regex engine here has no lookaround, so the non-profile sections
// are a plain case-insensitive prefix check on the captured path. Note
// these are PREFIXES: "about" also rejects "aboutus", and "p/" rejects
// post permalinks without rejecting a user actually named "p".
//
// Rust concepts:
// - Enums as map keys: Platform is Copy + Ord, so BTreeMap iterates the
//   seven platforms in a fixed order
// - Capture groups: caps.get(0) is the whole URL, caps.get(1) the path
//   remainder the exclusion check runs against
// =============================================================================

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// The social networks we recognize. The declaration order is the output
// order (BTreeMap sorts by the derived Ord, which follows declaration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    YouTube,
    LinkedIn,
    Twitter,
    TikTok,
    Pinterest,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::Twitter,
        Platform::TikTok,
        Platform::Pinterest,
    ];

    // Human-facing name for the table view
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
            Platform::Pinterest => "Pinterest",
        }
    }
}

// One pattern per platform. Group 1 captures the path remainder checked
// against the excluded prefixes below.
const INSTAGRAM_PATTERN: &str = r"(?i)https?://(?:www\.)?instagram\.com/([A-Za-z0-9_.]{1,30}/?)";
const FACEBOOK_PATTERN: &str = r"(?i)https?://(?:[a-z0-9-]+\.)*facebook\.com/([A-Za-z0-9.]{5,50}/?)";
const YOUTUBE_PATTERN: &str =
    r"(?i)https?://(?:www\.)?youtube\.com/((?:c/|channel/|user/|@)[A-Za-z0-9_-]{1,50}/?)";
const LINKEDIN_PATTERN: &str =
    r"(?i)https?://(?:[a-z]{2,3}\.)?linkedin\.com/((?:company|in)/[A-Za-z0-9_-]{1,50}/?)";
const TWITTER_PATTERN: &str =
    r"(?i)https?://(?:www\.)?(?:x\.com|twitter\.com)/([A-Za-z0-9_]{1,15}/?)";
const TIKTOK_PATTERN: &str = r"(?i)https?://(?:www\.)?tiktok\.com/@([A-Za-z0-9_.-]{1,24}/?)";
const PINTEREST_PATTERN: &str = r"(?i)https?://(?:www\.)?pinterest\.com/([A-Za-z0-9_./-]+)";

// Path prefixes that are platform sections, not profiles
const INSTAGRAM_EXCLUDED: &[&str] = &[
    "about",
    "explore",
    "developer",
    "legal",
    "press",
    "privacy",
    "terms",
    "accounts",
    "directory",
    "p/",
    "reel/",
    "stories/",
];
const FACEBOOK_EXCLUDED: &[&str] = &[
    "pages",
    "groups",
    "events",
    "help",
    "policies",
    "marketplace",
    "watch",
    "live",
    "settings",
    "messages",
    "notifications",
    "bookmarks",
    "memories",
    "fundraisers",
    "games",
    "jobs",
    "privacy",
    "terms",
    "login",
    "dialog",
    "plugins",
    "tr",
    "sharer",
];
const YOUTUBE_EXCLUDED: &[&str] = &[];
const LINKEDIN_EXCLUDED: &[&str] = &[];
const TWITTER_EXCLUDED: &[&str] = &[
    "home",
    "explore",
    "notifications",
    "messages",
    "intent",
    "share",
    "search",
];
const TIKTOK_EXCLUDED: &[&str] = &["live", "discover", "tag", "music", "video"];
const PINTEREST_EXCLUDED: &[&str] = &[
    "pin",
    "explore",
    "topics",
    "login",
    "signup",
    "categories",
    "about",
];

const PLATFORM_TABLE: &[(Platform, &str, &[&str])] = &[
    (Platform::Instagram, INSTAGRAM_PATTERN, INSTAGRAM_EXCLUDED),
    (Platform::Facebook, FACEBOOK_PATTERN, FACEBOOK_EXCLUDED),
    (Platform::YouTube, YOUTUBE_PATTERN, YOUTUBE_EXCLUDED),
    (Platform::LinkedIn, LINKEDIN_PATTERN, LINKEDIN_EXCLUDED),
    (Platform::Twitter, TWITTER_PATTERN, TWITTER_EXCLUDED),
    (Platform::TikTok, TIKTOK_PATTERN, TIKTOK_EXCLUDED),
    (Platform::Pinterest, PINTEREST_PATTERN, PINTEREST_EXCLUDED),
];

struct PlatformRule {
    platform: Platform,
    pattern: Regex,
    excluded_prefixes: &'static [&'static str],
}

// Compiled social matching rules, built once per process
pub struct SocialRules {
    rules: Vec<PlatformRule>,
}

impl SocialRules {
    pub fn new() -> Self {
        let rules = PLATFORM_TABLE
            .iter()
            .map(|&(platform, pattern, excluded)| PlatformRule {
                platform,
                // Patterns are constants, so parse can't fail
                pattern: Regex::new(pattern).unwrap(),
                excluded_prefixes: excluded,
            })
            .collect();
        SocialRules { rules }
    }
}

impl Default for SocialRules {
    fn default() -> Self {
        Self::new()
    }
}

// A map with all seven platforms present and no links yet.
//
// Crawl results carry every platform key even when nothing was found,
// so consumers never have to handle a missing key.
pub fn empty_social_sets() -> BTreeMap<Platform, BTreeSet<String>> {
    Platform::ALL
        .iter()
        .map(|platform| (*platform, BTreeSet::new()))
        .collect()
}

// Extracts social profile links from page text, grouped by platform
//
// Parameters:
//   text: raw page body
//   rules: compiled rules from SocialRules::new()
//
// Returns: a map with all seven platform keys; each set is sorted and
// deduplicated. URLs are stored as found in the text (not lowercased),
// only the exclusion check is case-insensitive.
pub fn extract_social_links(
    text: &str,
    rules: &SocialRules,
) -> BTreeMap<Platform, BTreeSet<String>> {
    let mut found = BTreeMap::new();

    for rule in &rules.rules {
        let mut links = BTreeSet::new();

        for caps in rule.pattern.captures_iter(text) {
            if let (Some(whole), Some(remainder)) = (caps.get(0), caps.get(1)) {
                let lowered = remainder.as_str().to_lowercase();
                if rule
                    .excluded_prefixes
                    .iter()
                    .any(|prefix| lowered.starts_with(prefix))
                {
                    continue;
                }

                // Stray punctuation sometimes rides along when URLs sit
                // inside scraped text or JSON blobs
                let cleaned = whole.as_str().trim_end_matches(|c| c == '\u{00aa}' || c == ']');
                links.insert(cleaned.to_string());
            }
        }

        found.insert(rule.platform, links);
    }

    found
}
