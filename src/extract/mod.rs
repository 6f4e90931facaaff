// src/extract/mod.rs
// =============================================================================
// This module contains all contact extraction logic.
//
// Submodules:
// - emails: Finds email addresses in page text
// - social: Finds social-network profile links in page text
//
// This file (mod.rs) is the module root - it ties both extractors
// together behind ExtractRules, the compiled rule bundle the crawler
// carries around.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod emails;
mod social;

// Re-export public items from submodules
pub use emails::{extract_emails, EmailRules};
pub use social::{empty_social_sets, extract_social_links, Platform, SocialRules};

// All compiled extraction rules in one value.
//
// Built once at startup and borrowed by every extraction call, so the
// regex compilation cost is paid a single time and nothing here is
// global or mutable.
pub struct ExtractRules {
    pub emails: EmailRules,
    pub social: SocialRules,
}

impl ExtractRules {
    pub fn new() -> Self {
        ExtractRules {
            emails: EmailRules::new(),
            social: SocialRules::new(),
        }
    }
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self::new()
    }
}
