// src/checker/mod.rs
// =============================================================================
// This module contains email validation logic.
//
// Submodules:
// - email: Splits free-form address lists and checks entry syntax
//
// This file (mod.rs) is the module root - it exports the public API
// that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod email;

// Re-export public items from submodules
pub use email::{partition_email_list, validate_email_list};
