// nexscan/src/scanner/mod.rs

//! Lexical pre-scanner for NEXUS files.
//!
//! The scanner makes one forward pass over the input and tracks three modes:
//! 1. Quoting: `'...'` and `"..."` spans are copied verbatim
//! 2. Plain comments: `[...]`, nestable, removed from the output
//! 3. Special comments: `[&...]`, kept verbatim for later interpretation
//!
//! Every `;` outside quotes and special comments is replaced by [`SEPARATOR`].

pub mod diagnostics;
pub mod options;
pub mod position;
pub mod scanner;
pub(crate) mod state;

// Re-export main types and functions
pub use diagnostics::{ScanWarning, Scanned};
pub use options::{ScanOptions, SpecialCommentMode};
pub use position::Position;
pub use scanner::{Scanner, SEPARATOR};

use crate::error::Result;

/// Convenience function to scan a string with default options.
pub fn scan(input: &str) -> Result<String> {
    Scanner::new().scan(input)
}

/// Convenience function to scan a string and keep the warnings.
pub fn scan_with_diagnostics(input: &str) -> Result<Scanned> {
    Scanner::new().scan_with_diagnostics(input)
}
