// nexscan/src/lib.rs

//! A comment- and quote-aware pre-scanner for NEXUS phylogenetic data files.
//!
//! This library provides functionality to:
//! - Strip nested `[...]` comments from NEXUS input
//! - Preserve special `[&...]` comments (e.g. tree annotations) verbatim
//! - Leave quoted text untouched
//! - Replace statement-terminating `;` with [`SEPARATOR`] so statements can be
//!   split without re-scanning for comment or quote context

pub mod error;
pub mod scanner;
pub mod statements;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScanError};
pub use scanner::{
    Position, ScanOptions, ScanWarning, Scanned, Scanner, SpecialCommentMode, SEPARATOR,
};
pub use statements::{split_statements, Statements};

/// Scan NEXUS text with default options.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), nexscan::ScanError> {
///     let cleaned = nexscan::scan("dimensions ntax=4 [four taxa];")?;
///     assert_eq!(cleaned, format!("dimensions ntax=4 {}", nexscan::SEPARATOR));
///     Ok(())
/// }
/// ```
pub fn scan(input: &str) -> Result<String> {
    scanner::scan(input)
}

/// Scan NEXUS text with default options, keeping warnings.
pub fn scan_with_diagnostics(input: &str) -> Result<Scanned> {
    scanner::scan_with_diagnostics(input)
}

/// Scan NEXUS text and split it into trimmed, non-empty statements.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), nexscan::ScanError> {
///     let statements = nexscan::scan_statements("begin taxa; [comment] end;")?;
///     assert_eq!(statements, vec!["begin taxa", "end"]);
///     Ok(())
/// }
/// ```
pub fn scan_statements(input: &str) -> Result<Vec<String>> {
    scan_statements_with_options(input, ScanOptions::default())
}

/// Like [`scan_statements`] with explicit options.
pub fn scan_statements_with_options(input: &str, options: ScanOptions) -> Result<Vec<String>> {
    let cleaned = Scanner::new().with_options(options).scan(input)?;
    Ok(split_statements(&cleaned).map(str::to_string).collect())
}

#[cfg(feature = "json")]
/// Serialize a scan result, warnings included, to a JSON string.
pub fn to_json(scanned: &Scanned) -> serde_json::Result<String> {
    serde_json::to_string_pretty(scanned)
}
