// nexscan/src/error.rs

//! Error types for the NEXUS pre-scanner.

use crate::scanner::Position;
use thiserror::Error;

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Malformed-input conditions detected while scanning.
///
/// Every variant aborts the scan; no partial output is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A `]` appeared outside of any comment
    #[error("Unexpected closing bracket ']' at {position}")]
    UnmatchedCloseBracket { position: Position },

    /// End of input reached while a plain comment was still open
    #[error("Unclosed comment: '[' at {position} is never closed")]
    UnterminatedComment { position: Position },

    /// A `[` inside a special comment (strict mode only)
    #[error("Comment opened inside special comment at {position}")]
    NestedSpecialComment { position: Position },
}

impl ScanError {
    /// The bracket character involved in the error.
    pub fn marker(&self) -> char {
        match self {
            ScanError::UnmatchedCloseBracket { .. } => ']',
            ScanError::UnterminatedComment { .. } => '[',
            ScanError::NestedSpecialComment { .. } => '[',
        }
    }

    /// Where the offending bracket sits in the input.
    pub fn position(&self) -> Position {
        match self {
            ScanError::UnmatchedCloseBracket { position }
            | ScanError::UnterminatedComment { position }
            | ScanError::NestedSpecialComment { position } => *position,
        }
    }

    /// Get the error category for logging purposes.
    pub fn category(&self) -> &'static str {
        match self {
            ScanError::UnmatchedCloseBracket { .. } => "unmatched_bracket",
            ScanError::UnterminatedComment { .. } => "unterminated_comment",
            ScanError::NestedSpecialComment { .. } => "nested_special",
        }
    }

    /// Create a detailed error report for debugging.
    pub fn detailed_report(&self) -> String {
        let position = self.position();
        let mut report = String::new();

        report.push_str(&format!("Error Category: {}\n", self.category()));
        report.push_str(&format!("Message: {}\n", self));
        report.push_str("\nContext:\n");
        report.push_str(&format!("  Marker: {}\n", self.marker()));
        report.push_str(&format!("  Line: {}\n", position.line));
        report.push_str(&format!("  Column: {}\n", position.column));
        report.push_str(&format!("  Offset: {}\n", position.offset));

        report
    }
}
