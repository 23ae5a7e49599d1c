// nexscan/src/scanner/diagnostics.rs

//! Non-fatal findings collected during a scan.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something suspicious that did not stop the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanWarning {
    /// A `[` opened a plain comment while a special comment was open.
    /// The next `]` closes the special comment and the plain one stays open.
    NestedCommentInSpecial { position: Position },
    /// Input ended inside a quote opened at `position`.
    UnterminatedQuote { quote: char, position: Position },
}

impl ScanWarning {
    pub fn position(&self) -> Position {
        match self {
            ScanWarning::NestedCommentInSpecial { position }
            | ScanWarning::UnterminatedQuote { position, .. } => *position,
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::NestedCommentInSpecial { position } => write!(
                f,
                "'[' at {} opens a comment inside a special comment",
                position
            ),
            ScanWarning::UnterminatedQuote { quote, position } => {
                write!(f, "quote {} opened at {} is never closed", quote, position)
            }
        }
    }
}

/// Output of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scanned {
    /// Input with plain comments removed and top-level `;` replaced by the separator
    pub text: String,
    pub warnings: Vec<ScanWarning>,
}

impl Scanned {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
