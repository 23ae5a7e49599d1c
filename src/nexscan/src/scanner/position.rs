// nexscan/src/scanner/position.rs

//! Source positions for scan diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset into the input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number in characters (1-based)
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position of the first character of an input.
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Tracks line and column while the scanner walks forward.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineTracker {
    line: usize,
    column: usize,
}

impl LineTracker {
    pub(crate) fn new() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Position of the character at `offset`, which must be the next one to advance past.
    pub(crate) fn at(&self, offset: usize) -> Position {
        Position::new(offset, self.line, self.column)
    }

    pub(crate) fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
