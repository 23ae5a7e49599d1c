// nexscan/src/statements.rs

//! Splitting scanned text into statements.

use crate::scanner::SEPARATOR;

/// Iterator over the statements of scanned text.
///
/// Statements are trimmed and empty ones are skipped. Text after the last
/// separator is yielded too, since a file may end without a final `;`.
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.parts
            .by_ref()
            .map(str::trim)
            .find(|statement| !statement.is_empty())
    }
}

/// Split text produced by the scanner on [`SEPARATOR`].
pub fn split_statements(scanned: &str) -> Statements<'_> {
    Statements {
        parts: scanned.split(SEPARATOR),
    }
}
