// nexscan/src/scanner/scanner.rs

//! Core single-pass scanner for NEXUS input.

use super::diagnostics::{ScanWarning, Scanned};
use super::options::ScanOptions;
use super::position::{LineTracker, Position};
use super::state::{LexState, QuoteState};
use crate::error::{Result, ScanError};

/// Character substituted for every statement-terminating `;` (ASCII BEL).
///
/// It never occurs in a well-formed NEXUS file, so downstream code can split
/// the scanned text on it without knowing about comments or quotes.
pub const SEPARATOR: char = '\u{7}';

/// Comment- and quote-aware pre-scanner for NEXUS files.
///
/// A `Scanner` only holds its options; every call to [`Scanner::scan`] starts
/// from fresh state, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with default (compatible) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options.
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Reject `[` inside special comments instead of warning about it.
    pub fn strict(self) -> Self {
        self.with_options(ScanOptions::strict())
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Strip comments and substitute separators, discarding warnings.
    pub fn scan(&self, input: &str) -> Result<String> {
        self.scan_with_diagnostics(input).map(|scanned| scanned.text)
    }

    /// Strip comments and substitute separators, keeping any warnings.
    pub fn scan_with_diagnostics(&self, input: &str) -> Result<Scanned> {
        log::debug!("scanning {} bytes of NEXUS input", input.len());

        let result = self.run(input);
        match &result {
            Ok(scanned) => log::debug!(
                "scan produced {} bytes with {} warning(s)",
                scanned.text.len(),
                scanned.warnings.len()
            ),
            Err(err) => log::debug!("scan failed: {}", err),
        }
        result
    }

    fn run(&self, input: &str) -> Result<Scanned> {
        let mut state = LexState::default();
        let mut tracker = LineTracker::new();
        let mut output = String::with_capacity(input.len());
        let mut warnings = Vec::new();

        // Openers of the outermost plain comment and of the current quote
        let mut comment_start = Position::start();
        let mut quote_start = Position::start();

        let mut chars = input.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            let position = tracker.at(offset);
            tracker.advance(c);

            if !state.in_comment() && state.quote.closes_with(c) {
                state.quote = QuoteState::None;
            } else if let Some(quote) = QuoteState::opened_by(c)
                .filter(|_| !state.quote.is_open() && !state.in_comment())
            {
                state.quote = quote;
                quote_start = position;
            } else if !state.quote.is_open() && c == '[' {
                let next = chars.peek().map(|&(_, next)| next);
                if next == Some('&') && !state.in_comment() {
                    state.special = true;
                } else {
                    if state.special {
                        if self.options.is_strict() {
                            return Err(ScanError::NestedSpecialComment { position });
                        }
                        push_warning(
                            &mut warnings,
                            ScanWarning::NestedCommentInSpecial { position },
                        );
                    }
                    if state.depth == 0 {
                        comment_start = position;
                    }
                    state.depth += 1;
                }
            } else if !state.quote.is_open() && c == ']' {
                if state.special {
                    state.special = false;
                } else if state.depth == 0 {
                    return Err(ScanError::UnmatchedCloseBracket { position });
                } else {
                    state.depth -= 1;
                    continue;
                }
            }

            if state.emits() {
                if c == ';' && state.separates() {
                    output.push(SEPARATOR);
                } else {
                    output.push(c);
                }
            }
        }

        if state.depth > 0 {
            return Err(ScanError::UnterminatedComment {
                position: comment_start,
            });
        }
        if let Some(quote) = state.quote.delimiter() {
            push_warning(
                &mut warnings,
                ScanWarning::UnterminatedQuote {
                    quote,
                    position: quote_start,
                },
            );
        }

        Ok(Scanned {
            text: output,
            warnings,
        })
    }
}

fn push_warning(warnings: &mut Vec<ScanWarning>, warning: ScanWarning) {
    log::warn!("{}", warning);
    warnings.push(warning);
}
