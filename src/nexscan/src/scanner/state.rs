// nexscan/src/scanner/state.rs

//! Lexical mode tracked by the scanner between characters.

use serde::{Deserialize, Serialize};

/// Which quote, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuoteState {
    #[default]
    None,
    /// Inside `'...'`
    Single,
    /// Inside `"..."`
    Double,
}

impl QuoteState {
    /// The quote opened by `c`, if `c` is a quote character.
    pub fn opened_by(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteState::Single),
            '"' => Some(QuoteState::Double),
            _ => None,
        }
    }

    /// The character that closes this quote.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            QuoteState::None => None,
            QuoteState::Single => Some('\''),
            QuoteState::Double => Some('"'),
        }
    }

    pub fn closes_with(&self, c: char) -> bool {
        self.delimiter() == Some(c)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, QuoteState::None)
    }
}

/// The three orthogonal pieces of scanner state.
///
/// `special` is a flag rather than a counter: a `[` met inside a special
/// comment bumps `depth` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexState {
    pub quote: QuoteState,
    pub depth: usize,
    pub special: bool,
}

impl LexState {
    /// True inside either a plain or a special comment.
    pub fn in_comment(&self) -> bool {
        self.depth > 0 || self.special
    }

    /// Characters are only written out while no plain comment is open.
    pub fn emits(&self) -> bool {
        self.depth == 0
    }

    /// Whether a `;` seen now ends a statement.
    pub fn separates(&self) -> bool {
        !self.quote.is_open() && !self.special
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_delimiters() {
        assert_eq!(QuoteState::opened_by('\''), Some(QuoteState::Single));
        assert_eq!(QuoteState::opened_by('"'), Some(QuoteState::Double));
        assert_eq!(QuoteState::opened_by('['), None);

        assert!(QuoteState::Single.closes_with('\''));
        assert!(!QuoteState::Single.closes_with('"'));
        assert!(!QuoteState::None.closes_with('\''));
    }

    #[test]
    fn test_initial_state() {
        let state = LexState::default();
        assert!(!state.in_comment());
        assert!(state.emits());
        assert!(state.separates());
    }

    #[test]
    fn test_special_comment_keeps_emitting() {
        let state = LexState {
            special: true,
            ..LexState::default()
        };
        assert!(state.in_comment());
        assert!(state.emits());
        assert!(!state.separates());
    }
}
