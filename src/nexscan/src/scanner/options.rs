// nexscan/src/scanner/options.rs

//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// How to treat a `[` that appears inside an open special comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialCommentMode {
    /// Open a plain comment and keep going (warned, not rejected)
    #[default]
    Compatible,
    /// Reject the input with `ScanError::NestedSpecialComment`
    Strict,
}

/// Options controlling a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub special_comments: SpecialCommentMode,
}

impl ScanOptions {
    pub fn strict() -> Self {
        Self {
            special_comments: SpecialCommentMode::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.special_comments == SpecialCommentMode::Strict
    }
}
