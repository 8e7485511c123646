//! Comment removal - two-pass lexical scan over raw source text
//!
//! Pass 1 walks the whole text and deletes block comments while tracking
//! quote state, template interpolations, and regex literals. Pass 2 walks
//! the result line by line and truncates line comments at string-safe
//! marker positions. Both passes are pure string-to-string transforms:
//! malformed input degrades, it never errors.

mod block;
mod line;
mod quote;

pub use quote::is_inside_string;

use serde::{Deserialize, Serialize};

/// Configuration for a single strip pass. Plain value, no hidden state:
/// callers supply one per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Remove `//` and `#` line comments.
    pub remove_line_comments: bool,
    /// Remove `/* ... */` block comments.
    pub remove_block_comments: bool,
    /// Drop lines that are blank after comment removal.
    pub remove_empty_lines: bool,
    /// Keep `/** ... */` documentation comments.
    pub preserve_doc_comments: bool,
    /// Line comments whose text starts with one of these prefixes survive.
    pub preserve_prefixes: Vec<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            remove_line_comments: true,
            remove_block_comments: true,
            remove_empty_lines: true,
            preserve_doc_comments: false,
            preserve_prefixes: Vec::new(),
        }
    }
}

/// Remove comments from `text`.
///
/// Same input and config always yield the same output. Unterminated
/// strings, regex literals, and block comments are consumed to the end of
/// the text or line rather than reported as errors, so the function is
/// safe to run over arbitrary snapshots of possibly invalid source.
pub fn strip_comments(text: &str, config: &StripConfig) -> String {
    let without_blocks = block::remove_block_comments(text, config);
    let trimmed = without_blocks
        .split('\n')
        .map(|l| line::trim_line(l, config));
    if config.remove_empty_lines {
        trimmed
            .filter(|l| !l.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        trimmed.collect::<Vec<_>>().join("\n")
    }
}
