//! Scanner settings as they appear in config files.

use serde::{Deserialize, Serialize};

use crate::strip::StripConfig;

/// Scanner toggles with unset-vs-set distinction so that config layers
/// only override what they mention. Resolve to a [`StripConfig`] with
/// [`effective`](Self::effective) before scanning.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StripSettings {
    /// Remove `//` and `#` line comments. Default: true.
    pub remove_line_comments: Option<bool>,
    /// Remove `/* ... */` block comments. Default: true.
    pub remove_block_comments: Option<bool>,
    /// Drop lines that become blank. Default: true.
    pub remove_empty_lines: Option<bool>,
    /// Keep `/** ... */` documentation comments. Default: false.
    pub preserve_doc_comments: Option<bool>,
    /// Line comments starting with one of these prefixes survive.
    pub preserve_prefixes: Vec<String>,
}

impl StripSettings {
    /// Resolve to the plain scanner configuration.
    pub fn effective(&self) -> StripConfig {
        StripConfig {
            remove_line_comments: self.remove_line_comments.unwrap_or(true),
            remove_block_comments: self.remove_block_comments.unwrap_or(true),
            remove_empty_lines: self.remove_empty_lines.unwrap_or(true),
            preserve_doc_comments: self.preserve_doc_comments.unwrap_or(false),
            preserve_prefixes: self.preserve_prefixes.clone(),
        }
    }
}
