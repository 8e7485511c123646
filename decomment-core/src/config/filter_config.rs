//! Path filtering configuration.

use serde::{Deserialize, Serialize};

use crate::matcher::DEFAULT_IGNORED_DIRS;

/// Which files and directories stay out of a run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Glob-style ignore patterns. Default: none.
    pub ignore_patterns: Vec<String>,
    /// Directory names skipped by plain name equality. When unset, the
    /// built-in default set applies; setting this replaces it entirely.
    pub ignored_directories: Option<Vec<String>>,
}

impl FilterConfig {
    /// The directory-name set in effect: user-provided or the default.
    pub fn effective_ignored_directories(&self) -> Vec<String> {
        self.ignored_directories.clone().unwrap_or_else(|| {
            DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect()
        })
    }
}
