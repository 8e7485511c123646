//! Processor types - outcomes and statistics for a batch run.

use std::path::PathBuf;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::undo::UndoJournal;

/// Runtime switches for one processor run.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
    /// Mirror originals of changed files into this directory.
    pub backup_dir: Option<PathBuf>,
}

/// What happened to a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to the processed root.
    pub path: String,
    /// The stripped text differed from the original.
    pub changed: bool,
    /// How many bytes the strip removed.
    pub bytes_removed: u64,
}

/// Statistics about a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Files that reached the scanner.
    pub files_seen: usize,
    /// Files whose content changed.
    pub files_changed: usize,
    /// Files skipped (too large, binary).
    pub files_skipped: usize,
    /// Total bytes removed across changed files.
    pub bytes_removed: u64,
    /// Changed files per file extension.
    pub by_extension: FxHashMap<String, usize>,
    /// Run duration.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of one processor run.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProcessResult {
    /// Root that was processed.
    pub root: String,
    /// Per-file outcomes.
    pub files: Vec<FileOutcome>,
    /// Aggregate statistics.
    pub stats: ProcessStats,
    /// Non-fatal per-file errors.
    pub errors: Vec<String>,
    /// Originals of every file this run rewrote.
    #[serde(skip)]
    pub undo: UndoJournal,
}

impl Default for ProcessStats {
    fn default() -> Self {
        Self {
            files_seen: 0,
            files_changed: 0,
            files_skipped: 0,
            bytes_removed: 0,
            by_extension: FxHashMap::default(),
            duration: Duration::ZERO,
        }
    }
}

// Custom serialization for Duration as milliseconds
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
