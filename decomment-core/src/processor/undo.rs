//! Undo journal - originals of rewritten files.
//!
//! The journal is plain caller-owned state returned with the run result.
//! Nothing persists across runs unless a backup directory was configured.

use std::fs;
use std::path::PathBuf;

use crate::errors::ProcessError;

/// One rewritten file and its pre-rewrite content.
#[derive(Debug, Clone)]
pub struct UndoEntry {
    pub path: PathBuf,
    pub original: String,
}

/// Stack of originals, most recent rewrite on top.
#[derive(Debug, Default)]
pub struct UndoJournal {
    entries: Vec<UndoEntry>,
}

impl UndoJournal {
    pub fn push(&mut self, path: PathBuf, original: String) {
        self.entries.push(UndoEntry { path, original });
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    pub fn entries(&self) -> &[UndoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the most recently journaled original back to disk. Returns
    /// the restored path, or `None` when the journal is empty.
    pub fn restore_last(&mut self) -> Result<Option<PathBuf>, ProcessError> {
        match self.entries.pop() {
            None => Ok(None),
            Some(entry) => {
                fs::write(&entry.path, &entry.original)
                    .map_err(|e| ProcessError::io(&entry.path, e))?;
                Ok(Some(entry.path))
            }
        }
    }

    /// Restore every journaled file, most recent first. Stops at the
    /// first failure, leaving unrestored entries in the journal.
    pub fn restore_all(&mut self) -> Result<Vec<PathBuf>, ProcessError> {
        let mut restored = Vec::with_capacity(self.entries.len());
        while let Some(path) = self.restore_last()? {
            restored.push(path);
        }
        Ok(restored)
    }
}
