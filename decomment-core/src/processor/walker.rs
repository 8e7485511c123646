//! Batch processor: walk, filter, strip, write back.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::types::{FileOutcome, ProcessOptions, ProcessResult, ProcessStats};
use super::undo::UndoJournal;
use crate::config::DecommentConfig;
use crate::errors::ProcessError;
use crate::matcher::PathFilter;
use crate::strip::{strip_comments, StripConfig};

/// Strips comments from every eligible file under a root.
pub struct Processor {
    root: PathBuf,
    strip: StripConfig,
    filter: PathFilter,
    options: ProcessOptions,
    max_file_size: u64,
}

impl Processor {
    /// Create a processor for `root` with a resolved configuration.
    pub fn new(
        root: impl Into<PathBuf>,
        config: &DecommentConfig,
        options: ProcessOptions,
    ) -> Self {
        let filter = PathFilter::new(
            &config.filter.ignore_patterns,
            &config.filter.effective_ignored_directories(),
        );

        let threads = config.process.effective_threads();
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }

        Self {
            root: root.into(),
            strip: config.strip.effective(),
            filter,
            options,
            max_file_size: config.process.effective_max_file_size(),
        }
    }

    /// Walk the tree and process every surviving file.
    pub fn run(&self) -> ProcessResult {
        let start = Instant::now();

        let files_to_process = self.collect_files();

        let files_skipped = AtomicUsize::new(0);
        let errors: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let journal: Mutex<UndoJournal> = Mutex::new(UndoJournal::default());

        let files: Vec<FileOutcome> = files_to_process
            .par_iter()
            .filter_map(|path| match self.process_file(path, &journal) {
                Ok(Some(outcome)) => Some(outcome),
                Ok(None) => {
                    files_skipped.fetch_add(1, Ordering::Relaxed);
                    None
                }
                Err(e) => {
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(format!("{}: {}", path.display(), e));
                    }
                    None
                }
            })
            .collect();

        let mut by_extension: FxHashMap<String, usize> = FxHashMap::default();
        let mut bytes_removed = 0u64;
        let mut files_changed = 0usize;

        for file in &files {
            if file.changed {
                files_changed += 1;
                bytes_removed += file.bytes_removed;
                let ext = Path::new(&file.path)
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_default();
                *by_extension.entry(ext).or_insert(0) += 1;
            }
        }

        let stats = ProcessStats {
            files_seen: files.len(),
            files_changed,
            files_skipped: files_skipped.load(Ordering::Relaxed),
            bytes_removed,
            by_extension,
            duration: start.elapsed(),
        };

        ProcessResult {
            root: self.root.display().to_string(),
            files,
            stats,
            errors: errors.into_inner().unwrap_or_default(),
            undo: journal.into_inner().unwrap_or_default(),
        }
    }

    /// Collect all files to process (respecting the filter). A root that
    /// is itself a file is processed alone.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if self.root.is_file() {
            if !self
                .filter
                .should_ignore_file(&self.root.to_string_lossy())
            {
                files.push(self.root.clone());
            }
            return files;
        }
        self.walk_dir(&self.root, &mut files);
        files
    }

    /// Recursively walk a directory, pruning ignored subtrees.
    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                if !self
                    .filter
                    .should_ignore_directory(&path.to_string_lossy(), &name)
                {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file()
                && !self.filter.should_ignore_file(&path.to_string_lossy())
            {
                files.push(path);
            }
        }
    }

    /// Process a single file. `Ok(None)` means skipped (too large or not
    /// valid UTF-8).
    fn process_file(
        &self,
        path: &Path,
        journal: &Mutex<UndoJournal>,
    ) -> Result<Option<FileOutcome>, ProcessError> {
        let metadata = fs::metadata(path).map_err(|e| ProcessError::io(path, e))?;
        if metadata.len() > self.max_file_size {
            debug!(path = %path.display(), size = metadata.len(), "skipping oversized file");
            return Ok(None);
        }

        let bytes = fs::read(path).map_err(|e| ProcessError::io(path, e))?;
        let original = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(_) => {
                debug!(path = %path.display(), "skipping non-UTF-8 file");
                return Ok(None);
            }
        };

        let stripped = strip_comments(&original, &self.strip);
        let relative = self.relative_path(path);

        if stripped == original {
            return Ok(Some(FileOutcome {
                path: relative,
                changed: false,
                bytes_removed: 0,
            }));
        }

        let bytes_removed = (original.len() - stripped.len()) as u64;

        if !self.options.dry_run {
            if let Some(backup_root) = &self.options.backup_dir {
                self.write_backup(backup_root, &relative, &original)?;
            }
            fs::write(path, &stripped).map_err(|e| ProcessError::io(path, e))?;
            if let Ok(mut journal) = journal.lock() {
                journal.push(path.to_path_buf(), original);
            }
        }

        debug!(path = %relative, bytes_removed, "stripped comments");
        Ok(Some(FileOutcome {
            path: relative,
            changed: true,
            bytes_removed,
        }))
    }

    /// Mirror the original under the backup root, preserving the relative
    /// layout.
    fn write_backup(
        &self,
        backup_root: &Path,
        relative: &str,
        original: &str,
    ) -> Result<(), ProcessError> {
        let dest = backup_root.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ProcessError::io(parent, e))?;
        }
        fs::write(&dest, original).map_err(|e| ProcessError::io(&dest, e))?;
        Ok(())
    }

    /// Path relative to the root, or the bare file name when the root is
    /// the file itself.
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string())
        } else {
            relative.to_string_lossy().to_string()
        }
    }
}
