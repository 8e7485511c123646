//! Processor module - batch comment stripping over a directory tree
//!
//! Walks the filesystem from a root, prunes ignored directories, filters
//! files through the path matcher, strips comments from the survivors in
//! parallel, and writes changed files back. Originals of changed files
//! are kept in an undo journal owned by the result.

mod types;
mod undo;
mod walker;

pub use types::{FileOutcome, ProcessOptions, ProcessResult, ProcessStats};
pub use undo::{UndoEntry, UndoJournal};
pub use walker::Processor;
