//! decomment-core: comment-stripping engine
//!
//! This crate provides the components for decomment:
//! - Strip: two-pass comment-aware lexical scanner
//! - Matcher: glob-style ignore rules for files and directories
//! - Processor: parallel batch pipeline with undo journal
//! - Config: TOML configuration with layered resolution

pub mod config;
pub mod errors;
pub mod matcher;
pub mod processor;
pub mod strip;

// Re-exports for convenience
pub use config::{CliOverrides, DecommentConfig, FilterConfig, ProcessSettings, StripSettings};
pub use errors::{ConfigError, ProcessError};
pub use matcher::{should_ignore_directory, should_ignore_file, PathFilter, DEFAULT_IGNORED_DIRS};
pub use processor::{
    FileOutcome, ProcessOptions, ProcessResult, ProcessStats, Processor, UndoEntry, UndoJournal,
};
pub use strip::{is_inside_string, strip_comments, StripConfig};
