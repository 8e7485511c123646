//! Path matching - decides which files and directories participate
//!
//! Glob-style ignore patterns are compiled to anchored, case-insensitive
//! regexes; directories are additionally screened against a plain
//! name-equality set. Matching is a union: any single pattern hit ignores
//! the candidate, and nothing can un-ignore it.

mod glob;
mod rules;

pub use rules::{
    should_ignore_directory, should_ignore_file, PathFilter, DEFAULT_IGNORED_DIRS,
};
