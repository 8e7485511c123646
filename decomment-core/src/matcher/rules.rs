//! Ignore decisions for files and directories.

use regex::Regex;
use rustc_hash::FxHashSet;

use super::glob::{glob_to_regex, is_directory_pattern};

/// Directory names that are always skipped, regardless of user patterns.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".node_modules",
    "venv",
    ".venv",
    "env",
    ".env",
    "__pycache__",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "out",
    ".next",
    ".nuxt",
    "target",
    "bin",
    "obj",
];

/// One ignore pattern, compiled once.
struct CompiledPattern {
    /// Trimmed pattern text, trailing separator stripped.
    text: String,
    /// The raw pattern ended in a separator; never applied to files.
    dir_only: bool,
    /// Tested against the base name when the pattern has no separator.
    name_regex: Option<Regex>,
    /// Tested against the full normalized path.
    path_regex: Option<Regex>,
}

/// Compiled ignore rules: glob patterns plus the directory-name set.
/// Build once, query per candidate during traversal.
pub struct PathFilter {
    patterns: Vec<CompiledPattern>,
    dir_names: FxHashSet<String>,
}

impl PathFilter {
    pub fn new(ignore_patterns: &[String], ignored_directories: &[String]) -> Self {
        let patterns = ignore_patterns
            .iter()
            .filter_map(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let dir_only = is_directory_pattern(trimmed);
                let text = if dir_only {
                    &trimmed[..trimmed.len() - 1]
                } else {
                    trimmed
                };
                let no_separator = !text.contains('/') && !text.contains('\\');
                Some(CompiledPattern {
                    text: text.to_string(),
                    dir_only,
                    name_regex: no_separator.then(|| glob_to_regex(text)).flatten(),
                    path_regex: glob_to_regex(text),
                })
            })
            .collect();
        let dir_names = ignored_directories.iter().cloned().collect();
        Self {
            patterns,
            dir_names,
        }
    }

    /// Should this file be excluded from processing?
    pub fn should_ignore_file(&self, path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let normalized = normalize(path);
        let name = base_name(&normalized);
        for pattern in &self.patterns {
            if pattern.dir_only {
                continue;
            }
            if matched(&pattern.name_regex, name)
                || matched(&pattern.path_regex, &normalized)
                || normalized.ends_with(&pattern.text)
            {
                return true;
            }
        }
        false
    }

    /// Should this directory be pruned from traversal? `name` is the
    /// directory's base name.
    pub fn should_ignore_directory(&self, path: &str, name: &str) -> bool {
        if self.dir_names.contains(name) {
            return true;
        }
        if self.patterns.is_empty() {
            return false;
        }
        let normalized = normalize(path);
        for pattern in &self.patterns {
            if matched(&pattern.name_regex, name)
                || matched(&pattern.path_regex, &normalized)
                || normalized.ends_with(&pattern.text)
                || normalized.contains(&format!("/{}/", pattern.text))
            {
                return true;
            }
        }
        false
    }
}

/// Should `path` be excluded, given raw `patterns`? Compiles on the fly;
/// use [`PathFilter`] when querying many candidates.
pub fn should_ignore_file(path: &str, patterns: &[String]) -> bool {
    PathFilter::new(patterns, &[]).should_ignore_file(path)
}

/// Should the directory at `path` (base name `name`) be excluded, given
/// raw `patterns` and the `directory_names` equality set?
pub fn should_ignore_directory(
    path: &str,
    name: &str,
    patterns: &[String],
    directory_names: &[String],
) -> bool {
    PathFilter::new(patterns, directory_names).should_ignore_directory(path, name)
}

fn matched(regex: &Option<Regex>, candidate: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(candidate))
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

fn base_name(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or(normalized)
}
