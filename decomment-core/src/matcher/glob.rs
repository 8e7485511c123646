//! Glob pattern compilation.

use regex::{Regex, RegexBuilder};

/// `**` is swapped out before the single-`*` rewrite and back in after;
/// NUL cannot occur in a pattern that survived escaping.
const GLOBSTAR: char = '\u{0}';

/// Compile a glob pattern into an anchored, case-insensitive regex.
/// `**` crosses path separators, `*` and `?` do not. Returns `None` for a
/// pattern the regex engine rejects; callers treat that as never-matching.
pub(crate) fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut escaped = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '.' | '+' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    let expanded = escaped
        .replace("**", &GLOBSTAR.to_string())
        .replace('*', "[^/\\\\]*")
        .replace('?', "[^/\\\\]")
        .replace(GLOBSTAR, ".*");
    RegexBuilder::new(&format!("^{expanded}$"))
        .case_insensitive(true)
        .build()
        .ok()
}

/// A pattern with a trailing separator only ever applies to directories.
pub(crate) fn is_directory_pattern(pattern: &str) -> bool {
    pattern.ends_with('/') || pattern.ends_with('\\')
}
