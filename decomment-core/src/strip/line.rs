//! Pass 2: per-line comment truncation.
//!
//! Each line of Pass 1's output is searched for the first string-safe
//! line comment marker. Marker kinds are an ordered table, evaluated in
//! sequence until one survives both the string check and the
//! preserve-prefix check.

use super::quote::is_inside_string;
use super::StripConfig;

/// One way a line comment can appear on a line.
enum Marker {
    /// A one-character lead-in followed by the marker token, anywhere on
    /// the line. `keep` bytes after the match position stay on the line.
    Embedded {
        needle: &'static str,
        token: &'static str,
        keep: usize,
    },
    /// The marker token at the first non-whitespace column.
    AtLineStart { token: &'static str },
}

/// Search order is fixed: spaced `//` first, then line-start `//`, then
/// the `#` forms, then the brace-adjacent forms (which keep the brace).
const MARKERS: &[Marker] = &[
    Marker::Embedded { needle: " //", token: "//", keep: 0 },
    Marker::Embedded { needle: "\t//", token: "//", keep: 0 },
    Marker::AtLineStart { token: "//" },
    Marker::Embedded { needle: " #", token: "#", keep: 0 },
    Marker::Embedded { needle: "\t#", token: "#", keep: 0 },
    Marker::AtLineStart { token: "#" },
    Marker::Embedded { needle: "{//", token: "//", keep: 1 },
    Marker::Embedded { needle: "{#", token: "#", keep: 1 },
];

/// Truncate `line` at its first surviving comment marker. The truncated
/// line is then re-checked for a trailing block terminator: a block
/// comment that opened on an earlier line can close right before a line
/// comment, leaving a stray ` */` once the line comment is cut. Lines
/// without a marker are left alone, so preserved doc comments keep their
/// closing `*/`.
pub(crate) fn trim_line<'a>(line: &'a str, config: &StripConfig) -> &'a str {
    match find_line_comment(line, config) {
        None => line,
        Some(cut) => {
            let truncated = &line[..cut];
            match find_block_terminator(truncated, config) {
                Some(remnant) => &truncated[..remnant],
                None => truncated,
            }
        }
    }
}

fn find_line_comment(line: &str, config: &StripConfig) -> Option<usize> {
    if !config.remove_line_comments {
        return None;
    }
    for marker in MARKERS {
        match *marker {
            Marker::Embedded { needle, token, keep } => {
                let mut from = 0;
                while let Some(found) = line[from..].find(needle) {
                    let at = from + found;
                    if !is_inside_string(line, at)
                        && !preserved(line, at + 1, token, config)
                    {
                        return Some(at + keep);
                    }
                    from = at + 1;
                }
            }
            Marker::AtLineStart { token } => {
                let trimmed = line.trim_start();
                if trimmed.starts_with(token) {
                    let at = line.len() - trimmed.len();
                    if !preserved(line, at, token, config) {
                        return Some(at);
                    }
                }
            }
        }
    }
    None
}

/// A trailing ` */` or tab-`*/` left over from a block comment that began
/// on a previous line.
fn find_block_terminator(line: &str, config: &StripConfig) -> Option<usize> {
    if !config.remove_block_comments {
        return None;
    }
    for needle in [" */", "\t*/"] {
        let mut from = 0;
        while let Some(found) = line[from..].find(needle) {
            let at = from + found;
            if !is_inside_string(line, at) {
                return Some(at);
            }
            from = at + 1;
        }
    }
    None
}

/// Does the text right after the marker start with a configured preserve
/// prefix? `marker_at` is the byte offset of the marker token itself.
fn preserved(line: &str, marker_at: usize, token: &str, config: &StripConfig) -> bool {
    if config.preserve_prefixes.is_empty() {
        return false;
    }
    let after = &line[marker_at + token.len()..];
    config
        .preserve_prefixes
        .iter()
        .any(|prefix| after.starts_with(prefix.as_str()))
}
