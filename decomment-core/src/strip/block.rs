//! Pass 1: whole-text block comment removal.
//!
//! A single forward walk over the characters. String literals, template
//! interpolations, and regex literals are copied verbatim so the `/*`
//! and `*/` sequences inside them are never mistaken for comments.

use super::StripConfig;

/// Characters that may legally precede a regex literal. Together with a
/// short keyword list this approximates "a `/` here starts a regex, not a
/// division" without a real grammar. The list is fixed; extending it
/// changes which divisions get misread.
const REGEX_PRECEDERS: &[char] = &['(', ',', '=', ':', '[', '!', '&', '|', ';', '{', '}', '\n'];

const REGEX_KEYWORDS: &[&str] = &["return", "throw", "case", "typeof", "instanceof"];

const REGEX_FLAGS: &[char] = &['g', 'i', 'm', 's', 'u', 'y'];

pub(crate) fn remove_block_comments(text: &str, config: &StripConfig) -> String {
    if !config.remove_block_comments {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        if ch == '"' || ch == '\'' || ch == '`' {
            i = copy_string_literal(&chars, i, &mut out);
            continue;
        }

        if ch == '/' && next != Some('/') && next != Some('*') && opens_regex(&out) {
            i = copy_regex_literal(&chars, i, &mut out);
            continue;
        }

        if ch == '/' && next == Some('*') {
            let is_doc =
                chars.get(i + 2) == Some(&'*') && chars.get(i + 3) != Some(&'/');
            if config.preserve_doc_comments && is_doc {
                // Emit the slash and let the doc body flow through the
                // normal copy rules.
                out.push(ch);
                i += 1;
                continue;
            }

            let trimmed_len = out.trim_end().len();
            let is_wrapped = out[..trimmed_len].ends_with('{');
            match find_terminator(&chars, i + 2) {
                // Unterminated comment: the rest of the text is the
                // comment, drop it.
                None => break,
                Some(end) => {
                    i = end + 2;
                    if is_wrapped && chars.get(i) == Some(&'}') {
                        // `{/* ... */}` wrapper: delete both braces too.
                        let tail = out.split_off(trimmed_len);
                        out.truncate(trimmed_len - 1);
                        out.push_str(&tail);
                        i += 1;
                    }
                }
            }
            continue;
        }

        out.push(ch);
        i += 1;
    }

    out
}

/// Copy a quoted literal starting at `start` (the opening quote) and
/// return the index just past it. Escape pairs are copied as units; a
/// backtick string additionally copies `${ ... }` interpolations under a
/// brace counter. Unterminated literals run to the end of the text.
fn copy_string_literal(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    out.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        if c == '\\' && i + 1 < chars.len() {
            i += 1;
            out.push(chars[i]);
            i += 1;
            continue;
        }
        if c == quote {
            return i + 1;
        }
        if quote == '`' && c == '$' && chars.get(i + 1) == Some(&'{') {
            out.push('{');
            i += 2;
            let mut depth = 1u32;
            while i < chars.len() && depth > 0 {
                let ec = chars[i];
                out.push(ec);
                if ec == '{' {
                    depth += 1;
                }
                if ec == '}' {
                    depth -= 1;
                }
                i += 1;
            }
            continue;
        }
        i += 1;
    }
    i
}

/// Would a `/` emitted after the current output open a regex literal?
fn opens_regex(out: &str) -> bool {
    let before = out.trim_end();
    let last = before.chars().next_back();
    match last {
        None => true,
        Some(c) if REGEX_PRECEDERS.contains(&c) => true,
        Some(_) => REGEX_KEYWORDS.iter().any(|kw| before.ends_with(kw)),
    }
}

/// Copy a regex literal starting at `start` (the opening `/`) and return
/// the index just past it, including any trailing flag letters. A `[...]`
/// class is copied verbatim (a `/` inside it does not terminate), and a
/// bare newline aborts the literal.
fn copy_regex_literal(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('/');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        if c == '\\' && i + 1 < chars.len() {
            i += 1;
            out.push(chars[i]);
            i += 1;
            continue;
        }
        if c == '[' {
            i += 1;
            while i < chars.len() && chars[i] != ']' {
                out.push(chars[i]);
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i += 1;
                    out.push(chars[i]);
                }
                i += 1;
            }
            if i < chars.len() {
                out.push(chars[i]);
                i += 1;
            }
            continue;
        }
        if c == '/' {
            i += 1;
            while i < chars.len() && REGEX_FLAGS.contains(&chars[i]) {
                out.push(chars[i]);
                i += 1;
            }
            break;
        }
        if c == '\n' {
            i += 1;
            break;
        }
        i += 1;
    }
    i
}

/// Find the next `*/` at or after `from`.
fn find_terminator(chars: &[char], from: usize) -> Option<usize> {
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return Some(j);
        }
        j += 1;
    }
    None
}
