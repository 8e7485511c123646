//! Acceptance tests for the comment scanner.

use decomment_core::{strip_comments, StripConfig};

fn defaults() -> StripConfig {
    StripConfig::default()
}

fn keep_blank_lines() -> StripConfig {
    StripConfig {
        remove_empty_lines: false,
        ..StripConfig::default()
    }
}

#[test]
fn trailing_comment_scenario() {
    let out = strip_comments("let x = 1; // set x", &defaults());
    assert_eq!(out, "let x = 1;");
}

#[test]
fn newline_structure_preserved_around_code() {
    let text = "const a = 1;\nconst b = 2; // two\nconst c = 3;";
    let out = strip_comments(text, &defaults());
    assert_eq!(out, "const a = 1;\nconst b = 2;\nconst c = 3;");
}

#[test]
fn idempotent_across_samples() {
    let samples = [
        "let x = 1; // set x",
        "/* header */\nfn main() {}\n",
        "a = 1 # py comment\nb = 2\n\n\n",
        "let s = \"// keep\"; /* drop */\nlet re = /a[/]b/g; // tail",
        "<div>{/* jsx */}</div>",
        "`template ${x /* inner */} done` // after",
    ];
    for config in [defaults(), keep_blank_lines()] {
        for text in samples {
            let once = strip_comments(text, &config);
            let twice = strip_comments(&once, &config);
            assert_eq!(once, twice, "not idempotent for {text:?}");
        }
    }
}

#[test]
fn markers_only_inside_strings_leave_text_unchanged() {
    let samples = [
        "let a = \"http://example.com\";",
        "let b = 'hash # inside';",
        "let c = `tpl // inside`;",
        "let d = \"/* not a block */\";",
    ];
    for text in samples {
        assert_eq!(strip_comments(text, &keep_blank_lines()), text);
    }
}

#[test]
fn markers_only_inside_regex_literals_leave_text_unchanged() {
    let samples = [
        "let re = /foo\\/bar/;",
        "let re = /[#]+/g;",
        "return /a\\*b/i;",
    ];
    for text in samples {
        assert_eq!(strip_comments(text, &keep_blank_lines()), text);
    }
}

#[test]
fn preserve_prefix_keeps_doc_style_line_comments() {
    let config = StripConfig {
        preserve_prefixes: vec!["/".to_string()],
        ..StripConfig::default()
    };
    let out = strip_comments("// normal comment\n/// doc-style comment\ncode();", &config);
    assert_eq!(out, "/// doc-style comment\ncode();");
}

#[test]
fn preserve_prefix_keeps_shebang_lines() {
    let config = StripConfig {
        preserve_prefixes: vec!["!".to_string()],
        ..StripConfig::default()
    };
    let out = strip_comments("#!/usr/bin/env node\nlet x = 1; # note", &config);
    assert_eq!(out, "#!/usr/bin/env node\nlet x = 1;");
}

#[test]
fn doc_comments_preserved_only_when_configured() {
    let text = "/** doc */\n/* plain */\ncode();";
    let preserved = strip_comments(
        text,
        &StripConfig {
            preserve_doc_comments: true,
            ..StripConfig::default()
        },
    );
    assert_eq!(preserved, "/** doc */\ncode();");

    let removed = strip_comments(text, &defaults());
    assert_eq!(removed, "code();");
}

#[test]
fn multiline_doc_comment_survives_preservation() {
    let config = StripConfig {
        preserve_doc_comments: true,
        remove_empty_lines: false,
        ..StripConfig::default()
    };
    let text = "/**\n * adds numbers\n */\nfn add() {}";
    assert_eq!(strip_comments(text, &config), text);
}

#[test]
fn jsx_wrapper_collapses() {
    let out = strip_comments("<div>{/* comment */}</div>", &defaults());
    assert_eq!(out, "<div></div>");
}

#[test]
fn comment_only_lines_vanish_entirely() {
    let text = "keep();\n// gone\n   # also gone\n/* gone too */\nalso_keep();";
    let out = strip_comments(text, &defaults());
    assert_eq!(out, "keep();\nalso_keep();");
}

#[test]
fn blank_lines_survive_when_removal_disabled() {
    let out = strip_comments("a();\n// gone\nb();", &keep_blank_lines());
    assert_eq!(out, "a();\n\nb();");
}

#[test]
fn template_interpolation_with_nested_braces_is_opaque() {
    let text = "let s = `v ${fn({a: 1})} w`; // tail";
    let out = strip_comments(text, &defaults());
    assert_eq!(out, "let s = `v ${fn({a: 1})} w`;");
}

#[test]
fn block_comment_closing_midline_leaves_leading_code() {
    // Pass 1 removes the comment body; the terminator remnant check
    // covers a stray close after line-comment truncation.
    let text = "start(); /* a\nb */ end();";
    let out = strip_comments(text, &defaults());
    assert_eq!(out, "start();  end();");
}

#[test]
fn unterminated_string_never_panics() {
    let text = "let s = \"no closing quote // not a comment";
    assert_eq!(strip_comments(text, &keep_blank_lines()), text);
}

#[test]
fn unterminated_block_comment_drops_tail() {
    let out = strip_comments("code();\n/* left open\nmore", &defaults());
    assert_eq!(out, "code();");
}

#[test]
fn hash_comments_in_script_style_sources() {
    let text = "import os\npath = \"/tmp/x\" # temp path\n# full line\nprint(path)";
    let out = strip_comments(text, &defaults());
    assert_eq!(out, "import os\npath = \"/tmp/x\"\nprint(path)");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(strip_comments("", &defaults()), "");
}

#[test]
fn crlf_lines_keep_their_carriage_returns() {
    let out = strip_comments("a();\r\nb(); // gone\r\nc();", &keep_blank_lines());
    assert_eq!(out, "a();\r\nb();\nc();");
}
