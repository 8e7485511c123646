//! Tests for the decomment configuration system.

use std::sync::Mutex;

use decomment_core::config::{CliOverrides, DecommentConfig};
use decomment_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Point HOME at an empty directory so a developer's real user config
/// cannot leak into the test, and clear DECOMMENT_ env vars.
fn isolate_env(home: &tempfile::TempDir) {
    std::env::set_var("HOME", home.path());
    std::env::remove_var("USERPROFILE");
    for key in [
        "DECOMMENT_PROCESS_MAX_FILE_SIZE",
        "DECOMMENT_PROCESS_THREADS",
        "DECOMMENT_STRIP_REMOVE_EMPTY_LINES",
        "DECOMMENT_STRIP_PRESERVE_DOC_COMMENTS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_cli_over_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let dir = tempdir();
    std::fs::write(
        dir.path().join("decomment.toml"),
        r#"
[process]
max_file_size = 2000000
threads = 2

[strip]
remove_empty_lines = false
"#,
    )
    .unwrap();

    std::env::set_var("DECOMMENT_PROCESS_MAX_FILE_SIZE", "5000000");

    let cli = CliOverrides {
        threads: Some(8),
        ..Default::default()
    };

    let config = DecommentConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI overrides project for threads.
    assert_eq!(config.process.threads, Some(8));
    // Env overrides project for max_file_size.
    assert_eq!(config.process.max_file_size, Some(5_000_000));
    // Project setting survives where nothing overrides it.
    assert_eq!(config.strip.remove_empty_lines, Some(false));

    std::env::remove_var("DECOMMENT_PROCESS_MAX_FILE_SIZE");
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let dir = tempdir();
    let config = DecommentConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.process.effective_max_file_size(), 10 * 1024 * 1024);
    assert_eq!(config.process.effective_threads(), 0);

    let strip = config.strip.effective();
    assert!(strip.remove_line_comments);
    assert!(strip.remove_block_comments);
    assert!(strip.remove_empty_lines);
    assert!(!strip.preserve_doc_comments);
    assert!(strip.preserve_prefixes.is_empty());

    assert!(config
        .filter
        .effective_ignored_directories()
        .contains(&"node_modules".to_string()));
}

#[test]
fn user_config_is_the_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let user_dir = home.path().join(".decomment");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[strip]\npreserve_doc_comments = true\n[process]\nthreads = 3\n",
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("decomment.toml"), "[process]\nthreads = 5\n").unwrap();

    let config = DecommentConfig::load(dir.path(), None).unwrap();

    // Project overrides user.
    assert_eq!(config.process.threads, Some(5));
    // User survives where the project is silent.
    assert_eq!(config.strip.preserve_doc_comments, Some(true));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let dir = tempdir();
    std::fs::write(dir.path().join("decomment.toml"), "not toml {{{{").unwrap();

    let result = DecommentConfig::load(dir.path(), None);
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[test]
fn zero_max_file_size_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let dir = tempdir();
    std::fs::write(dir.path().join("decomment.toml"), "[process]\nmax_file_size = 0\n").unwrap();

    let result = DecommentConfig::load(dir.path(), None);
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "process.max_file_size");
        }
        other => panic!("Expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn cli_list_flags_append_rather_than_replace() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(&home);

    let dir = tempdir();
    std::fs::write(
        dir.path().join("decomment.toml"),
        "[filter]\nignore_patterns = [\"*.css\"]\n",
    )
    .unwrap();

    let cli = CliOverrides {
        ignore_patterns: vec!["*.min.js".to_string()],
        ignored_directories: vec!["fixtures".to_string()],
        ..Default::default()
    };
    let config = DecommentConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(
        config.filter.ignore_patterns,
        vec!["*.css".to_string(), "*.min.js".to_string()]
    );
    let dirs = config.filter.effective_ignored_directories();
    assert!(dirs.contains(&"node_modules".to_string()));
    assert!(dirs.contains(&"fixtures".to_string()));
}

#[test]
fn toml_round_trip_preserves_settings() {
    let toml = "[strip]\nremove_empty_lines = false\npreserve_prefixes = [\"!\"]\n\n[process]\nmax_file_size = 1024\n";
    let config = DecommentConfig::from_toml(toml).unwrap();
    assert_eq!(config.strip.remove_empty_lines, Some(false));
    assert_eq!(config.strip.preserve_prefixes, vec!["!".to_string()]);
    assert_eq!(config.process.max_file_size, Some(1024));

    let serialized = config.to_toml().unwrap();
    let reparsed = DecommentConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.process.max_file_size, Some(1024));
    assert_eq!(reparsed.strip.remove_empty_lines, Some(false));
}

#[test]
fn unknown_keys_are_ignored() {
    let config =
        DecommentConfig::from_toml("[strip]\nremove_line_comments = true\nfuture_knob = 1\n")
            .unwrap();
    assert_eq!(config.strip.remove_line_comments, Some(true));
}
