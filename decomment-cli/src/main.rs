//! decomment: strip comments from source trees.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use decomment_core::{
    CliOverrides, ConfigError, DecommentConfig, ProcessOptions, ProcessResult, Processor,
};

#[derive(Parser)]
#[command(name = "decomment")]
#[command(about = "Strip comments from source files without touching strings or regex literals", long_about = None)]
#[command(version)]
struct Cli {
    /// Files or directories to process
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Keep line comments (`//`, `#`)
    #[arg(long)]
    keep_line_comments: bool,

    /// Keep block comments (`/* ... */`)
    #[arg(long)]
    keep_block_comments: bool,

    /// Keep lines that become blank after comment removal
    #[arg(long)]
    keep_empty_lines: bool,

    /// Keep documentation comments (`/** ... */`)
    #[arg(long)]
    preserve_docs: bool,

    /// Preserve line comments starting with this prefix (repeatable)
    #[arg(long = "preserve-prefix", value_name = "PREFIX")]
    preserve_prefixes: Vec<String>,

    /// Additional ignore glob (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    ignore_patterns: Vec<String>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Maximum file size in bytes
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Worker threads (0 = auto)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Mirror originals of changed files into this directory
    #[arg(long, value_name = "DIR")]
    backup_dir: Option<PathBuf>,

    /// Emit the run result as JSON
    #[arg(long)]
    json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let overrides = CliOverrides {
        remove_line_comments: cli.keep_line_comments.then_some(false),
        remove_block_comments: cli.keep_block_comments.then_some(false),
        remove_empty_lines: cli.keep_empty_lines.then_some(false),
        preserve_doc_comments: cli.preserve_docs.then_some(true),
        preserve_prefixes: cli.preserve_prefixes.clone(),
        ignore_patterns: cli.ignore_patterns.clone(),
        ignored_directories: cli.ignore_dirs.clone(),
        max_file_size: cli.max_file_size,
        threads: cli.threads,
    };

    let mut failed = false;
    for path in &cli.paths {
        match run_path(path, &cli, &overrides) {
            Ok(result) => report(&result, &cli),
            Err(e) => {
                error!(path = %path.display(), error = %e, "processing failed");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_path(
    path: &Path,
    cli: &Cli,
    overrides: &CliOverrides,
) -> Result<ProcessResult, ConfigError> {
    // The project config lives next to the processed tree: in the target
    // directory itself, or beside a target file.
    let config_root = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(path)
    };
    let config = DecommentConfig::load(config_root, Some(overrides))?;

    let options = ProcessOptions {
        dry_run: cli.dry_run,
        backup_dir: cli.backup_dir.clone(),
    };

    Ok(Processor::new(path, &config, options).run())
}

fn report(result: &ProcessResult, cli: &Cli) {
    if cli.json {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(error = %e, "failed to serialize result"),
        }
        return;
    }

    let verb = if cli.dry_run { "would change" } else { "changed" };
    println!(
        "{}: {} of {} file(s) {} ({} bytes removed, {} skipped)",
        result.root,
        result.stats.files_changed,
        result.stats.files_seen,
        verb,
        result.stats.bytes_removed,
        result.stats.files_skipped,
    );
    for err in &result.errors {
        eprintln!("error: {err}");
    }
}

fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("DECOMMENT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
