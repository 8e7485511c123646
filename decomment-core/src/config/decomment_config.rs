//! Top-level decomment configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FilterConfig, ProcessSettings, StripSettings};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DECOMMENT_*`)
/// 3. Project config (`decomment.toml` in the processed root)
/// 4. User config (`~/.decomment/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecommentConfig {
    pub strip: StripSettings,
    pub filter: FilterConfig,
    pub process: ProcessSettings,
}

/// CLI override arguments that can be applied to a config. Scalar fields
/// replace; list fields append to what the file layers configured.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub remove_line_comments: Option<bool>,
    pub remove_block_comments: Option<bool>,
    pub remove_empty_lines: Option<bool>,
    pub preserve_doc_comments: Option<bool>,
    pub preserve_prefixes: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub ignored_directories: Vec<String>,
    pub max_file_size: Option<u64>,
    pub threads: Option<usize>,
}

impl DecommentConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(_) => {
                        // An unreadable user config falls back to defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("decomment.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DecommentConfig) -> Result<(), ConfigError> {
        if config.process.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "process.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.decomment/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".decomment").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DecommentConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: DecommentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` actually set them.
    fn merge(base: &mut DecommentConfig, other: &DecommentConfig) {
        // Strip
        if other.strip.remove_line_comments.is_some() {
            base.strip.remove_line_comments = other.strip.remove_line_comments;
        }
        if other.strip.remove_block_comments.is_some() {
            base.strip.remove_block_comments = other.strip.remove_block_comments;
        }
        if other.strip.remove_empty_lines.is_some() {
            base.strip.remove_empty_lines = other.strip.remove_empty_lines;
        }
        if other.strip.preserve_doc_comments.is_some() {
            base.strip.preserve_doc_comments = other.strip.preserve_doc_comments;
        }
        if !other.strip.preserve_prefixes.is_empty() {
            base.strip.preserve_prefixes = other.strip.preserve_prefixes.clone();
        }

        // Filter
        if !other.filter.ignore_patterns.is_empty() {
            base.filter.ignore_patterns = other.filter.ignore_patterns.clone();
        }
        if other.filter.ignored_directories.is_some() {
            base.filter.ignored_directories = other.filter.ignored_directories.clone();
        }

        // Process
        if other.process.max_file_size.is_some() {
            base.process.max_file_size = other.process.max_file_size;
        }
        if other.process.threads.is_some() {
            base.process.threads = other.process.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DECOMMENT_PROCESS_MAX_FILE_SIZE`, `DECOMMENT_STRIP_REMOVE_EMPTY_LINES`, etc.
    fn apply_env_overrides(config: &mut DecommentConfig) {
        if let Ok(val) = std::env::var("DECOMMENT_PROCESS_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.process.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECOMMENT_PROCESS_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.process.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECOMMENT_STRIP_REMOVE_EMPTY_LINES") {
            if let Ok(v) = val.parse::<bool>() {
                config.strip.remove_empty_lines = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECOMMENT_STRIP_PRESERVE_DOC_COMMENTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.strip.preserve_doc_comments = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut DecommentConfig, cli: &CliOverrides) {
        if cli.remove_line_comments.is_some() {
            config.strip.remove_line_comments = cli.remove_line_comments;
        }
        if cli.remove_block_comments.is_some() {
            config.strip.remove_block_comments = cli.remove_block_comments;
        }
        if cli.remove_empty_lines.is_some() {
            config.strip.remove_empty_lines = cli.remove_empty_lines;
        }
        if cli.preserve_doc_comments.is_some() {
            config.strip.preserve_doc_comments = cli.preserve_doc_comments;
        }
        if !cli.preserve_prefixes.is_empty() {
            config
                .strip
                .preserve_prefixes
                .extend(cli.preserve_prefixes.iter().cloned());
        }
        if !cli.ignore_patterns.is_empty() {
            config
                .filter
                .ignore_patterns
                .extend(cli.ignore_patterns.iter().cloned());
        }
        if !cli.ignored_directories.is_empty() {
            let mut dirs = config.filter.effective_ignored_directories();
            dirs.extend(cli.ignored_directories.iter().cloned());
            config.filter.ignored_directories = Some(dirs);
        }
        if cli.max_file_size.is_some() {
            config.process.max_file_size = cli.max_file_size;
        }
        if cli.threads.is_some() {
            config.process.threads = cli.threads;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
