//! Batch processing settings.

use serde::{Deserialize, Serialize};

/// Tunables for the file pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcessSettings {
    /// Maximum file size in bytes. Default: 10 MiB.
    pub max_file_size: Option<u64>,
    /// Worker threads (0 = let rayon decide). Default: 0.
    pub threads: Option<usize>,
}

impl ProcessSettings {
    /// Returns the effective maximum file size, defaulting to 10 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(10 * 1024 * 1024)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
