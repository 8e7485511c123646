//! Configuration system for decomment.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod decomment_config;
pub mod filter_config;
pub mod process_settings;
pub mod strip_settings;

pub use decomment_config::{CliOverrides, DecommentConfig};
pub use filter_config::FilterConfig;
pub use process_settings::ProcessSettings;
pub use strip_settings::StripSettings;
