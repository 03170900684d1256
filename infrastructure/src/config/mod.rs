//! Configuration file loading for swaytalk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SWAYTALK_*` environment variables (`SWAYTALK_MODEL__NAME=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./swaytalk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/swaytalk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileInputConfig, FileIpcConfig, FileLoggingConfig, FileModelConfig,
    FileSessionConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader};
