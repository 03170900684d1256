//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "swaytalk";
const PROJECT_FILE: &str = "swaytalk.toml";
const ENV_PREFIX: &str = "SWAYTALK_";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// An explicit path that does not exist is an error; the global and
    /// project files are optional.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigLoadError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigLoadError::NotFound(path.to_path_buf()));
        }

        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::figment(global.as_deref(), project.as_deref(), config_path)
            .extract()
            .map_err(|e| ConfigLoadError::Invalid(Box::new(e)))
    }

    /// Build the layered figment from the given file sources.
    pub fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/swaytalk/config.toml if set,
    /// otherwise falls back to ~/.config/swaytalk/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{}", PROJECT_FILE);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use swaytalk_domain::DescribePolicy;

    fn write_toml(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.name, "mistral-nemo");
        assert_eq!(config.session.max_turns, 8);
        assert!(!config.ipc.dry_run);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("swaytalk"));
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            "[model]\nname = \"llama3.1\"\n\n[session]\nmax_turns = 5\n",
        );
        let project = write_toml(&dir, "project.toml", "[session]\nmax_turns = 3\n");
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            "[session]\ndescribe_policy = \"advisory\"\n",
        );

        let config: FileConfig =
            ConfigLoader::figment(Some(&global), Some(&project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.model.name, "llama3.1");
        assert_eq!(config.session.max_turns, 3);
        assert_eq!(
            config.session.parse_describe_policy().0,
            DescribePolicy::Advisory
        );
        // Untouched sections keep defaults
        assert_eq!(config.ipc.timeout_secs, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigLoadError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(&dir, "bad.toml", "[session]\nmax_turns = \"many\"\n");

        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(&bad)).extract();
        assert!(result.is_err());
    }
}
