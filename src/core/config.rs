//! # Configuration
//!
//! Startup values for the two live settings, with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! The config file lives at `~/.adfetch/config.toml` and is optional. It is
//! only ever read: edits made in the main menu stay in memory and vanish on
//! exit.

use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AdfetchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub target_directory: Option<String>,
    pub catalog_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/pawellenart/adfetch-cache/refs/heads/main/amiga_games.json";

/// Current working directory, or empty if it cannot be determined.
fn default_target_directory() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub target_directory: String,
    pub catalog_url: String,
}

/// Values that came from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub target_directory: Option<String>,
    pub catalog_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.adfetch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".adfetch").join("config.toml"))
}

/// Load config from `~/.adfetch/config.toml`.
///
/// A missing file (or missing home directory) is not an error and yields
/// `AdfetchConfig::default()`. A malformed file returns `ConfigError::Parse`.
pub fn load_config() -> Result<AdfetchConfig, ConfigError> {
    let Some(path) = config_path() else {
        info!("Could not determine home directory, using default config");
        return Ok(AdfetchConfig::default());
    };

    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(AdfetchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AdfetchConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AdfetchConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &AdfetchConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Target directory: CLI → env → config → cwd
    let target_directory = cli
        .target_directory
        .clone()
        .or_else(|| env("ADFETCH_TARGET_DIR"))
        .or_else(|| config.general.target_directory.clone())
        .unwrap_or_else(default_target_directory);

    // Catalog URL: CLI → env → config → published feed
    let catalog_url = cli
        .catalog_url
        .clone()
        .or_else(|| env("ADFETCH_CATALOG_URL"))
        .or_else(|| config.general.catalog_url.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

    ResolvedConfig {
        target_directory,
        catalog_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AdfetchConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(resolved.target_directory, default_target_directory());
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = parse_config(
            r#"
[general]
target_directory = "/srv/adf"
catalog_url = "http://mirror/games.json"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.target_directory, "/srv/adf");
        assert_eq!(resolved.catalog_url, "http://mirror/games.json");
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = AdfetchConfig {
            general: GeneralConfig {
                target_directory: Some("/from/config".into()),
                catalog_url: Some("http://config".into()),
            },
        };
        let env = |key: &str| match key {
            "ADFETCH_TARGET_DIR" => Some("/from/env".to_string()),
            "ADFETCH_CATALOG_URL" => Some("http://env".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            target_directory: None,
            catalog_url: Some("http://cli".into()),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.target_directory, "/from/env");
        assert_eq!(resolved.catalog_url, "http://cli");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[general]\ncatalog_url = \"http://x\"\n").unwrap();
        assert_eq!(config.general.catalog_url.as_deref(), Some("http://x"));
        assert!(config.general.target_directory.is_none());
        assert!(parse_config("").unwrap().general.catalog_url.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\ncatalog_url = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
