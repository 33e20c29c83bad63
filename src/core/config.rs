use crate::bio::TaxonomicRank;
use crate::report::Format;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "DATASETS_DIGEST_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub taxonomy: TaxonomyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: Format,
    /// Maximum rows printed per table (0 = unlimited)
    pub max_rows: usize,
    pub show_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Rank used by `taxa` when `--rank` is not given
    pub default_rank: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            max_rows: 0,
            show_summary: true,
        }
    }
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            default_rank: "species".to_string(),
        }
    }
}

impl Config {
    pub fn default_rank(&self) -> Result<TaxonomicRank, crate::DigestError> {
        self.taxonomy.default_rank.parse().map_err(|e| {
            crate::DigestError::Config(format!("taxonomy.default_rank: {}", e))
        })
    }

    pub fn validate(&self) -> Result<(), crate::DigestError> {
        self.default_rank().map(|_| ())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::DigestError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::DigestError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::DigestError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::DigestError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// `~/.config/datasets-digest/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("datasets-digest").join("config.toml"))
}

/// Explicit path, then `$DATASETS_DIGEST_CONFIG`, then the user config file if it exists
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    user_config_path().filter(|path| path.is_file())
}

pub fn load_or_default(explicit: Option<&Path>) -> Result<Config, crate::DigestError> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config(&path)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(default_config())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = default_config();
        assert_eq!(config.report.format, Format::Text);
        assert_eq!(config.report.max_rows, 0);
        assert!(config.report.show_summary);
        assert_eq!(config.default_rank().unwrap(), TaxonomicRank::Species);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = default_config();
        config.report.format = Format::Csv;
        config.report.max_rows = 25;
        config.taxonomy.default_rank = "genus".to_string();
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.default_rank().unwrap(), TaxonomicRank::Genus);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nformat = \"json\"\n").unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.report.format, Format::Json);
        assert!(loaded.report.show_summary);
        assert_eq!(loaded.taxonomy.default_rank, "species");
    }

    #[test]
    fn test_invalid_rank_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[taxonomy]\ndefault_rank = \"spieces\"\n").unwrap();

        match load_config(&path) {
            Err(crate::DigestError::Config(msg)) => assert!(msg.contains("default_rank")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report\nformat = ").unwrap();
        assert!(matches!(load_config(&path), Err(crate::DigestError::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/tmp/explicit.toml");
        assert_eq!(
            resolve_config_path(Some(explicit)),
            Some(PathBuf::from("/tmp/explicit.toml"))
        );
    }
}
