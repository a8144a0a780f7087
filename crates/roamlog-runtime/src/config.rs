use crate::{Error, Result};
use roamlog_types::DEFAULT_THEME_SLUG;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROAMLOG_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`roamlog/config.toml`)
/// 4. ~/.roamlog/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROAMLOG_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("roamlog").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".roamlog").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_theme_slug() -> String {
    DEFAULT_THEME_SLUG.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme slug used when a journal does not name one
    #[serde(default = "default_theme_slug")]
    pub default_theme: String,

    /// Font names the host app ships with
    #[serde(default)]
    pub bundled_fonts: Vec<String>,

    /// Reject reorders that are not a permutation of the draft
    #[serde(default)]
    pub strict_reorder: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme: default_theme_slug(),
            bundled_fonts: Vec::new(),
            strict_reorder: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn add_font(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.bundled_fonts.contains(&name) {
            self.bundled_fonts.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_theme, "default");
        assert!(config.bundled_fonts.is_empty());
        assert!(!config.strict_reorder);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config {
            default_theme: "passport".to_string(),
            strict_reorder: true,
            ..Config::default()
        };
        config.add_font("Cooper Black");
        config.add_font("Cooper Black");

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.bundled_fonts, vec!["Cooper Black".to_string()]);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "bundled_fonts = [\"Playfair Display\"]\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.default_theme, "default");
        assert_eq!(config.bundled_fonts, vec!["Playfair Display".to_string()]);

        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "strict_reorder = \"sometimes\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/roamlog/custom.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/roamlog/custom.toml"));
        Ok(())
    }
}
