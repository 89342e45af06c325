//! Briefmark Config
//!
//! This crate handles configuration loading and management
//! for briefmark, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/briefmark/config.toml`
//! - macOS: `~/Library/Application Support/briefmark/config.toml`
//! - Windows: `%APPDATA%\briefmark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use briefmark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod markup;
mod output;

pub use markup::MarkupConfig;
pub use output::OutputConfig;

use briefmark_core::{BriefmarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
///
/// The classes are the utility classes the legal assistant's
/// display surface styles its rendered answers with.
const DEFAULT_TOML: &str = r#"[markup]
H1        = "text-2xl font-bold my-4"
H2        = "text-xl font-bold my-3"
H3        = "text-lg font-bold my-2"
Strong    = ""
List      = "my-2 space-y-1"
Bullet    = "ml-6 list-disc"
Numbered  = "ml-6 list-decimal"
Paragraph = "my-2"
Container = "markdown-content"

[output]
Wrap = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Class attributes for each emitted element
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Output options
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use briefmark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[markup]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// The configuration every load starts from.
    ///
    /// Unlike [`Config::default`], which leaves every key unset, this
    /// has all keys filled in from [`Config::default_toml`].
    pub fn defaults() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "briefmark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| BriefmarkError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// Keys missing from the file keep their default values. If no
    /// config file exists, returns [`Config::defaults`].
    pub fn load() -> Result<Self> {
        let mut config = Self::defaults();

        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                config.merge(&Self::load_from(&config_path)?);
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// Only the keys present in the file are set.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BriefmarkError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse an inline TOML override.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BriefmarkError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat it as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let other = if override_path.exists() {
                Self::load_from(override_path)?
            } else {
                Self::from_toml(override_str)?
            };
            config.merge(&other);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Keys set in `other` take precedence; keys it leaves unset
    /// keep the value from `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use briefmark_config::Config;
    ///
    /// let mut base = Config::defaults();
    /// let other = Config::from_toml("[markup]\nParagraph = \"lead\"").unwrap();
    ///
    /// base.merge(&other);
    /// assert_eq!(base.markup.paragraph.as_deref(), Some("lead"));
    /// assert_eq!(base.markup.h1.as_deref(), Some("text-2xl font-bold my-4"));
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.markup.merge(&other.markup);
        self.output.merge(&other.output);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| BriefmarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::defaults();
        assert_eq!(config.markup.bullet.as_deref(), Some("ml-6 list-disc"));
        assert_eq!(config.markup.numbered.as_deref(), Some("ml-6 list-decimal"));
        assert_eq!(config.markup.strong.as_deref(), Some(""));
        assert!(!config.output.wrap());
    }

    #[test]
    fn test_default_is_unset() {
        let config = Config::default();
        assert_eq!(config.markup, MarkupConfig::default());
        assert!(config.markup.h1.is_none());
        assert!(config.output.wrap.is_none());
    }

    #[test]
    fn test_merge_partial_override() {
        let mut base = Config::defaults();
        let other = Config::from_toml(
            r#"
            [markup]
            H1 = "title"
            [output]
            Wrap = true
        "#,
        )
        .unwrap();

        base.merge(&other);
        assert_eq!(base.markup.h1.as_deref(), Some("title"));
        assert_eq!(base.markup.h2.as_deref(), Some("text-xl font-bold my-3"));
        assert!(base.output.wrap());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = Config::from_toml("[markup\nH1 = ").unwrap_err();
        assert!(matches!(err, BriefmarkError::Config(_)));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let config = Config::from_toml("[style]\nMargin = 2").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("briefmark"));
        }
    }

    #[test]
    fn test_save_and_load_from() {
        let path = std::env::temp_dir().join(format!("briefmark-config-{}.toml", std::process::id()));
        let mut config = Config::defaults();
        config.markup.paragraph = Some("body".to_string());

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_with_inline_override() {
        let config = Config::load_with_override(Some("[output]\nWrap = true")).unwrap();
        assert!(config.output.wrap());
    }
}
