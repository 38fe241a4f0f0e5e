//! Mathtext Config
//!
//! This crate handles configuration loading and management
//! for mathtext, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mathtext/config.toml`
//! - macOS: `~/Library/Application Support/mathtext/config.toml`
//! - Windows: `%APPDATA%\mathtext\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mathtext_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod style;
mod typeset;

pub use features::FeaturesConfig;
pub use style::StyleConfig;
pub use typeset::TypesetConfig;

use mathtext_core::{MathTextError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
EscapedDollars = true
Currency       = true
LineBreaks     = true

[style]
ContainerClass       = "math-content"
DisplayClass         = "math-display"
InlineFallbackClass  = "math-fallback math-fallback-inline"
DisplayFallbackClass = "math-fallback math-fallback-display"
LineBreak            = "<br/>"

[typeset]
Backend = "unicode"
Trust   = false
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for mathtext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,

    /// Typesetter configuration
    #[serde(default)]
    pub typeset: TypesetConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathtext_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[typeset]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mathtext")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            MathTextError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathtext_config::Config;
    /// let config = Config::from_toml("[features]\nCurrency = false").unwrap();
    /// assert!(!config.features.currency);
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| MathTextError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// Only the keys the override sets replace loaded values.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?)?;
        }

        Ok(config)
    }

    /// Resolve an override argument: an existing file path or inline TOML.
    ///
    /// The result holds only the keys present in the override, so unset
    /// keys are not filled with defaults.
    pub fn parse_override(override_str: &str) -> Result<toml::Table> {
        let override_path = Path::new(override_str);
        if override_path.is_file() {
            let content = std::fs::read_to_string(override_path)?;
            return toml::from_str(&content).map_err(|e| {
                MathTextError::Config(format!(
                    "Parse error in {}: {}",
                    override_path.display(),
                    e
                ))
            });
        }
        toml::from_str(override_str)
            .map_err(|e| MathTextError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge override keys into this config.
    ///
    /// Keys present in `overrides` take precedence; everything else keeps
    /// its current value. Fails if an override value has the wrong type.
    ///
    /// # Example
    ///
    /// ```
    /// use mathtext_config::Config;
    ///
    /// let mut base = Config::from_toml("[style]\nDisplayClass = \"eq\"").unwrap();
    /// let overrides = Config::parse_override("[features]\nLineBreaks = false").unwrap();
    ///
    /// base.merge(&overrides).unwrap();
    /// assert!(!base.features.line_breaks);
    /// assert_eq!(base.style.display_class, "eq");
    /// ```
    pub fn merge(&mut self, overrides: &toml::Table) -> Result<()> {
        let mut table = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(MathTextError::Config("Config is not a table".into())),
            Err(e) => return Err(MathTextError::Config(format!("Serialization error: {}", e))),
        };
        merge_tables(&mut table, overrides);
        *self = toml::Value::Table(table)
            .try_into::<Config>()
            .map_err(|e| MathTextError::Config(format!("Override error: {}", e)))?;
        Ok(())
    }
}

/// Recursively overlay `overrides` onto `base`, section by section.
fn merge_tables(base: &mut toml::Table, overrides: &toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(toml::Value::Table(section)), toml::Value::Table(keys)) => {
                merge_tables(section, keys);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.escaped_dollars);
        assert!(config.features.currency);
        assert_eq!(config.style.line_break, "<br/>");
        assert_eq!(config.typeset.backend, "unicode");
    }

    #[test]
    fn test_default_toml_matches_default() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let overrides = Config::parse_override(
            r#"
            [features]
            Currency = false
            [typeset]
            Backend = "katex"
        "#,
        )
        .unwrap();

        base.merge(&overrides).unwrap();
        assert!(!base.features.currency);
        assert!(base.features.escaped_dollars);
        assert_eq!(base.typeset.backend, "katex");
        assert_eq!(base.style, StyleConfig::default());
    }

    #[test]
    fn test_merge_keeps_unset_keys() {
        let mut base = Config::from_toml(
            r#"
            [features]
            LineBreaks = false
            [style]
            DisplayClass = "eq"
        "#,
        )
        .unwrap();

        base.merge(&Config::parse_override("[typeset]\nBackend = \"unicode\"").unwrap())
            .unwrap();
        assert!(!base.features.line_breaks);
        assert_eq!(base.style.display_class, "eq");
        assert_eq!(base.typeset.backend, "unicode");
    }

    #[test]
    fn test_merge_within_section() {
        let mut base = Config::from_toml("[style]\nContainerClass = \"prose\"").unwrap();

        base.merge(&Config::parse_override("[style]\nLineBreak = \"<br>\"").unwrap())
            .unwrap();
        assert_eq!(base.style.container_class, "prose");
        assert_eq!(base.style.line_break, "<br>");
        assert_eq!(base.style.display_class, "math-display");
    }

    #[test]
    fn test_merge_wrong_type() {
        let mut base = Config::default();
        let overrides = Config::parse_override("[features]\nCurrency = \"no\"").unwrap();

        let err = base.merge(&overrides).unwrap_err();
        assert!(matches!(err, MathTextError::Config(_)));
    }

    #[test]
    fn test_parse_override_inline() {
        let overrides = Config::parse_override("[style]\nDisplayClass = \"eq\"").unwrap();
        assert_eq!(overrides["style"]["DisplayClass"].as_str(), Some("eq"));
        assert!(!overrides.contains_key("features"));
    }

    #[test]
    fn test_parse_override_file() {
        let path = std::env::temp_dir().join(format!("mathtext-override-{}.toml", std::process::id()));
        std::fs::write(&path, "[features]\nCurrency = false\n").unwrap();

        let overrides = Config::parse_override(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(overrides["features"]["Currency"].as_bool(), Some(false));
        assert!(overrides["features"].get("LineBreaks").is_none());
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[style\nbroken").unwrap_err();
        assert!(matches!(err, MathTextError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mathtext"));
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut config = Config::default();
        config.style.container_class = "prose text-muted".to_string();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}
