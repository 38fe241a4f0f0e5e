//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the switches for the optional parts of the scanning policy.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which scanning rules are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Treat `\$` as a literal dollar sign that never opens math.
    /// Default: true
    #[serde(default = "default_true")]
    pub escaped_dollars: bool,

    /// Keep purely numeric inline spans such as `$100$` as text.
    /// Default: true
    #[serde(default = "default_true")]
    pub currency: bool,

    /// Convert newlines in text to explicit line breaks.
    /// Default: true
    #[serde(default = "default_true")]
    pub line_breaks: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            escaped_dollars: true,
            currency: true,
            line_breaks: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let features = FeaturesConfig::default();
        assert!(features.escaped_dollars);
        assert!(features.currency);
        assert!(features.line_breaks);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            EscapedDollars = false
            Currency = false
            LineBreaks = false
        "#;

        let features: FeaturesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            features,
            FeaturesConfig {
                escaped_dollars: false,
                currency: false,
                line_breaks: false,
            }
        );
    }

    #[test]
    fn test_missing_keys_default_to_enabled() {
        let features: FeaturesConfig = toml::from_str("Currency = false").unwrap();
        assert!(features.escaped_dollars);
        assert!(!features.currency);
        assert!(features.line_breaks);
    }
}
