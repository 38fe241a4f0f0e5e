//! Typesetter selection.

use serde::{Deserialize, Serialize};

/// Which math typesetter renders math spans, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypesetConfig {
    /// Backend name: "unicode" or "katex".
    /// Default: "unicode"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Allow trusted commands (`\href`, `\includegraphics`, ...) in KaTeX.
    /// Default: false
    #[serde(default)]
    pub trust: bool,
}

impl Default for TypesetConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            trust: false,
        }
    }
}

fn default_backend() -> String {
    "unicode".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let typeset = TypesetConfig::default();
        assert_eq!(typeset.backend, "unicode");
        assert!(!typeset.trust);
    }

    #[test]
    fn test_serde_pascal_case() {
        let typeset: TypesetConfig = toml::from_str("Backend = \"katex\"\nTrust = true").unwrap();
        assert_eq!(typeset.backend, "katex");
        assert!(typeset.trust);
    }
}
