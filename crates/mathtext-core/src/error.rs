//! Error types for mathtext

use thiserror::Error;

/// Main error type for mathtext operations
#[derive(Error, Debug)]
pub enum MathTextError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed explanation payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Math typesetting error surfaced outside the renderer
    #[error("Typeset error: {0}")]
    Typeset(#[from] TypesetError),
}

/// Failure reported by a math typesetter.
///
/// The renderer never propagates these; it logs them and substitutes
/// the escaped math source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesetError {
    /// The math source is malformed
    #[error("math syntax error: {message}")]
    Syntax {
        /// Human-readable description of the problem
        message: String,
    },

    /// The typesetting engine itself failed
    #[error("typesetter backend error: {0}")]
    Backend(String),
}

impl TypesetError {
    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }
}

/// Result type alias for mathtext operations
pub type Result<T> = std::result::Result<T, MathTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = TypesetError::syntax("unbalanced braces");
        assert_eq!(err.to_string(), "math syntax error: unbalanced braces");
    }

    #[test]
    fn test_typeset_error_converts() {
        let err: MathTextError = TypesetError::Backend("engine crashed".into()).into();
        assert_eq!(
            err.to_string(),
            "Typeset error: typesetter backend error: engine crashed"
        );
    }
}
