//! Mathtext Typeset
//!
//! This crate defines the [`Typesetter`] seam between the renderer and
//! whatever turns a LaTeX math source into markup, plus the built-in
//! backends.
//!
//! # Backends
//!
//! - [`unicode::UnicodeTypesetter`] - pure Rust, maps LaTeX to Unicode text
//! - `katex::KatexTypesetter` - KaTeX HTML output (cargo feature `katex`)
//!
//! # Contract
//!
//! - On success the returned markup is inserted into the output verbatim,
//!   so a typesetter must escape anything it copies from the source.
//! - On malformed input it returns [`TypesetError::Syntax`]; the renderer
//!   logs it and shows the escaped source instead.
//!
//! # Example
//!
//! ```
//! use mathtext_core::{MathMode, TypesetError};
//! use mathtext_typeset::Typesetter;
//!
//! struct Verbatim;
//!
//! impl Typesetter for Verbatim {
//!     fn name(&self) -> &str { "verbatim" }
//!
//!     fn typeset(&self, source: &str, _mode: MathMode) -> Result<String, TypesetError> {
//!         Ok(mathtext_html::escape_html(source))
//!     }
//! }
//!
//! assert_eq!(Verbatim.typeset("a<b", MathMode::Inline).unwrap(), "a&lt;b");
//! ```

#[cfg(feature = "katex")]
pub mod katex;
pub mod unicode;

pub use mathtext_core::{MathMode, TypesetError};
pub use unicode::UnicodeTypesetter;

use mathtext_config::TypesetConfig;
use mathtext_core::{MathTextError, Result};

/// Converts a math source into markup.
///
/// Implementations must be pure: the same source and mode always give the
/// same result, and no state is kept between calls.
pub trait Typesetter: Send + Sync {
    /// Typesetter name for identification and logging.
    fn name(&self) -> &str;

    /// Typeset `source` (already trimmed) for the given presentation.
    fn typeset(&self, source: &str, mode: MathMode) -> std::result::Result<String, TypesetError>;
}

impl<T: Typesetter + ?Sized> Typesetter for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn typeset(&self, source: &str, mode: MathMode) -> std::result::Result<String, TypesetError> {
        (**self).typeset(source, mode)
    }
}

/// Names of the backends compiled into this build.
pub fn available_backends() -> Vec<&'static str> {
    let mut names = vec!["unicode"];
    if cfg!(feature = "katex") {
        names.push("katex");
    }
    names
}

/// Create a typesetter by backend name.
///
/// # Errors
///
/// [`MathTextError::Config`] if the name is unknown or the backend was not
/// compiled in.
pub fn typesetter_from_name(name: &str, trust: bool) -> Result<Box<dyn Typesetter>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "unicode" => Ok(Box::new(UnicodeTypesetter::new())),
        #[cfg(feature = "katex")]
        "katex" => Ok(Box::new(katex::KatexTypesetter::with_trust(trust))),
        #[cfg(not(feature = "katex"))]
        "katex" => {
            let _ = trust;
            Err(MathTextError::Config(
                "typesetter `katex` is not available (build with the `katex` feature)".into(),
            ))
        }
        other => Err(MathTextError::Config(format!(
            "unknown typesetter `{}` (available: {})",
            other,
            available_backends().join(", ")
        ))),
    }
}

/// Create the typesetter selected by a configuration.
pub fn typesetter_from_config(config: &TypesetConfig) -> Result<Box<dyn Typesetter>> {
    typesetter_from_name(&config.backend, config.trust)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test typesetter that rejects anything containing "bad".
    struct PickyTypesetter;

    impl Typesetter for PickyTypesetter {
        fn name(&self) -> &str {
            "picky"
        }

        fn typeset(&self, source: &str, mode: MathMode) -> std::result::Result<String, TypesetError> {
            if source.contains("bad") {
                Err(TypesetError::syntax("rejected"))
            } else {
                Ok(format!("[{}:{}]", mode, source))
            }
        }
    }

    #[test]
    fn test_boxed_typesetter_delegates() {
        let boxed: Box<dyn Typesetter> = Box::new(PickyTypesetter);
        assert_eq!(boxed.name(), "picky");
        assert_eq!(boxed.typeset("x", MathMode::Display).unwrap(), "[display:x]");
        assert!(boxed.typeset("bad", MathMode::Inline).is_err());
    }

    #[test]
    fn test_from_name_unicode() {
        let typesetter = typesetter_from_name("Unicode", false).unwrap();
        assert_eq!(typesetter.name(), "unicode");
    }

    #[test]
    fn test_from_name_unknown() {
        let err = typesetter_from_name("mathjax", false).err().unwrap();
        assert!(matches!(err, MathTextError::Config(_)));
        assert!(err.to_string().contains("mathjax"));
    }

    #[cfg(not(feature = "katex"))]
    #[test]
    fn test_from_name_katex_unavailable() {
        let err = typesetter_from_name("katex", false).err().unwrap();
        assert!(err.to_string().contains("katex"));
    }

    #[test]
    fn test_from_config_default() {
        let typesetter = typesetter_from_config(&TypesetConfig::default()).unwrap();
        assert_eq!(typesetter.name(), "unicode");
    }

    #[test]
    fn test_available_backends() {
        assert!(available_backends().contains(&"unicode"));
    }
}
