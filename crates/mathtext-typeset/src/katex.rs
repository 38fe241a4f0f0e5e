//! KaTeX-backed typesetter.

use crate::Typesetter;
use ::katex::{Opts, OutputType};
use mathtext_core::{MathMode, TypesetError};

/// Typesets math with KaTeX, producing HTML.
///
/// Errors are thrown rather than rendered inline, so malformed input
/// reaches the renderer's fallback.
#[derive(Debug, Clone, Default)]
pub struct KatexTypesetter {
    trust: bool,
}

impl KatexTypesetter {
    /// Create a KaTeX typesetter with trusted commands disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a KaTeX typesetter, optionally trusting `\href` and friends.
    pub fn with_trust(trust: bool) -> Self {
        Self { trust }
    }

    fn opts(&self, mode: MathMode) -> Result<Opts, TypesetError> {
        Opts::builder()
            .display_mode(mode.is_display())
            .output_type(OutputType::Html)
            .throw_on_error(true)
            .trust(self.trust)
            .build()
            .map_err(|e| TypesetError::Backend(e.to_string()))
    }
}

impl Typesetter for KatexTypesetter {
    fn name(&self) -> &str {
        "katex"
    }

    fn typeset(&self, source: &str, mode: MathMode) -> Result<String, TypesetError> {
        let opts = self.opts(mode)?;
        ::katex::render_with_opts(source, &opts).map_err(|e| match e {
            ::katex::Error::JsExecError(message) => TypesetError::Syntax { message },
            other => TypesetError::Backend(other.to_string()),
        })
    }
}
