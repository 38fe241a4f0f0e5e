//! Mathtext Render
//!
//! This crate turns raw content mixing prose and LaTeX math into markup
//! that can be embedded directly in a document body.
//!
//! # Pipeline
//!
//! 1. The content is split into text and math [`Segment`]s by the parser.
//! 2. Text runs are HTML-escaped and newlines become line breaks.
//! 3. Math is trimmed and passed to a [`Typesetter`]; display math is
//!    wrapped in a block.
//! 4. Math that fails to typeset is logged and replaced with its escaped
//!    source in code markup.
//!
//! Rendering never fails: every input produces markup.
//!
//! # Example
//!
//! ```
//! use mathtext_render::Renderer;
//!
//! let renderer = Renderer::default();
//! let html = renderer.render("Energy: $E = mc^2$\n<done>");
//! assert_eq!(
//!     html,
//!     r#"Energy: <span class="math math-inline">E = mc²</span><br/>&lt;done&gt;"#
//! );
//! ```

pub mod fallback;

pub use mathtext_core::{MathMode, Segment, SegmentKind};
pub use mathtext_typeset::Typesetter;

use log::{debug, warn};
use mathtext_config::{Config, StyleConfig};
use mathtext_core::{Position, Result};
use mathtext_html::{escape_html, escape_text, markup};
use mathtext_parser::Segmenter;
use mathtext_typeset::{typesetter_from_config, UnicodeTypesetter};

/// Math-and-text renderer.
///
/// Holds only immutable settings and a typesetter, so one renderer can be
/// shared by reference between threads.
pub struct Renderer {
    /// Math typesetting backend
    typesetter: Box<dyn Typesetter>,
    /// Delimiter scanner
    segmenter: Segmenter,
    /// Class names and break token
    style: StyleConfig,
    /// Convert newlines in text to line-break markup
    line_breaks: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Box::new(UnicodeTypesetter::new()))
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("typesetter", &self.typesetter.name())
            .field("segmenter", &self.segmenter)
            .field("style", &self.style)
            .field("line_breaks", &self.line_breaks)
            .finish()
    }
}

impl Renderer {
    /// Create a renderer with default settings and the given typesetter.
    pub fn new(typesetter: Box<dyn Typesetter>) -> Self {
        Self {
            typesetter,
            segmenter: Segmenter::new(),
            style: StyleConfig::default(),
            line_breaks: true,
        }
    }

    /// Create a renderer from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configured typesetter backend is unknown or unavailable.
    pub fn with_config(config: &Config) -> Result<Self> {
        let typesetter = typesetter_from_config(&config.typeset)?;
        let mut renderer = Self::new(typesetter);
        renderer.apply_config(config);
        Ok(renderer)
    }

    /// Create a renderer from a configuration with an explicit typesetter.
    pub fn with_typesetter(config: &Config, typesetter: Box<dyn Typesetter>) -> Self {
        let mut renderer = Self::new(typesetter);
        renderer.apply_config(config);
        renderer
    }

    fn apply_config(&mut self, config: &Config) {
        self.segmenter =
            Segmenter::with_settings(config.features.escaped_dollars, config.features.currency);
        self.style = config.style.clone();
        self.line_breaks = config.features.line_breaks;
    }

    /// Enable or disable newline conversion in text.
    pub fn set_line_breaks(&mut self, enabled: bool) {
        self.line_breaks = enabled;
    }

    /// Get the style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Get the segmenter.
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Get the typesetter.
    pub fn typesetter(&self) -> &dyn Typesetter {
        &*self.typesetter
    }

    /// Render raw content to markup.
    ///
    /// Empty content yields an empty string.
    pub fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        let segments = self.segmenter.segment(content);
        debug!("rendering {} bytes in {} segments", content.len(), segments.len());
        self.render_segments(content, &segments)
    }

    /// Render content that may be absent. `None` yields an empty string.
    pub fn render_optional(&self, content: Option<&str>) -> String {
        content.map(|c| self.render(c)).unwrap_or_default()
    }

    /// Render content inside a container element.
    ///
    /// The container's class is the configured container class followed by
    /// `class_hint`, which is escaped but otherwise passed through untouched.
    /// Empty content yields an empty string with no container.
    pub fn render_with_class(&self, content: &str, class_hint: Option<&str>) -> String {
        if content.is_empty() {
            return String::new();
        }
        let class = markup::join_classes(&[&self.style.container_class, class_hint.unwrap_or("")]);
        markup::element("div", &class, &self.render(content))
    }

    /// Render already-segmented content.
    ///
    /// `source` is the content the segments were taken from; it is only
    /// used to report positions of math that fails to typeset.
    pub fn render_segments(&self, source: &str, segments: &[Segment]) -> String {
        let mut out = String::with_capacity(source.len() + source.len() / 4);
        for segment in segments {
            match segment.kind.math_mode() {
                None => self.push_text(&mut out, &segment.value),
                Some(mode) => self.push_math(&mut out, source, segment, mode),
            }
        }
        out
    }

    fn push_text(&self, out: &mut String, text: &str) {
        if self.line_breaks {
            out.push_str(&escape_text(text, &self.style.line_break));
        } else {
            out.push_str(&escape_html(text));
        }
    }

    fn push_math(&self, out: &mut String, source: &str, segment: &Segment, mode: MathMode) {
        let math = segment.value.trim();
        match self.typesetter.typeset(math, mode) {
            Ok(rendered) => self.insert_trusted_math(out, &rendered, mode),
            Err(err) => {
                warn!(
                    "{} math at {} could not be typeset by `{}`: {} (source: {:?})",
                    mode,
                    Position::locate(source, segment.span.start),
                    self.typesetter.name(),
                    err,
                    math
                );
                out.push_str(&fallback::fallback(
                    math,
                    mode,
                    &self.style.inline_fallback_class,
                    &self.style.display_fallback_class,
                ));
            }
        }
    }

    /// Append typesetter output to `out` without escaping.
    ///
    /// This is the only place unescaped markup enters the output. Display
    /// math is wrapped in a block carrying the display class.
    pub fn insert_trusted_math(&self, out: &mut String, rendered: &str, mode: MathMode) {
        match mode {
            MathMode::Inline => out.push_str(rendered),
            MathMode::Display => {
                out.push_str(&markup::element("div", &self.style.display_class, rendered))
            }
        }
    }
}

/// Render raw content with the default renderer.
///
/// # Example
/// ```
/// assert_eq!(mathtext_render::render("Pay $100$ & go"), "Pay $100$ &amp; go");
/// ```
pub fn render(content: &str) -> String {
    Renderer::default().render(content)
}
