//! Mathtext HTML
//!
//! This crate provides the HTML escaping and markup helpers used
//! to assemble mathtext's output.
//!
//! # Overview
//!
//! - [`escape`] - Escaping for text content and attribute values
//! - [`markup`] - Markup constants and element builders
//!
//! # Example
//!
//! ```
//! use mathtext_html::{escape, markup};
//!
//! let text = escape::escape_text("a < b\nc", markup::BREAK);
//! assert_eq!(text, "a &lt; b<br/>c");
//! ```

pub mod escape;
pub mod markup;

pub use escape::*;
pub use markup::*;
