//! Mathtext Core
//!
//! This crate provides core types and error definitions
//! for the mathtext renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Segment`] - One classified chunk of raw content (text or math)
//! - [`SegmentKind`], [`MathMode`] - Segment classification enums
//! - [`MathTextError`], [`TypesetError`] - Error types
//! - [`Position`], [`Span`] - Source location types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{MathMode, SegmentKind};
pub use error::{MathTextError, Result, TypesetError};
pub use types::{Position, Segment, Span};
