//! SGR Composer ANSI
//!
//! This crate provides the escape code constants and the two pure
//! encoders the composer is built from.
//!
//! # Overview
//!
//! - [`codes`] - SGR escape code constants and the sequence wrapper
//! - [`color`] - Color encoder and RGB palette downsampling
//! - [`style`] - Attribute encoder
//! - [`interop`] - Conversions into crossterm's style types
//!
//! # Example
//!
//! ```
//! use sgrc_ansi::{encode_attributes, encode_color};
//! use sgrc_core::{Attribute, AttributeSet, Color, ColorDepth, Rgb};
//!
//! let color = encode_color(&Color::Rgb(Rgb::new(255, 51, 102)), ColorDepth::Ansi256, false);
//! assert_eq!(color.open, "38;5;204");
//! assert_eq!(color.close, "39");
//!
//! let attrs = AttributeSet::new().with(Attribute::Bold).with(Attribute::Italic);
//! let styled = encode_attributes(&attrs, &AttributeSet::new());
//! assert_eq!(styled.open, "1;3");
//! assert_eq!(styled.close, "23;22");
//! ```

pub mod codes;
pub mod color;
pub mod interop;
pub mod style;

pub use codes::*;
pub use color::*;
pub use style::*;
