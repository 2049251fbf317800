//! SGR Composer Core
//!
//! This crate provides core types and error definitions
//! shared by the sgrc encoders, composer and configuration.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ColorDepth`], [`DepthSpec`] - Target color depth and its loose aliases
//! - [`Attribute`], [`AttributeSet`] - Text attributes in canonical order
//! - [`StyleSpec`], [`StylePatch`] - The accepted shapes of a style declaration
//! - [`Rgb`], [`Color`], [`ColorValue`] - Typed and loose color values
//! - [`SgrPair`] - An open/close escape fragment pair
//! - [`SgrError`] - Error types

pub mod enums;
pub mod error;
pub mod style;
pub mod types;

pub use enums::{Attribute, ColorDepth, DepthSpec};
pub use error::{Result, SgrError};
pub use style::{AttributeSet, StylePatch, StyleSpec};
pub use types::{Color, ColorValue, Rgb, SgrPair};
