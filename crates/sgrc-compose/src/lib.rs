//! SGR Composer
//!
//! This crate provides [`Composer`], which holds a fixed color depth and a
//! current color and attribute set, and renders them into the escape
//! sequence pair that opens and closes that styling.
//!
//! # Example
//!
//! ```
//! use sgrc_compose::Composer;
//!
//! let mut composer = Composer::new("16m");
//! composer.set_color([0xFF, 0x33, 0x66]).unwrap();
//! composer.set_style(&["bold", "italic"][..]).unwrap();
//!
//! let sgr = composer.render();
//! assert_eq!(sgr.open, "\x1b[38;2;255;51;102;1;3m");
//! assert_eq!(sgr.close, "\x1b[23;22;39m");
//! assert_eq!(format!("{}text{}", sgr, sgr.close), "\x1b[38;2;255;51;102;1;3mtext\x1b[23;22;39m");
//! ```

mod composer;

pub use composer::Composer;
