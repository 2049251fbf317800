//! Core types for sgrc

use serde::{Deserialize, Serialize};

use crate::error::{Result, SgrError};

/// A concrete RGB color.
///
/// Components are kept as given, so values outside `0..=255` pass through
/// to truecolor output unchanged. Palette conversions use [`Rgb::saturated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct Rgb {
    /// Red component
    pub r: i64,
    /// Green component
    pub g: i64,
    /// Blue component
    pub b: i64,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// The components as an `[r, g, b]` array.
    pub fn components(self) -> [i64; 3] {
        [self.r, self.g, self.b]
    }

    /// The components clamped into `0..=255`.
    pub fn saturated(self) -> [u8; 3] {
        self.components().map(|c| c.clamp(0, 255) as u8)
    }
}

impl From<[i64; 3]> for Rgb {
    fn from([r, g, b]: [i64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(components: [u8; 3]) -> Self {
        components.map(i64::from).into()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        [r, g, b].into()
    }
}

impl From<Rgb> for [i64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.components()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

/// A color as held by the composer: concrete RGB or a reset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Plain reset, no color
    Reset,
    /// Alias of [`Color::Reset`]
    Normal,
    /// Concrete RGB color
    Rgb(Rgb),
}

impl Color {
    /// Whether this is one of the reset sentinels.
    pub fn is_reset(&self) -> bool {
        matches!(self, Color::Reset | Color::Normal)
    }

    /// The RGB value, if this color is concrete.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Color::Rgb(rgb) => Some(*rgb),
            Color::Reset | Color::Normal => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<[u8; 3]> for Color {
    fn from(components: [u8; 3]) -> Self {
        Color::Rgb(components.into())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Reset => write!(f, "reset"),
            Color::Normal => write!(f, "normal"),
            Color::Rgb(rgb) => write!(f, "{}", rgb),
        }
    }
}

/// A loosely typed color, as it arrives from config files or callers.
///
/// Only `"reset"`, `"normal"` and sequences of exactly three integers
/// convert into a [`Color`]. Component range is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A sentinel name (or anything else given as a string)
    Name(String),
    /// A component sequence
    Components(Vec<i64>),
}

impl ColorValue {
    /// Convert into a typed [`Color`].
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::InvalidColorFormat`] carrying the offending value.
    ///
    /// # Example
    ///
    /// ```
    /// use sgrc_core::{Color, ColorValue, Rgb};
    /// let value = ColorValue::from(vec![255, 51, 102]);
    /// assert_eq!(value.to_color().unwrap(), Color::Rgb(Rgb::new(255, 51, 102)));
    /// assert!(ColorValue::from("#FF3366").to_color().is_err());
    /// ```
    pub fn to_color(&self) -> Result<Color> {
        match self {
            ColorValue::Name(name) if name == "reset" => Ok(Color::Reset),
            ColorValue::Name(name) if name == "normal" => Ok(Color::Normal),
            ColorValue::Components(components) => match components.as_slice() {
                &[r, g, b] => Ok(Color::Rgb(Rgb::new(r, g, b))),
                _ => Err(SgrError::InvalidColorFormat(self.to_string())),
            },
            ColorValue::Name(_) => Err(SgrError::InvalidColorFormat(self.to_string())),
        }
    }
}

impl TryFrom<&ColorValue> for Color {
    type Error = SgrError;

    fn try_from(value: &ColorValue) -> Result<Self> {
        value.to_color()
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorValue::Name(name) => write!(f, "{}", name),
            ColorValue::Components(components) => {
                let parts: Vec<String> = components.iter().map(|c| c.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<&str> for ColorValue {
    fn from(name: &str) -> Self {
        ColorValue::Name(name.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(name: String) -> Self {
        ColorValue::Name(name)
    }
}

impl From<Vec<i64>> for ColorValue {
    fn from(components: Vec<i64>) -> Self {
        ColorValue::Components(components)
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(components: [u8; 3]) -> Self {
        ColorValue::Components(components.iter().map(|&c| i64::from(c)).collect())
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Components(rgb.components().to_vec())
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => ColorValue::from("reset"),
            Color::Normal => ColorValue::from("normal"),
            Color::Rgb(rgb) => rgb.into(),
        }
    }
}

/// An open/close pair of SGR fragments.
///
/// Encoders return bare parameter lists such as `"38;2;255;51;102"`; the
/// composer returns full sequences such as `"\x1b[38;2;255;51;102m"`.
/// Formatting a pair with `{}` writes its opening half, so a pair can be
/// interpolated straight into a format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SgrPair {
    /// Opening fragment
    pub open: String,
    /// Closing fragment
    pub close: String,
}

impl SgrPair {
    /// Create a new pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Whether both fragments are empty.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }
}

impl std::fmt::Display for SgrPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.open)
    }
}
