//! Core enums for color depth and text attributes.
//!
//! Depth is declared loosely (numbers or names) and resolved once into a
//! [`ColorDepth`]. Attributes are a closed set with a fixed canonical order.

use serde::{Deserialize, Serialize};

/// The number of colors a target terminal can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorDepth {
    /// No color support, color fragments are empty
    #[default]
    None,
    /// 8 base plus 8 bright colors
    Ansi16,
    /// 6x6x6 cube plus 24-step grayscale ramp
    Ansi256,
    /// 24-bit RGB
    TrueColor,
}

impl ColorDepth {
    /// Numeric level: 0 no color, 1 16 colors, 2 256 colors, 3 16m colors.
    pub fn level(self) -> u8 {
        match self {
            ColorDepth::None => 0,
            ColorDepth::Ansi16 => 1,
            ColorDepth::Ansi256 => 2,
            ColorDepth::TrueColor => 3,
        }
    }

    /// Resolve a loose depth declaration.
    ///
    /// Numbers and names are matched strictly against the alias table, so
    /// `3` is truecolor while the string `"3"` is not recognized. Anything
    /// unrecognized resolves to [`ColorDepth::None`].
    ///
    /// # Example
    ///
    /// ```
    /// use sgrc_core::{ColorDepth, DepthSpec};
    /// assert_eq!(ColorDepth::resolve(&DepthSpec::from("16m")), ColorDepth::TrueColor);
    /// assert_eq!(ColorDepth::resolve(&DepthSpec::Level(256)), ColorDepth::Ansi256);
    /// assert_eq!(ColorDepth::resolve(&DepthSpec::from("xyz")), ColorDepth::None);
    /// ```
    pub fn resolve(spec: &DepthSpec) -> Self {
        match spec {
            DepthSpec::Level(3) => ColorDepth::TrueColor,
            DepthSpec::Level(2 | 256) => ColorDepth::Ansi256,
            DepthSpec::Level(1 | 8 | 16) => ColorDepth::Ansi16,
            DepthSpec::Level(_) => ColorDepth::None,
            DepthSpec::Name(name) => match name.as_str() {
                "16m" | "millions" => ColorDepth::TrueColor,
                "256" | "hundreds" => ColorDepth::Ansi256,
                "8" | "16" | "ansi" | "color" => ColorDepth::Ansi16,
                _ => ColorDepth::None,
            },
        }
    }
}

impl std::fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorDepth::None => write!(f, "none"),
            ColorDepth::Ansi16 => write!(f, "16"),
            ColorDepth::Ansi256 => write!(f, "256"),
            ColorDepth::TrueColor => write!(f, "16m"),
        }
    }
}

impl From<&DepthSpec> for ColorDepth {
    fn from(spec: &DepthSpec) -> Self {
        ColorDepth::resolve(spec)
    }
}

impl From<DepthSpec> for ColorDepth {
    fn from(spec: DepthSpec) -> Self {
        ColorDepth::resolve(&spec)
    }
}

/// A depth as declared by a caller or a config file: a number or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepthSpec {
    /// Numeric alias such as `3`, `256` or `16`
    Level(i64),
    /// Named alias such as `"16m"`, `"hundreds"` or `"color"`
    Name(String),
}

impl DepthSpec {
    /// Parse a command-line argument.
    ///
    /// Shell arguments are always strings, so all-digit input is taken as
    /// a number here. Library callers keep the strict distinction.
    pub fn parse_arg(arg: &str) -> Self {
        match arg.parse::<i64>() {
            Ok(level) if arg.bytes().all(|b| b.is_ascii_digit()) => DepthSpec::Level(level),
            _ => DepthSpec::Name(arg.to_string()),
        }
    }
}

impl Default for DepthSpec {
    fn default() -> Self {
        DepthSpec::Level(0)
    }
}

impl std::fmt::Display for DepthSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthSpec::Level(level) => write!(f, "{}", level),
            DepthSpec::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl From<i32> for DepthSpec {
    fn from(level: i32) -> Self {
        DepthSpec::Level(i64::from(level))
    }
}

impl From<i64> for DepthSpec {
    fn from(level: i64) -> Self {
        DepthSpec::Level(level)
    }
}

impl From<u32> for DepthSpec {
    fn from(level: u32) -> Self {
        DepthSpec::Level(i64::from(level))
    }
}

impl From<&str> for DepthSpec {
    fn from(name: &str) -> Self {
        DepthSpec::Name(name.to_string())
    }
}

impl From<String> for DepthSpec {
    fn from(name: String) -> Self {
        DepthSpec::Name(name)
    }
}

impl From<ColorDepth> for DepthSpec {
    fn from(depth: ColorDepth) -> Self {
        DepthSpec::Level(i64::from(depth.level()))
    }
}

/// A text attribute, including the `background` color modifier.
///
/// `Background` selects the background color selector when a color is
/// encoded; it has no SGR code of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Encode the color as a background color
    Background,
    /// Bold or increased intensity
    Bold,
    /// Faint or decreased intensity
    Dim,
    /// Italic
    Italic,
    /// Single underline
    Underline,
    /// Slow blink
    Blink,
    /// Reverse video
    Invert,
}

impl Attribute {
    /// Every attribute in canonical order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Background,
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Invert,
    ];

    /// The attribute's key name.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Background => "background",
            Attribute::Bold => "bold",
            Attribute::Dim => "dim",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Invert => "invert",
        }
    }

    /// Look up an attribute by key name.
    pub fn from_name(name: &str) -> Option<Self> {
        Attribute::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// The SGR (on, off) code pair, `None` for the background modifier.
    ///
    /// Bold and dim share the off code 22.
    pub fn codes(self) -> Option<(u8, u8)> {
        match self {
            Attribute::Background => None,
            Attribute::Bold => Some((1, 22)),
            Attribute::Dim => Some((2, 22)),
            Attribute::Italic => Some((3, 23)),
            Attribute::Underline => Some((4, 24)),
            Attribute::Blink => Some((5, 25)),
            Attribute::Invert => Some((7, 27)),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
