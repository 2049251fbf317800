//! Attribute sets and style declarations.
//!
//! A style can be declared three ways: the keyword `"reset"`, a list of
//! attribute names, or a partial mapping that may also carry a color.
//! All three resolve to an [`AttributeSet`] over the fixed key set.

use serde::{Deserialize, Serialize};

use crate::enums::Attribute;
use crate::types::ColorValue;

/// The on/off state of every [`Attribute`]. All false by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    /// Encode the color as a background color
    pub background: bool,
    /// Bold
    pub bold: bool,
    /// Dim
    pub dim: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Blink
    pub blink: bool,
    /// Reverse video
    pub invert: bool,
}

impl AttributeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an attribute is on.
    pub fn get(&self, attr: Attribute) -> bool {
        match attr {
            Attribute::Background => self.background,
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Blink => self.blink,
            Attribute::Invert => self.invert,
        }
    }

    /// Switch an attribute on or off.
    pub fn set(&mut self, attr: Attribute, on: bool) {
        let slot = match attr {
            Attribute::Background => &mut self.background,
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Blink => &mut self.blink,
            Attribute::Invert => &mut self.invert,
        };
        *slot = on;
    }

    /// Return a copy with `attr` switched on.
    #[must_use]
    pub fn with(mut self, attr: Attribute) -> Self {
        self.set(attr, true);
        self
    }

    /// Resolve a style declaration against the all-false defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use sgrc_core::{AttributeSet, StyleSpec};
    /// let attrs = AttributeSet::from_spec(&StyleSpec::from(&["italic", "bold"][..]));
    /// assert_eq!(attrs.names(), vec!["bold", "italic"]);
    /// ```
    pub fn from_spec(spec: &StyleSpec) -> Self {
        match spec {
            StyleSpec::Keyword(_) => Self::default(),
            StyleSpec::Names(names) => names
                .iter()
                .filter_map(|name| Attribute::from_name(name))
                .collect(),
            StyleSpec::Patch(patch) => Self::default().update(patch),
        }
    }

    /// Return a new set with the patch's present keys applied over this one.
    #[must_use]
    pub fn update(&self, patch: &StylePatch) -> Self {
        let mut next = *self;
        for attr in Attribute::ALL {
            if let Some(on) = patch.get(attr) {
                next.set(attr, on);
            }
        }
        next
    }

    /// Active attributes in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(|&attr| self.get(attr))
    }

    /// Names of the active attributes in canonical order.
    pub fn names(&self) -> Vec<&'static str> {
        self.active().map(Attribute::name).collect()
    }

    /// Whether no attribute is on.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), AttributeSet::with)
    }
}

impl From<&[Attribute]> for AttributeSet {
    fn from(attrs: &[Attribute]) -> Self {
        attrs.iter().copied().collect()
    }
}

/// A partial style mapping. Absent keys leave the underlying value alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    /// Color to encode, RGB triple or reset sentinel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    /// Encode the color as background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
    /// Bold text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Dimmed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<bool>,
    /// Italic text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Underlined text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    /// Blinking text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,
    /// Swapped foreground and background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
}

impl StylePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// The patch's value for an attribute, if present.
    pub fn get(&self, attr: Attribute) -> Option<bool> {
        match attr {
            Attribute::Background => self.background,
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Blink => self.blink,
            Attribute::Invert => self.invert,
        }
    }

    /// Set an attribute key.
    #[must_use]
    pub fn attr(mut self, attr: Attribute, on: bool) -> Self {
        let slot = match attr {
            Attribute::Background => &mut self.background,
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Blink => &mut self.blink,
            Attribute::Invert => &mut self.invert,
        };
        *slot = Some(on);
        self
    }

    /// Set the color key.
    #[must_use]
    pub fn color(mut self, color: impl Into<ColorValue>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<AttributeSet> for StylePatch {
    fn from(attrs: AttributeSet) -> Self {
        Attribute::ALL
            .into_iter()
            .fold(Self::default(), |patch, attr| patch.attr(attr, attrs.get(attr)))
    }
}

/// A style declaration in any of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    /// A bare keyword; `"reset"` and any unknown word give the defaults
    Keyword(String),
    /// Attribute names to switch on; unknown names are ignored
    Names(Vec<String>),
    /// A partial mapping merged over the defaults
    Patch(StylePatch),
}

impl StyleSpec {
    /// The `"reset"` keyword.
    pub fn reset() -> Self {
        StyleSpec::Keyword("reset".to_string())
    }

    /// The color carried by a mapping, if any.
    pub fn color(&self) -> Option<&ColorValue> {
        match self {
            StyleSpec::Patch(patch) => patch.color.as_ref(),
            StyleSpec::Keyword(_) | StyleSpec::Names(_) => None,
        }
    }

    /// The attribute set this declaration resolves to.
    pub fn attributes(&self) -> AttributeSet {
        AttributeSet::from_spec(self)
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        StyleSpec::reset()
    }
}

impl From<&str> for StyleSpec {
    fn from(keyword: &str) -> Self {
        StyleSpec::Keyword(keyword.to_string())
    }
}

impl From<&[&str]> for StyleSpec {
    fn from(names: &[&str]) -> Self {
        StyleSpec::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Vec<String>> for StyleSpec {
    fn from(names: Vec<String>) -> Self {
        StyleSpec::Names(names)
    }
}

impl From<&[Attribute]> for StyleSpec {
    fn from(attrs: &[Attribute]) -> Self {
        StyleSpec::Names(attrs.iter().map(|attr| attr.name().to_string()).collect())
    }
}

impl From<StylePatch> for StyleSpec {
    fn from(patch: StylePatch) -> Self {
        StyleSpec::Patch(patch)
    }
}

impl From<AttributeSet> for StyleSpec {
    fn from(attrs: AttributeSet) -> Self {
        StyleSpec::Patch(attrs.into())
    }
}
