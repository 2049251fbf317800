//! The stateful style composer.

use log::{debug, trace};
use sgrc_ansi::codes::{join_params, sgr};
use sgrc_ansi::color::{encode_color, rgb_to_hex};
use sgrc_ansi::style::encode_attributes;
use sgrc_core::{
    AttributeSet, Color, ColorDepth, ColorValue, DepthSpec, Result, Rgb, SgrError, SgrPair,
    StylePatch, StyleSpec,
};

/// Composes a color and a set of attributes into SGR sequence pairs.
///
/// The depth is fixed at construction. Color and attributes are encoded
/// when they change; [`Composer::render`] only joins the cached fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    /// Target color depth
    depth: ColorDepth,
    /// Last color assigned, unset until the first assignment
    color: Option<Color>,
    /// Current attributes
    attributes: AttributeSet,
    /// Cached color fragment
    color_sgr: SgrPair,
    /// Cached attribute fragment
    style_sgr: SgrPair,
}

impl Composer {
    /// Create a composer for a depth declaration.
    ///
    /// Unrecognized declarations give [`ColorDepth::None`].
    pub fn new(depth: impl Into<DepthSpec>) -> Self {
        let spec = depth.into();
        let depth = ColorDepth::resolve(&spec);
        debug!("Composer depth {} resolved to {}", spec, depth);

        Self {
            depth,
            color: None,
            attributes: AttributeSet::default(),
            color_sgr: SgrPair::default(),
            style_sgr: SgrPair::default(),
        }
    }

    /// Create a composer and apply an initial style.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::InvalidColorFormat`] if the style carries an
    /// invalid color.
    pub fn with_style(depth: impl Into<DepthSpec>, style: impl Into<StyleSpec>) -> Result<Self> {
        let mut composer = Self::new(depth);
        composer.set_style(style)?;
        Ok(composer)
    }

    /// The resolved color depth.
    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Replace the current style.
    ///
    /// The declaration is resolved against the all-false defaults. When it
    /// carries a color, that color is encoded with the declaration's own
    /// `background` flag; otherwise the current color is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::InvalidColorFormat`] for an invalid color, in
    /// which case nothing changes.
    pub fn set_style(&mut self, style: impl Into<StyleSpec>) -> Result<()> {
        let spec = style.into();
        trace!("set_style {:?}", spec);
        self.apply(AttributeSet::from_spec(&spec), spec.color())
    }

    /// Merge a partial mapping over the current style.
    ///
    /// Keys absent from the patch keep their current value. Returns the
    /// resulting attribute set.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::InvalidColorFormat`] for an invalid color, in
    /// which case nothing changes.
    pub fn update_style(&mut self, patch: &StylePatch) -> Result<AttributeSet> {
        trace!("update_style {:?}", patch);
        let attributes = self.attributes.update(patch);
        self.apply(attributes, patch.color.as_ref())?;
        Ok(attributes)
    }

    fn apply(&mut self, attributes: AttributeSet, color: Option<&ColorValue>) -> Result<()> {
        if let Some(value) = color {
            let color = value.to_color()?;
            self.color_sgr = encode_color(&color, self.depth, attributes.background);
            self.color = Some(color);
        }
        self.attributes = attributes;
        self.style_sgr = encode_attributes(&attributes, &AttributeSet::default());
        Ok(())
    }

    /// Set the current color, encoded with the current `background` flag.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::InvalidColorFormat`] unless the value is an
    /// `[R, G, B]` triple or `"reset"`/`"normal"`.
    pub fn set_color(&mut self, color: impl Into<ColorValue>) -> Result<()> {
        let color = color.into().to_color()?;
        trace!("set_color {}", color);
        self.color_sgr = encode_color(&color, self.depth, self.attributes.background);
        self.color = Some(color);
        Ok(())
    }

    /// The last color assigned, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The current color as RGB.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::NoColorSet`] when no color was assigned or the
    /// current color is a reset sentinel.
    pub fn rgb(&self) -> Result<Rgb> {
        self.color
            .as_ref()
            .and_then(Color::rgb)
            .ok_or(SgrError::NoColorSet)
    }

    /// The current color as six uppercase hex digits, e.g. `"FF3366"`.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::NoColorSet`] as [`Composer::rgb`] does.
    pub fn hex(&self) -> Result<String> {
        self.rgb().map(rgb_to_hex)
    }

    /// Red component of the current color.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::NoColorSet`] as [`Composer::rgb`] does.
    pub fn red(&self) -> Result<i64> {
        self.rgb().map(|rgb| rgb.r)
    }

    /// Green component of the current color.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::NoColorSet`] as [`Composer::rgb`] does.
    pub fn green(&self) -> Result<i64> {
        self.rgb().map(|rgb| rgb.g)
    }

    /// Blue component of the current color.
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::NoColorSet`] as [`Composer::rgb`] does.
    pub fn blue(&self) -> Result<i64> {
        self.rgb().map(|rgb| rgb.b)
    }

    /// The current attribute set.
    pub fn attributes(&self) -> AttributeSet {
        self.attributes
    }

    /// Active attribute names joined by spaces, `None` if nothing is active.
    pub fn style(&self) -> Option<String> {
        let names = self.attributes.names();
        if names.is_empty() {
            None
        } else {
            Some(names.join(" "))
        }
    }

    /// Active attribute names in canonical order.
    pub fn style_names(&self) -> Vec<&'static str> {
        self.attributes.names()
    }

    /// The cached color fragment pair.
    pub fn color_sgr(&self) -> &SgrPair {
        &self.color_sgr
    }

    /// The cached attribute fragment pair.
    pub fn style_sgr(&self) -> &SgrPair {
        &self.style_sgr
    }

    /// Render the current color and attributes.
    pub fn render(&self) -> SgrPair {
        self.compose(&self.style_sgr)
    }

    /// Render with some attributes left out.
    ///
    /// The exclusions apply to this call only; stored state is untouched.
    pub fn render_excluding(&self, excluded: impl Into<StyleSpec>) -> SgrPair {
        let excluded = AttributeSet::from_spec(&excluded.into());
        let style_sgr = encode_attributes(&self.attributes, &excluded);
        self.compose(&style_sgr)
    }

    fn compose(&self, style_sgr: &SgrPair) -> SgrPair {
        SgrPair::new(
            sgr(&join_params(&self.color_sgr.open, &style_sgr.open)),
            sgr(&join_params(&style_sgr.close, &self.color_sgr.close)),
        )
    }
}
