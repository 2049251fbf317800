//! Conversions into crossterm's style types.
//!
//! Lets callers that already drive a terminal through crossterm reuse a
//! composed style without going through escape strings.

use crossterm::style::{Attribute as TermAttribute, Attributes as TermAttributes, Color as TermColor};
use sgrc_core::{Attribute, AttributeSet, ColorDepth, Rgb};

use crate::color::{rgb_to_ansi16, rgb_to_ansi256};

/// The crossterm attribute for `attr`, `None` for the background modifier.
pub fn term_attribute(attr: Attribute) -> Option<TermAttribute> {
    match attr {
        Attribute::Background => None,
        Attribute::Bold => Some(TermAttribute::Bold),
        Attribute::Dim => Some(TermAttribute::Dim),
        Attribute::Italic => Some(TermAttribute::Italic),
        Attribute::Underline => Some(TermAttribute::Underlined),
        Attribute::Blink => Some(TermAttribute::SlowBlink),
        Attribute::Invert => Some(TermAttribute::Reverse),
    }
}

/// All active attributes of a set as crossterm attributes.
pub fn term_attributes(attrs: &AttributeSet) -> TermAttributes {
    attrs
        .active()
        .filter_map(term_attribute)
        .fold(TermAttributes::default(), |acc, attr| acc | attr)
}

/// The crossterm color an RGB value downsamples to at `depth`.
///
/// crossterm colors are bytes, so truecolor components are clamped.
///
/// Returns `None` at [`ColorDepth::None`].
pub fn term_color(rgb: Rgb, depth: ColorDepth) -> Option<TermColor> {
    match depth {
        ColorDepth::TrueColor => {
            let [r, g, b] = rgb.saturated();
            Some(TermColor::Rgb { r, g, b })
        }
        ColorDepth::Ansi256 => Some(TermColor::AnsiValue(rgb_to_ansi256(rgb))),
        ColorDepth::Ansi16 => Some(ansi16_color(rgb_to_ansi16(rgb))),
        ColorDepth::None => None,
    }
}

fn ansi16_color(code: u8) -> TermColor {
    match code {
        30 => TermColor::Black,
        31 => TermColor::DarkRed,
        32 => TermColor::DarkGreen,
        33 => TermColor::DarkYellow,
        34 => TermColor::DarkBlue,
        35 => TermColor::DarkMagenta,
        36 => TermColor::DarkCyan,
        37 => TermColor::Grey,
        90 => TermColor::DarkGrey,
        91 => TermColor::Red,
        92 => TermColor::Green,
        93 => TermColor::Yellow,
        94 => TermColor::Blue,
        95 => TermColor::Magenta,
        96 => TermColor::Cyan,
        _ => TermColor::White,
    }
}
