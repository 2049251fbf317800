//! Color encoding and RGB palette downsampling.
//!
//! The 256 and 16 color mappings reproduce the `color-convert`
//! reference conversions exactly, so palette indices match what
//! other tooling emits for the same RGB value.

use sgrc_core::{Color, ColorDepth, ColorValue, Result, Rgb, SgrPair};

use crate::codes::{selector, ANSI256_MODE, RESET_CODE, TRUECOLOR_MODE};

/// Encode a color for the given depth.
///
/// The open fragment depends on depth; the close fragment is always the
/// default-color terminator (39 or 49). Reset sentinels encode as a plain
/// reset with an empty close fragment, whatever the depth or background.
///
/// # Example
///
/// ```
/// use sgrc_ansi::color::encode_color;
/// use sgrc_core::{Color, ColorDepth, Rgb};
///
/// let pair = encode_color(&Color::Rgb(Rgb::new(255, 51, 102)), ColorDepth::TrueColor, true);
/// assert_eq!(pair.open, "48;2;255;51;102");
/// assert_eq!(pair.close, "49");
/// ```
pub fn encode_color(color: &Color, depth: ColorDepth, background: bool) -> SgrPair {
    let rgb = match color {
        Color::Reset | Color::Normal => return SgrPair::new(RESET_CODE.to_string(), ""),
        Color::Rgb(rgb) => *rgb,
    };

    let (select, terminator) = selector(background);
    let open = match depth {
        ColorDepth::TrueColor => format!(
            "{};{};{};{};{}",
            select, TRUECOLOR_MODE, rgb.r, rgb.g, rgb.b
        ),
        ColorDepth::Ansi256 => format!("{};{};{}", select, ANSI256_MODE, rgb_to_ansi256(rgb)),
        // 16-color codes carry no selector
        ColorDepth::Ansi16 => rgb_to_ansi16(rgb).to_string(),
        ColorDepth::None => String::new(),
    };

    SgrPair::new(open, terminator.to_string())
}

/// Convert a loose color value and encode it.
///
/// # Errors
///
/// Returns [`sgrc_core::SgrError::InvalidColorFormat`] when the value is
/// not an `[R, G, B]` triple or a reset sentinel, at every depth.
pub fn encode_color_value(value: &ColorValue, depth: ColorDepth, background: bool) -> Result<SgrPair> {
    let color = value.to_color()?;
    Ok(encode_color(&color, depth, background))
}

/// Map an RGB color onto the xterm 256-color palette.
///
/// Grays go to the 24-step ramp (or the cube's black and white ends),
/// everything else to the 6x6x6 cube. Components outside `0..=255` are
/// clamped first.
///
/// # Example
///
/// ```
/// use sgrc_ansi::color::rgb_to_ansi256;
/// use sgrc_core::Rgb;
/// assert_eq!(rgb_to_ansi256(Rgb::new(255, 51, 102)), 204);
/// assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    let [r, g, b] = rgb.saturated();

    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return (((f64::from(r) - 8.0) / 247.0) * 24.0).round() as u8 + 232;
    }

    let level = |c: u8| (f64::from(c) / 255.0 * 5.0).round() as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Map an RGB color onto the 16 standard foreground colors.
///
/// Brightness picks black, a normal color (30-37) or a bright one (90-97);
/// each channel above half intensity contributes its bit. Components
/// outside `0..=255` are clamped first.
///
/// # Example
///
/// ```
/// use sgrc_ansi::color::rgb_to_ansi16;
/// use sgrc_core::Rgb;
/// assert_eq!(rgb_to_ansi16(Rgb::new(0x33, 0x99, 0x33)), 32);
/// assert_eq!(rgb_to_ansi16(Rgb::new(0x33, 0xFF, 0x33)), 92);
/// ```
pub fn rgb_to_ansi16(rgb: Rgb) -> u8 {
    let [r, g, b] = rgb.saturated();

    let value = (hsv_value(rgb) / 50.0).round() as u8;
    if value == 0 {
        return 30;
    }

    let bit = |c: u8| (f64::from(c) / 255.0).round() as u8;
    let ansi = 30 + ((bit(b) << 2) | (bit(g) << 1) | bit(r));

    if value == 2 {
        ansi + 60
    } else {
        ansi
    }
}

/// The HSV value (brightness) of a color, in 0.0..=100.0.
pub fn hsv_value(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.saturated();
    f64::from(r.max(g).max(b)) / 255.0 * 100.0
}

/// Format a color as six uppercase hex digits, without a leading `#`.
///
/// Each component contributes its low byte.
///
/// # Example
///
/// ```
/// use sgrc_ansi::color::rgb_to_hex;
/// use sgrc_core::Rgb;
/// assert_eq!(rgb_to_hex(Rgb::new(255, 51, 102)), "FF3366");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.components().map(|c| c & 0xFF);
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgrc_core::SgrError;

    const PINK: Color = Color::Rgb(Rgb::new(0xFF, 0x33, 0x66));

    #[test]
    fn test_truecolor_fg_bg() {
        let fg = encode_color(&PINK, ColorDepth::TrueColor, false);
        assert_eq!(fg, SgrPair::new("38;2;255;51;102", "39"));

        let bg = encode_color(&PINK, ColorDepth::TrueColor, true);
        assert_eq!(bg, SgrPair::new("48;2;255;51;102", "49"));
    }

    #[test]
    fn test_ansi256_fg_bg() {
        assert_eq!(
            encode_color(&PINK, ColorDepth::Ansi256, false),
            SgrPair::new("38;5;204", "39")
        );
        assert_eq!(
            encode_color(&PINK, ColorDepth::Ansi256, true),
            SgrPair::new("48;5;204", "49")
        );
    }

    #[test]
    fn test_ansi16_has_no_selector() {
        let green = Color::Rgb(Rgb::new(0x33, 0x99, 0x33));
        assert_eq!(
            encode_color(&green, ColorDepth::Ansi16, false),
            SgrPair::new("32", "39")
        );
        // still closes with the background terminator
        assert_eq!(
            encode_color(&green, ColorDepth::Ansi16, true),
            SgrPair::new("32", "49")
        );
    }

    #[test]
    fn test_no_color_depth_keeps_terminator() {
        assert_eq!(
            encode_color(&PINK, ColorDepth::None, false),
            SgrPair::new("", "39")
        );
        assert_eq!(encode_color(&PINK, ColorDepth::None, true), SgrPair::new("", "49"));
    }

    #[test]
    fn test_reset_sentinels() {
        for depth in [
            ColorDepth::None,
            ColorDepth::Ansi16,
            ColorDepth::Ansi256,
            ColorDepth::TrueColor,
        ] {
            for background in [false, true] {
                assert_eq!(encode_color(&Color::Reset, depth, background), SgrPair::new("0", ""));
                assert_eq!(encode_color(&Color::Normal, depth, background), SgrPair::new("0", ""));
            }
        }
    }

    #[test]
    fn test_encode_color_value_rejects_hex_at_every_depth() {
        let hex = ColorValue::from("#FF3366");
        for depth in [
            ColorDepth::None,
            ColorDepth::Ansi16,
            ColorDepth::Ansi256,
            ColorDepth::TrueColor,
        ] {
            let result = encode_color_value(&hex, depth, false);
            assert!(matches!(result, Err(SgrError::InvalidColorFormat(ref v)) if v == "#FF3366"));
        }
    }

    #[test]
    fn test_encode_color_value_accepts_triple() {
        let pair = encode_color_value(&ColorValue::from([1, 2, 3]), ColorDepth::TrueColor, false)
            .unwrap();
        assert_eq!(pair.open, "38;2;1;2;3");
    }

    #[test]
    fn test_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(Rgb::new(7, 7, 7)), 16);
        assert_eq!(rgb_to_ansi256(Rgb::new(8, 8, 8)), 232);
        assert_eq!(rgb_to_ansi256(Rgb::new(128, 128, 128)), 244);
        assert_eq!(rgb_to_ansi256(Rgb::new(248, 248, 248)), 255);
        assert_eq!(rgb_to_ansi256(Rgb::new(249, 249, 249)), 231);
    }

    #[test]
    fn test_ansi256_cube() {
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 255)), 21);
        assert_eq!(rgb_to_ansi256(Rgb::new(0x33, 0x99, 0x33)), 71);
    }

    #[test]
    fn test_ansi16_levels() {
        assert_eq!(rgb_to_ansi16(Rgb::new(0, 0, 0)), 30);
        assert_eq!(rgb_to_ansi16(Rgb::new(60, 60, 60)), 30);
        assert_eq!(rgb_to_ansi16(Rgb::new(128, 0, 0)), 31);
        assert_eq!(rgb_to_ansi16(Rgb::new(255, 0, 0)), 91);
        assert_eq!(rgb_to_ansi16(Rgb::new(0, 0, 255)), 94);
        assert_eq!(rgb_to_ansi16(Rgb::new(255, 255, 255)), 97);
        assert_eq!(rgb_to_ansi16(Rgb::new(160, 160, 160)), 37);
    }

    #[test]
    fn test_rgb_to_hex_pads() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)), "000AFF");
    }

    #[test]
    fn test_out_of_range_components() {
        let bright = Color::Rgb(Rgb::new(300, 0, -20));
        assert_eq!(
            encode_color(&bright, ColorDepth::TrueColor, false),
            SgrPair::new("38;2;300;0;-20", "39")
        );
        // palettes see the clamped color
        assert_eq!(
            encode_color(&bright, ColorDepth::Ansi256, false),
            encode_color(&Color::Rgb(Rgb::new(255, 0, 0)), ColorDepth::Ansi256, false)
        );
        assert_eq!(rgb_to_ansi256(Rgb::new(300, 300, 300)), 231);
        assert_eq!(rgb_to_ansi16(Rgb::new(-5, 400, -5)), 92);
        assert_eq!(rgb_to_hex(Rgb::new(300, -1, 0)), "2CFF00");
    }
}
