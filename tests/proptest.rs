//! Property-based tests for sgrc.
//!
//! These tests use proptest to generate colors, attribute sets and depth
//! declarations and check the invariants of the encoders and composer.

use proptest::prelude::*;

use sgrc_ansi::{encode_attributes, encode_color, rgb_to_ansi16, rgb_to_ansi256};
use sgrc_compose::Composer;
use sgrc_core::{Attribute, AttributeSet, Color, ColorDepth, ColorValue, DepthSpec, Rgb};

/// Generate a random RGB color.
fn rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(|components| Rgb::from(components))
}

/// Generate a random attribute set.
fn attribute_set() -> impl Strategy<Value = AttributeSet> {
    any::<[bool; 7]>().prop_map(|flags| {
        Attribute::ALL
            .into_iter()
            .zip(flags)
            .filter(|&(_, on)| on)
            .map(|(attr, _)| attr)
            .collect()
    })
}

/// Generate a random depth declaration.
fn depth_spec() -> impl Strategy<Value = DepthSpec> {
    prop_oneof![
        any::<i64>().prop_map(DepthSpec::Level),
        (0..300i64).prop_map(DepthSpec::Level),
        "[a-z0-9]{0,8}".prop_map(DepthSpec::Name),
    ]
}

fn split_codes(fragment: &str) -> Vec<&str> {
    if fragment.is_empty() {
        Vec::new()
    } else {
        fragment.split(';').collect()
    }
}

// =============================================================================
// Color Encoder Properties
// =============================================================================

proptest! {
    /// Truecolor fragments carry the components verbatim.
    #[test]
    fn truecolor_is_verbatim(rgb in rgb(), background in any::<bool>()) {
        let pair = encode_color(&Color::Rgb(rgb), ColorDepth::TrueColor, background);
        let (select, terminator) = if background { (48, 49) } else { (38, 39) };

        prop_assert_eq!(pair.open, format!("{};2;{};{};{}", select, rgb.r, rgb.g, rgb.b));
        prop_assert_eq!(pair.close, terminator.to_string());
    }

    /// Palette indices stay inside the palette's color range.
    #[test]
    fn palette_indices_in_range(rgb in rgb()) {
        let index = rgb_to_ansi256(rgb);
        prop_assert!(index >= 16, "index {} below the cube", index);

        let code = rgb_to_ansi16(rgb);
        prop_assert!((30..=37).contains(&code) || (90..=97).contains(&code), "code {}", code);
    }

    /// Grays never leave the cube's gray diagonal or the ramp.
    #[test]
    fn grays_map_to_grays(level in any::<u8>()) {
        let index = rgb_to_ansi256(Rgb::from([level; 3]));
        prop_assert!(index == 16 || index == 231 || index >= 232, "index {}", index);
    }

    /// The close fragment does not depend on depth.
    #[test]
    fn close_is_depth_independent(rgb in rgb(), background in any::<bool>()) {
        let closes: Vec<String> = [ColorDepth::None, ColorDepth::Ansi16, ColorDepth::Ansi256, ColorDepth::TrueColor]
            .into_iter()
            .map(|depth| encode_color(&Color::Rgb(rgb), depth, background).close)
            .collect();
        prop_assert!(closes.windows(2).all(|w| w[0] == w[1]));
    }
}

// =============================================================================
// Attribute Encoder Properties
// =============================================================================

proptest! {
    /// Each off code appears once, and close order reverses open order.
    #[test]
    fn close_reverses_open(attrs in attribute_set()) {
        let pair = encode_attributes(&attrs, &AttributeSet::new());

        let expected_open: Vec<String> = attrs
            .active()
            .filter_map(Attribute::codes)
            .map(|(on, _)| on.to_string())
            .collect();
        prop_assert_eq!(split_codes(&pair.open), expected_open.iter().map(String::as_str).collect::<Vec<_>>());

        let mut expected_close: Vec<String> = Vec::new();
        for (_, off) in attrs.active().filter_map(Attribute::codes) {
            let off = off.to_string();
            if !expected_close.contains(&off) {
                expected_close.push(off);
            }
        }
        expected_close.reverse();
        prop_assert_eq!(split_codes(&pair.close), expected_close.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Excluded attributes never show up in the open fragment.
    #[test]
    fn exclusions_are_removed(attrs in attribute_set(), excluded in attribute_set()) {
        let pair = encode_attributes(&attrs, &excluded);
        let open = split_codes(&pair.open);

        for attr in excluded.active() {
            if let Some((on, _)) = attr.codes() {
                let on = on.to_string();
                prop_assert!(!open.contains(&on.as_str()), "{} still open", attr);
            }
        }
    }
}

// =============================================================================
// Composer Properties
// =============================================================================

proptest! {
    /// Unknown depth declarations never panic and resolve to some depth.
    #[test]
    fn any_depth_resolves(spec in depth_spec()) {
        let composer = Composer::new(spec.clone());
        prop_assert_eq!(composer.depth(), ColorDepth::resolve(&spec));
        prop_assert!(composer.depth().level() <= 3);
    }

    /// Render-time exclusions leave the stored state alone.
    #[test]
    fn render_excluding_is_pure(rgb in rgb(), attrs in attribute_set(), excluded in attribute_set()) {
        let mut composer = Composer::new("16m");
        composer.set_color(rgb).unwrap();
        composer.set_style(attrs).unwrap();

        let before = composer.render();
        let _ = composer.render_excluding(excluded);
        prop_assert_eq!(composer.render(), before);
        prop_assert_eq!(composer.attributes(), attrs);
    }

    /// Rendered sequences are always wrapped as complete SGR sequences.
    #[test]
    fn render_is_wrapped(spec in depth_spec(), rgb in rgb(), attrs in attribute_set()) {
        let mut composer = Composer::new(spec);
        composer.set_color(rgb).unwrap();
        composer.set_style(attrs).unwrap();

        let sgr = composer.render();
        prop_assert!(sgr.open.starts_with("\x1b[") && sgr.open.ends_with('m'));
        prop_assert!(sgr.close.starts_with("\x1b[") && sgr.close.ends_with('m'));
        prop_assert!(!sgr.open.contains(";;") && !sgr.close.contains(";;"));
    }

    /// Only the shape of a component list is checked, never its range.
    #[test]
    fn component_lists_checked_by_shape(components in prop::collection::vec(any::<i64>(), 0..6)) {
        let valid = components.len() == 3;
        let mut composer = Composer::new("16m");
        prop_assert_eq!(composer.set_color(ColorValue::from(components)).is_ok(), valid);
    }

    /// Any integer triple reaches truecolor output verbatim.
    #[test]
    fn out_of_range_truecolor_is_verbatim(r in any::<i64>(), g in any::<i64>(), b in any::<i64>()) {
        let mut composer = Composer::new("16m");
        composer.set_color(vec![r, g, b]).unwrap();
        prop_assert_eq!(composer.render().open, format!("\x1b[38;2;{};{};{}m", r, g, b));
        prop_assert_eq!(composer.red().unwrap(), r);
    }
}
