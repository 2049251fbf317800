//! Snapshot tests for sgrc output.
//!
//! These tests capture rendered sequences (escaped for readability) and
//! compare against inline snapshots. Run with `cargo insta review` to
//! update them.

use sgrc_compose::Composer;
use sgrc_core::{Attribute, SgrPair, StylePatch};

/// Helper to show a pair with its escape bytes spelled out.
fn escaped(sgr: &SgrPair) -> String {
    format!("{} {}", sgr.open.escape_debug(), sgr.close.escape_debug())
}

// =============================================================================
// Depth Snapshots
// =============================================================================

#[test]
fn test_snapshot_same_style_across_depths() {
    let style = StylePatch::new()
        .color([0xFF, 0x33, 0x66])
        .attr(Attribute::Bold, true)
        .attr(Attribute::Underline, true);

    let lines: Vec<String> = ["xyz", "color", "256", "16m"]
        .into_iter()
        .map(|depth| {
            let composer = Composer::with_style(depth, style.clone()).unwrap();
            format!("{:<6} {}", composer.depth().to_string(), escaped(&composer.render()))
        })
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    none   \u{1b}[1;4m \u{1b}[24;22;39m
    16     \u{1b}[91;1;4m \u{1b}[24;22;39m
    256    \u{1b}[38;5;204;1;4m \u{1b}[24;22;39m
    16m    \u{1b}[38;2;255;51;102;1;4m \u{1b}[24;22;39m
    ");
}

#[test]
fn test_snapshot_background_ansi256() {
    let mut composer = Composer::new("hundreds");
    composer.set_style(&["background", "invert"][..]).unwrap();
    composer.set_color([0, 128, 255]).unwrap();

    insta::assert_snapshot!(escaped(&composer.render()), @r"\u{1b}[48;5;39;7m \u{1b}[27;49m");
}

// =============================================================================
// Attribute Snapshots
// =============================================================================

#[test]
fn test_snapshot_all_attributes() {
    let composer = Composer::with_style(
        "16m",
        &["invert", "blink", "underline", "italic", "dim", "bold"][..],
    )
    .unwrap();

    insta::assert_snapshot!(
        escaped(&composer.render()),
        @r"\u{1b}[1;2;3;4;5;7m \u{1b}[27;25;24;23;22m"
    );
}

#[test]
fn test_snapshot_exclusions() {
    let composer = Composer::with_style(
        "millions",
        StylePatch::new()
            .color([0x33, 0x99, 0x33])
            .attr(Attribute::Bold, true)
            .attr(Attribute::Dim, true)
            .attr(Attribute::Italic, true),
    )
    .unwrap();

    insta::assert_snapshot!(
        escaped(&composer.render_excluding(&["dim", "italic"][..])),
        @r"\u{1b}[38;2;51;153;51;1m \u{1b}[22;39m"
    );
}
