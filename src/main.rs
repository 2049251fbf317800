//! sgrc - Compose SGR escape sequences for terminal text styling.
//!
//! This binary provides the CLI interface to the sgrc library: it builds
//! a composer from the command line and the config file, then either wraps
//! the given text or prints the escaped sequence pair.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use crossterm::queue;
use crossterm::style::{
    Attribute as TermAttribute, Print, SetAttribute, SetAttributes, SetBackgroundColor,
    SetForegroundColor,
};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Write};

use sgrc_ansi::interop::{term_attributes, term_color};
use sgrc_compose::Composer;
use sgrc_config::Config;
use sgrc_core::{Attribute, AttributeSet, ColorValue, Result, SgrError, SgrPair, StylePatch};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("sgrc v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout();

    if cli.init_config {
        let path = Config::ensure_config_file()?;
        writeln!(stdout, "config: {}", path.display())?;
        return Ok(());
    }

    let config = Config::load_with_override(cli.config.as_deref())?;

    if let Some(ref path) = cli.save_config {
        config.save_to(path)?;
        info!("Saved config to {}", path.display());
    } else if cli.list_styles {
        list_styles(&mut stdout, &config)?;
    } else {
        let composer = build_composer(cli, &config)?;
        match cli.text.as_deref() {
            Some(text) if cli.crossterm => {
                write_term_output(&mut stdout, &composer, &excluded(cli), text)?
            }
            text => {
                let sgr = render(cli, &composer);
                debug!("Rendered {:?}", sgr);
                write_output(&mut stdout, &sgr, text)?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Build a composer from the named style and the command-line overrides.
fn build_composer(cli: &Cli, config: &Config) -> Result<Composer> {
    let mut composer = Composer::new(cli.depth_spec(config));

    if let Some(ref name) = cli.style {
        let spec = config
            .style(name)
            .ok_or_else(|| SgrError::Config(format!("Unknown style: {}", name)))?;
        composer.set_style(spec.clone())?;
    }

    let mut patch = cli
        .attrs
        .iter()
        .fold(StylePatch::new(), |patch, &attr| patch.attr(attr, true));
    if cli.background {
        patch = patch.attr(Attribute::Background, true);
    }

    // Re-encode a color taken from the named style when switching to background
    let color = cli.color_value().or_else(|| {
        cli.background
            .then(|| composer.color().map(ColorValue::from))
            .flatten()
    });
    if let Some(color) = color {
        patch = patch.color(color);
    }

    composer.update_style(&patch)?;
    Ok(composer)
}

/// The attributes excluded on the command line.
fn excluded(cli: &Cli) -> AttributeSet {
    AttributeSet::from(cli.exclude.as_slice())
}

/// Render the composer, applying any exclusions.
fn render(cli: &Cli, composer: &Composer) -> SgrPair {
    if cli.exclude.is_empty() {
        composer.render()
    } else {
        composer.render_excluding(excluded(cli))
    }
}

/// Wrap `text` with the pair, or print the escaped pair when there is none.
fn write_output<W: Write>(out: &mut W, sgr: &SgrPair, text: Option<&str>) -> io::Result<()> {
    match text {
        Some(text) => queue!(out, Print(&sgr.open), Print(text), Print(&sgr.close), Print("\n")),
        None => {
            writeln!(out, "open:  {}", sgr.open.escape_debug())?;
            writeln!(out, "close: {}", sgr.close.escape_debug())
        }
    }
}

/// Style `text` with crossterm commands, then reset everything.
fn write_term_output<W: Write>(
    out: &mut W,
    composer: &Composer,
    excluded: &AttributeSet,
    text: &str,
) -> io::Result<()> {
    let attrs: AttributeSet = composer
        .attributes()
        .active()
        .filter(|&attr| !excluded.get(attr))
        .collect();

    let color = composer.rgb().ok().and_then(|rgb| term_color(rgb, composer.depth()));
    match color {
        Some(color) if composer.attributes().background => {
            queue!(out, SetBackgroundColor(color))?
        }
        Some(color) => queue!(out, SetForegroundColor(color))?,
        None => {}
    }

    queue!(
        out,
        SetAttributes(term_attributes(&attrs)),
        Print(text),
        SetAttribute(TermAttribute::Reset),
        Print("\n")
    )
}

/// Print every configured style as a styled sample.
fn list_styles<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    for name in config.style_names() {
        let Some(spec) = config.style(name) else {
            continue;
        };
        match Composer::with_style(config.depth(), spec.clone()) {
            Ok(composer) => {
                let sgr = composer.render();
                writeln!(out, "{}{}{}", sgr, name, sgr.close)?;
            }
            Err(e) => writeln!(out, "{} (invalid: {})", name, e)?,
        }
    }
    Ok(())
}
