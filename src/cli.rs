//! Command-line interface for sgrc.

use clap::Parser;
use sgrc_config::Config;
use std::path::PathBuf;
use sgrc_core::{Attribute, ColorValue, DepthSpec};

/// sgrc - Compose SGR escape sequences for terminal text styling.
///
/// Builds the escape sequence pair that opens and closes a color and a set
/// of text attributes, for 16, 256 or 16m color terminals.
#[derive(Parser, Debug)]
#[command(
    name = "sgrc",
    author = "SGR Composer Contributors",
    version,
    about = "Compose SGR escape sequences for terminal text styling",
    after_help = "Examples:\n  \
                  sgrc -d 256 -c 255,51,102\n  \
                  sgrc -d 16m -c 255,51,102 -a bold -a italic 'Hello'\n  \
                  sgrc -s error 'Something failed'\n  \
                  sgrc -s error -x bold 'Without bold'\n  \
                  sgrc --config 'depth = 256' --save ./sgrc.toml"
)]
pub struct Cli {
    /// Text to wrap in the composed style (prints the escaped pair if omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Target color depth: 3, 16m, millions, 2, 256, hundreds, 1, 8, 16, ansi, color
    #[arg(short = 'd', long = "depth")]
    pub depth: Option<String>,

    /// Color as r,g,b (or r;g;b), or reset/normal
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,

    /// Named style from the config file
    #[arg(short = 's', long = "style")]
    pub style: Option<String>,

    /// Attribute to switch on (repeatable)
    #[arg(short = 'a', long = "attr", value_name = "ATTR", value_parser = parse_attribute)]
    pub attrs: Vec<Attribute>,

    /// Attribute to leave out of the output (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "ATTR", value_parser = parse_attribute)]
    pub exclude: Vec<Attribute>,

    /// Use the color as background color
    #[arg(short = 'b', long = "background")]
    pub background: bool,

    /// Style TEXT through crossterm commands instead of the composed pair
    #[arg(long = "crossterm", requires = "text")]
    pub crossterm: bool,

    /// Use a custom config file or inline TOML
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Write the default config file if it does not exist and exit
    #[arg(long = "init")]
    pub init_config: bool,

    /// Write the effective config (after --config) to PATH and exit
    #[arg(long = "save", value_name = "PATH")]
    pub save_config: Option<PathBuf>,

    /// List the configured styles and exit
    #[arg(long = "list")]
    pub list_styles: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// The depth to compose for: the command line wins over the config.
    pub fn depth_spec(&self, config: &Config) -> DepthSpec {
        self.depth
            .as_deref()
            .map_or_else(|| config.depth(), DepthSpec::parse_arg)
    }

    /// The color argument as a loose color value.
    pub fn color_value(&self) -> Option<ColorValue> {
        self.color.as_deref().map(parse_color)
    }
}

/// Parse an attribute name for clap.
fn parse_attribute(name: &str) -> Result<Attribute, String> {
    Attribute::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Attribute::ALL.iter().map(|attr| attr.name()).collect();
        format!("unknown attribute '{}', expected one of: {}", name, known.join(", "))
    })
}

/// Parse a color argument.
///
/// Comma or semicolon separated integers become a component list, anything
/// else is kept as a name. Validation happens when the color is set.
pub fn parse_color(arg: &str) -> ColorValue {
    if arg.contains([',', ';']) {
        let parts: Result<Vec<i64>, _> = arg
            .split([',', ';'])
            .map(|part| part.trim().parse::<i64>())
            .collect();
        if let Ok(components) = parts {
            return ColorValue::Components(components);
        }
    }
    ColorValue::Name(arg.to_string())
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
