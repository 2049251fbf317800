//! SGR escape code constants.
//!
//! Encoders work with bare parameter lists; [`sgr`] adds the
//! `ESC [` ... `m` wrapper.

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// Separator between SGR parameters.
pub const SEPARATOR: &str = ";";

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

/// Reset parameter.
pub const RESET_CODE: u8 = 0;

/// Extended foreground color selector.
pub const FG_SELECT: u8 = 38;

/// Default foreground color.
pub const FG_DEFAULT: u8 = 39;

/// Extended background color selector.
pub const BG_SELECT: u8 = 48;

/// Default background color.
pub const BG_DEFAULT: u8 = 49;

/// Mode marker for 24-bit colors after a selector.
pub const TRUECOLOR_MODE: u8 = 2;

/// Mode marker for 256-palette colors after a selector.
pub const ANSI256_MODE: u8 = 5;

/// The (selector, terminator) pair for foreground or background.
pub fn selector(background: bool) -> (u8, u8) {
    if background {
        (BG_SELECT, BG_DEFAULT)
    } else {
        (FG_SELECT, FG_DEFAULT)
    }
}

/// Wrap a parameter list into a complete SGR sequence.
///
/// # Example
///
/// ```
/// use sgrc_ansi::codes::sgr;
/// assert_eq!(sgr("1;3"), "\x1b[1;3m");
/// assert_eq!(sgr(""), "\x1b[m");
/// ```
pub fn sgr(params: &str) -> String {
    format!("{}{}{}", CSI, params, SGR_END)
}

/// Join two parameter lists, adding a separator only when both are non-empty.
///
/// # Example
///
/// ```
/// use sgrc_ansi::codes::join_params;
/// assert_eq!(join_params("38;5;204", "1"), "38;5;204;1");
/// assert_eq!(join_params("", "1"), "1");
/// assert_eq!(join_params("39", ""), "39");
/// ```
pub fn join_params(first: &str, second: &str) -> String {
    if first.is_empty() || second.is_empty() {
        format!("{}{}", first, second)
    } else {
        format!("{}{}{}", first, SEPARATOR, second)
    }
}
