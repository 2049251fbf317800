//! Attribute encoding.
//!
//! Attributes open in canonical order and close in reverse, so the most
//! recently opened attribute is closed first.

use sgrc_core::{Attribute, AttributeSet, SgrPair};

use crate::codes::SEPARATOR;

/// Encode the attributes of `attrs` that are not set in `excluded`.
///
/// On codes are appended in canonical order, off codes are prepended, and
/// both lists are deduplicated (bold and dim share the off code 22). The
/// `background` modifier is never encoded.
///
/// # Example
///
/// ```
/// use sgrc_ansi::style::encode_attributes;
/// use sgrc_core::{Attribute, AttributeSet};
///
/// let attrs = AttributeSet::new().with(Attribute::Bold).with(Attribute::Dim);
/// let pair = encode_attributes(&attrs, &AttributeSet::new());
/// assert_eq!(pair.open, "1;2");
/// assert_eq!(pair.close, "22");
/// ```
pub fn encode_attributes(attrs: &AttributeSet, excluded: &AttributeSet) -> SgrPair {
    let mut open: Vec<u8> = Vec::new();
    let mut close: Vec<u8> = Vec::new();

    for attr in attrs.active().filter(|&attr| !excluded.get(attr)) {
        let Some((on, off)) = attr.codes() else {
            continue;
        };
        if !open.contains(&on) {
            open.push(on);
        }
        if !close.contains(&off) {
            close.insert(0, off);
        }
    }

    SgrPair::new(join_codes(&open), join_codes(&close))
}

/// Encode a single attribute on its own.
pub fn encode_attribute(attr: Attribute) -> SgrPair {
    encode_attributes(&AttributeSet::new().with(attr), &AttributeSet::new())
}

fn join_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
