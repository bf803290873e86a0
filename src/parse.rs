//! Parse the textual color notations people type into an RGB sample.
//!
//! The allowed formats are:
//! * `#rrggbb`, `0xrrggbb` or a bare `rrggbb`
//! * three components separated by spaces and/or commas, which are read as
//!   - HSV if any component has a decimal point (`"210, 0.5, 0.8"`)
//!   - hexadecimal if any component has a letter `a`-`f` (`"ff 80 0"`)
//!   - decimal if any component has three digits (`"255 128 0"`)
//!   - hexadecimal otherwise (`"ff 80 00"`, `"10 20 30"`)
//!
//! The first shape that matches wins. Parsed channels are not range
//! checked; that happens when a pigment conversion is requested.

use std::num::IntErrorKind;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    models::{Hsv, Rgb},
    Component, Error, Result,
};

static HEX_TRIPLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#|0[xX])?([0-9A-Fa-f]{6})$").expect("valid hex regex"));

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ,]+").expect("valid separator regex"));

/// The shape an input was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// Six hexadecimal digits with an optional `#` or `0x` prefix.
    Hex,
    /// Three components where at least one has a decimal point.
    Hsv,
    /// Three hexadecimal components.
    HexComponents,
    /// Three decimal components.
    DecimalComponents,
}

/// How three split components are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Components {
    Hsv,
    Hex,
    Decimal,
}

impl From<Components> for Notation {
    fn from(value: Components) -> Self {
        match value {
            Components::Hsv => Notation::Hsv,
            Components::Hex => Notation::HexComponents,
            Components::Decimal => Notation::DecimalComponents,
        }
    }
}

/// Work out which notation `input` is written in.
pub fn detect_notation(input: &str) -> Result<Notation> {
    let input = input.trim();

    if HEX_TRIPLET.is_match(input) {
        return Ok(Notation::Hex);
    }

    let parts = split_components(input)?;
    Ok(components_notation(&parts).into())
}

/// Parse color text into an RGB sample.
///
/// ```rust
/// use pigmix::{parse_input, Rgb};
/// assert_eq!(parse_input("#ff8000")?, Rgb::new(255, 128, 0));
/// assert_eq!(parse_input("255, 128, 0")?, Rgb::new(255, 128, 0));
/// # Ok::<(), pigmix::Error>(())
/// ```
pub fn parse_input(input: &str) -> Result<Rgb> {
    let input = input.trim();

    if let Some(captures) = HEX_TRIPLET.captures(input) {
        debug!("{input:?} is a hex triplet");
        return parse_hex_triplet(&captures[1]).ok_or_else(|| Error::invalid_format(input));
    }

    let parts = split_components(input)?;
    let notation = components_notation(&parts);
    debug!("{input:?} has components in {notation:?} notation");

    let rgb = match notation {
        Components::Hsv => {
            let [hue, saturation, value] = parse_each(&parts, |p| p.parse::<Component>().ok())
                .ok_or_else(|| Error::invalid_format(input))?;
            Hsv::new(hue, saturation, value).to_rgb()
        }
        Components::Decimal => parse_each(&parts, |p| parse_channel(p, 10))
            .map(Rgb::from)
            .ok_or_else(|| Error::invalid_format(input))?,
        Components::Hex => parse_each(&parts, |p| parse_channel(p, 16))
            .map(Rgb::from)
            .ok_or_else(|| Error::invalid_format(input))?,
    };

    Ok(rgb)
}

fn split_components(input: &str) -> Result<[&str; 3]> {
    let parts = SEPARATORS.split(input).collect::<Vec<_>>();
    <[&str; 3]>::try_from(parts).map_err(|_| Error::invalid_format(input))
}

fn components_notation(parts: &[&str; 3]) -> Components {
    let any = |f: fn(&str) -> bool| parts.iter().copied().any(f);

    if any(|p: &str| p.contains('.')) {
        Components::Hsv
    } else if any(|p: &str| p.contains(|c: char| matches!(c, 'a'..='f' | 'A'..='F'))) {
        Components::Hex
    } else if any(|p: &str| p.chars().count() == 3) {
        Components::Decimal
    } else {
        // Two digit components, and anything else, are read as hex.
        Components::Hex
    }
}

/// Read one integer channel. Digits that do not fit an `i32` saturate, so
/// the range check reports them as out of range instead of malformed.
fn parse_channel(part: &str, radix: u32) -> Option<i32> {
    match i32::from_str_radix(part, radix) {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i32::MAX),
            IntErrorKind::NegOverflow => Some(i32::MIN),
            _ => None,
        },
    }
}

fn parse_hex_triplet(digits: &str) -> Option<Rgb> {
    let pair = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Rgb::new(pair(0)?.into(), pair(2)?.into(), pair(4)?.into()))
}

fn parse_each<T: Copy + Default>(
    parts: &[&str; 3],
    parse: impl Fn(&str) -> Option<T>,
) -> Option<[T; 3]> {
    let mut values = [T::default(); 3];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = parse(*part)?;
    }
    Some(values)
}
