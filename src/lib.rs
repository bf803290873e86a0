//! pigmix converts a color typed as hex, RGB or HSV into the proportions of
//! physical paint needed to approximate it, in the CMYW, CMYKW and RYBKW
//! pigment models.
//!
//! ```rust
//! use pigmix::{integer_ratio, parse_input};
//! let rgb = parse_input("#ff8000")?;
//! let mix = rgb.to_rybkw()?;
//! assert_eq!(integer_ratio(&mix), "1:1:0:0:0");
//! # Ok::<(), pigmix::Error>(())
//! ```
//!
//! Every function is a pure computation; nothing is cached or shared.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
pub mod models;
mod ncol;
mod parse;
mod ratio;
mod report;
#[cfg(test)]
mod test;

pub use color::{Component, Models};
pub use convert::{hsv_to_rgb, rgb_to_cmykw, rgb_to_cmyw, rgb_to_rybkw};
pub use error::{Error, Result};
pub use models::{Cmykw, Cmyw, Hsv, Model, Rgb, Rybkw};
pub use ncol::hue_to_ncol;
pub use parse::{detect_notation, parse_input, Notation};
pub use ratio::{integer_ratio, integer_ratio_with, normalize_ratio, RatioOptions};
pub use report::{Mix, MixReport};
