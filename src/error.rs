//! Error types for the pigmix library.

use thiserror::Error;

use crate::Component;

/// Result type alias for pigmix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a single conversion. None of these are
/// recoverable; the caller can only report them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The text does not match any recognized color notation.
    #[error("unrecognized color input: {input:?}")]
    InvalidFormat {
        /// The trimmed input that was rejected.
        input: String,
    },

    /// An RGB channel passed to a pigment conversion is not in `0..=255`.
    #[error("{channel} channel is out of range: {value} (expected 0..=255)")]
    OutOfRange {
        /// Name of the first offending channel.
        channel: &'static str,
        /// The value that was rejected.
        value: i32,
    },

    /// The hue can not be reduced into `0..360`.
    #[error("hue {hue} can not be reduced into 0..360")]
    InvalidHue {
        /// The hue that was rejected.
        hue: Component,
    },
}

impl Error {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
