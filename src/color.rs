//! Shared primitives used by every color and pigment model.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional channels are stored as.
pub type Component = f64;

bitflags! {
    /// Selects which pigment models and labels a [`crate::MixReport`]
    /// should compute.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Models : u8 {
        /// Cyan, magenta, yellow and white fractions.
        const CMYW = 1 << 0;
        /// Cyan, magenta, yellow, black and white percentages.
        const CMYKW = 1 << 1;
        /// Red, yellow, blue, black and white percentages.
        const RYBKW = 1 << 2;
        /// The natural color name of the hue.
        const NCOL = 1 << 3;
    }
}

impl Default for Models {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_everything() {
        let models = Models::default();
        assert!(models.contains(Models::CMYW | Models::CMYKW | Models::RYBKW | Models::NCOL));
    }

    #[test]
    fn models_parse_from_names() {
        let models = bitflags::parser::from_str::<Models>("CMYKW | NCOL").unwrap();
        assert_eq!(models, Models::CMYKW | Models::NCOL);
    }
}
