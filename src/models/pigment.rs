//! Paint mixes expressed in the supported pigment models.

use crate::Component;

pigmix_macros::gen_model! {
    /// The plain four ink model. Every channel is a fraction in
    /// `0.0..=1.0` and the channels do not add up to a fixed total.
    pub struct Cmyw {
        /// Cyan.
        cyan: Component,
        /// Magenta.
        magenta: Component,
        /// Yellow.
        yellow: Component,
        /// White.
        white: Component,
    }
}

pigmix_macros::gen_model! {
    /// Cyan, magenta and yellow with separate black and white paints, as
    /// percentages that add up to 100.
    pub struct Cmykw {
        /// Cyan.
        cyan: Component,
        /// Magenta.
        magenta: Component,
        /// Yellow.
        yellow: Component,
        /// Black.
        black: Component,
        /// White.
        white: Component,
    }
}

pigmix_macros::gen_model! {
    /// The traditional painter's primaries with black and white, as
    /// percentages that add up to 100.
    pub struct Rybkw {
        /// Red.
        red: Component,
        /// Yellow.
        yellow: Component,
        /// Blue.
        blue: Component,
        /// Black.
        black: Component,
        /// White.
        white: Component,
    }
}

impl Cmykw {
    /// A mix with no chroma, only black and white.
    pub fn gray(black: Component, white: Component) -> Self {
        Self::new(0.0, 0.0, 0.0, black, white)
    }
}

impl Rybkw {
    /// A mix with no chroma, only black and white.
    pub fn gray(black: Component, white: Component) -> Self {
        Self::new(0.0, 0.0, 0.0, black, white)
    }
}
