//! Model a color sample with 8-bit RGB channels.

use crate::{Component, Error, Result};

pigmix_macros::gen_model! {
    /// A color sample with red, green and blue channels. Values are only
    /// checked against `0..=255` when a pigment conversion is requested, so a
    /// parsed sample may hold anything.
    pub struct Rgb {
        /// The red channel.
        red: i32,
        /// The green channel.
        green: i32,
        /// The blue channel.
        blue: i32,
    }
}

impl Rgb {
    /// Make sure every channel is in `0..=255`.
    pub fn validate(&self) -> Result<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ] {
            if !(0..=255).contains(&value) {
                return Err(Error::OutOfRange { channel, value });
            }
        }
        Ok(())
    }

    /// Return the channels scaled into `0.0..=1.0`.
    pub fn to_fractions(&self) -> [Component; 3] {
        self.to_array().map(|c| c as Component / 255.0)
    }

    /// Format the sample as `#rrggbb`. Channels outside `0..=255` are
    /// clamped.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_array().map(|c| c.clamp(0, 255));
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The hue of the sample in degrees, or `None` when the sample is a gray
    /// and the hue is powerless.
    pub fn hue(&self) -> Option<Component> {
        let [red, green, blue] = self.to_fractions();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if delta == 0.0 {
            return None;
        }

        Some(
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            },
        )
    }
}
