//! Conversions between the color models and the pigment models.
//!
//! Pigment conversions split a sample into three parts: white (the smallest
//! channel), black (how far the largest channel is from full intensity) and
//! the color part that is left over. The color part is then shared among the
//! chroma paints of the model, so every mix adds up to 100%.
//!
//! ```rust
//! use pigmix::Rgb;
//! let mix = Rgb::new(255, 0, 0).to_rybkw()?;
//! assert_eq!(mix.red, 100.0);
//! # Ok::<(), pigmix::Error>(())
//! ```

use log::{debug, trace};

use crate::{
    models::{Cmykw, Cmyw, Hsv, Rgb, Rybkw},
    Component, Result,
};

impl Hsv {
    /// Convert this color from the HSV notation to an RGB sample.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl Rgb {
    /// Convert the sample to the plain four ink model.
    pub fn to_cmyw(&self) -> Result<Cmyw> {
        self.validate()?;
        let [red, green, blue] = self.to_fractions();
        Ok(Cmyw::new(
            1.0 - red,
            1.0 - green,
            1.0 - blue,
            red.min(green).min(blue),
        ))
    }

    /// Convert the sample to percentages of cyan, magenta, yellow, black and
    /// white paint.
    pub fn to_cmykw(&self) -> Result<Cmykw> {
        self.validate()?;

        let split = match util::Split::new(self.to_fractions()) {
            Some(split) => split,
            None => {
                debug!("{:?} is a gray, mixing black and white only", self);
                let (black, white) = util::gray_percentages(self.to_fractions());
                return Ok(Cmykw::gray(black, white));
            }
        };

        let [red, green, blue] = split.chroma;
        let shares = [1.0 - red, 1.0 - green, 1.0 - blue];
        trace!("cmy shares of {:?}: {:?}", self, shares);

        Ok(match split.distribute(shares) {
            Some([cyan, magenta, yellow]) => {
                Cmykw::new(cyan, magenta, yellow, split.black(), split.white())
            }
            None => Cmykw::gray(split.black(), split.white()),
        })
    }

    /// Convert the sample to percentages of red, yellow, blue, black and
    /// white paint.
    pub fn to_rybkw(&self) -> Result<Rybkw> {
        self.validate()?;

        let split = match util::Split::new(self.to_fractions()) {
            Some(split) => split,
            None => {
                debug!("{:?} is a gray, mixing black and white only", self);
                let (black, white) = util::gray_percentages(self.to_fractions());
                return Ok(Rybkw::gray(black, white));
            }
        };

        let shares = util::rgb_to_ryb_chroma(split.chroma);
        trace!("ryb shares of {:?}: {:?}", self, shares);

        Ok(match split.distribute(shares) {
            Some([red, yellow, blue]) => {
                Rybkw::new(red, yellow, blue, split.black(), split.white())
            }
            None => Rybkw::gray(split.black(), split.white()),
        })
    }
}

/// Convert HSV to an RGB sample. See [`Hsv::to_rgb`].
pub fn hsv_to_rgb(hue: Component, saturation: Component, value: Component) -> Rgb {
    Hsv::new(hue, saturation, value).to_rgb()
}

/// Convert RGB channels to the four ink model. See [`Rgb::to_cmyw`].
pub fn rgb_to_cmyw(red: i32, green: i32, blue: i32) -> Result<Cmyw> {
    Rgb::new(red, green, blue).to_cmyw()
}

/// Convert RGB channels to a CMYKW mix. See [`Rgb::to_cmykw`].
pub fn rgb_to_cmykw(red: i32, green: i32, blue: i32) -> Result<Cmykw> {
    Rgb::new(red, green, blue).to_cmykw()
}

/// Convert RGB channels to a RYBKW mix. See [`Rgb::to_rybkw`].
pub fn rgb_to_rybkw(red: i32, green: i32, blue: i32) -> Result<Rybkw> {
    Rgb::new(red, green, blue).to_rybkw()
}

mod util {
    use crate::{
        color::Component,
        math::{almost_zero, round_hundredths},
        models::Rgb,
    };

    /// Convert from HSV notation to an RGB sample. Saturation and value are
    /// expected in `0.0..=1.0`; the result is not clamped.
    pub fn hsv_to_rgb(hue: Component, saturation: Component, value: Component) -> Rgb {
        let hue = hue.rem_euclid(360.0);
        let chroma = value * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = value - chroma;

        let (red, green, blue) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        let to_channel = |c: Component| ((c + m) * 255.0).round() as i32;
        Rgb::new(to_channel(red), to_channel(green), to_channel(blue))
    }

    /// Black and white percentages of a sample that has no chroma.
    pub fn gray_percentages([red, green, blue]: [Component; 3]) -> (Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        (round_hundredths((1.0 - max) * 100.0), round_hundredths(min * 100.0))
    }

    /// A sample split into white, black and the chroma that remains.
    pub struct Split {
        white: Component,
        black: Component,
        color_part: Component,
        /// The sample with white removed, scaled so the largest channel is
        /// one.
        pub chroma: [Component; 3],
    }

    impl Split {
        /// Split the sample. Returns `None` when there is no color part,
        /// meaning the sample is a gray.
        pub fn new([red, green, blue]: [Component; 3]) -> Option<Self> {
            if red == green && green == blue {
                return None;
            }

            let white = red.min(green).min(blue);
            let black = 1.0 - red.max(green).max(blue);
            let color_part = 1.0 - white - black;

            if almost_zero(color_part) {
                return None;
            }

            let chroma = [red, green, blue].map(|c| (c - white) / color_part);

            Some(Self {
                white,
                black,
                color_part,
                chroma,
            })
        }

        pub fn white(&self) -> Component {
            round_hundredths(self.white * 100.0)
        }

        pub fn black(&self) -> Component {
            round_hundredths(self.black * 100.0)
        }

        /// Share the color part among the paints proportionally to `shares`
        /// and return the percentages. Returns `None` if there is nothing to
        /// share.
        pub fn distribute(&self, shares: [Component; 3]) -> Option<[Component; 3]> {
            let total: Component = shares.iter().sum();
            if almost_zero(total) {
                return None;
            }
            Some(shares.map(|s| round_hundredths(s / total * self.color_part * 100.0)))
        }
    }

    /// Re-express RGB chroma as red, yellow and blue paint.
    ///
    /// The gray axis is removed first. Whatever red and green have in common
    /// is yellow. Green left over after that can only be mixed from yellow
    /// and blue, so it is added to both. The result is not normalized.
    pub fn rgb_to_ryb_chroma([red, green, blue]: [Component; 3]) -> [Component; 3] {
        let white = red.min(green).min(blue);
        let (mut red, mut green, mut blue) = (red - white, green - white, blue - white);

        let mut yellow = red.min(green);
        red -= yellow;
        green -= yellow;

        blue += green;
        yellow += green;

        [red, yellow, blue]
    }
}
