//! Model a color with the HSV notation.

use crate::Component;

pigmix_macros::gen_model! {
    /// A color specified with hue, saturation and value. The hue is in
    /// degrees, saturation and value are fractions in `0.0..=1.0`.
    pub struct Hsv {
        /// The hue in degrees. Wraps at 360.
        hue: Component,
        /// The saturation as a fraction.
        saturation: Component,
        /// The value (brightness) as a fraction.
        value: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn channel_names() {
        assert_eq!(Hsv::CHANNELS, &["Hue", "Saturation", "Value"]);
        let hsv = Hsv::new(10.0, 0.5, 0.25);
        assert_eq!(hsv.to_array(), [10.0, 0.5, 0.25]);
    }
}
