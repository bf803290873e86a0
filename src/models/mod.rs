//! Models are structs that hold the channels of a color sample or a paint
//! mix. Each model knows its channel names in canonical order, so ratios and
//! reports never depend on map iteration order.

mod hsv;
mod pigment;
mod rgb;

pub use hsv::*;
pub use pigment::*;
pub use rgb::*;

/// A trait implemented by every model generated with `gen_model!`.
pub trait Model {
    /// The type every channel is stored as.
    type Value: Copy;

    /// Channel names in canonical order.
    const CHANNELS: &'static [&'static str];

    /// Channel values in the same order as [`Model::CHANNELS`].
    fn values(&self) -> Vec<Self::Value>;

    /// Pair each channel name with its value.
    fn channels(&self) -> Vec<(&'static str, Self::Value)> {
        Self::CHANNELS.iter().copied().zip(self.values()).collect()
    }
}
