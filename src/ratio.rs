//! Turn channel magnitudes into small whole number mixing ratios like
//! `"3:1:0:2:2"`, so a painter can measure out paint in parts.
//!
//! Two approaches are supported:
//! * [`normalize_ratio`] scales raw magnitudes (for example the fractions of
//!   a [`crate::Cmyw`] mix) to a fixed number of parts.
//! * [`integer_ratio`] works on percentage mixes, ignores paints below a
//!   threshold and only reduces when more than one paint remains.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    math::{gcd, gcd_all},
    models::Model,
    Component,
};

/// Tunables for ratio calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioOptions {
    /// Number of parts [`normalize_ratio`] scales proportions to.
    pub scale: u32,
    /// Paints below this percentage are left out of [`integer_ratio_with`].
    pub threshold: Component,
    /// Number of parts [`integer_ratio_with`] scales a mix to before
    /// reducing.
    pub target: u32,
}

impl Default for RatioOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            threshold: 1.0,
            target: 8,
        }
    }
}

/// Scale non-negative magnitudes to `scale` parts and reduce the result by
/// the greatest common divisor.
///
/// ```rust
/// assert_eq!(pigmix::normalize_ratio(&[1.0, 1.0, 1.0, 1.0], 8), "1:1:1:1");
/// assert_eq!(pigmix::normalize_ratio(&[0.0, 0.0, 0.0], 8), "0:0:0");
/// ```
pub fn normalize_ratio(values: &[Component], scale: u32) -> String {
    let total: Component = values.iter().sum();
    if total <= 0.0 || total.is_nan() {
        return join(&vec![0; values.len()]);
    }

    let proportions = values.iter().map(|v| v / total).collect::<Vec<_>>();
    let mut parts = proportions
        .iter()
        .map(|p| to_parts(*p, scale))
        .collect::<Vec<_>>();

    // Nothing survived rounding, keep at least the biggest contributor.
    if parts.iter().all(|p| *p == 0) {
        if let Some(largest) = index_of_largest(&proportions) {
            parts[largest] = 1;
        }
    }

    let divisor = gcd_all(&parts);
    trace!("{values:?} scaled to {parts:?}, reduced by {divisor}");
    join(&parts.iter().map(|p| p / divisor).collect::<Vec<_>>())
}

/// Calculate the mixing ratio of a percentage mix with the default
/// [`RatioOptions`]. Channels are listed in the model's canonical order.
///
/// ```rust
/// use pigmix::{integer_ratio, Cmykw};
/// assert_eq!(integer_ratio(&Cmykw::new(50.0, 50.0, 0.0, 0.0, 0.0)), "1:1:0:0:0");
/// ```
pub fn integer_ratio<M: Model<Value = Component>>(mix: &M) -> String {
    integer_ratio_with(mix, &RatioOptions::default())
}

/// Calculate the mixing ratio of a percentage mix.
///
/// Paints below `options.threshold` are dropped. The rest are scaled to
/// `options.target` parts and, if more than one paint is left, reduced by
/// their greatest common divisor.
pub fn integer_ratio_with<M: Model<Value = Component>>(mix: &M, options: &RatioOptions) -> String {
    let values = mix.values();

    let kept = values
        .iter()
        .map(|v| (*v >= options.threshold).then_some(*v))
        .collect::<Vec<_>>();
    let total: Component = kept.iter().flatten().sum();
    if total <= 0.0 || total.is_nan() {
        return join(&vec![0; values.len()]);
    }

    let mut parts = kept
        .iter()
        .map(|v| v.map_or(0, |v| to_parts(v / total, options.target)))
        .collect::<Vec<_>>();

    if parts.iter().all(|p| *p == 0) {
        let raw = kept
            .iter()
            .map(|v| v.unwrap_or(Component::NEG_INFINITY))
            .collect::<Vec<_>>();
        if let Some(largest) = index_of_largest(&raw) {
            parts[largest] = 1;
        }
    }

    let positive = parts.iter().copied().filter(|p| *p > 0).collect::<Vec<_>>();
    if positive.len() > 1 {
        let divisor = positive.into_iter().fold(0, gcd);
        parts.iter_mut().for_each(|p| *p /= divisor);
    }

    trace!("{:?} kept {kept:?} as {parts:?}", M::CHANNELS);
    join(&parts)
}

fn to_parts(proportion: Component, scale: u32) -> u32 {
    (proportion * scale as Component).round().max(0.0) as u32
}

/// Index of the first largest value.
fn index_of_largest(values: &[Component]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Component)>, (i, v)| match best {
            Some((_, b)) if *v <= b => best,
            _ => Some((i, *v)),
        })
        .map(|(i, _)| i)
}

fn join(parts: &[u32]) -> String {
    parts
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cmykw, Cmyw, Rybkw};

    #[test]
    fn normalize_zeros() {
        assert_eq!(normalize_ratio(&[0.0, 0.0, 0.0], 8), "0:0:0");
        assert_eq!(normalize_ratio(&[0.0, 0.0, 0.0, 0.0], 8), "0:0:0:0");
    }

    #[test]
    fn normalize_reduces() {
        assert_eq!(normalize_ratio(&[1.0, 1.0, 1.0, 1.0], 8), "1:1:1:1");
        assert_eq!(normalize_ratio(&[1.0, 0.0, 0.0], 8), "1:0:0");
        assert_eq!(normalize_ratio(&[3.0, 1.0], 8), "3:1");
        assert_eq!(normalize_ratio(&[0.01, 10.0, 0.0], 8), "0:1:0");
    }

    #[test]
    fn normalize_cmyw_mix() {
        let mix = Cmyw::new(0.0, 0.498, 1.0, 0.0);
        assert_eq!(normalize_ratio(&mix.values(), 8), "0:3:5:0");
    }

    #[test]
    fn normalize_keeps_largest_when_everything_rounds_away() {
        assert_eq!(normalize_ratio(&[1.0, 1.0, 1.0], 1), "1:0:0");
        assert_eq!(normalize_ratio(&[1.0, 2.0, 1.0, 1.0, 1.0], 1), "0:1:0:0:0");
    }

    #[test]
    fn integer_ratio_of_even_mix() {
        let mix = Cmykw::new(50.0, 50.0, 0.0, 0.0, 0.0);
        assert_eq!(integer_ratio(&mix), "1:1:0:0:0");
    }

    #[test]
    fn integer_ratio_keeps_channel_order() {
        let mix = Cmykw::new(0.0, 23.53, 35.29, 21.57, 19.61);
        assert_eq!(integer_ratio(&mix), "0:2:3:2:2");

        let mix = Rybkw::new(0.0, 5.88, 17.65, 64.71, 11.76);
        assert_eq!(integer_ratio(&mix), "0:0:1:5:1");
    }

    #[test]
    fn integer_ratio_single_paint_is_not_reduced() {
        let mix = Rybkw::new(100.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(integer_ratio(&mix), "8:0:0:0:0");
    }

    #[test]
    fn integer_ratio_ignores_traces() {
        let mix = Cmykw::new(0.5, 49.5, 50.0, 0.0, 0.0);
        assert_eq!(integer_ratio(&mix), "0:1:1:0:0");

        let mix = Cmykw::new(0.5, 0.5, 0.0, 0.0, 0.0);
        assert_eq!(integer_ratio(&mix), "0:0:0:0:0");
    }

    #[test]
    fn integer_ratio_with_custom_options() {
        let mix = Cmykw::new(25.0, 75.0, 0.0, 0.0, 0.0);
        let options = RatioOptions {
            target: 100,
            ..Default::default()
        };
        assert_eq!(integer_ratio_with(&mix, &options), "1:3:0:0:0");

        let options = RatioOptions {
            threshold: 30.0,
            ..Default::default()
        };
        assert_eq!(integer_ratio_with(&mix, &options), "0:8:0:0:0");
    }

    #[test]
    fn options_from_partial_json() {
        let options: RatioOptions = serde_json::from_str(r#"{ "scale": 16 }"#).unwrap();
        assert_eq!(
            options,
            RatioOptions {
                scale: 16,
                ..Default::default()
            }
        );
    }
}
