//! Everything a front end needs to show for one color, computed in one go.

use log::debug;
use serde::Serialize;

use crate::{
    hue_to_ncol, integer_ratio_with,
    models::{Cmykw, Cmyw, Model, Rgb, Rybkw},
    normalize_ratio, Models, RatioOptions, Result,
};

/// A pigment mix together with its mixing ratio.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mix<M> {
    /// The mix, channel by channel.
    pub mix: M,
    /// The mix as whole number parts, in canonical channel order.
    pub ratio: String,
}

/// The pigment mixes and hue label of a single color sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MixReport {
    /// The sample the report was built from.
    pub rgb: Rgb,
    /// The sample as `#rrggbb`.
    pub hex: String,
    /// Four ink fractions, ratio from [`normalize_ratio`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmyw: Option<Mix<Cmyw>>,
    /// CMYKW percentages, ratio from [`integer_ratio_with`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmykw: Option<Mix<Cmykw>>,
    /// RYBKW percentages, ratio from [`integer_ratio_with`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rybkw: Option<Mix<Rybkw>>,
    /// NCol name of the hue. Grays have no hue and no name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncol: Option<String>,
}

impl MixReport {
    /// Build a report for `rgb` containing the selected `models`.
    ///
    /// ```rust
    /// use pigmix::{MixReport, Models, RatioOptions, Rgb};
    /// let report = MixReport::new(Rgb::new(255, 0, 0), Models::RYBKW, &RatioOptions::default())?;
    /// assert_eq!(report.rybkw.unwrap().ratio, "8:0:0:0:0");
    /// assert!(report.cmykw.is_none());
    /// # Ok::<(), pigmix::Error>(())
    /// ```
    pub fn new(rgb: Rgb, models: Models, options: &RatioOptions) -> Result<Self> {
        rgb.validate()?;
        debug!("building {models:?} report for {rgb:?}");

        let cmyw = if models.contains(Models::CMYW) {
            let mix = rgb.to_cmyw()?;
            Some(Mix {
                ratio: normalize_ratio(&mix.values(), options.scale),
                mix,
            })
        } else {
            None
        };

        let cmykw = if models.contains(Models::CMYKW) {
            let mix = rgb.to_cmykw()?;
            Some(Mix {
                ratio: integer_ratio_with(&mix, options),
                mix,
            })
        } else {
            None
        };

        let rybkw = if models.contains(Models::RYBKW) {
            let mix = rgb.to_rybkw()?;
            Some(Mix {
                ratio: integer_ratio_with(&mix, options),
                mix,
            })
        } else {
            None
        };

        let ncol = if models.contains(Models::NCOL) {
            rgb.hue().map(hue_to_ncol).transpose()?
        } else {
            None
        };

        Ok(Self {
            rgb,
            hex: rgb.to_hex(),
            cmyw,
            cmykw,
            rybkw,
            ncol,
        })
    }
}
