//! Natural color (NCol) names for hues.

use crate::{math::round_hundredths, Component, Error, Result};

/// Hue letters, one per 60 degree sector starting at red.
const SECTORS: [char; 6] = ['R', 'Y', 'G', 'C', 'B', 'M'];

/// Name a hue in NCol notation: the letter of its 60 degree sector followed
/// by how far into the sector it is, on a scale of 0 to 100.
///
/// ```rust
/// assert_eq!(pigmix::hue_to_ncol(90.0)?, "Y50");
/// # Ok::<(), pigmix::Error>(())
/// ```
pub fn hue_to_ncol(hue: Component) -> Result<String> {
    if !hue.is_finite() || hue < 0.0 {
        return Err(Error::InvalidHue { hue });
    }

    // abs() only turns -0.0 into 0.0 here.
    let hue = (hue % 360.0).abs();
    let sector = ((hue / 60.0) as usize).min(SECTORS.len() - 1);
    let offset = (hue - sector as Component * 60.0) * 100.0 / 60.0;

    Ok(format!("{}{}", SECTORS[sector], round_hundredths(offset)))
}
