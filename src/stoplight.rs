//! A fixed green → yellow → red spectrum, as used for level meters and
//! traffic-light style indicators.

use super::gamma::clamp_gamma;
use super::range::map_range;

/// Suits typical color TFT displays.
pub const DEFAULT_GAMMA: f64 = 0.5;

const BAND: f64 = 600.;
const YELLOW: f64 = BAND / 2.;

/// Converts `index` in `[0, 1]` (green to red) to a packed `0xRRGGBB` value.
///
/// Unlike [`Spectrum`](crate::Spectrum) the index is not circular; values
/// outside `[0, 1]` are clamped. Each channel is raised to `gamma` (clamped
/// into `[0, 3]`) and truncated to 8 bits.
pub fn index_to_rgb(index: f64, gamma: f64) -> u32 {
    let gamma = clamp_gamma(gamma);
    let band = index.max(0.).min(1.) * BAND;

    let (red, green) = if band < YELLOW {
        (
            map_range(band, 0., YELLOW, 0., 1.),
            map_range(band, 0., YELLOW, 0.25, 1.),
        )
    } else {
        (1., map_range(band, YELLOW, BAND, 1., 0.))
    };

    let scale = |channel: f64| (channel.powf(gamma) * 255.) as u32;

    (scale(red) << 16) | (scale(green) << 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_yellow_red() {
        assert_eq!(index_to_rgb(0.0, 1.0), 0x003F00);
        assert_eq!(index_to_rgb(0.5, 1.0), 0xFFFF00);
        assert_eq!(index_to_rgb(1.0, 1.0), 0xFF0000);
    }

    #[test]
    fn gamma_brightens_low_channels() {
        assert_eq!(index_to_rgb(0.0, DEFAULT_GAMMA), 0x007F00);
        assert_eq!(index_to_rgb(1.0, DEFAULT_GAMMA), 0xFF0000);
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        assert_eq!(index_to_rgb(-3.0, 1.0), index_to_rgb(0.0, 1.0));
        assert_eq!(index_to_rgb(7.0, 1.0), index_to_rgb(1.0, 1.0));
        assert_eq!(index_to_rgb(f64::NAN, 1.0), index_to_rgb(0.0, 1.0));
    }

    #[test]
    fn never_sets_blue() {
        for step in 0..=100 {
            assert_eq!(index_to_rgb(step as f64 / 100., 0.7) & 0xFF, 0);
        }
    }
}
