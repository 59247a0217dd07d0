use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::color::Color;
use super::error::SpectrumError;
use super::gamma::{GammaTable, clamp_gamma};
use super::range::{map_range, normalize_index};

pub const DEFAULT_SPECTRUM_GAMMA: f64 = 0.55;

/// How the palette is laid out across the index domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrumMode {
    /// The last color blends back into the first across the wrap point.
    Continuous,
    /// Wavelength-of-light style: black is prepended to the palette, so the
    /// spectrum rises out of black and fades back to it instead of wrapping
    /// the last color onto the first.
    Light,
}

impl SpectrumMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpectrumMode::Continuous => "continuous",
            SpectrumMode::Light => "light",
        }
    }
}

impl FromStr for SpectrumMode {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<SpectrumMode, SpectrumError> {
        match s {
            "continuous" => Ok(SpectrumMode::Continuous),
            "light" => Ok(SpectrumMode::Light),
            other => Err(SpectrumError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for SpectrumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The half-open slice `[start, end)` of the index domain owned by one
/// palette entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub start: f64,
    pub end: f64,
}

impl Zone {
    pub fn contains(&self, index: f64) -> bool {
        index >= self.start && index < self.end
    }
}

/// Converts a spectrum index to a color blended across an N-color palette.
///
/// Palette entry `k` of `N` owns the zone `[k/N, (k+1)/N)`; inside it the
/// color runs linearly from entry `k` to entry `(k+1) mod N`, and the result
/// goes through a gamma lookup table. The index is circular, see
/// [`normalize_index`].
///
/// Mutators take `&mut self`, so sharing a spectrum across threads while
/// changing it requires the caller's own lock.
///
/// ```
/// use spectrum_tools::{Color, Spectrum, SpectrumMode};
///
/// let colors = [0xFF0000, 0x00FF00, 0x0000FF].map(Color::from_rgb24);
/// let spectrum = Spectrum::new(colors, SpectrumMode::Continuous, 1.0).unwrap();
/// assert_eq!(spectrum.color(0.0), 0xFF0000);
/// assert_eq!(spectrum.color(1.0 / 3.0), 0x00FF00);
/// ```
#[derive(Debug, Clone)]
pub struct Spectrum {
    mode: SpectrumMode,
    gamma: f64,
    colors: Vec<Color>,
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
    zones: Vec<Zone>,
    gamma_table: GammaTable,
}

impl Spectrum {
    /// Builds the spectrum. `gamma` is clamped into `[0, 3]`.
    pub fn new(
        colors: impl IntoIterator<Item = Color>,
        mode: SpectrumMode,
        gamma: f64,
    ) -> Result<Spectrum, SpectrumError> {
        let mut spectrum = Spectrum {
            mode,
            gamma: clamp_gamma(gamma),
            colors: effective_palette(colors, mode)?,
            reds: Vec::new(),
            greens: Vec::new(),
            blues: Vec::new(),
            zones: Vec::new(),
            gamma_table: GammaTable::identity(),
        };
        spectrum.recompute();
        Ok(spectrum)
    }

    pub fn mode(&self) -> SpectrumMode {
        self.mode
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Sets gamma (clamped into `[0, 3]`) and rebuilds the derived tables.
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = clamp_gamma(gamma);
        self.recompute();
    }

    /// The palette actually blended, including the leading black entry in
    /// light mode.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Replaces the palette, keeping mode and gamma.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) -> Result<(), SpectrumError> {
        self.colors = effective_palette(colors, self.mode)?;
        self.recompute();
        Ok(())
    }

    /// Number of zones, equal to the length of [`colors`](Self::colors).
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> impl ExactSizeIterator<Item = Zone> + '_ {
        self.zones.iter().copied()
    }

    pub fn gamma_table(&self) -> &GammaTable {
        &self.gamma_table
    }

    /// The color at `index` as a packed `0xRRGGBB` value.
    pub fn color(&self, index: f64) -> u32 {
        self.rgb(index).to_rgb24()
    }

    /// The color at `index`.
    ///
    /// The zone is chosen from the folded index, the same value that drives
    /// the interpolation, so indices outside `[0, 1)` behave exactly like their
    /// folded counterparts.
    pub fn rgb(&self, index: f64) -> Color {
        let index = normalize_index(index);
        let n = self.zones.len();
        let zone = ((n as f64 * index) as usize).min(n - 1);
        let next = (zone + 1) % n;
        let Zone { start, end } = self.zones[zone];

        let blend = |channel: &[u8]| {
            map_range(index, start, end, channel[zone] as f64, channel[next] as f64) as u8
        };

        self.gamma_table
            .correct_color(Color::rgb(blend(&self.reds), blend(&self.greens), blend(&self.blues)))
    }

    fn recompute(&mut self) {
        let n = self.colors.len();

        self.reds = self.colors.iter().map(|c| c.red).collect();
        self.greens = self.colors.iter().map(|c| c.green).collect();
        self.blues = self.colors.iter().map(|c| c.blue).collect();

        self.zones = (0..n)
            .map(|k| Zone {
                start: k as f64 / n as f64,
                end: (k + 1) as f64 / n as f64,
            })
            .collect();

        self.gamma_table = GammaTable::new(self.gamma);

        debug!(zones = n, mode = %self.mode, gamma = self.gamma, "rebuilt spectrum tables");
    }
}

fn effective_palette(
    colors: impl IntoIterator<Item = Color>,
    mode: SpectrumMode,
) -> Result<Vec<Color>, SpectrumError> {
    let palette: Vec<Color> = match mode {
        SpectrumMode::Light => std::iter::once(Color::BLACK).chain(colors).collect(),
        SpectrumMode::Continuous => colors.into_iter().collect(),
    };

    if palette.is_empty() {
        return Err(SpectrumError::EmptyPalette);
    }

    Ok(palette)
}
