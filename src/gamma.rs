use super::color::Color;

pub const MIN_GAMMA: f64 = 0.0;
pub const MAX_GAMMA: f64 = 3.0;

/// Clamps a gamma value into `[MIN_GAMMA, MAX_GAMMA]`. NaN becomes `MIN_GAMMA`.
pub fn clamp_gamma(gamma: f64) -> f64 {
    gamma.max(MIN_GAMMA).min(MAX_GAMMA)
}

/// Precomputed power-law correction over the 8-bit channel domain:
/// `table[v] = round((v / 255) ^ gamma * 255)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GammaTable {
    gamma: f64,
    table: [u8; 256],
}

impl GammaTable {
    /// Builds the table for `gamma`. The value is used as given; callers that
    /// accept user input clamp it first with [`clamp_gamma`].
    pub fn new(gamma: f64) -> Self {
        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            let corrected = (v as f64 / 255.).powf(gamma) * 255.;
            *entry = corrected.round().clamp(0., 255.) as u8;
        }
        GammaTable { gamma, table }
    }

    pub fn identity() -> Self {
        GammaTable::new(1.0)
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn correct(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub fn correct_color(&self, color: Color) -> Color {
        Color::from_channels(color.channels().map(|c| self.correct(c)))
    }

    pub fn as_slice(&self) -> &[u8; 256] {
        &self.table
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        GammaTable::identity()
    }
}
