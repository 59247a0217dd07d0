use tracing::trace;

use super::color::Color;
use super::gamma::clamp_gamma;
use super::range::{map_range, normalize_index_closed};

/// Blends between two colors whose endpoints may change at any time.
///
/// Nothing is cached: each call to [`color`](Self::color) reads the current
/// endpoints and gamma. Gamma is applied as an exponent on the normalized
/// channel (`channel ^ gamma`), not through a lookup table.
///
/// Index `0.0` is the start color and `1.0` the end color. Other indices fold
/// modulo one like [`normalize_index`](crate::normalize_index), with any
/// non-zero whole number landing on the end color.
///
/// ```
/// use spectrum_tools::Blender;
///
/// let blender = Blender::default();
/// assert_eq!(blender.color(0.0), 0x000000);
/// assert_eq!(blender.color(0.5), 0x7F7F7F);
/// assert_eq!(blender.color(1.0), 0xFFFFFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blender {
    start_color: Color,
    end_color: Color,
    gamma: f64,
}

impl Blender {
    /// `gamma` is clamped into `[0, 3]`.
    pub fn new(start_color: Color, end_color: Color, gamma: f64) -> Self {
        Blender {
            start_color,
            end_color,
            gamma: clamp_gamma(gamma),
        }
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn set_start_color(&mut self, color: Color) {
        trace!(%color, "blender start color");
        self.start_color = color;
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    pub fn set_end_color(&mut self, color: Color) {
        trace!(%color, "blender end color");
        self.end_color = color;
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = clamp_gamma(gamma);
        trace!(gamma = self.gamma, "blender gamma");
    }

    /// The color at `index` as a packed `0xRRGGBB` value.
    pub fn color(&self, index: f64) -> u32 {
        self.rgb(index).to_rgb24()
    }

    pub fn rgb(&self, index: f64) -> Color {
        let index = normalize_index_closed(index);

        let blend = |start: u8, end: u8| {
            let value = map_range(index, 0., 1., start as f64 / 255., end as f64 / 255.);
            (value.powf(self.gamma) * 255.).round() as u8
        };

        Color::rgb(
            blend(self.start_color.red, self.end_color.red),
            blend(self.start_color.green, self.end_color.green),
            blend(self.start_color.blue, self.end_color.blue),
        )
    }
}

impl Default for Blender {
    fn default() -> Self {
        Blender::new(Color::BLACK, Color::WHITE, 1.0)
    }
}
