use serde::{Deserialize, Serialize};

use super::blender::Blender;
use super::color::Color;
use super::error::{SourceError, SpectrumError};
use super::spectrum::{DEFAULT_SPECTRUM_GAMMA, Spectrum, SpectrumMode};

/// Serializable description of a [`Spectrum`].
///
/// Colors may be packed integers or hex strings. The mode stays a string
/// until the spectrum is built, so an unknown mode is reported as
/// [`SpectrumError::InvalidMode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSource {
    pub colors: Vec<Color>,
    pub mode: String,
    #[serde(default = "default_spectrum_gamma")]
    pub gamma: f64,
}

fn default_spectrum_gamma() -> f64 {
    DEFAULT_SPECTRUM_GAMMA
}

impl SpectrumSource {
    pub fn to_spectrum(&self) -> Result<Spectrum, SpectrumError> {
        let mode: SpectrumMode = self.mode.parse()?;
        Spectrum::new(self.colors.iter().copied(), mode, self.gamma)
    }
}

impl TryFrom<SpectrumSource> for Spectrum {
    type Error = SpectrumError;

    fn try_from(source: SpectrumSource) -> Result<Spectrum, SpectrumError> {
        source.to_spectrum()
    }
}

impl From<&Spectrum> for SpectrumSource {
    fn from(spectrum: &Spectrum) -> SpectrumSource {
        // light mode adds its black entry again on load
        let colors = match spectrum.mode() {
            SpectrumMode::Light => &spectrum.colors()[1..],
            SpectrumMode::Continuous => spectrum.colors(),
        };

        SpectrumSource {
            colors: colors.to_vec(),
            mode: spectrum.mode().to_string(),
            gamma: spectrum.gamma(),
        }
    }
}

impl Spectrum {
    pub fn from_json(s: &str) -> Result<Spectrum, SourceError> {
        let source: SpectrumSource = serde_json::from_str(s)?;
        Ok(source.to_spectrum()?)
    }

    pub fn from_ron(s: &str) -> Result<Spectrum, SourceError> {
        let source: SpectrumSource = ron::from_str(s)?;
        Ok(source.to_spectrum()?)
    }
}

/// Serializable description of a [`Blender`]. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlenderSource {
    #[serde(default = "black")]
    pub start_color: Color,
    #[serde(default = "white")]
    pub end_color: Color,
    #[serde(default = "unit_gamma")]
    pub gamma: f64,
}

fn black() -> Color {
    Color::BLACK
}

fn white() -> Color {
    Color::WHITE
}

fn unit_gamma() -> f64 {
    1.0
}

impl From<BlenderSource> for Blender {
    fn from(source: BlenderSource) -> Blender {
        Blender::new(source.start_color, source.end_color, source.gamma)
    }
}

impl From<&Blender> for BlenderSource {
    fn from(blender: &Blender) -> BlenderSource {
        BlenderSource {
            start_color: blender.start_color(),
            end_color: blender.end_color(),
            gamma: blender.gamma(),
        }
    }
}

impl Blender {
    pub fn from_json(s: &str) -> Result<Blender, SourceError> {
        let source: BlenderSource = serde_json::from_str(s)?;
        Ok(source.into())
    }

    pub fn from_ron(s: &str) -> Result<Blender, SourceError> {
        let source: BlenderSource = ron::from_str(s)?;
        Ok(source.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_from_json() {
        let spectrum = Spectrum::from_json(
            r##"{ "colors": [16711680, "#00FF00", "0000ff"], "mode": "continuous", "gamma": 1.0 }"##,
        )
        .unwrap();

        assert_eq!(spectrum.mode(), SpectrumMode::Continuous);
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.color(0.0), 0xFF0000);
        assert_eq!(spectrum.color(1.0 / 3.0), 0x00FF00);
    }

    #[test]
    fn spectrum_from_ron_with_default_gamma() {
        let spectrum = Spectrum::from_ron(r##"(colors: [16711680, "#0000FF"], mode: "light")"##).unwrap();
        assert_eq!(spectrum.mode(), SpectrumMode::Light);
        assert_eq!(spectrum.gamma(), DEFAULT_SPECTRUM_GAMMA);
        assert_eq!(spectrum.colors()[0], Color::BLACK);
        assert_eq!(spectrum.len(), 3);
    }

    #[test]
    fn unknown_mode_is_invalid_mode() {
        let err = Spectrum::from_json(r#"{ "colors": [0], "mode": "rainbow" }"#).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Spectrum(SpectrumError::InvalidMode(ref mode)) if mode == "rainbow"
        ));
    }

    #[test]
    fn malformed_descriptions() {
        assert!(matches!(Spectrum::from_json("{ nope"), Err(SourceError::Json(_))));
        assert!(matches!(Spectrum::from_ron("(colors: ["), Err(SourceError::Ron(_))));
        assert!(matches!(
            Spectrum::from_json(r##"{ "colors": ["#12345G"], "mode": "light" }"##),
            Err(SourceError::Json(_))
        ));
        assert!(matches!(
            Spectrum::from_json(r#"{ "colors": [], "mode": "continuous" }"#),
            Err(SourceError::Spectrum(SpectrumError::EmptyPalette))
        ));
    }

    #[test]
    fn light_spectrum_description_does_not_grow() {
        let spectrum = Spectrum::from_json(r##"{ "colors": ["#FF0000"], "mode": "light" }"##).unwrap();
        let source = SpectrumSource::from(&spectrum);
        assert_eq!(source.colors, vec![Color::rgb(0xFF, 0, 0)]);

        let reloaded = Spectrum::try_from(source).unwrap();
        assert_eq!(reloaded.colors(), spectrum.colors());
    }

    #[test]
    fn blender_defaults() {
        let blender = Blender::from_json("{}").unwrap();
        assert_eq!(blender, Blender::default());

        let blender = Blender::from_ron(r##"(end_color: "#FF0000", gamma: 9.0)"##).unwrap();
        assert_eq!(blender.start_color(), Color::BLACK);
        assert_eq!(blender.end_color(), Color::rgb(0xFF, 0, 0));
        assert_eq!(blender.gamma(), 3.0);
    }

    #[test]
    fn blender_description_serializes_packed_colors() {
        let blender = Blender::new(Color::rgb(0, 0, 0xFF), Color::WHITE, 2.0);
        let json = serde_json::to_string(&BlenderSource::from(&blender)).unwrap();
        assert_eq!(json, r#"{"start_color":255,"end_color":16777215,"gamma":2.0}"#);
    }
}
