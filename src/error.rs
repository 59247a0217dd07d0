use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("incorrect mode '{0}'; only 'continuous' or 'light' allowed")]
    InvalidMode(String),
    #[error("a continuous spectrum needs at least one color")]
    EmptyPalette,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("'{0}' is not a hex color (expected #RGB or #RRGGBB)")]
    InvalidHex(String),
    #[error("color value {0:#x} does not fit in 24 bits")]
    OutOfRange(u64),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not parse JSON spectrum description\n{0}")]
    Json(#[from] serde_json::Error),
    #[error("could not parse RON spectrum description\n{0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid spectrum description, {0}")]
    Spectrum(#[from] SpectrumError),
}
