//! Spectrum index to RGB color conversion.
//!
//! A spectrum index is a real number read modulo one. [`Spectrum`] blends it
//! across an N-color palette through a gamma lookup table, [`Blender`] blends
//! it between two mutable endpoints with gamma applied as an exponent, and
//! [`stoplight`] maps a plain `[0, 1]` level onto green, yellow and red.

mod color;
pub use color::*;

mod range;
pub use range::*;

mod gamma;
pub use gamma::*;

mod spectrum;
pub use spectrum::*;

mod blender;
pub use blender::*;

mod error;
pub use error::*;

mod file;
pub use file::*;

pub mod stoplight;
