//! Pixel interpolation methods for image transformations.
//!
//! Samples are taken at fractional coordinates; neighbours that fall outside
//! of the image are resolved with a [`crate::padding::BorderMode`].

mod bilinear;

pub use bilinear::bilinear_sample;
