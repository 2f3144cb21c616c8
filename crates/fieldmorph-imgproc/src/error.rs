use fieldmorph_geometry::GeometryError;
use fieldmorph_image::{ImageError, ImageSize};

use crate::parallel::ParallelError;

/// An error type for the morphing operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MorphError {
    /// The two images do not have the same size.
    #[error("Size of images mismatch: {0} vs {1}")]
    DimensionMismatch(ImageSize, ImageSize),

    /// The blend factor is outside of [0, 1].
    #[error("Blend factor must be in [0, 1], got {0}")]
    InvalidBlendFactor(f64),

    /// Error from the control line geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Error from the image containers.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the parallel executor.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
