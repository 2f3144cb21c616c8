#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the image processing operations.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// image morphing between two annotated images.
pub mod morph;

/// border extension policies.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// line-driven geometric warps.
pub mod warp;

pub use error::MorphError;
