//! Geometric image transformations driven by control lines.
//!
//! Every output pixel is inverse-mapped through the Beier-Neely field defined
//! by a set of line pairs and resampled from the source image.
//!
//! # Examples
//!
//! Shifting an image down by two rows:
//!
//! ```
//! use fieldmorph_geometry::{FieldWeights, Line, LinePair};
//! use fieldmorph_image::{Image, ImageSize};
//! use fieldmorph_imgproc::padding::BorderMode;
//! use fieldmorph_imgproc::parallel::ExecutionStrategy;
//! use fieldmorph_imgproc::warp::warp_field;
//!
//! let size = ImageSize { width: 4, height: 4 };
//! let src = Image::<u8, 1>::new(size, (0..16).collect()).unwrap();
//! let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
//!
//! // the line at row 2 of the output samples row 0 of the source
//! let pairs = [LinePair::new(Line::from([0, 2, 3, 2]), Line::from([0, 0, 3, 0]))];
//!
//! warp_field(
//!     &src,
//!     &mut dst,
//!     &pairs,
//!     &FieldWeights::default(),
//!     BorderMode::Replicate,
//!     ExecutionStrategy::Serial,
//! )
//! .unwrap();
//!
//! assert_eq!(dst.pixel(1, 3).unwrap(), &[5]);
//! ```

mod field;

pub use field::warp_field;
