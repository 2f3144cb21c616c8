#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, encoding/decoding failures
/// and malformed text files.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any_rgb8`] for automatic format detection.
pub mod functional;

/// Control line files, one `from_x from_y to_x to_y` quadruple per line.
pub mod lines;

/// Dataset meta files listing tagged images and their control lines.
pub mod meta;
