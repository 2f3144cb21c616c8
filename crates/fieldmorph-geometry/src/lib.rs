#![deny(missing_docs)]
//! Geometry primitives and the line-pair warp field used by the morphing engine.
//!
//! - [`Vector2`] and [`Line`] are plain value types.
//! - [`LinePair`] binds a line in one geometry to its counterpart in another.
//! - [`interpolate_lines`] derives the in-between geometry for a blend factor.
//! - [`map_through_pair`] and [`warp_position`] implement the inverse mapping.

mod error;
mod field;
mod interpolate;
mod line;
mod vector;

pub use error::GeometryError;
pub use field::{map_through_pair, warp_position, FieldWeights, PairMapping};
pub use interpolate::{interpolate_lines, interpolate_pairs, LineInterpolation};
pub use line::{Line, LinePair};
pub use vector::Vector2;
