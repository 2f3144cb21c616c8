use crate::line::Line;

/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The two control line sets do not have the same number of lines.
    #[error("Control lines mismatch: {0} lines vs {1} lines")]
    GeometryMismatch(usize, usize),

    /// The warp field needs at least one control line pair.
    #[error("At least one control line pair is required")]
    NoControlLines,

    /// A control line has coincident endpoints.
    #[error("Control line {0} has zero length")]
    DegenerateLine(Line),

    /// The requested line interpolation policy is not available.
    #[error("Unsupported line interpolation method: {0}")]
    UnsupportedMethod(String),

    /// A weighting parameter is out of its valid range.
    #[error("Invalid weight parameter `{name}`: {value}")]
    InvalidWeight {
        /// name of the parameter
        name: &'static str,
        /// rejected value
        value: f64,
    },

    /// The accumulated weights cannot be normalized.
    #[error("Line weights sum to zero or overflow")]
    DegenerateWeights,
}
