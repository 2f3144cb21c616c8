use crate::error::GeometryError;
use crate::vector::Vector2;

/// A directed line segment from `from` to `to`.
///
/// Direction matters: swapping the endpoints flips the local frame the
/// segment defines and therefore changes the warp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// start point
    pub from: Vector2,
    /// end point
    pub to: Vector2,
}

impl Line {
    /// Create a new line between two points.
    pub fn new(from: impl Into<Vector2>, to: impl Into<Vector2>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The vector from the start point to the end point.
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.to - self.from
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Whether the endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// Check the line can be used as a warp frame.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateLine`] if the endpoints coincide or are not finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.is_degenerate() || !self.from.is_finite() || !self.to.is_finite() {
            return Err(GeometryError::DegenerateLine(*self));
        }
        Ok(())
    }

    /// Endpoints rounded to the pixel grid as `[from_x, from_y, to_x, to_y]`.
    pub fn to_quad(&self) -> [i64; 4] {
        let (f, t) = (self.from.round(), self.to.round());
        [f.x as i64, f.y as i64, t.x as i64, t.y as i64]
    }
}

impl From<[i64; 4]> for Line {
    fn from(quad: [i64; 4]) -> Self {
        let [fx, fy, tx, ty] = quad;
        Line::new([fx as f64, fy as f64], [tx as f64, ty as f64])
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A correspondence between a line in one geometry and the matching line in another.
///
/// When used for warping, `from` lives in the geometry of the output pixel and
/// `to` lives in the geometry of the image being sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePair {
    /// line in the first geometry
    pub from: Line,
    /// corresponding line in the second geometry
    pub to: Line,
}

impl LinePair {
    /// Create a new correspondence.
    pub fn new(from: Line, to: Line) -> Self {
        Self { from, to }
    }

    /// Pair two ordered line sets index by index.
    ///
    /// # Errors
    ///
    /// [`GeometryError::GeometryMismatch`] if the sets have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldmorph_geometry::{Line, LinePair};
    ///
    /// let a = [Line::from([0, 0, 3, 0])];
    /// let b = [Line::from([0, 3, 3, 3])];
    ///
    /// let pairs = LinePair::zip(&a, &b).unwrap();
    /// assert_eq!(pairs.len(), 1);
    /// assert_eq!(pairs[0].to, b[0]);
    /// ```
    pub fn zip(from: &[Line], to: &[Line]) -> Result<Vec<LinePair>, GeometryError> {
        if from.len() != to.len() {
            return Err(GeometryError::GeometryMismatch(from.len(), to.len()));
        }
        Ok(from
            .iter()
            .zip(to.iter())
            .map(|(&f, &t)| LinePair::new(f, t))
            .collect())
    }

    /// Check both lines of the pair are usable warp frames.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.from.validate()?;
        self.to.validate()
    }
}
