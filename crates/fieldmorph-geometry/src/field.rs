use crate::error::GeometryError;
use crate::line::{Line, LinePair};
use crate::vector::Vector2;

/// Result of mapping a point through a single line pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMapping {
    /// the mapped position in the geometry of the second line
    pub position: Vector2,
    /// normalized position along the first line, 0 at its start and 1 at its end
    pub u: f64,
    /// signed perpendicular offset from the first line, in pixels
    pub v: f64,
    /// length of the first line
    pub length: f64,
    /// distance from the point to the first segment
    pub dist: f64,
}

/// Map a point through one line pair.
///
/// The point is expressed in the local frame of `line_from` (position `u` along
/// the line, signed offset `v` across it) and rebuilt with the same `u` and `v`
/// in the frame of `line_to`.
///
/// `dist` is the distance from the point to the segment `line_from`: to its
/// start when `u < 0`, to its end when `u > 1` and `|v|` otherwise.
///
/// # Errors
///
/// [`GeometryError::DegenerateLine`] if either line has zero length.
///
/// # Example
///
/// ```
/// use fieldmorph_geometry::{map_through_pair, Line, Vector2};
///
/// let from = Line::from([0, 0, 10, 0]);
/// let to = Line::from([5, 5, 15, 5]);
///
/// let m = map_through_pair(Vector2::new(2.0, 1.0), &from, &to).unwrap();
/// assert!((m.position.x - 7.0).abs() < 1e-9);
/// assert!((m.position.y - 6.0).abs() < 1e-9);
/// assert_eq!(m.length, 10.0);
/// assert_eq!(m.dist, 1.0);
/// ```
pub fn map_through_pair(
    x: Vector2,
    line_from: &Line,
    line_to: &Line,
) -> Result<PairMapping, GeometryError> {
    line_from.validate()?;
    line_to.validate()?;

    let (p, q) = (line_from.from, line_from.to);
    let (p_, q_) = (line_to.from, line_to.to);

    let pq = q - p;
    let length = pq.length();
    let pq_ = q_ - p_;
    let length_ = pq_.length();

    let u = (x - p).dot(pq) / pq.dot(pq);
    let v = (x - p).dot(pq.perpendicular()) / length;

    let position = p_ + pq_ * u + pq_.perpendicular() * (v / length_);

    let dist = if u < 0.0 {
        x.distance(p)
    } else if u > 1.0 {
        x.distance(q)
    } else {
        v.abs()
    };

    Ok(PairMapping {
        position,
        u,
        v,
        length,
        dist,
    })
}

/// Tuning values of the Beier-Neely weighting `(length^p / (a + dist))^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    /// distance floor, keeps the weight finite on the line itself
    pub a: f64,
    /// distance exponent, larger values make lines more local
    pub b: f64,
    /// length exponent, larger values favour longer lines
    pub p: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            a: 1e-4,
            b: 1.0,
            p: 1.0,
        }
    }
}

impl FieldWeights {
    /// Check the parameters are in range: `a > 0`, `b` and `p` finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.a.is_finite() && self.a > 0.0) {
            return Err(GeometryError::InvalidWeight {
                name: "a",
                value: self.a,
            });
        }
        if !self.b.is_finite() {
            return Err(GeometryError::InvalidWeight {
                name: "b",
                value: self.b,
            });
        }
        if !self.p.is_finite() {
            return Err(GeometryError::InvalidWeight {
                name: "p",
                value: self.p,
            });
        }
        Ok(())
    }

    /// Natural logarithm of the weight of a line of the given length at the
    /// given distance, `b * (p * ln(length) - ln(a + dist))`.
    ///
    /// The weight itself overflows `f64` for large `b`; its logarithm stays
    /// finite for any in-range parameters.
    #[inline]
    pub fn log_weight(&self, length: f64, dist: f64) -> f64 {
        self.b * (self.p * length.ln() - (self.a + dist).ln())
    }
}

/// Compute the warped position of a point from all line pairs.
///
/// Each pair proposes a displacement `X'_i - X`; the displacements are
/// averaged with the weights `(length^p / (a + dist))^b`.
///
/// The weights are accumulated relative to the largest one seen so far, so
/// only their ratios matter and a large `b` does not overflow the sum.
///
/// # Arguments
///
/// * `x` - The point in the geometry of the `from` lines.
/// * `pairs` - The line correspondences, `from` in the point's geometry and
///   `to` in the geometry being sampled.
/// * `weights` - The weighting parameters.
///
/// # Errors
///
/// * [`GeometryError::NoControlLines`] if `pairs` is empty.
/// * [`GeometryError::DegenerateLine`] if any line has zero length.
/// * [`GeometryError::DegenerateWeights`] if the weights cannot be normalized.
pub fn warp_position(
    x: Vector2,
    pairs: &[LinePair],
    weights: &FieldWeights,
) -> Result<Vector2, GeometryError> {
    if pairs.is_empty() {
        return Err(GeometryError::NoControlLines);
    }

    let mut dsum = Vector2::ZERO;
    let mut weightsum = 0.0;
    let mut max_log_weight = f64::NEG_INFINITY;

    for pair in pairs {
        let mapping = map_through_pair(x, &pair.from, &pair.to)?;
        let log_weight = weights.log_weight(mapping.length, mapping.dist);
        if !log_weight.is_finite() {
            return Err(GeometryError::DegenerateWeights);
        }
        if log_weight > max_log_weight {
            let rescale = (max_log_weight - log_weight).exp();
            dsum = dsum * rescale;
            weightsum *= rescale;
            max_log_weight = log_weight;
        }
        let weight = (log_weight - max_log_weight).exp();
        dsum += (mapping.position - x) * weight;
        weightsum += weight;
    }

    if !(weightsum.is_finite() && weightsum > 0.0) {
        return Err(GeometryError::DegenerateWeights);
    }

    let warped = x + dsum / weightsum;
    if !warped.is_finite() {
        return Err(GeometryError::DegenerateWeights);
    }

    Ok(warped)
}
