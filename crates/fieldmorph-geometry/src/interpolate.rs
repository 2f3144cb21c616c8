use std::str::FromStr;

use crate::error::GeometryError;
use crate::line::{Line, LinePair};

/// Policy used to derive the in-between control lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineInterpolation {
    /// Interpolate both endpoints linearly.
    #[default]
    Endpoint,
    /// Interpolate center, orientation and length.
    ///
    /// Recognised but not implemented; requesting it fails with
    /// [`GeometryError::UnsupportedMethod`].
    Center,
}

impl LineInterpolation {
    /// Name used when parsing and printing the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineInterpolation::Endpoint => "endpoint",
            LineInterpolation::Center => "center",
        }
    }
}

impl std::fmt::Display for LineInterpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineInterpolation {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endpoint" => Ok(LineInterpolation::Endpoint),
            "center" => Ok(LineInterpolation::Center),
            other => Err(GeometryError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Interpolate every pair at blend factor `t`.
///
/// Endpoints are computed as `(1 - t) * from + t * to` and snapped to the
/// nearest pixel.
///
/// # Errors
///
/// [`GeometryError::UnsupportedMethod`] for any policy other than
/// [`LineInterpolation::Endpoint`].
pub fn interpolate_pairs(
    pairs: &[LinePair],
    t: f64,
    method: LineInterpolation,
) -> Result<Vec<Line>, GeometryError> {
    match method {
        LineInterpolation::Endpoint => Ok(pairs
            .iter()
            .map(|pair| {
                Line::new(
                    pair.from.from.lerp(pair.to.from, t).round(),
                    pair.from.to.lerp(pair.to.to, t).round(),
                )
            })
            .collect()),
        other => Err(GeometryError::UnsupportedMethod(other.to_string())),
    }
}

/// Interpolate two ordered control line sets at blend factor `t`.
///
/// # Arguments
///
/// * `lines_from` - The lines at `t = 0`.
/// * `lines_to` - The lines at `t = 1`, index-aligned with `lines_from`.
/// * `t` - The blend factor.
/// * `method` - The interpolation policy.
///
/// # Returns
///
/// A new set with the same length as the inputs.
///
/// # Example
///
/// ```
/// use fieldmorph_geometry::{interpolate_lines, Line, LineInterpolation};
///
/// let a = [Line::from([0, 0, 3, 0])];
/// let b = [Line::from([0, 4, 3, 4])];
///
/// let mid = interpolate_lines(&a, &b, 0.5, LineInterpolation::Endpoint).unwrap();
/// assert_eq!(mid[0], Line::from([0, 2, 3, 2]));
/// ```
pub fn interpolate_lines(
    lines_from: &[Line],
    lines_to: &[Line],
    t: f64,
    method: LineInterpolation,
) -> Result<Vec<Line>, GeometryError> {
    let pairs = LinePair::zip(lines_from, lines_to)?;
    interpolate_pairs(&pairs, t, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_with_itself_is_identity() -> Result<(), GeometryError> {
        let lines = [
            Line::from([10, 20, 30, 25]),
            Line::from([-4, 7, 0, 0]),
            Line::from([100, 0, 0, 100]),
        ];
        for t in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
            let out = interpolate_lines(&lines, &lines, t, LineInterpolation::Endpoint)?;
            assert_eq!(out, lines);
        }
        Ok(())
    }

    #[test]
    fn interpolate_rounds_to_pixel_grid() -> Result<(), GeometryError> {
        let a = [Line::from([0, 0, 10, 0])];
        let b = [Line::from([3, 3, 10, 10])];
        let out = interpolate_lines(&a, &b, 0.25, LineInterpolation::Endpoint)?;
        // (0.75, 0.75) -> (1, 1) and (10, 2.5) -> (10, 3)
        assert_eq!(out, vec![Line::from([1, 1, 10, 3])]);
        Ok(())
    }

    #[test]
    fn interpolate_endpoints_of_range() -> Result<(), GeometryError> {
        let a = [Line::from([0, 0, 10, 0]), Line::from([5, 5, 5, 9])];
        let b = [Line::from([2, 8, 12, 8]), Line::from([1, 1, 9, 1])];
        let method = LineInterpolation::Endpoint;
        assert_eq!(interpolate_lines(&a, &b, 0.0, method)?, a);
        assert_eq!(interpolate_lines(&a, &b, 1.0, method)?, b);
        Ok(())
    }

    #[test]
    fn interpolate_mismatch() {
        let a = vec![Line::from([0, 0, 1, 0]); 3];
        let b = vec![Line::from([0, 0, 1, 0]); 2];
        assert_eq!(
            interpolate_lines(&a, &b, 0.5, LineInterpolation::Endpoint),
            Err(GeometryError::GeometryMismatch(3, 2))
        );
    }

    #[test]
    fn interpolate_unsupported_method() {
        let a = [Line::from([0, 0, 1, 0])];
        assert_eq!(
            interpolate_lines(&a, &a, 0.5, LineInterpolation::Center),
            Err(GeometryError::UnsupportedMethod("center".to_string()))
        );
    }

    #[test]
    fn parse_method() {
        assert_eq!(
            "endpoint".parse::<LineInterpolation>(),
            Ok(LineInterpolation::Endpoint)
        );
        assert_eq!(
            "center".parse::<LineInterpolation>(),
            Ok(LineInterpolation::Center)
        );
        assert_eq!(
            "spline".parse::<LineInterpolation>(),
            Err(GeometryError::UnsupportedMethod("spline".to_string()))
        );
    }
}
