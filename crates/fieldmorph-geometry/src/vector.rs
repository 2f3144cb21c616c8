use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 2D vector in image coordinates (x to the right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// horizontal coordinate
    pub x: f64,
    /// vertical coordinate
    pub y: f64,
}

impl Vector2 {
    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector from its components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product between two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        let a: glam::DVec2 = self.into();
        let b: glam::DVec2 = rhs.into();
        a.dot(b)
    }

    /// Euclidean length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        let v: glam::DVec2 = self.into();
        v.length()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, rhs: Self) -> f64 {
        (self - rhs).length()
    }

    /// The vector rotated by 90 degrees: `(y, -x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Round both coordinates to the nearest integer, half away from zero.
    #[inline]
    pub fn round(self) -> Self {
        let v: glam::DVec2 = self.into();
        v.round().into()
    }

    /// Linear interpolation `self * (1 - t) + rhs * t`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        self * (1.0 - t) + rhs * t
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Conversions to and from the underlying glam type.
impl From<glam::DVec2> for Vector2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::DVec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from(arr: [f64; 2]) -> Self {
        let [x, y] = arr;
        Self { x, y }
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
