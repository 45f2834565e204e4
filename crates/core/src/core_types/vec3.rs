//! 3D vector value type for positions, directions, and displacements.
//!
//! The frame is right-handed with +x forward, +y left and +z up, so
//! `FORWARD × LEFT == UP`.
//!
//! # Comparison policy
//! [`Vector3::equals`], `PartialEq` and [`Vector3::are_parallel_or_antiparallel`]
//! compare components with exact `==`. Two vectors that are numerically close
//! but were produced through different arithmetic will compare unequal. Use
//! [`Vector3::approx_eq`] or the `*_with` variants taking a [`Comparison`] when
//! a tolerance is wanted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::trace;

use super::comparison::{Comparison, ViewConfig};
use super::view_side::ViewSide;
use crate::error::VectorError;

/// Three single-precision components in a right-handed, z-up frame.
///
/// Plain value type: copied freely, no invariants on construction. The zero
/// vector is legal, but [`Vector3::normalize`] must not be called on it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// Forward component.
    pub x: f32,
    /// Left component.
    pub y: f32,
    /// Up component.
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    /// World forward, +x.
    pub const FORWARD: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// World left, +y.
    pub const LEFT: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// World up, +z.
    pub const UP: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector with exactly these components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    // ========================================================================
    // PRODUCTS AND LENGTHS
    // ========================================================================

    /// Dot product `x*ox + y*oy + z*oz`.
    #[inline]
    pub fn dot(&self, other: &Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`, returned by value.
    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Write `self × other` into `out`.
    ///
    /// All three components are computed before `out` is written.
    #[inline]
    pub fn cross_into(&self, other: &Vector3, out: &mut Vector3) {
        *out = self.cross(other);
    }

    /// Replace `self` with `self × other`.
    ///
    /// This is the self-aliasing form of [`Vector3::cross_into`]: the result
    /// is buffered, so no partially-overwritten component is ever read.
    #[inline]
    pub fn cross_assign(&mut self, other: &Vector3) {
        *self = self.cross(other);
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length, always `>= 0`.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Euclidean distance between two points. Symmetric.
    pub fn distance(&self, other: &Vector3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    // ========================================================================
    // IN-PLACE ARITHMETIC
    // ========================================================================

    /// Scale to unit length in place and return the original magnitude.
    ///
    /// The return value is `inv_length * sqr_length`, which equals the length
    /// before normalization.
    ///
    /// Precondition: `self` is not the zero vector. This is not checked; on
    /// the zero vector every component becomes NaN and NaN is returned. Use
    /// [`Vector3::try_normalize`] when the input may be degenerate.
    pub fn normalize(&mut self) -> f32 {
        let sqr_length = self.magnitude_squared();
        let inv_length = 1.0 / sqr_length.sqrt();
        self.x *= inv_length;
        self.y *= inv_length;
        self.z *= inv_length;
        inv_length * sqr_length
    }

    /// Checked [`Vector3::normalize`]. Leaves `self` untouched on failure.
    ///
    /// # Errors
    /// Returns [`VectorError::ZeroLength`] if the squared length is zero and
    /// [`VectorError::NonFinite`] if it is infinite or NaN.
    pub fn try_normalize(&mut self) -> Result<f32, VectorError> {
        let sqr_length = self.magnitude_squared();
        if sqr_length == 0.0 {
            return Err(VectorError::ZeroLength);
        }
        if !sqr_length.is_finite() {
            return Err(VectorError::NonFinite {
                magnitude: sqr_length.sqrt(),
            });
        }
        Ok(self.normalize())
    }

    /// Unit-length copy. Same precondition as [`Vector3::normalize`].
    #[must_use]
    pub fn normalized(&self) -> Vector3 {
        let mut unit = *self;
        unit.normalize();
        unit
    }

    /// Checked [`Vector3::normalized`].
    ///
    /// # Errors
    /// Same as [`Vector3::try_normalize`]. This includes finite vectors whose
    /// squared length overflows `f32`.
    pub fn normalized_checked(&self) -> Result<Vector3, VectorError> {
        let mut unit = *self;
        unit.try_normalize()?;
        Ok(unit)
    }

    /// Copy pointing the opposite way.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    /// Multiply every component by `multiplier`.
    #[inline]
    pub fn scalar_multiply(&mut self, multiplier: f32) {
        self.x *= multiplier;
        self.y *= multiplier;
        self.z *= multiplier;
    }

    /// Elementwise `self += other`.
    #[inline]
    pub fn add_vector(&mut self, other: &Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    /// Elementwise `self -= other`.
    #[inline]
    pub fn subtract_vector(&mut self, other: &Vector3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Exact componentwise equality, no tolerance.
    #[inline]
    pub fn equals(&self, other: &Vector3) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Componentwise equality within an absolute `epsilon`.
    pub fn approx_eq(&self, other: &Vector3, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// Compare under an explicit [`Comparison`] policy.
    pub fn equals_with(&self, other: &Vector3, comparison: Comparison) -> bool {
        match comparison {
            Comparison::Exact => self.equals(other),
            Comparison::Tolerance(epsilon) => self.approx_eq(other, epsilon),
        }
    }

    /// True if `v1` and `v2` point the same or exactly opposite ways.
    ///
    /// Both inputs are normalized and compared exactly, so only vectors whose
    /// normalized components come out bit-identical are detected. Neither
    /// input may be the zero vector.
    pub fn are_parallel_or_antiparallel(v1: &Vector3, v2: &Vector3) -> bool {
        Self::are_parallel_or_antiparallel_with(v1, v2, Comparison::Exact)
    }

    /// [`Vector3::are_parallel_or_antiparallel`] under a chosen comparison.
    pub fn are_parallel_or_antiparallel_with(
        v1: &Vector3,
        v2: &Vector3,
        comparison: Comparison,
    ) -> bool {
        let first = v1.normalized();
        let mut second = v2.normalized();

        if first.equals_with(&second, comparison) {
            return true;
        }
        second.scalar_multiply(-1.0);
        first.equals_with(&second, comparison)
    }

    // ========================================================================
    // VIEW QUERIES
    // ========================================================================

    /// Which side of a viewer's forward direction this point lies on.
    ///
    /// The viewer stands at `position` looking along `orientation`. Returns
    /// [`ViewSide::Unknown`] when the point is straight ahead or behind, and
    /// when the viewer looks straight along the up axis.
    pub fn left_or_right_of_view(&self, position: &Vector3, orientation: &Vector3) -> ViewSide {
        self.left_or_right_of_view_with(position, orientation, &ViewConfig::default())
    }

    /// [`Vector3::left_or_right_of_view`] with a configurable up axis and
    /// parallel comparison. The default config gives identical results.
    pub fn left_or_right_of_view_with(
        &self,
        position: &Vector3,
        orientation: &Vector3,
        config: &ViewConfig,
    ) -> ViewSide {
        let mut relative = Vector3::new(
            self.x - position.x,
            self.y - position.y,
            self.z - position.z,
        );

        if Self::are_parallel_or_antiparallel_with(&relative, orientation, config.parallel) {
            trace!(?relative, ?orientation, "Point lies on the view axis");
            return ViewSide::Unknown;
        }

        relative.cross_assign(orientation);
        ViewSide::from_sign(config.up.dot(&relative))
    }
}

// ============================================================================
// OPERATORS AND CONVERSIONS
// ============================================================================

impl Add for Vector3 {
    type Output = Vector3;

    fn add(mut self, rhs: Vector3) -> Vector3 {
        self.add_vector(&rhs);
        self
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.add_vector(&rhs);
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(mut self, rhs: Vector3) -> Vector3 {
        self.subtract_vector(&rhs);
        self
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.subtract_vector(&rhs);
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(mut self, rhs: f32) -> Vector3 {
        self.scalar_multiply(rhs);
        self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scalar_multiply(rhs);
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negated()
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_cross_matches_determinant_formula() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(&b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vector3::FORWARD.cross(&Vector3::LEFT), Vector3::UP);
    }

    #[test]
    fn test_cross_assign_is_alias_safe() {
        let mut a = Vector3::new(5.0, 5.0, 0.0);
        let b = Vector3::FORWARD;
        let expected = a.cross(&b);
        a.cross_assign(&b);
        assert_eq!(a, expected);
        assert_eq!(a, Vector3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_cross_into_writes_output_only() {
        let a = Vector3::new(0.0, 1.0, 0.0);
        let b = Vector3::new(0.0, 0.0, 1.0);
        let mut out = Vector3::new(9.0, 9.0, 9.0);
        a.cross_into(&b, &mut out);
        assert_eq!(out, Vector3::FORWARD);
        assert_eq!(a, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_normalize_returns_original_magnitude() {
        let mut v = Vector3::new(3.0, 4.0, 0.0);
        let length = v.normalize();
        assert!((length - 5.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_produces_nan() {
        let mut v = Vector3::ZERO;
        let length = v.normalize();
        assert!(length.is_nan());
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_try_normalize_rejects_zero_and_keeps_receiver() {
        let mut v = Vector3::ZERO;
        assert_eq!(v.try_normalize(), Err(VectorError::ZeroLength));
        assert_eq!(v, Vector3::ZERO);

        let mut inf = Vector3::new(f32::INFINITY, 0.0, 0.0);
        assert!(matches!(
            inf.try_normalize(),
            Err(VectorError::NonFinite { .. })
        ));
        assert_eq!(inf.x, f32::INFINITY);
    }

    #[test]
    fn test_normalized_checked_rejects_overflowing_length() {
        let big = Vector3::new(1e20, 0.0, 0.0);
        assert!(matches!(
            big.normalized_checked(),
            Err(VectorError::NonFinite { .. })
        ));
        assert_eq!(Vector3::ZERO.normalized_checked(), Err(VectorError::ZeroLength));
        assert_eq!(Vector3::new(0.0, 0.0, 2.0).normalized_checked(), Ok(Vector3::UP));
    }

    #[test]
    fn test_exact_equality_rejects_one_ulp() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(f32::from_bits(1.0f32.to_bits() + 1), 0.0, 0.0);
        assert!(!a.equals(&b));
        assert!(a.approx_eq(&b, 1e-6));
        assert!(a.equals_with(&b, Comparison::Tolerance(1e-6)));
        assert!(!a.equals_with(&b, Comparison::Exact));
    }

    #[test]
    fn test_operators_match_named_methods() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);

        let mut added = a;
        added.add_vector(&b);
        assert_eq!(a + b, added);

        let mut scaled = a;
        scaled.scalar_multiply(2.0);
        assert_eq!(a * 2.0, scaled);

        assert_eq!(-a, Vector3::new(-1.0, 2.0, -3.0));
        assert_eq!(a - a, Vector3::ZERO);
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let na: nalgebra::Vector3<f32> = v.into();
        assert_eq!(na.magnitude(), v.magnitude());
        assert_eq!(Vector3::from(na), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
