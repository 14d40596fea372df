use core::ops::{AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::{check_len, MathError};
use crate::float::approx_eq;
use crate::transform::Transform2;

/// 2D vector.
///
/// Layout is `[x, y]`, matching what vertex buffers expect. Index `0` maps to
/// `x` and `1` to `y`.
///
/// In-place operations return `&mut Self` so they can be chained:
///
/// ```rust
/// use glint_math::Vector2;
///
/// let mut v = Vector2::new(3.0, 4.0);
/// v.scale(2.0).normalize();
/// assert!((v.length() - 1.0).abs() < 1e-6);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// World origin; the default pivot for [`rotate`](Self::rotate).
    pub const ORIGIN: Self = Self::ZERO;

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a vector from exactly two elements.
    pub fn from_slice(slice: &[f32]) -> Result<Self, MathError> {
        check_len(slice, 2)?;
        Ok(Self::new(slice[0], slice[1]))
    }

    #[inline]
    pub const fn as_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn copy_from(&mut self, other: Vector2) -> &mut Self {
        *self = other;
        self
    }

    // ── component-wise arithmetic ─────────────────────────────────────────

    #[inline]
    pub fn add(&mut self, other: Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn subtract(&mut self, other: Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    pub fn multiply(&mut self, other: Vector2) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Replaces each component by its reciprocal. Zero components become infinite.
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
        self
    }

    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Rounds half-way cases away from zero.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    #[inline]
    pub fn min(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: Vector2, t: f32) -> Vector2 {
        Vector2::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    // ── products & metrics ────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    #[inline]
    pub fn cross(self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    #[inline]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Scales to unit length.
    ///
    /// A zero-length vector yields `NaN` components; check
    /// [`squared_length`](Self::squared_length) first when that matters.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self
    }

    #[inline]
    pub fn normalized(mut self) -> Vector2 {
        self.normalize();
        self
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f32 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub fn squared_distance(self, other: Vector2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Unsigned angle between the two vectors, in `[0, PI]` radians.
    ///
    /// If either vector has zero length the cosine is taken as 0 and the
    /// result is `PI / 2`.
    pub fn angle(self, other: Vector2) -> f32 {
        // f64 holds the square of any finite f32 without overflow or underflow.
        let (ax, ay) = (f64::from(self.x), f64::from(self.y));
        let (bx, by) = (f64::from(other.x), f64::from(other.y));
        let mag = ((ax * ax + ay * ay) * (bx * bx + by * by)).sqrt();
        let cosine = if mag == 0.0 { 0.0 } else { (ax * bx + ay * by) / mag };
        cosine.clamp(-1.0, 1.0).acos() as f32
    }

    /// Signed angle from `self` to `other`, in `(-PI, PI]` radians.
    ///
    /// Positive when `other` is counter-clockwise from `self` (+Y up).
    #[inline]
    pub fn signed_angle(self, other: Vector2) -> f32 {
        self.cross(other).atan2(self.dot(other))
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Rotates the point around `origin`, counter-clockwise for positive angles.
    pub fn rotate(&mut self, radian: f32, origin: Vector2) -> &mut Self {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let (sin, cos) = radian.sin_cos();

        self.x = px * cos - py * sin + origin.x;
        self.y = px * sin + py * cos + origin.y;
        self
    }

    /// Applies a matrix to the vector in place.
    ///
    /// `Matrix3` and `Matrix4` treat the vector as a point (`z = 0`, `w = 1`),
    /// so their translation applies. No perspective divide is performed.
    pub fn transform<'a>(&mut self, target: impl Into<Transform2<'a>>) -> &mut Self {
        let (x, y) = (self.x, self.y);
        let (nx, ny) = match target.into() {
            Transform2::Matrix2(m) => {
                let e = &m.elements;
                (e[0] * x + e[2] * y, e[1] * x + e[3] * y)
            }
            Transform2::Matrix3(m) => {
                let e = &m.elements;
                (e[0] * x + e[3] * y + e[6], e[1] * x + e[4] * y + e[7])
            }
            Transform2::Matrix4(m) => {
                let e = &m.elements;
                (e[0] * x + e[4] * y + e[12], e[1] * x + e[5] * y + e[13])
            }
        };
        self.x = nx;
        self.y = ny;
        self
    }

    // ── comparisons ───────────────────────────────────────────────────────

    /// Tolerance-based equality (see [`crate::float::approx_eq`]).
    #[inline]
    pub fn equals(self, other: Vector2) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Exact component equality (`-0.0 == 0.0`, `NaN != NaN`).
    #[inline]
    pub fn exact_equals(self, other: Vector2) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Vector2::new(a[0], a[1])
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.as_array()
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of range: {i}"),
        }
    }
}

// `Add` stays unimported: `Add::add` takes `self` by value and would win
// method lookup over the chainable inherent `add`.
impl core::ops::Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::float::assert_close;
    use crate::{Matrix2, Matrix3, Matrix4, Vector3};

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }

    // ── construction & access ─────────────────────────────────────────────

    #[test]
    fn add_mutates_in_place_alongside_plus_operator() {
        let mut a = v(1.0, 2.0);
        a.add(v(1.0, 1.0)).scale(2.0);
        assert_eq!(a, v(4.0, 6.0));

        let b = v(1.0, 2.0);
        assert_eq!(b + v(1.0, 1.0), v(2.0, 3.0));
        assert_eq!(b, v(1.0, 2.0));
    }

    #[test]
    fn set_overwrites_and_chains() {
        let mut a = v(1.0, 2.0);
        a.set(5.0, 6.0).add(v(1.0, 1.0));
        assert_eq!(a, v(6.0, 7.0));
    }

    #[test]
    fn index_maps_to_components() {
        let mut a = v(1.0, 2.0);
        assert_eq!(a[0], 1.0);
        assert_eq!(a[1], 2.0);
        a[1] = 9.0;
        assert_eq!(a.y, 9.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let _ = v(1.0, 2.0)[2];
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(Vector2::from_slice(&[1.0, 2.0]), Ok(v(1.0, 2.0)));
        assert!(Vector2::from_slice(&[1.0]).is_err());
    }

    #[test]
    fn nan_passes_through_accessors() {
        let a = v(f32::NAN, f32::INFINITY);
        assert!(a.x.is_nan());
        assert!(!a.is_finite());
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn in_place_arithmetic() {
        let mut a = v(1.0, 2.0);
        a.add(v(3.0, 4.0));
        assert_eq!(a, v(4.0, 6.0));
        a.subtract(v(1.0, 1.0));
        assert_eq!(a, v(3.0, 5.0));
        a.multiply(v(2.0, -1.0));
        assert_eq!(a, v(6.0, -5.0));
        a.negate();
        assert_eq!(a, v(-6.0, 5.0));
    }

    #[test]
    fn operators_match_in_place_methods() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -4.0);
        assert_eq!(a + b, v(4.0, -2.0));
        assert_eq!(a - b, v(-2.0, 6.0));
        assert_eq!(a * b, v(3.0, -8.0));
        assert_eq!(a * 2.0, v(2.0, 4.0));
        assert_eq!(b / 2.0, v(1.5, -2.0));
        assert_eq!(-a, v(-1.0, -2.0));
    }

    #[test]
    fn inverse_of_zero_is_infinite() {
        let mut a = v(2.0, 0.0);
        a.inverse();
        assert_eq!(a.x, 0.5);
        assert!(a.y.is_infinite());
    }

    #[test]
    fn rounding_family() {
        let mut a = v(1.5, -1.5);
        a.ceil();
        assert_eq!(a, v(2.0, -1.0));
        a.set(1.5, -1.5).floor();
        assert_eq!(a, v(1.0, -2.0));
        a.set(1.5, -1.4).round();
        assert_eq!(a, v(2.0, -1.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = v(0.0, 10.0);
        let b = v(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), v(5.0, 15.0));
    }

    // ── metrics ───────────────────────────────────────────────────────────

    #[test]
    fn length_and_distance() {
        let a = v(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.squared_length(), 25.0);
        assert_eq!(v(1.0, 1.0).distance(v(4.0, 5.0)), 5.0);
        assert_eq!(v(1.0, 1.0).squared_distance(v(4.0, 5.0)), 25.0);
    }

    #[test]
    fn normalize_unit_length() {
        let n = v(3.0, 4.0).normalized();
        assert_close(&n.as_array(), &[0.6, 0.8], 1e-6);
    }

    #[test]
    fn normalize_zero_is_non_finite_not_panic() {
        let mut z = Vector2::ZERO;
        z.normalize();
        assert!(z.x.is_nan() && z.y.is_nan());
    }

    #[test]
    fn angle_is_unsigned() {
        assert!((v(1.0, 0.0).angle(v(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((v(1.0, 0.0).angle(v(0.0, -1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((v(1.0, 0.0).angle(v(-1.0, 0.0)) - PI).abs() < 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_is_right_angle() {
        assert!((Vector2::ZERO.angle(v(1.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn angle_survives_extreme_magnitudes() {
        assert!(v(1e20, 0.0).angle(v(3e20, 0.0)).abs() < 1e-6);
        assert!((v(1e20, 0.0).angle(v(-1e20, 0.0)) - PI).abs() < 1e-6);
        assert!((v(1e-25, 0.0).angle(v(0.0, 1e-25)) - FRAC_PI_2).abs() < 1e-6);
        assert!(v(2e-30, 2e-30).angle(v(1e30, 1e30)).abs() < 1e-6);
    }

    #[test]
    fn signed_angle_follows_orientation() {
        assert!((v(1.0, 0.0).signed_angle(v(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((v(1.0, 0.0).signed_angle(v(0.0, -1.0)) + FRAC_PI_2).abs() < 1e-6);
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_about_origin_is_counter_clockwise() {
        let mut a = v(1.0, 0.0);
        a.rotate(FRAC_PI_2, Vector2::ORIGIN);
        assert_close(&a.as_array(), &[0.0, 1.0], 1e-6);
    }

    #[test]
    fn rotate_about_pivot() {
        let mut a = v(2.0, 1.0);
        a.rotate(PI, v(1.0, 1.0));
        assert_close(&a.as_array(), &[0.0, 1.0], 1e-6);
    }

    #[test]
    fn rotate_triangle_by_quarter_pi() {
        // The three corners of the rotated-triangle demo.
        let mut pts = [v(0.0, 0.0), v(0.0, 200.0), v(200.0, 0.0)];
        for p in &mut pts {
            p.rotate(FRAC_PI_4, Vector2::ORIGIN);
        }
        let h = 200.0 * FRAC_PI_4.cos();
        assert_close(&pts[0].as_array(), &[0.0, 0.0], 1e-4);
        assert_close(&pts[1].as_array(), &[-h, h], 1e-4);
        assert_close(&pts[2].as_array(), &[h, h], 1e-4);
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn transform_by_matrix2_rotation() {
        let mut a = v(1.0, 0.0);
        a.transform(&Matrix2::rotation(FRAC_PI_2));
        assert_close(&a.as_array(), &[0.0, 1.0], 1e-6);
    }

    #[test]
    fn transform_by_matrix3_applies_translation() {
        let mut a = v(1.0, 2.0);
        a.transform(&Matrix3::translation(v(10.0, 20.0)));
        assert_eq!(a, v(11.0, 22.0));
    }

    #[test]
    fn transform_by_matrix4_applies_translation() {
        let mut a = v(1.0, 2.0);
        a.transform(&Matrix4::translation(Vector3::new(5.0, 6.0, 7.0)));
        assert_eq!(a, v(6.0, 8.0));
    }

    #[test]
    fn transform_matches_rotate() {
        let mut a = v(3.0, -2.0);
        let mut b = a;
        a.rotate(0.7, Vector2::ORIGIN);
        b.transform(&Matrix4::rotation_z(0.7));
        assert!(a.equals(b));
    }

    // ── comparisons & copies ──────────────────────────────────────────────

    #[test]
    fn equals_vs_exact_equals() {
        let a = v(1.0, 2.0);
        let b = v(1.0 + 1e-7, 2.0);
        assert!(a.equals(b));
        assert!(!a.exact_equals(v(1.0001, 2.0)));
        assert!(a.exact_equals(v(1.0, 2.0)));
    }

    #[test]
    fn copy_does_not_alias() {
        let a = v(1.0, 2.0);
        let mut b = a;
        b.add(v(1.0, 1.0));
        assert_eq!(a, v(1.0, 2.0));

        let mut c = Vector2::ZERO;
        c.copy_from(a);
        assert!(c.exact_equals(a));
    }

    #[test]
    fn buffer_layout_is_x_then_y() {
        let pts = [v(1.0, 2.0), v(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&pts);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
