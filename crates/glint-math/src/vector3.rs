use core::ops::{AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::{check_len, MathError};
use crate::float::approx_eq;
use crate::transform::Transform3;

/// 3D vector.
///
/// Layout is `[x, y, z]`; index `0..=2` maps to `x`, `y`, `z`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ORIGIN: Self = Self::ZERO;
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector from exactly three elements.
    pub fn from_slice(slice: &[f32]) -> Result<Self, MathError> {
        check_len(slice, 3)?;
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }

    #[inline]
    pub const fn as_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[inline]
    pub fn copy_from(&mut self, other: Vector3) -> &mut Self {
        *self = other;
        self
    }

    // ── component-wise arithmetic ─────────────────────────────────────────

    #[inline]
    pub fn add(&mut self, other: Vector3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    #[inline]
    pub fn subtract(&mut self, other: Vector3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    #[inline]
    pub fn multiply(&mut self, other: Vector3) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Replaces each component by its reciprocal. Zero components become infinite.
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
        self.z = 1.0 / self.z;
        self
    }

    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self.z = self.z.ceil();
        self
    }

    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self.z = self.z.floor();
        self
    }

    /// Rounds half-way cases away from zero.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self.z = self.z.round();
        self
    }

    #[inline]
    pub fn min(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn max(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn lerp(self, other: Vector3, t: f32) -> Vector3 {
        Vector3::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
            self.z + t * (other.z - self.z),
        )
    }

    // ── products & metrics ────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Replaces `self` by `self × other`. Operand order matters.
    #[inline]
    pub fn cross(&mut self, other: Vector3) -> &mut Self {
        let (ax, ay, az) = (self.x, self.y, self.z);
        let (bx, by, bz) = (other.x, other.y, other.z);
        self.x = ay * bz - az * by;
        self.y = az * bx - ax * bz;
        self.z = ax * by - ay * bx;
        self
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    #[inline]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
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
        self.z /= len;
        self
    }

    #[inline]
    pub fn normalized(mut self) -> Vector3 {
        self.normalize();
        self
    }

    #[inline]
    pub fn distance(self, other: Vector3) -> f32 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub fn squared_distance(self, other: Vector3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Unsigned angle between the two vectors, in `[0, PI]` radians.
    ///
    /// If either vector has zero length the cosine is taken as 0 and the
    /// result is `PI / 2`.
    pub fn angle(self, other: Vector3) -> f32 {
        // f64 holds the square of any finite f32 without overflow or underflow.
        let (ax, ay, az) = (f64::from(self.x), f64::from(self.y), f64::from(self.z));
        let (bx, by, bz) = (f64::from(other.x), f64::from(other.y), f64::from(other.z));
        let mag = ((ax * ax + ay * ay + az * az) * (bx * bx + by * by + bz * bz)).sqrt();
        let cosine = if mag == 0.0 { 0.0 } else { (ax * bx + ay * by + az * bz) / mag };
        cosine.clamp(-1.0, 1.0).acos() as f32
    }

    // ── rotations about axis-aligned lines ────────────────────────────────

    /// Rotates around the line through `origin` parallel to +X.
    pub fn rotate_x(&mut self, origin: Vector3, radian: f32) -> &mut Self {
        let py = self.y - origin.y;
        let pz = self.z - origin.z;
        let (sin, cos) = radian.sin_cos();

        self.y = py * cos - pz * sin + origin.y;
        self.z = py * sin + pz * cos + origin.z;
        self
    }

    /// Rotates around the line through `origin` parallel to +Y.
    pub fn rotate_y(&mut self, origin: Vector3, radian: f32) -> &mut Self {
        let px = self.x - origin.x;
        let pz = self.z - origin.z;
        let (sin, cos) = radian.sin_cos();

        self.x = pz * sin + px * cos + origin.x;
        self.z = pz * cos - px * sin + origin.z;
        self
    }

    /// Rotates around the line through `origin` parallel to +Z.
    pub fn rotate_z(&mut self, origin: Vector3, radian: f32) -> &mut Self {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let (sin, cos) = radian.sin_cos();

        self.x = px * cos - py * sin + origin.x;
        self.y = px * sin + py * cos + origin.y;
        self
    }

    /// Applies a matrix or rotation quaternion in place.
    ///
    /// - `Matrix3`: plain linear map.
    /// - `Matrix4`: the vector is a point (`w = 1`); the result is divided by
    ///   the resulting `w` unless it is exactly zero.
    /// - `Quaternion`: rotation `q v q*`.
    pub fn transform<'a>(&mut self, target: impl Into<Transform3<'a>>) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        match target.into() {
            Transform3::Matrix3(m) => {
                let e = &m.elements;
                self.x = e[0] * x + e[3] * y + e[6] * z;
                self.y = e[1] * x + e[4] * y + e[7] * z;
                self.z = e[2] * x + e[5] * y + e[8] * z;
            }
            Transform3::Matrix4(m) => {
                let e = &m.elements;
                let mut w = e[3] * x + e[7] * y + e[11] * z + e[15];
                if w == 0.0 {
                    w = 1.0;
                }
                self.x = (e[0] * x + e[4] * y + e[8] * z + e[12]) / w;
                self.y = (e[1] * x + e[5] * y + e[9] * z + e[13]) / w;
                self.z = (e[2] * x + e[6] * y + e[10] * z + e[14]) / w;
            }
            Transform3::Quaternion(q) => {
                let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);

                // uv = q.xyz × v, uuv = q.xyz × uv
                let mut uvx = qy * z - qz * y;
                let mut uvy = qz * x - qx * z;
                let mut uvz = qx * y - qy * x;
                let mut uuvx = qy * uvz - qz * uvy;
                let mut uuvy = qz * uvx - qx * uvz;
                let mut uuvz = qx * uvy - qy * uvx;

                let w2 = qw * 2.0;
                uvx *= w2;
                uvy *= w2;
                uvz *= w2;
                uuvx *= 2.0;
                uuvy *= 2.0;
                uuvz *= 2.0;

                self.x = x + uvx + uuvx;
                self.y = y + uvy + uuvy;
                self.z = z + uvz + uuvz;
            }
        }
        self
    }

    // ── comparisons ───────────────────────────────────────────────────────

    /// Tolerance-based equality (see [`crate::float::approx_eq`]).
    #[inline]
    pub fn equals(self, other: Vector3) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }

    /// Exact component equality (`-0.0 == 0.0`, `NaN != NaN`).
    #[inline]
    pub fn exact_equals(self, other: Vector3) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Vector3::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.as_array()
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {i}"),
        }
    }
}

// `Add` stays unimported: `Add::add` takes `self` by value and would win
// method lookup over the chainable inherent `add`.
impl core::ops::Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
