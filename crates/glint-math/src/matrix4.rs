use core::fmt;
use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::error::{check_len, MathError};
use crate::float::{approx_eq, is_singular};
use crate::{Matrix3, Quaternion, Vector3};

/// 4x4 transformation matrix.
///
/// Invariant:
/// - `elements` is column-major: `elements[4 * col + row] = M[row][col]`.
///   This is the layout uniform uploads expect, so the buffer can be handed
///   to the GPU as-is (see [`as_slice`](Self::as_slice) / [`as_bytes`](Self::as_bytes)).
///
/// Constructors and [`set`](Self::set) take their arguments in row-major
/// reading order (`m11, m12, m13, m14, m21, …`) so code reads like the math:
///
/// ```rust
/// use glint_math::{Matrix4, Vector3};
///
/// let t = Matrix4::new(
///     1.0, 0.0, 0.0, 5.0,
///     0.0, 1.0, 0.0, 6.0,
///     0.0, 0.0, 1.0, 7.0,
///     0.0, 0.0, 0.0, 1.0,
/// );
/// assert_eq!(t, Matrix4::translation(Vector3::new(5.0, 6.0, 7.0)));
/// assert_eq!(&t.elements[12..15], &[5.0, 6.0, 7.0]);
/// ```
///
/// Composition convention: vectors are columns, so in `a · b` the transform
/// `b` is applied to geometry first. [`multiply`](Self::multiply) appends on
/// the right (applied before the current transform),
/// [`premultiply`](Self::premultiply) on the left (applied after).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    pub elements: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    /// Row-major arguments, stored column-major.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        Self {
            elements: [
                m11, m21, m31, m41,
                m12, m22, m32, m42,
                m13, m23, m33, m43,
                m14, m24, m34, m44,
            ],
        }
    }

    /// Overwrites all elements from row-major arguments.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> &mut Self {
        *self = Self::new(
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        );
        self
    }

    /// Wraps a buffer that is already column-major.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.elements
    }

    /// Copies a column-major buffer of exactly 16 elements.
    pub fn from_slice(slice: &[f32]) -> Result<Self, MathError> {
        check_len(slice, 16)?;
        let mut elements = [0.0; 16];
        elements.copy_from_slice(slice);
        Ok(Self { elements })
    }

    /// Rows in reading order.
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        let e = &self.elements;
        [
            [e[0], e[4], e[8], e[12]],
            [e[1], e[5], e[9], e[13]],
            [e[2], e[6], e[10], e[14]],
            [e[3], e[7], e[11], e[15]],
        ]
    }

    /// Element at zero-based `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.elements[4 * col + row]
    }

    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
        self.elements[4 * col + row] = value;
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Raw bytes of the column-major buffer, ready for a uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Resets to identity.
    #[inline]
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    #[inline]
    pub fn copy_from(&mut self, other: &Matrix4) -> &mut Self {
        *self = *other;
        self
    }

    // ── composition ───────────────────────────────────────────────────────

    /// `self = a · b`.
    ///
    /// The product is built in a stack buffer before being stored.
    pub fn multiply_matrices(&mut self, a: &Matrix4, b: &Matrix4) -> &mut Self {
        self.elements = mul_cols(&a.elements, &b.elements);
        self
    }

    /// `self = self · other`: `other` is applied to geometry before `self`.
    ///
    /// To square a matrix, pass a copy: `let m2 = m; m.multiply(&m2);`.
    pub fn multiply(&mut self, other: &Matrix4) -> &mut Self {
        let a = self.elements;
        self.elements = mul_cols(&a, &other.elements);
        self
    }

    /// `self = other · self`: `other` is applied to geometry after `self`.
    ///
    /// Repeated calls stack transforms in call order; the most recently
    /// premultiplied matrix is applied last.
    pub fn premultiply(&mut self, other: &Matrix4) -> &mut Self {
        let b = self.elements;
        self.elements = mul_cols(&other.elements, &b);
        self
    }

    /// `a · b` as a new matrix.
    pub fn product(a: &Matrix4, b: &Matrix4) -> Matrix4 {
        Matrix4 { elements: mul_cols(&a.elements, &b.elements) }
    }

    pub fn transpose(&mut self) -> &mut Self {
        let e = &mut self.elements;
        e.swap(1, 4);
        e.swap(2, 8);
        e.swap(3, 12);
        e.swap(6, 9);
        e.swap(7, 13);
        e.swap(11, 14);
        self
    }

    // ── inversion ─────────────────────────────────────────────────────────

    pub fn determinant(&self) -> f32 {
        let c = Cofactors::of(&self.elements);
        c.determinant()
    }

    /// Inverse, or [`MathError::Singular`] when the determinant is zero
    /// relative to the size of the columns (see [`crate::float`]). Matrices
    /// that are rank-deficient up to rounding are rejected rather than
    /// inverted into large, meaningless values.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Result<Matrix4, MathError> {
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = self.elements;

        let c = Cofactors::of(&self.elements);
        let det = c.determinant();
        if is_singular(det, &self.elements, 4) {
            return Err(MathError::Singular { determinant: det });
        }
        let inv = 1.0 / det;

        let Cofactors { b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11 } = c;

        Ok(Matrix4 {
            elements: [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv,
                (a02 * b10 - a01 * b11 - a03 * b09) * inv,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv,
                (a22 * b04 - a21 * b05 - a23 * b03) * inv,
                (a12 * b08 - a10 * b11 - a13 * b07) * inv,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv,
                (a32 * b02 - a30 * b05 - a33 * b01) * inv,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv,
                (a10 * b10 - a11 * b08 + a13 * b06) * inv,
                (a01 * b08 - a00 * b10 - a03 * b06) * inv,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv,
                (a21 * b02 - a20 * b04 - a23 * b00) * inv,
                (a11 * b07 - a10 * b09 - a12 * b06) * inv,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv,
                (a31 * b01 - a30 * b03 - a32 * b00) * inv,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv,
            ],
        })
    }

    /// Stores the inverse of `other` in `self`.
    ///
    /// Singular input leaves `self` as identity and returns `false`; a render
    /// loop keeps going with a neutral transform instead of garbage.
    pub fn set_inverse_of(&mut self, other: &Matrix4) -> bool {
        match other.try_inverse() {
            Ok(inv) => {
                *self = inv;
                true
            }
            Err(err) => {
                log::debug!("Matrix4::set_inverse_of: {err}; using identity");
                *self = Self::IDENTITY;
                false
            }
        }
    }

    /// Inverts in place; same singular policy as [`set_inverse_of`](Self::set_inverse_of).
    pub fn invert(&mut self) -> bool {
        let src = *self;
        self.set_inverse_of(&src)
    }

    /// Inverse of `matrix` as a new matrix (identity if singular).
    pub fn inverse(matrix: &Matrix4) -> Matrix4 {
        let mut out = Self::IDENTITY;
        out.set_inverse_of(matrix);
        out
    }

    /// Inverse-transpose, for transforming normals with a non-uniform scale.
    pub fn normal_matrix(&self) -> Matrix4 {
        let mut n = Self::inverse(self);
        n.transpose();
        n
    }

    /// Upper-left 3x3 linear block.
    pub fn upper_left(&self) -> Matrix3 {
        Matrix3::from_matrix4(self)
    }

    // ── canonical transforms ──────────────────────────────────────────────

    #[rustfmt::skip]
    pub fn translation(v: Vector3) -> Self {
        Self::new(
            1.0, 0.0, 0.0, v.x,
            0.0, 1.0, 0.0, v.y,
            0.0, 0.0, 1.0, v.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn scaling(v: Vector3) -> Self {
        Self::new(
            v.x, 0.0, 0.0, 0.0,
            0.0, v.y, 0.0, 0.0,
            0.0, 0.0, v.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed rotation around +X (Y towards Z for positive angles).
    #[rustfmt::skip]
    pub fn rotation_x(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed rotation around +Y (Z towards X for positive angles).
    #[rustfmt::skip]
    pub fn rotation_y(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        Self::new(
            cos, 0.0, sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed rotation around +Z (X towards Y for positive angles).
    #[rustfmt::skip]
    pub fn rotation_z(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        Self::new(
            cos, -sin, 0.0, 0.0,
            sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `radian` around an arbitrary `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized here. A (near) zero-length axis yields identity.
    #[rustfmt::skip]
    pub fn rotation(radian: f32, axis: Vector3) -> Self {
        let len = axis.length();
        if len < crate::float::EPSILON {
            log::debug!("Matrix4::rotation: zero-length axis; using identity");
            return Self::IDENTITY;
        }

        let x = axis.x / len;
        let y = axis.y / len;
        let z = axis.z / len;
        let (s, c) = radian.sin_cos();
        let t = 1.0 - c;

        Self::new(
            x * x * t + c, x * y * t - z * s, x * z * t + y * s, 0.0,
            y * x * t + z * s, y * y * t + c, y * z * t - x * s, 0.0,
            z * x * t - y * s, z * y * t + x * s, z * z * t + c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation matrix of a unit quaternion.
    #[rustfmt::skip]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::new(
            1.0 - yy - zz, yx - wz, zx + wy, 0.0,
            yx + wz, 1.0 - xx - zz, zy - wx, 0.0,
            zx - wy, zy + wx, 1.0 - xx - yy, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    // ── camera ────────────────────────────────────────────────────────────

    /// View matrix mapping world space into the camera frame.
    ///
    /// The camera sits at `eye`, looks towards `center` down its local -Z, with
    /// `up` projected to its local +Y. `up` parallel to the view direction is
    /// degenerate and yields non-finite elements.
    #[rustfmt::skip]
    pub fn look_at(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        let f = (center - eye).normalized();

        let mut s = f;
        s.cross(up).normalize();

        let mut u = s;
        u.cross(f);

        // Move the eye to the origin first, then rotate into the camera basis.
        let mut view = Self::translation(-eye);
        view.premultiply(&Self::new(
            s.x, s.y, s.z, 0.0,
            u.x, u.y, u.z, 0.0,
            -f.x, -f.y, -f.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ));
        view
    }

    /// Symmetric-frustum perspective projection (OpenGL clip space, z in [-1, 1]).
    ///
    /// `fov_y` is the full vertical field of view in radians.
    #[rustfmt::skip]
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let t = (fov_y / 2.0).tan();
        let range_inv = 1.0 / (near - far);
        Self::new(
            1.0 / (aspect * t), 0.0, 0.0, 0.0,
            0.0, 1.0 / t, 0.0, 0.0,
            0.0, 0.0, (far + near) * range_inv, 2.0 * far * near * range_inv,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Maps the box `[left, right] x [bottom, top] x [-near, -far]` onto the
    /// clip cube.
    #[rustfmt::skip]
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::new(
            2.0 / width, 0.0, 0.0, -(left + right) / width,
            0.0, 2.0 / height, 0.0, -(top + bottom) / height,
            0.0, 0.0, -2.0 / depth, -(far + near) / depth,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Origin-centered scale into clip space: `diag(2/width, 2/height, 2/depth, 1)`.
    #[rustfmt::skip]
    pub fn projection(width: f32, height: f32, depth: f32) -> Self {
        Self::new(
            2.0 / width, 0.0, 0.0, 0.0,
            0.0, 2.0 / height, 0.0, 0.0,
            0.0, 0.0, 2.0 / depth, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    // ── application ───────────────────────────────────────────────────────

    /// Transforms a position (`w = 1`) including the perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let mut out = p;
        out.transform(self);
        out
    }

    /// Transforms a direction (`w = 0`); translation does not apply.
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0] * d.x + e[4] * d.y + e[8] * d.z,
            e[1] * d.x + e[5] * d.y + e[9] * d.z,
            e[2] * d.x + e[6] * d.y + e[10] * d.z,
        )
    }

    // ── comparisons ───────────────────────────────────────────────────────

    /// Tolerance-based equality (see [`crate::float::approx_eq`]).
    pub fn equals(&self, other: &Matrix4) -> bool {
        self.elements.iter().zip(&other.elements).all(|(a, b)| approx_eq(*a, *b))
    }

    #[inline]
    pub fn exact_equals(&self, other: &Matrix4) -> bool {
        self.elements == other.elements
    }
}

/// Column-major `a · b`.
#[inline]
fn mul_cols(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        let b0 = b[4 * col];
        let b1 = b[4 * col + 1];
        let b2 = b[4 * col + 2];
        let b3 = b[4 * col + 3];
        for row in 0..4 {
            out[4 * col + row] = a[row] * b0 + a[4 + row] * b1 + a[8 + row] * b2 + a[12 + row] * b3;
        }
    }
    out
}

/// 2x2 sub-determinants shared by `determinant` and `try_inverse`.
#[rustfmt::skip]
struct Cofactors {
    b00: f32, b01: f32, b02: f32, b03: f32,
    b04: f32, b05: f32, b06: f32, b07: f32,
    b08: f32, b09: f32, b10: f32, b11: f32,
}

impl Cofactors {
    #[rustfmt::skip]
    fn of(e: &[f32; 16]) -> Self {
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = *e;

        Self {
            b00: a00 * a11 - a01 * a10,
            b01: a00 * a12 - a02 * a10,
            b02: a00 * a13 - a03 * a10,
            b03: a01 * a12 - a02 * a11,
            b04: a01 * a13 - a03 * a11,
            b05: a02 * a13 - a03 * a12,
            b06: a20 * a31 - a21 * a30,
            b07: a20 * a32 - a22 * a30,
            b08: a20 * a33 - a23 * a30,
            b09: a21 * a32 - a22 * a31,
            b10: a21 * a33 - a23 * a31,
            b11: a22 * a33 - a23 * a32,
        }
    }

    #[inline]
    #[rustfmt::skip]
    fn determinant(&self) -> f32 {
        self.b00 * self.b11 - self.b01 * self.b10 + self.b02 * self.b09
            + self.b03 * self.b08 - self.b04 * self.b07 + self.b05 * self.b06
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::product(&self, &rhs)
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        Matrix4::product(self, rhs)
    }
}

/// Four lines in reading order, values separated by spaces.
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
