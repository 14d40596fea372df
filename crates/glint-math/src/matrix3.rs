use bytemuck::{Pod, Zeroable};

use crate::error::MathError;
use crate::float::{approx_eq, is_singular};
use crate::{Matrix4, Vector2};

/// 3x3 matrix, column-major: `elements[3 * col + row]`.
///
/// Serves two roles: a 2D affine transform (translation in the third column)
/// and the upper-left linear block of a [`Matrix4`], e.g. a normal matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    pub elements: [f32; 9],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );

    /// Row-major arguments, stored column-major.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m11: f32, m12: f32, m13: f32,
        m21: f32, m22: f32, m23: f32,
        m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            elements: [
                m11, m21, m31,
                m12, m22, m32,
                m13, m23, m33,
            ],
        }
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        m11: f32, m12: f32, m13: f32,
        m21: f32, m22: f32, m23: f32,
        m31: f32, m32: f32, m33: f32,
    ) -> &mut Self {
        *self = Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33);
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    // ── 2D affine constructors ────────────────────────────────────────────

    #[rustfmt::skip]
    pub fn translation(v: Vector2) -> Self {
        Self::new(
            1.0, 0.0, v.x,
            0.0, 1.0, v.y,
            0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn scaling(v: Vector2) -> Self {
        Self::new(
            v.x, 0.0, 0.0,
            0.0, v.y, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Counter-clockwise rotation in the XY plane.
    #[rustfmt::skip]
    pub fn rotation(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        Self::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    // ── from Matrix4 ──────────────────────────────────────────────────────

    /// Upper-left 3x3 block of `m`.
    #[rustfmt::skip]
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let e = &m.elements;
        Self {
            elements: [
                e[0], e[1], e[2],
                e[4], e[5], e[6],
                e[8], e[9], e[10],
            ],
        }
    }

    /// Inverse-transpose of the upper-left block of `m`, for transforming normals.
    ///
    /// Falls back to identity when the block is singular.
    pub fn normal_from_matrix4(m: &Matrix4) -> Self {
        let mut n = Self::from_matrix4(m);
        n.invert();
        n.transpose();
        n
    }

    // ── composition ───────────────────────────────────────────────────────

    /// `self = a · b`.
    pub fn multiply_matrices(&mut self, a: &Matrix3, b: &Matrix3) -> &mut Self {
        let a = &a.elements;
        let b = &b.elements;
        let mut out = [0.0f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[3 * col + row] = a[row] * b[3 * col]
                    + a[3 + row] * b[3 * col + 1]
                    + a[6 + row] * b[3 * col + 2];
            }
        }
        self.elements = out;
        self
    }

    /// `self = self · other`.
    pub fn multiply(&mut self, other: &Matrix3) -> &mut Self {
        let a = *self;
        self.multiply_matrices(&a, other)
    }

    /// `self = other · self`.
    pub fn premultiply(&mut self, other: &Matrix3) -> &mut Self {
        let b = *self;
        self.multiply_matrices(other, &b)
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.elements.swap(1, 3);
        self.elements.swap(2, 6);
        self.elements.swap(5, 7);
        self
    }

    pub fn determinant(&self) -> f32 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.elements;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Inverts in place. Returns `false` and resets to identity if singular.
    pub fn invert(&mut self) -> bool {
        match self.try_inverse() {
            Ok(inv) => {
                *self = inv;
                true
            }
            Err(err) => {
                log::debug!("Matrix3::invert: {err}; using identity");
                *self = Self::IDENTITY;
                false
            }
        }
    }

    /// Inverse, or [`MathError::Singular`] under the same relative test as
    /// [`Matrix4::try_inverse`].
    pub fn try_inverse(&self) -> Result<Matrix3, MathError> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.elements;

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if is_singular(det, &self.elements, 3) {
            return Err(MathError::Singular { determinant: det });
        }
        let inv = 1.0 / det;

        Ok(Self {
            elements: [
                b01 * inv,
                (-a22 * a01 + a02 * a21) * inv,
                (a12 * a01 - a02 * a11) * inv,
                b11 * inv,
                (a22 * a00 - a02 * a20) * inv,
                (-a12 * a00 + a02 * a10) * inv,
                b21 * inv,
                (-a21 * a00 + a01 * a20) * inv,
                (a11 * a00 - a01 * a10) * inv,
            ],
        })
    }

    pub fn equals(&self, other: &Matrix3) -> bool {
        self.elements.iter().zip(&other.elements).all(|(a, b)| approx_eq(*a, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::assert_close;
    use crate::Vector3;

    #[test]
    fn set_is_row_major_input() {
        let mut m = Matrix3::IDENTITY;
        m.set(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.elements, [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn translate_then_rotate_point() {
        // Rotation applied after translation.
        let mut m = Matrix3::translation(Vector2::new(1.0, 0.0));
        m.premultiply(&Matrix3::rotation(std::f32::consts::FRAC_PI_2));

        let mut p = Vector2::new(1.0, 0.0);
        p.transform(&m);
        assert_close(&[p.x, p.y], &[0.0, 2.0], 1e-6);
    }

    #[test]
    #[rustfmt::skip]
    fn inverse_round_trip() {
        let m = Matrix3::new(
            2.0, 0.0, 1.0,
            1.0, 3.0, 0.0,
            0.0, 1.0, 4.0,
        );
        let inv = m.try_inverse().unwrap();
        let mut p = m;
        p.multiply(&inv);
        assert_close(&p.elements, &Matrix3::IDENTITY.elements, 1e-5);
        assert!((m.determinant() - 25.0).abs() < 1e-5);
    }

    #[test]
    #[rustfmt::skip]
    fn singular_invert_resets_to_identity() {
        let mut m = Matrix3::new(
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            0.0, 1.0, 1.0,
        );
        assert!(matches!(m.try_inverse(), Err(MathError::Singular { .. })));
        assert!(!m.invert());
        assert_eq!(m, Matrix3::IDENTITY);
    }

    #[test]
    fn rank_deficient_after_rounding_is_singular() {
        let axis = Vector3::new(1.0, -2.0, 0.5);
        let rotation = Matrix3::from_matrix4(&Matrix4::rotation(1.7, axis));
        for scale in [0.1, 0.7, 3.3] {
            let mut cols = Matrix3::IDENTITY;
            for (i, e) in cols.elements.iter_mut().enumerate() {
                *e = (i + 1) as f32 * scale;
            }
            let mut m = rotation;
            m.multiply(&cols);

            assert!(
                matches!(m.try_inverse(), Err(MathError::Singular { .. })),
                "scale {scale}: det {} accepted",
                m.determinant()
            );
            assert!(!m.invert());
            assert_eq!(m, Matrix3::IDENTITY);
        }
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Matrix4::scaling(Vector3::new(2.0, 1.0, 1.0));
        let n = Matrix3::normal_from_matrix4(&model);
        assert_close(&n.elements, &[0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0], 1e-6);
    }

    #[test]
    fn from_matrix4_takes_upper_left_block() {
        let m = Matrix4::rotation_z(0.25);
        let b = Matrix3::from_matrix4(&m);
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let mut w = v;
        v.transform(&b);
        w.transform(&m);
        assert!(v.equals(w));
    }
}
