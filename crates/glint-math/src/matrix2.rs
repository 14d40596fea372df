use bytemuck::{Pod, Zeroable};

use crate::float::approx_eq;
use crate::Vector2;

/// 2x2 matrix, column-major: `elements[2 * col + row]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    pub elements: [f32; 4],
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0,
        0.0, 1.0,
    );

    /// Row-major arguments, stored column-major.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32) -> Self {
        Self { elements: [m11, m21, m12, m22] }
    }

    #[inline]
    pub fn set(&mut self, m11: f32, m12: f32, m21: f32, m22: f32) -> &mut Self {
        *self = Self::new(m11, m12, m21, m22);
        self
    }

    #[rustfmt::skip]
    pub fn rotation(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        Self::new(
            cos, -sin,
            sin, cos,
        )
    }

    #[rustfmt::skip]
    pub fn scaling(v: Vector2) -> Self {
        Self::new(
            v.x, 0.0,
            0.0, v.y,
        )
    }

    /// `self = self · other`.
    pub fn multiply(&mut self, other: &Matrix2) -> &mut Self {
        let a = self.elements;
        let b = &other.elements;
        self.elements = [
            a[0] * b[0] + a[2] * b[1],
            a[1] * b[0] + a[3] * b[1],
            a[0] * b[2] + a[2] * b[3],
            a[1] * b[2] + a[3] * b[3],
        ];
        self
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.elements.swap(1, 2);
        self
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;
        e[0] * e[3] - e[2] * e[1]
    }

    pub fn equals(&self, other: &Matrix2) -> bool {
        self.elements.iter().zip(&other.elements).all(|(a, b)| approx_eq(*a, *b))
    }
}
