//! Transform targets accepted by [`Vector2::transform`](crate::Vector2::transform)
//! and [`Vector3::transform`](crate::Vector3::transform).
//!
//! The `From` impls let callers pass a reference to the matrix or quaternion
//! directly: `v.transform(&m)`.

use crate::{Matrix2, Matrix3, Matrix4, Quaternion};

/// Anything a [`Vector2`](crate::Vector2) can be transformed by.
#[derive(Debug, Copy, Clone)]
pub enum Transform2<'a> {
    Matrix2(&'a Matrix2),
    /// 2D affine matrix; the vector is treated as a point.
    Matrix3(&'a Matrix3),
    /// The vector is treated as the point `(x, y, 0, 1)`.
    Matrix4(&'a Matrix4),
}

/// Anything a [`Vector3`](crate::Vector3) can be transformed by.
#[derive(Debug, Copy, Clone)]
pub enum Transform3<'a> {
    Matrix3(&'a Matrix3),
    /// The vector is treated as the point `(x, y, z, 1)`.
    Matrix4(&'a Matrix4),
    Quaternion(&'a Quaternion),
}

impl<'a> From<&'a Matrix2> for Transform2<'a> {
    fn from(m: &'a Matrix2) -> Self {
        Transform2::Matrix2(m)
    }
}

impl<'a> From<&'a Matrix3> for Transform2<'a> {
    fn from(m: &'a Matrix3) -> Self {
        Transform2::Matrix3(m)
    }
}

impl<'a> From<&'a Matrix4> for Transform2<'a> {
    fn from(m: &'a Matrix4) -> Self {
        Transform2::Matrix4(m)
    }
}

impl<'a> From<&'a Matrix3> for Transform3<'a> {
    fn from(m: &'a Matrix3) -> Self {
        Transform3::Matrix3(m)
    }
}

impl<'a> From<&'a Matrix4> for Transform3<'a> {
    fn from(m: &'a Matrix4) -> Self {
        Transform3::Matrix4(m)
    }
}

impl<'a> From<&'a Quaternion> for Transform3<'a> {
    fn from(q: &'a Quaternion) -> Self {
        Transform3::Quaternion(q)
    }
}
