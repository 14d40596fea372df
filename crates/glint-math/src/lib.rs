//! Glint math crate.
//!
//! Small, allocation-free vector and matrix types for real-time rendering.
//! All matrices are stored column-major so their buffers can be uploaded as
//! shader uniforms without conversion.
//!
//! | module        | contents                                              |
//! |---------------|-------------------------------------------------------|
//! | `vector2`     | [`Vector2`]: 2D points and offsets                    |
//! | `vector3`     | [`Vector3`]: 3D points, directions, axis rotations    |
//! | `matrix4`     | [`Matrix4`]: affine + projective 3D transforms        |
//! | `compose`     | chainable `translate` / `scale` / `rotate` builders   |
//! | `matrix2/3`   | [`Matrix2`], [`Matrix3`]: 2D transform targets        |
//! | `quaternion`  | [`Quaternion`]: rotations applied to vectors          |
//!
//! In-place operations return `&mut Self` so they chain:
//!
//! ```rust
//! use glint_math::{Matrix4, Vector3};
//!
//! let mut model = Matrix4::IDENTITY;
//! model.translate(Vector3::new(1.0, 2.0, 3.0));
//!
//! let inverse = Matrix4::inverse(&model);
//! assert_eq!(model * inverse, Matrix4::IDENTITY);
//!
//! let mut p = Vector3::new(1.0, 1.0, 1.0);
//! p.transform(&model).scale(2.0);
//! assert_eq!(p, Vector3::new(4.0, 6.0, 8.0));
//! ```

mod compose;
mod error;
pub mod float;
mod matrix2;
mod matrix3;
mod matrix4;
mod quaternion;
mod transform;
mod vector2;
mod vector3;

pub use error::MathError;
pub use float::EPSILON;
pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use transform::{Transform2, Transform3};
pub use vector2::Vector2;
pub use vector3::Vector3;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn matrix_serializes_as_column_major_array() {
        let m = Matrix4::translation(Vector3::new(5.0, 6.0, 7.0));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"elements":[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,5.0,6.0,7.0,1.0]}"#
        );
        let back: Matrix4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn vectors_serialize_as_named_fields() {
        let json = serde_json::to_string(&Vector2::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        let q: Quaternion = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":0.0,"w":1.0}"#).unwrap();
        assert_eq!(q, Quaternion::IDENTITY);
    }
}
