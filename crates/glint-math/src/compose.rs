//! Chainable transform builders on [`Matrix4`].
//!
//! Every helper premultiplies: the new transform is applied after whatever
//! the matrix already does, so a chain reads in the order geometry moves.
//!
//! ```rust
//! use glint_math::{Matrix4, Vector3};
//!
//! let mut model = Matrix4::IDENTITY;
//! model
//!     .scale(Vector3::new(2.0, 2.0, 2.0))
//!     .translate(Vector3::new(1.0, 0.0, 0.0));
//!
//! // Scaled first, then moved.
//! assert_eq!(model.transform_point(Vector3::X_AXIS), Vector3::new(3.0, 0.0, 0.0));
//! ```

use crate::{Matrix4, Vector3};

impl Matrix4 {
    pub fn translate(&mut self, v: Vector3) -> &mut Self {
        self.premultiply(&Matrix4::translation(v))
    }

    pub fn scale(&mut self, v: Vector3) -> &mut Self {
        self.premultiply(&Matrix4::scaling(v))
    }

    pub fn rotate_x(&mut self, radian: f32) -> &mut Self {
        self.premultiply(&Matrix4::rotation_x(radian))
    }

    pub fn rotate_y(&mut self, radian: f32) -> &mut Self {
        self.premultiply(&Matrix4::rotation_y(radian))
    }

    pub fn rotate_z(&mut self, radian: f32) -> &mut Self {
        self.premultiply(&Matrix4::rotation_z(radian))
    }

    /// Rotation of `radian` around an arbitrary axis through the origin.
    pub fn rotate(&mut self, radian: f32, axis: Vector3) -> &mut Self {
        self.premultiply(&Matrix4::rotation(radian, axis))
    }

    /// Applies `rotation` around `pivot` instead of the origin.
    pub fn rotate_about(&mut self, pivot: Vector3, rotation: &Matrix4) -> &mut Self {
        self.translate(-pivot);
        self.premultiply(rotation);
        self.translate(pivot)
    }
}
