//! Look-at camera with a perspective or orthographic lens.

use anyhow::{ensure, Context, Result};
use glint_math::{Matrix4, Vector3};

use crate::coords::Viewport;

/// Lens model. Angles are radians, distances are positive along the view
/// direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Projection {
    /// Symmetric frustum with a full vertical field of view of `fov_y`.
    Perspective { fov_y: f32, near: f32, far: f32 },
    /// Box of the viewport's size centered on the view axis.
    Orthographic { near: f32, far: f32 },
}

impl Projection {
    fn depth_range(self) -> (f32, f32) {
        match self {
            Projection::Perspective { near, far, .. } | Projection::Orthographic { near, far } => {
                (near, far)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub center: Vector3,
    pub up: Vector3,
    pub projection: Projection,
}

impl Default for Camera {
    /// Looking at the origin from `(0, 0, 500)`, 45° vertical fov.
    fn default() -> Self {
        Self {
            eye: Vector3::new(0.0, 0.0, 500.0),
            center: Vector3::ORIGIN,
            up: Vector3::Y_AXIS,
            projection: Projection::Perspective {
                fov_y: 45f32.to_radians(),
                near: 1.0,
                far: 2000.0,
            },
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at(self.eye, self.center, self.up)
    }

    /// Projection for `viewport`.
    ///
    /// Fails for an invalid viewport or an inverted / non-positive depth range.
    pub fn projection_matrix(&self, viewport: Viewport) -> Result<Matrix4> {
        let aspect = viewport
            .aspect()
            .with_context(|| format!("invalid viewport {}x{}", viewport.width, viewport.height))?;

        let (near, far) = self.projection.depth_range();
        ensure!(far > near, "far plane ({far}) must lie beyond near plane ({near})");

        Ok(match self.projection {
            Projection::Perspective { fov_y, near, far } => {
                ensure!(near > 0.0, "perspective near plane must be positive, got {near}");
                ensure!(
                    fov_y > 0.0 && fov_y < std::f32::consts::PI,
                    "perspective fov_y must be in (0, pi), got {fov_y}"
                );
                Matrix4::perspective(fov_y, aspect, near, far)
            }
            Projection::Orthographic { near, far } => {
                let half_w = viewport.width / 2.0;
                let half_h = viewport.height / 2.0;
                Matrix4::orthographic(-half_w, half_w, half_h, -half_h, near, far)
            }
        })
    }

    /// `projection · view`: world space straight to clip space.
    pub fn view_projection(&self, viewport: Viewport) -> Result<Matrix4> {
        let mut vp = self.view_matrix();
        vp.premultiply(&self.projection_matrix(viewport)?);
        Ok(vp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn default_view_is_a_pullback_along_z() {
        let view = Camera::default().view_matrix();
        assert!(view.equals(&Matrix4::translation(Vector3::new(0.0, 0.0, -500.0))));
    }

    #[test]
    fn perspective_uses_viewport_aspect() {
        let camera = Camera::default();
        let p = camera.projection_matrix(viewport()).unwrap();
        let expected = Matrix4::perspective(45f32.to_radians(), 800.0 / 600.0, 1.0, 2000.0);
        assert_eq!(p, expected);
    }

    #[test]
    fn orthographic_box_matches_viewport() {
        let camera = Camera {
            projection: Projection::Orthographic { near: 1.0, far: 1000.0 },
            ..Camera::default()
        };
        let p = camera.projection_matrix(viewport()).unwrap();
        let corner = p.transform_point(Vector3::new(400.0, 300.0, -1.0));
        assert!((corner.x - 1.0).abs() < 1e-6);
        assert!((corner.y - 1.0).abs() < 1e-6);
        assert!((corner.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_projection_puts_center_mid_screen() {
        let camera = Camera::default();
        let clip = camera
            .view_projection(viewport())
            .unwrap()
            .transform_point(camera.center);
        assert!(clip.x.abs() < 1e-6);
        assert!(clip.y.abs() < 1e-6);
        assert!(clip.z > -1.0 && clip.z < 1.0);
    }

    #[test]
    fn invalid_viewport_is_an_error() {
        let err = Camera::default()
            .projection_matrix(Viewport::new(0.0, 600.0))
            .unwrap_err();
        assert!(err.to_string().contains("invalid viewport"));
    }

    #[test]
    fn inverted_depth_range_is_an_error() {
        let camera = Camera {
            projection: Projection::Perspective { fov_y: 1.0, near: 10.0, far: 5.0 },
            ..Camera::default()
        };
        assert!(camera.projection_matrix(viewport()).is_err());

        let camera = Camera {
            projection: Projection::Perspective { fov_y: 1.0, near: 0.0, far: 5.0 },
            ..Camera::default()
        };
        assert!(camera.projection_matrix(viewport()).is_err());
    }
}
