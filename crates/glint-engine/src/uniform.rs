//! Per-frame shader uniform block.

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glint_math::Matrix4;

use crate::camera::Camera;
use crate::coords::Viewport;

/// Matrices uploaded once per draw, laid out for a std140 uniform block.
///
/// Every matrix is column-major; `camera_position` is `[x, y, z, 1]` so the
/// block stays 16-byte aligned.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model: Matrix4,
    pub view: Matrix4,
    pub projection: Matrix4,
    /// Inverse-transpose of `model`, for lighting normals.
    pub normal: Matrix4,
    pub camera_position: [f32; 4],
}

impl SceneUniforms {
    pub fn new(model: &Matrix4, camera: &Camera, viewport: Viewport) -> Result<Self> {
        let eye = camera.eye;
        Ok(Self {
            model: *model,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(viewport)?,
            normal: model.normal_matrix(),
            camera_position: [eye.x, eye.y, eye.z, 1.0],
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
