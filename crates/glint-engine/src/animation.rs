//! Per-frame rotation of a model matrix around a pivot.

use glint_math::{Matrix4, Vector3};

/// Accumulates a fixed rotation into a model matrix once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    model: Matrix4,
    pivot: Vector3,
    step: Matrix4,
    frames: u64,
}

impl Spin {
    pub fn new(model: Matrix4, pivot: Vector3, step: Matrix4) -> Self {
        Self { model, pivot, step, frames: 0 }
    }

    /// Tumbles by `radian` around X, then Y, then Z every frame.
    pub fn tumble(model: Matrix4, pivot: Vector3, radian: f32) -> Self {
        let mut step = Matrix4::IDENTITY;
        step.rotate_x(radian).rotate_y(radian).rotate_z(radian);
        Self::new(model, pivot, step)
    }

    /// Advances one frame and returns the updated model matrix.
    pub fn step(&mut self) -> &Matrix4 {
        self.model.rotate_about(self.pivot, &self.step);
        self.frames += 1;
        log::trace!("spin frame {}", self.frames);
        &self.model
    }

    #[inline]
    pub fn model(&self) -> &Matrix4 {
        &self.model
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
