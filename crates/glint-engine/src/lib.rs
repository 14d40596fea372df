//! Glint engine crate.
//!
//! Frame-level pieces built on `glint-math`: the camera, per-frame animation,
//! the uniform block handed to the renderer, and logger setup.

pub mod animation;
pub mod camera;
pub mod coords;
pub mod logging;
pub mod uniform;
