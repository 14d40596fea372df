//! Screen-space types shared by the camera and uniform builders.
//!
//! Sizes are in logical pixels. World space is right-handed with +Y up; the
//! camera maps it to OpenGL clip space (x, y, z in [-1, 1]).

mod viewport;

pub use viewport::Viewport;
