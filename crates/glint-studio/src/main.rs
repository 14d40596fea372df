mod config;

use anyhow::{ensure, Context, Result};
use glint_engine::animation::Spin;
use glint_engine::camera::Camera;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::uniform::SceneUniforms;
use glint_math::{Matrix4, Vector3};

use crate::config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          GLINT STUDIO v0.1             ║");
    println!("  ║   column-major math  ·  headless demo  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = DemoConfig::from_env().context("reading demo configuration")?;
    log::info!("config: {config:?}");

    inverse_check()?;
    run_frames(&config)
}

/// Translation, its inverse, and their product, printed row by row.
#[rustfmt::skip]
fn inverse_check() -> Result<()> {
    let mut m = Matrix4::IDENTITY;
    m.set(
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 2.0,
        0.0, 0.0, 1.0, 3.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let inverse = m.try_inverse().context("translation should be invertible")?;
    let product = m * inverse;

    println!("  ── matrix ──────────────────────────");
    println!("{m}");
    println!("  ── inverse ─────────────────────────");
    println!("{inverse}");
    println!("  ── product ─────────────────────────");
    println!("{product}");
    println!();

    ensure!(product.equals(&Matrix4::IDENTITY), "m * inverse(m) is not identity");
    Ok(())
}

/// Tumbles a cube-sized model in front of the default camera and builds the
/// uniform block for every frame.
fn run_frames(config: &DemoConfig) -> Result<()> {
    let camera = Camera::default();
    let mut spin = Spin::tumble(
        Matrix4::scaling(Vector3::new(100.0, 100.0, 100.0)),
        Vector3::ORIGIN,
        config.spin_degrees_per_frame.to_radians(),
    );

    let mut uploaded = 0usize;
    for frame in 0..config.frames {
        let uniforms = SceneUniforms::new(spin.step(), &camera, config.viewport)
            .with_context(|| format!("building uniforms for frame {frame}"))?;
        uploaded += uniforms.as_bytes().len();

        if frame % 30 == 0 {
            let corner = uniforms.model.transform_point(Vector3::new(1.0, 1.0, 1.0));
            log::info!(
                "frame {frame}: corner at ({:.2}, {:.2}, {:.2})",
                corner.x,
                corner.y,
                corner.z
            );
        }
    }

    println!("  {} frames, {} uniform bytes", spin.frames(), uploaded);
    println!("  final model:");
    println!("{}", spin.model());
    println!();
    Ok(())
}
