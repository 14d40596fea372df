use anyhow::{bail, ensure, Context, Result};
use glint_engine::coords::Viewport;

/// Headless demo settings.
///
/// Each field can be overridden from the environment:
/// `GLINT_FRAMES`, `GLINT_VIEWPORT` (`WIDTHxHEIGHT`), `GLINT_SPIN_DEGREES`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub frames: u32,
    pub viewport: Viewport,
    pub spin_degrees_per_frame: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            viewport: Viewport::new(500.0, 500.0),
            spin_degrees_per_frame: 1.0,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("GLINT_FRAMES") {
            config.frames = raw
                .trim()
                .parse()
                .with_context(|| format!("GLINT_FRAMES: not a frame count: {raw:?}"))?;
        }

        if let Some(raw) = lookup("GLINT_VIEWPORT") {
            config.viewport =
                parse_viewport(&raw).with_context(|| format!("GLINT_VIEWPORT: {raw:?}"))?;
        }

        if let Some(raw) = lookup("GLINT_SPIN_DEGREES") {
            config.spin_degrees_per_frame = raw
                .trim()
                .parse()
                .with_context(|| format!("GLINT_SPIN_DEGREES: not a number: {raw:?}"))?;
            ensure!(
                config.spin_degrees_per_frame.is_finite(),
                "GLINT_SPIN_DEGREES must be finite"
            );
        }

        Ok(config)
    }
}

fn parse_viewport(raw: &str) -> Result<Viewport> {
    let Some((w, h)) = raw.trim().split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT");
    };
    let viewport = Viewport::new(
        w.trim().parse().context("width")?,
        h.trim().parse().context("height")?,
    );
    ensure!(viewport.is_valid(), "viewport must have a positive, finite size");
    Ok(viewport)
}
