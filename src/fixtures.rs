//! # Fixture Set
//!
//! The placeholder photo set used by image-handling tests: one animal per
//! file, covering square, portrait and landscape orientations and both PNG
//! and JPEG containers.
//!
//! | File | Size | Format |
//! |------|------|--------|
//! | lion_square.png | 1024x1024 | PNG |
//! | elephant_square.jpg | 512x512 | JPEG |
//! | giraffe_portrait.png | 720x1280 | PNG |
//! | ... | | |
//!
//! PNG fixtures are written directly. JPEG fixtures go through a
//! [`LossyEncoder`] and are skipped when none is configured.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::art;
use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::encode::png::PngEncoder;
use crate::error::SavannaError;
use crate::handoff::{self, LossyEncoder};

/// Output container for a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Png,
    Jpeg,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpg",
        }
    }
}

/// One entry of the fixture manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    /// Name of the [`art`] scene drawn on the canvas
    pub scene: &'static str,
    pub format: Format,
}

impl Fixture {
    const fn new(
        file_name: &'static str,
        width: u32,
        height: u32,
        scene: &'static str,
        format: Format,
    ) -> Self {
        Self {
            file_name,
            width,
            height,
            scene,
            format,
        }
    }

    /// Create the canvas and draw the scene on it.
    pub fn render(&self) -> Result<Canvas, SavannaError> {
        let scene =
            art::by_name(self.scene).ok_or_else(|| SavannaError::UnknownScene(self.scene.into()))?;
        let mut canvas = Canvas::new(self.width, self.height)?;
        scene.draw(&mut canvas);
        Ok(canvas)
    }

    /// Render and write this fixture into `out_dir`.
    ///
    /// Returns the written path, or `None` if the fixture was skipped
    /// (JPEG without an encoder, or the encoder reported failure).
    pub fn write(
        &self,
        out_dir: &Path,
        png: &PngEncoder,
        lossy: Option<&dyn LossyEncoder>,
    ) -> Result<Option<PathBuf>, SavannaError> {
        let path = out_dir.join(self.file_name);

        match self.format {
            Format::Png => {
                let bytes = png.encode(&self.render()?)?;
                fs::write(&path, &bytes)?;
                log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
                Ok(Some(path))
            }
            Format::Jpeg => {
                let Some(encoder) = lossy else {
                    log::warn!("Skipping {}: no JPEG encoder configured", self.file_name);
                    return Ok(None);
                };
                let status = handoff::handoff(&self.render()?, encoder, &path)?;
                if status.success() {
                    log::info!("Wrote {}", path.display());
                    Ok(Some(path))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// The full manifest, in generation order.
pub static FIXTURES: &[Fixture] = &[
    Fixture::new("lion_square.png", 1024, 1024, "lion", Format::Png),
    Fixture::new("elephant_square.jpg", 512, 512, "elephant", Format::Jpeg),
    Fixture::new("giraffe_portrait.png", 720, 1280, "giraffe", Format::Png),
    Fixture::new("zebra_portrait.jpg", 1080, 1920, "zebra", Format::Jpeg),
    Fixture::new("rhino_landscape.png", 1280, 720, "rhino", Format::Png),
    Fixture::new("buffalo_landscape.jpg", 1920, 1080, "buffalo", Format::Jpeg),
    Fixture::new("cheetah_portrait.png", 750, 1334, "cheetah", Format::Png),
    Fixture::new("hyena_landscape.jpg", 1600, 900, "hyena", Format::Jpeg),
    Fixture::new("leopard_square.png", 600, 600, "leopard", Format::Png),
    Fixture::new("hippo_square.jpg", 1000, 1000, "hippo", Format::Jpeg),
    Fixture::new("wildebeest_landscape.png", 1200, 800, "wildebeest", Format::Png),
    Fixture::new("ostrich_portrait.jpg", 800, 1200, "ostrich", Format::Jpeg),
];

/// Write every fixture into `config.out_dir`.
///
/// Fixtures are rendered in parallel, one canvas per task. Returns the paths
/// actually written, in manifest order.
pub fn generate(
    config: &GeneratorConfig,
    lossy: Option<&dyn LossyEncoder>,
) -> Result<Vec<PathBuf>, SavannaError> {
    fs::create_dir_all(&config.out_dir)?;
    let png = config.png_encoder();

    let written: Vec<Option<PathBuf>> = FIXTURES
        .par_iter()
        .map(|fixture| fixture.write(&config.out_dir, &png, lossy))
        .collect::<Result<_, _>>()?;

    Ok(written.into_iter().flatten().collect())
}
