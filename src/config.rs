//! # Generator Configuration
//!
//! Settings for writing the fixture set. Values come from defaults, an
//! optional JSON file, then command-line flags (last wins).
//!
//! ```json
//! {
//!   "out_dir": "tests/images",
//!   "jpeg_encoder": "./ppm_to_jpeg",
//!   "compression": 9
//! }
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::png::{DEFAULT_LEVEL, PngEncoder};
use crate::error::SavannaError;

/// Default output directory for generated fixtures.
pub const DEFAULT_OUT_DIR: &str = "tests/images";

/// Fixture generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the fixtures are written to (created if missing)
    pub out_dir: PathBuf,

    /// External `P6 -> JPEG` converter; JPEG fixtures are skipped without one
    pub jpeg_encoder: Option<PathBuf>,

    /// zlib level for PNG fixtures (0-9)
    pub compression: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            jpeg_encoder: None,
            compression: DEFAULT_LEVEL,
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SavannaError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| match e {
            SavannaError::Config(msg) => {
                SavannaError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, SavannaError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SavannaError::Config(e.to_string()))?;
        if config.compression > 9 {
            return Err(SavannaError::Config(format!(
                "compression must be 0-9, got {}",
                config.compression
            )));
        }
        Ok(config)
    }

    /// PNG encoder for these settings.
    pub fn png_encoder(&self) -> PngEncoder {
        PngEncoder::new().compression(self.compression)
    }
}
