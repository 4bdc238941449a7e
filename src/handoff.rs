//! # Lossy Encoder Handoff
//!
//! Some fixtures are stored as JPEG. Lossy compression is not implemented
//! here; instead the canvas is written as a raw `P6` pixmap and an external
//! program converts it:
//!
//! ```text
//! Canvas ──export──► dest.jpg.ppm ──<encoder> dest.jpg.ppm dest.jpg──► dest.jpg
//!                        (removed afterwards)
//! ```
//!
//! The encoder's exit status is returned to the caller as-is. Whether a
//! failed conversion matters is the caller's decision.
//!
//! ## Example
//!
//! ```no_run
//! use savanna::canvas::Canvas;
//! use savanna::handoff::{self, ExternalEncoder};
//! use std::path::Path;
//!
//! let canvas = Canvas::new(800, 600)?;
//! let encoder = ExternalEncoder::new("./ppm_to_jpeg");
//! let status = handoff::handoff(&canvas, &encoder, Path::new("out.jpg"))?;
//! assert!(status.success());
//! # Ok::<(), savanna::SavannaError>(())
//! ```

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::canvas::Canvas;
use crate::encode::ppm;
use crate::error::SavannaError;

/// Something that turns a `P6` file into a compressed image file.
pub trait LossyEncoder: Send + Sync {
    /// Convert the pixmap at `raw` into `dest`.
    fn encode(&self, raw: &Path, dest: &Path) -> Result<ExitStatus, SavannaError>;
}

/// Runs `program [args..] <raw> <dest>` as a child process.
#[derive(Debug, Clone)]
pub struct ExternalEncoder {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ExternalEncoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before the input and output paths.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl LossyEncoder for ExternalEncoder {
    fn encode(&self, raw: &Path, dest: &Path) -> Result<ExitStatus, SavannaError> {
        log::debug!(
            "Running {} on {} -> {}",
            self.program.display(),
            raw.display(),
            dest.display()
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(raw)
            .arg(dest)
            .status()?;
        Ok(status)
    }
}

/// Path of the temporary pixmap for `dest` (`dest` + `.ppm`).
pub fn raw_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".ppm");
    PathBuf::from(name)
}

/// Write `canvas` as a pixmap next to `dest`, run `encoder`, then delete the
/// pixmap.
///
/// ## Errors
///
/// I/O errors writing the pixmap or starting the encoder. A non-zero exit
/// status is not an error; it is logged and returned.
pub fn handoff(
    canvas: &Canvas,
    encoder: &dyn LossyEncoder,
    dest: &Path,
) -> Result<ExitStatus, SavannaError> {
    let raw = raw_path(dest);
    ppm::write_ppm(&raw, canvas)?;

    let result = encoder.encode(&raw, dest);
    if let Err(e) = fs::remove_file(&raw) {
        log::warn!("Could not remove {}: {}", raw.display(), e);
    }

    let status = result?;
    if !status.success() {
        log::warn!("Lossy encoder exited with {} for {}", status, dest.display());
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_path_appends_extension() {
        assert_eq!(
            raw_path(Path::new("images/zebra_portrait.jpg")),
            PathBuf::from("images/zebra_portrait.jpg.ppm")
        );
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let dir = std::env::temp_dir().join(format!("savanna-handoff-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let dest = dir.join("missing.jpg");

        let canvas = Canvas::new(4, 4).unwrap();
        let encoder = ExternalEncoder::new(dir.join("no-such-encoder"));
        let result = handoff(&canvas, &encoder, &dest);

        assert!(matches!(result, Err(SavannaError::Io(_))));
        // temporary pixmap is cleaned up even when the encoder cannot start
        assert!(!raw_path(&dest).exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
