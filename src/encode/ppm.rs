//! # Binary PPM Export
//!
//! Flat `P6` pixmap used only to hand pixels to an external lossy encoder.
//!
//! ```text
//! P6\n
//! <width> <height>\n
//! 255\n
//! R G B R G B ...          width * height * 3 bytes, row-major, no padding
//! ```

use std::fs;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::SavannaError;

/// Largest channel value; pixels are always 8-bit.
const MAX_VALUE: u8 = 255;

/// The ASCII header, including the single whitespace byte before the raster.
pub fn header(canvas: &Canvas) -> String {
    format!("P6\n{} {}\n{}\n", canvas.width(), canvas.height(), MAX_VALUE)
}

/// Serialize `canvas` as a binary PPM.
pub fn export(canvas: &Canvas) -> Vec<u8> {
    let header = header(canvas);
    let mut out = Vec::with_capacity(header.len() + canvas.pixels().len() * 3);
    out.extend_from_slice(header.as_bytes());
    for px in canvas.pixels() {
        out.extend_from_slice(&px.to_array());
    }
    out
}

/// Write `canvas` as a binary PPM to `path`.
pub fn write_ppm(path: &Path, canvas: &Canvas) -> Result<(), SavannaError> {
    let bytes = export(canvas);
    fs::write(path, &bytes)?;
    log::debug!("Wrote raw pixmap {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
