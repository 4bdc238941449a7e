//! # PNG Encoder
//!
//! Writes a [`Canvas`] as an 8-bit truecolor PNG (color type 2, no alpha,
//! no interlacing, no ancillary chunks).
//!
//! ## Stream Layout
//!
//! ```text
//! 89 50 4E 47 0D 0A 1A 0A          signature
//! ┌────────┬──────┬─────────┬─────┐
//! │ length │ type │ payload │ CRC │  repeated: IHDR, IDAT (1+), IEND
//! │ u32 BE │ 4 B  │ length  │ BE  │
//! └────────┴──────┴─────────┴─────┘
//!                  CRC32 covers type + payload
//! ```
//!
//! ## Scanlines
//!
//! Each row is prefixed with filter type 0 (None) followed by `R,G,B` per
//! pixel. The whole buffer is compressed as one zlib stream. Decoders
//! rebuild the pixel grid from the decompressed bytes, so the filter byte
//! is part of the output contract.
//!
//! ```text
//! row 0: 00 R G B R G B ...
//! row 1: 00 R G B R G B ...
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::canvas::Canvas;
use crate::error::SavannaError;

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

/// Default zlib level.
pub const DEFAULT_LEVEL: u32 = 6;

/// Largest chunk payload the format allows (2^31 - 1).
const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

// ============================================================================
// ENCODER
// ============================================================================

/// PNG encoder settings.
///
/// The same settings on pixel-identical canvases always give byte-identical
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngEncoder {
    level: u32,
    max_idat_len: usize,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            max_idat_len: MAX_CHUNK_LEN,
        }
    }
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// zlib compression level, 0 (store) to 9 (best). Clamped.
    pub fn compression(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }

    /// Split the compressed stream into IDAT chunks of at most `len` bytes.
    pub fn max_idat_len(mut self, len: usize) -> Self {
        self.max_idat_len = len.clamp(1, MAX_CHUNK_LEN);
        self
    }

    /// Encode `canvas` to a complete PNG byte stream.
    ///
    /// ## Errors
    ///
    /// [`SavannaError::Compression`] if zlib fails. No partial stream is
    /// ever returned.
    pub fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, SavannaError> {
        let raw = scanlines(canvas);
        let compressed = compress(&raw, Compression::new(self.level))?;
        let idat_count = compressed.len().div_ceil(self.max_idat_len);

        let mut out = Vec::with_capacity(
            SIGNATURE.len() + (12 + 13) + compressed.len() + 12 * idat_count + 12,
        );
        out.extend_from_slice(&SIGNATURE);
        write_chunk(&mut out, &IHDR, &header(canvas));
        for part in compressed.chunks(self.max_idat_len) {
            write_chunk(&mut out, &IDAT, part);
        }
        write_chunk(&mut out, &IEND, &[]);

        log::debug!(
            "Encoded {}x{} PNG: {} raw -> {} compressed bytes in {} IDAT chunk(s)",
            canvas.width(),
            canvas.height(),
            raw.len(),
            compressed.len(),
            idat_count
        );
        Ok(out)
    }
}

/// Encode with default settings.
pub fn encode(canvas: &Canvas) -> Result<Vec<u8>, SavannaError> {
    PngEncoder::default().encode(canvas)
}

/// Encode `canvas` and write it to `path`.
///
/// The file is only created once the full stream has been built.
pub fn write_png(path: &Path, canvas: &Canvas) -> Result<(), SavannaError> {
    let bytes = encode(canvas)?;
    fs::write(path, &bytes)?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// 13-byte IHDR payload.
fn header(canvas: &Canvas) -> [u8; 13] {
    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&canvas.width().to_be_bytes());
    ihdr[4..8].copy_from_slice(&canvas.height().to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGB;
    // compression, filter and interlace methods are all 0
    ihdr
}

/// Pre-compression image data: one filter byte plus `3 * width` bytes per row.
pub fn scanlines(canvas: &Canvas) -> Vec<u8> {
    let stride = 1 + canvas.width() as usize * 3;
    let mut raw = Vec::with_capacity(stride * canvas.height() as usize);
    for row in canvas.rows() {
        raw.push(FILTER_NONE);
        for px in row {
            raw.extend_from_slice(&px.to_array());
        }
    }
    raw
}

fn compress(raw: &[u8], level: Compression) -> Result<Vec<u8>, SavannaError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2 + 64), level);
    encoder.write_all(raw).map_err(SavannaError::Compression)?;
    encoder.finish().map_err(SavannaError::Compression)
}

/// IEEE CRC32 over chunk type followed by payload.
pub fn crc32(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(data);
    crc.sum()
}

fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    debug_assert!(data.len() <= MAX_CHUNK_LEN);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(tag, data).to_be_bytes());
}

// ============================================================================
// CHUNK READER
// ============================================================================

/// One chunk as stored in a PNG stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: [u8; 4],
    pub data: &'a [u8],
    /// CRC field as stored in the stream
    pub crc: u32,
}

impl Chunk<'_> {
    /// Chunk type as text, or `"????"` if it is not ASCII.
    pub fn tag_str(&self) -> &str {
        std::str::from_utf8(&self.tag).unwrap_or("????")
    }

    pub fn computed_crc(&self) -> u32 {
        crc32(&self.tag, self.data)
    }

    pub fn crc_ok(&self) -> bool {
        self.crc == self.computed_crc()
    }
}

/// Split a PNG stream into its chunks, stopping after IEND.
///
/// CRCs are not checked here; see [`Chunk::crc_ok`].
///
/// ## Errors
///
/// [`SavannaError::Format`] on a bad signature, a truncated chunk, or a
/// stream that ends without IEND.
pub fn chunks(bytes: &[u8]) -> Result<Vec<Chunk<'_>>, SavannaError> {
    let rest = bytes
        .strip_prefix(&SIGNATURE)
        .ok_or_else(|| SavannaError::Format("missing PNG signature".to_string()))?;

    let mut out = Vec::new();
    let mut pos = 0usize;
    while pos < rest.len() {
        let truncated = || SavannaError::Format(format!("truncated chunk at offset {}", pos + 8));
        let head = rest.get(pos..pos + 8).ok_or_else(truncated)?;
        let len = u32::from_be_bytes([head[0], head[1], head[2], head[3]]) as usize;
        let tag = [head[4], head[5], head[6], head[7]];
        let data_end = pos
            .checked_add(8 + len)
            .filter(|&end| end <= rest.len())
            .ok_or_else(truncated)?;
        let crc_bytes = rest.get(data_end..data_end + 4).ok_or_else(truncated)?;

        out.push(Chunk {
            tag,
            data: &rest[pos + 8..data_end],
            crc: u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]),
        });
        pos = data_end + 4;

        if tag == IEND {
            return Ok(out);
        }
    }

    Err(SavannaError::Format("stream ended without IEND".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgb;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_signature_and_chunk_order() {
        let canvas = Canvas::new(3, 2).unwrap();
        let png = encode(&canvas).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);

        let tags: Vec<_> = chunks(&png).unwrap().iter().map(|c| c.tag).collect();
        assert_eq!(tags, vec![IHDR, IDAT, IEND]);
    }

    #[test]
    fn test_ihdr_payload() {
        let canvas = Canvas::new(300, 2).unwrap();
        let png = encode(&canvas).unwrap();
        // length 13, then "IHDR"
        assert_eq!(&png[8..16], &[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
        assert_eq!(
            &png[16..29],
            &[0, 0, 1, 44, 0, 0, 0, 2, 8, 2, 0, 0, 0]
        );
    }

    #[test]
    fn test_iend_is_fixed() {
        let canvas = Canvas::new(1, 1).unwrap();
        let png = encode(&canvas).unwrap();
        assert_eq!(
            &png[png.len() - 12..],
            &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_crc32_known_value() {
        assert_eq!(crc32(&IEND, &[]), 0xAE42_6082);
    }

    #[test]
    fn test_scanline_layout() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(1, 0, Rgb::new(1, 2, 3));
        let raw = scanlines(&canvas);
        assert_eq!(
            raw,
            vec![
                0, 135, 206, 235, 1, 2, 3, //
                0, 189, 183, 107, 189, 183, 107,
            ]
        );
    }

    #[test]
    fn test_idat_inflates_to_scanlines() {
        let mut canvas = Canvas::new(17, 11).unwrap();
        canvas.circle(8, 5, 4, Rgb::BLACK);
        let png = encode(&canvas).unwrap();
        let parsed = chunks(&png).unwrap();
        assert!(parsed.iter().all(Chunk::crc_ok));
        assert_eq!(inflate(parsed[1].data), scanlines(&canvas));
    }

    #[test]
    fn test_split_idat() {
        let canvas = Canvas::new(40, 40).unwrap();
        let png = PngEncoder::new()
            .compression(0)
            .max_idat_len(1000)
            .encode(&canvas)
            .unwrap();
        let parsed = chunks(&png).unwrap();
        let idats: Vec<_> = parsed.iter().filter(|c| c.tag == IDAT).collect();
        // stored blocks: 40 * 121 raw bytes, more than 4 KiB compressed
        assert!(idats.len() >= 5);
        assert!(idats.iter().all(|c| c.data.len() <= 1000));

        let joined: Vec<u8> = idats.iter().flat_map(|c| c.data.iter().copied()).collect();
        assert_eq!(inflate(&joined), scanlines(&canvas));
    }

    #[test]
    fn test_deterministic() {
        let mut a = Canvas::new(32, 32).unwrap();
        a.line(0, 31, 31, 0, Rgb::WHITE);
        let b = a.clone();
        assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
    }

    #[test]
    fn test_chunks_rejects_bad_input() {
        assert!(matches!(chunks(b"GIF89a"), Err(SavannaError::Format(_))));

        let png = encode(&Canvas::new(4, 4).unwrap()).unwrap();
        assert!(chunks(&png[..png.len() - 3]).is_err());
        assert!(chunks(&png[..png.len() - 12]).is_err());
    }

    #[test]
    fn test_corrupted_crc_detected() {
        let mut png = encode(&Canvas::new(4, 4).unwrap()).unwrap();
        // flip a bit inside the IHDR width field
        png[19] ^= 0x01;
        let parsed = chunks(&png).unwrap();
        assert!(!parsed[0].crc_ok());
        assert!(parsed[1].crc_ok());
    }
}
