//! # PNG Round-Trip Tests
//!
//! Encoded canvases are decoded with an independent PNG decoder (`image`)
//! and compared pixel-for-pixel against the source canvas. Chunk framing and
//! CRCs are checked with the crate's own chunk reader plus `flate2`.

use flate2::read::ZlibDecoder;
use pretty_assertions::assert_eq;
use savanna::art;
use savanna::canvas::{Canvas, GROUND, Rgb, SKY};
use savanna::encode::png::{self, PngEncoder};
use savanna::fixtures::{FIXTURES, Format};
use std::io::Read;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Decode PNG bytes to (width, height, RGB bytes).
fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .expect("PNG should decode")
        .to_rgb8();
    (img.width(), img.height(), img.into_raw())
}

/// Assert that `bytes` decodes back to exactly `canvas`.
fn assert_round_trip(canvas: &Canvas, bytes: &[u8]) {
    let (w, h, rgb) = decode(bytes);
    assert_eq!((w, h), (canvas.width(), canvas.height()));
    if rgb != canvas.to_rgb_bytes() {
        let first_diff = rgb
            .iter()
            .zip(canvas.to_rgb_bytes())
            .position(|(a, b)| *a != b)
            .unwrap_or(rgb.len());
        panic!(
            "Decoded pixels differ from canvas at pixel {} (byte {:#06x})",
            first_diff / 3,
            first_diff
        );
    }
}

fn pixel(rgb: &[u8], width: u32, x: u32, y: u32) -> Rgb {
    let i = ((y * width + x) * 3) as usize;
    Rgb::new(rgb[i], rgb[i + 1], rgb[i + 2])
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn test_small_rect_scenario() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    let ink = Rgb::new(1, 2, 3);
    canvas.rect(0, 0, 2, 2, ink);

    let (w, h, rgb) = decode(&png::encode(&canvas).unwrap());
    assert_eq!((w, h), (4, 4));

    for y in 0..4 {
        for x in 0..4 {
            let expected = if x < 2 && y < 2 {
                ink
            } else if y < 3 {
                SKY
            } else {
                GROUND
            };
            assert_eq!(pixel(&rgb, w, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_background_only() {
    let canvas = Canvas::new(5, 9).unwrap();
    let (w, _, rgb) = decode(&png::encode(&canvas).unwrap());
    // floor(9 * 0.75) = 6
    assert_eq!(pixel(&rgb, w, 4, 5), SKY);
    assert_eq!(pixel(&rgb, w, 0, 6), GROUND);
}

#[test]
fn test_one_by_one() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.set(0, 0, Rgb::new(255, 0, 128));
    assert_round_trip(&canvas, &png::encode(&canvas).unwrap());
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_all_scenes_round_trip() {
    for scene in art::SCENES {
        let mut canvas = Canvas::new(97, 61).unwrap();
        scene.draw(&mut canvas);
        assert_round_trip(&canvas, &png::encode(&canvas).unwrap());
    }
}

#[test]
fn test_png_fixtures_round_trip() {
    for fixture in FIXTURES.iter().filter(|f| f.format == Format::Png) {
        let canvas = fixture.render().unwrap();
        let bytes = PngEncoder::new().compression(1).encode(&canvas).unwrap();
        assert_round_trip(&canvas, &bytes);
    }
}

#[test]
fn test_every_compression_level_round_trips() {
    let mut canvas = Canvas::new(50, 40).unwrap();
    art::by_name("leopard").unwrap().draw(&mut canvas);
    canvas.line(0, 0, 49, 39, Rgb::BLACK);

    for level in 0..=9 {
        let bytes = PngEncoder::new().compression(level).encode(&canvas).unwrap();
        assert_round_trip(&canvas, &bytes);
    }
}

#[test]
fn test_split_idat_round_trips() {
    let mut canvas = Canvas::new(64, 64).unwrap();
    art::by_name("cheetah").unwrap().draw(&mut canvas);
    let bytes = PngEncoder::new().max_idat_len(64).encode(&canvas).unwrap();

    let idats = png::chunks(&bytes)
        .unwrap()
        .iter()
        .filter(|c| c.tag == png::IDAT)
        .count();
    assert!(idats > 1);
    assert_round_trip(&canvas, &bytes);
}

// ============================================================================
// CHUNK INTEGRITY
// ============================================================================

#[test]
fn test_every_chunk_crc_matches() {
    let mut canvas = Canvas::new(300, 200).unwrap();
    art::by_name("giraffe").unwrap().draw(&mut canvas);
    let bytes = png::encode(&canvas).unwrap();

    let chunks = png::chunks(&bytes).unwrap();
    assert_eq!(chunks.len(), 3);
    for chunk in &chunks {
        assert!(chunk.crc_ok(), "bad CRC on {}", chunk.tag_str());
    }

    // Chunks account for every byte after the signature
    let framed: usize = chunks.iter().map(|c| 12 + c.data.len()).sum();
    assert_eq!(framed + 8, bytes.len());
}

#[test]
fn test_idat_is_zlib_of_scanlines() {
    let mut canvas = Canvas::new(23, 19).unwrap();
    canvas.circle(11, 9, 7, Rgb::WHITE);
    let bytes = png::encode(&canvas).unwrap();
    let chunks = png::chunks(&bytes).unwrap();

    // zlib header: deflate, 32K window
    assert_eq!(chunks[1].data[0] & 0x0F, 8);

    let mut raw = Vec::new();
    ZlibDecoder::new(chunks[1].data)
        .read_to_end(&mut raw)
        .unwrap();
    assert_eq!(raw.len(), 19 * (1 + 23 * 3));
    assert!(raw.chunks(1 + 23 * 3).all(|row| row[0] == 0));
    assert_eq!(raw, png::scanlines(&canvas));
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_identical_canvases_encode_identically() {
    let draw = || {
        let mut canvas = Canvas::new(128, 96).unwrap();
        art::by_name("elephant").unwrap().draw(&mut canvas);
        canvas
    };
    let a = png::encode(&draw()).unwrap();
    let b = png::encode(&draw()).unwrap();
    assert_eq!(a, b);
}
