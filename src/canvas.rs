//! # RGB Canvas
//!
//! An owned, row-major grid of 8-bit RGB pixels with a handful of
//! integer-only drawing primitives.
//!
//! ## Background
//!
//! Every canvas starts as a two-tone landscape:
//!
//! ```text
//! y = 0        ┌──────────────────────┐
//!              │         sky          │  (135, 206, 235)
//!              │                      │
//! y = h*3/4    ├──────────────────────┤  horizon (truncating division)
//!              │        ground        │  (189, 183, 107)
//! y = h        └──────────────────────┘
//! ```
//!
//! ## Clipping
//!
//! Drawing coordinates are signed. Anything outside `[0, w) × [0, h)` is
//! silently dropped, so shapes may be positioned partly off-canvas without
//! bounds checks at the call site.
//!
//! ## Example
//!
//! ```
//! use savanna::canvas::{Canvas, Rgb};
//!
//! let mut canvas = Canvas::new(8, 8)?;
//! canvas.rect(0, 0, 2, 2, Rgb::new(1, 2, 3));
//! canvas.line(0, 7, 7, 0, Rgb::BLACK);
//! assert_eq!(canvas.get(1, 1), Some(Rgb::new(1, 2, 3)));
//! # Ok::<(), savanna::SavannaError>(())
//! ```

use crate::error::SavannaError;

/// A single pixel. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Background color above the horizon.
pub const SKY: Rgb = Rgb::new(135, 206, 235);

/// Background color from the horizon down.
pub const GROUND: Rgb = Rgb::new(189, 183, 107);

/// In-memory pixel grid.
///
/// Dimensions are fixed at construction. Every cell always holds a
/// defined color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas filled with the sky/ground background.
    ///
    /// ## Errors
    ///
    /// Returns [`SavannaError::InvalidDimensions`] if either dimension is
    /// zero or the grid would not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self, SavannaError> {
        let invalid = SavannaError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(3).is_some())
            .ok_or(invalid)?;

        let horizon = horizon_row(height) as usize;
        let split = horizon * width as usize;
        let mut pixels = vec![SKY; len];
        pixels[split..].fill(GROUND);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// First ground row: `height * 3 / 4`, truncated.
    #[inline]
    pub fn horizon(&self) -> u32 {
        horizon_row(self.height)
    }

    /// Read a pixel. `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Flatten to `R,G,B,R,G,B,...` in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_array());
        }
        out
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width as usize + x
    }

    /// Clip a half-open span `[lo, hi)` to `[0, limit)`.
    #[inline]
    fn clip(lo: i64, hi: i64, limit: u32) -> std::ops::Range<usize> {
        let lo = lo.max(0);
        let hi = hi.min(limit as i64);
        if hi <= lo {
            0..0
        } else {
            lo as usize..hi as usize
        }
    }

    // ========================================================================
    // PRIMITIVES
    // ========================================================================

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = self.index(x as usize, y as usize);
            self.pixels[idx] = color;
        }
    }

    /// Fill `x0 <= x < x1`, `y0 <= y < y1`, clipped to the canvas.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let xs = Self::clip(x0 as i64, x1 as i64, self.width);
        if xs.is_empty() {
            return;
        }
        for y in Self::clip(y0 as i64, y1 as i64, self.height) {
            let start = self.index(xs.start, y);
            let end = self.index(xs.end, y);
            self.pixels[start..end].fill(color);
        }
    }

    /// Fill a disk of radius `r` around `(cx, cy)`.
    ///
    /// Scans the half-open box `[cx-r, cx+r) × [cy-r, cy+r)` and fills
    /// points with `dx² + dy² <= r²`. The inclusive test and the half-open
    /// scan box are both part of the output contract; `r <= 0` draws nothing.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgb) {
        if r <= 0 {
            return;
        }
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let r2 = r * r;
        let xs = Self::clip(cx - r, cx + r, self.width);
        for y in Self::clip(cy - r, cy + r, self.height) {
            let dy = y as i64 - cy;
            for x in xs.clone() {
                let dx = x as i64 - cx;
                if dx * dx + dy * dy <= r2 {
                    let idx = self.index(x, y);
                    self.pixels[idx] = color;
                }
            }
        }
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
    ///
    /// When the doubled error crosses both thresholds in one iteration the
    /// step is diagonal, so a 45° segment plots exactly one pixel per row.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            let idx = self.index(x as usize, y as usize);
            self.pixels[idx] = color;
        }
    }
}

#[inline]
fn horizon_row(height: u32) -> u32 {
    (height as u64 * 3 / 4) as u32
}
