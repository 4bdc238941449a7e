//! # Lion
//!
//! Two concentric disks: a dark mane and a golden face, centered
//! horizontally and 60% of the way down.

use super::frac;
use crate::canvas::{Canvas, Rgb};

const MANE: Rgb = Rgb::new(160, 82, 45);
const FACE: Rgb = Rgb::new(238, 173, 45);

/// Extra mane radius beyond the face, in pixels.
const MANE_WIDTH: i32 = 8;

pub fn draw(canvas: &mut Canvas) {
    let cx = canvas.width() as i32 / 2;
    let cy = frac(canvas.height(), 0.6);
    let r = canvas.width().min(canvas.height()) as i32 / 8;
    canvas.circle(cx, cy, r + MANE_WIDTH, MANE);
    canvas.circle(cx, cy, r, FACE);
}
