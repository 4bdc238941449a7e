//! # Ostrich
//!
//! Black round body, white tail plume above it, a thin neck and a small
//! white head.

use super::frac;
use crate::canvas::{Canvas, Rgb};

pub fn draw(canvas: &mut Canvas) {
    let r = canvas.width().min(canvas.height()) as i32 / 10;
    let cx = canvas.width() as i32 / 2;
    let cy = frac(canvas.height(), 0.6);

    canvas.circle(cx, cy, r, Rgb::BLACK);
    // tail
    canvas.rect(cx - r / 2, cy - r * 2, cx + r / 2, cy - r, Rgb::WHITE);
    // neck
    canvas.rect(cx, cy - r * 3, cx + r / 3, cy - r * 2, Rgb::WHITE);
    canvas.circle(cx + r / 3, cy - r * 3, r / 3, Rgb::WHITE);
}
