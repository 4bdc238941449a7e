//! # Hippo
//!
//! A blue water band across the bottom eighth of the canvas, then a purple
//! body on top of it.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const WATER: Rgb = Rgb::new(65, 105, 225);
const HIDE: Rgb = Rgb::new(147, 112, 219);

pub fn draw(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    canvas.rect(0, h - h / 8, w, h, WATER);
    Body::standard(canvas).fill(canvas, HIDE);
}
