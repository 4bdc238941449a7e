//! # Rhino
//!
//! Slate body, small head block on the right and a pale horn in front of it.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const HIDE: Rgb = Rgb::new(112, 128, 144);
const HORN: Rgb = Rgb::new(192, 192, 192);

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let (bw, bh) = (body.w, body.h);
    let head_y = body.y + bh / 3;

    body.fill(canvas, HIDE);
    canvas.rect(body.right(), head_y, body.right() + bw / 6, head_y + bh / 6, HIDE);
    canvas.rect(
        body.right() + bw / 6,
        head_y,
        body.right() + bw / 4,
        head_y + bh / 8,
        HORN,
    );
}
