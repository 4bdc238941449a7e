//! # Zebra
//!
//! White body crossed by black vertical stripes every sixth of its width.

use super::Body;
use crate::canvas::{Canvas, Rgb};

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    body.fill(canvas, Rgb::WHITE);

    let stride = body.w / 6;
    if stride <= 0 {
        return;
    }
    let stripe_w = body.w / 12;
    for i in (0..body.w).step_by(stride as usize) {
        canvas.rect(body.x + i, body.y, body.x + i + stripe_w, body.bottom(), Rgb::BLACK);
    }
}
