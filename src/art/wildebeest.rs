//! # Wildebeest
//!
//! Charcoal body with light horns at both top corners.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const HIDE: Rgb = Rgb::new(70, 70, 70);
const HORN: Rgb = Rgb::new(200, 200, 200);

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let horn_w = body.w / 6;
    let horn_bottom = body.y + body.h / 4;

    body.fill(canvas, HIDE);
    canvas.rect(body.x - horn_w, body.y, body.x, horn_bottom, HORN);
    canvas.rect(body.right(), body.y, body.right() + horn_w, horn_bottom, HORN);
}
