//! # Elephant
//!
//! Gray body with a head block to the left, a trunk hanging off the head,
//! and a lighter ear disk.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const HIDE: Rgb = Rgb::new(105, 105, 105);
const EAR: Rgb = Rgb::new(169, 169, 169);

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let (bx, by, bw, bh) = (body.x, body.y, body.w, body.h);
    let head_x = bx - bw / 3;

    body.fill(canvas, HIDE);
    canvas.rect(head_x, by, bx, body.bottom(), HIDE);
    // trunk
    canvas.rect(head_x - bw / 6, by + bh / 3, head_x, by + bh / 3 + bh / 2, HIDE);
    canvas.circle(bx - bw / 6, by + bh / 3, bh / 3, EAR);
}
