//! # Hyena
//!
//! Brown body with a darker saddle over the middle third of its back.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const COAT: Rgb = Rgb::new(160, 82, 45);
const SADDLE: Rgb = Rgb::new(101, 67, 33);

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let third = body.w / 3;
    body.fill(canvas, COAT);
    canvas.rect(body.x + third, body.y, body.x + third * 2, body.y + body.h / 2, SADDLE);
}
