//! # Cheetah
//!
//! Yellow body with twelve small black spots spread across three rows.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const COAT: Rgb = Rgb::new(255, 215, 0);

const SPOTS: i32 = 12;

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    body.fill(canvas, COAT);

    let r = body.h / 10;
    for i in 0..SPOTS {
        let x = body.x + (i * body.w) / SPOTS;
        let y = body.y + ((i % 3) * body.h) / 3;
        canvas.circle(x, y, r, Rgb::BLACK);
    }
}
