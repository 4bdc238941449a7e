//! # Leopard
//!
//! Gold body with ten rosettes: a brown ring around a black core, staggered
//! over two rows.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const COAT: Rgb = Rgb::new(218, 165, 32);
const ROSETTE: Rgb = Rgb::new(139, 69, 19);

const SPOTS: i32 = 10;

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let (bw, bh) = (body.w, body.h);
    body.fill(canvas, COAT);

    for i in 0..SPOTS {
        let x = body.x + (i * bw) / SPOTS + bw / 20;
        let y = body.y + ((i % 2) * bh) / 2 + bh / 4;
        canvas.circle(x, y, bh / 10, ROSETTE);
        canvas.circle(x, y, bh / 14, Rgb::BLACK);
    }
}
