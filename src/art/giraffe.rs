//! # Giraffe
//!
//! A squat yellow body (quarter of the canvas on each axis), a neck as tall
//! as the body, a head on top, and five alternating brown spots.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const COAT: Rgb = Rgb::new(218, 165, 32);
const SPOT: Rgb = Rgb::new(139, 69, 19);

const SPOTS: i32 = 5;

pub fn draw(canvas: &mut Canvas) {
    let body = Body::new(canvas, 4, 4);
    let (bx, by, bw, bh) = (body.x, body.y, body.w, body.h);
    body.fill(canvas, COAT);

    let neck_h = bh;
    let neck_l = bx + bw / 2 - bw / 8;
    let neck_r = bx + bw / 2 + bw / 8;
    canvas.rect(neck_l, by - neck_h, neck_r, by, COAT);
    // head
    canvas.rect(neck_l, by - neck_h - bw / 4, neck_r, by - neck_h, COAT);

    for i in 0..SPOTS {
        let x = bx + (i * bw) / SPOTS;
        let y = by + ((i % 2) * bh) / 2;
        canvas.rect(x, y, x + bw / 10, y + bh / 10, SPOT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_alternate_rows() {
        let mut canvas = Canvas::new(720, 1280).unwrap();
        draw(&mut canvas);
        // body 180x320 at (270, 704)
        assert_eq!(canvas.get(270, 704), Some(SPOT));
        assert_eq!(canvas.get(270 + 36, 704 + 160), Some(SPOT));
        assert_eq!(canvas.get(270 + 36, 704), Some(COAT));
        // neck directly above body center
        assert_eq!(canvas.get(360, 704 - 1), Some(COAT));
    }
}
