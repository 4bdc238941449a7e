//! # Buffalo
//!
//! Dark body with a pale horn block at each top corner.

use super::Body;
use crate::canvas::{Canvas, Rgb};

const HIDE: Rgb = Rgb::new(60, 40, 20);
const HORN: Rgb = Rgb::new(245, 245, 245);

pub fn draw(canvas: &mut Canvas) {
    let body = Body::standard(canvas);
    let horn_w = body.w / 4;
    let horn_h = body.h / 4;

    body.fill(canvas, HIDE);
    canvas.rect(body.x - horn_w, body.y, body.x, body.y + horn_h, HORN);
    canvas.rect(body.right(), body.y, body.right() + horn_w, body.y + horn_h, HORN);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horns_flank_body() {
        let mut canvas = Canvas::new(1920, 1080).unwrap();
        draw(&mut canvas);
        let body = Body::standard(&canvas);
        let y = body.y as u32;
        assert_eq!(canvas.get(body.x as u32 - 1, y), Some(HORN));
        assert_eq!(canvas.get(body.right() as u32, y), Some(HORN));
        assert_eq!(canvas.get(body.x as u32, y), Some(HIDE));
    }
}
