//! # Scene Drawing
//!
//! Procedural placeholder animals used as photo fixtures. Each scene lives in
//! its own module as a plain `draw(&mut Canvas)` function built only from
//! [`Canvas`] primitives.
//!
//! ## Geometry
//!
//! Shapes are sized from canvas fractions so the same scene works at any
//! resolution. Most animals share one body box:
//!
//! ```text
//!           bx = w/2 - body_w/2
//!           ┌─────────────┐  by = trunc(h * 0.55)
//!           │    body     │  body_h = h/5
//!           └─────────────┘
//!             body_w = w/3
//! ```
//!
//! Later calls paint over earlier ones. Nothing here reads the clock or a
//! random source, so a scene drawn twice at the same size is pixel-identical.
//!
//! ## Adding a New Scene
//!
//! 1. Create `src/art/myanimal.rs` with a `pub fn draw(canvas: &mut Canvas)`
//! 2. Add `pub mod myanimal;` below
//! 3. Add a [`Scene`] entry to [`SCENES`]

use crate::canvas::Canvas;

pub mod buffalo;
pub mod cheetah;
pub mod elephant;
pub mod giraffe;
pub mod hippo;
pub mod hyena;
pub mod leopard;
pub mod lion;
pub mod ostrich;
pub mod rhino;
pub mod wildebeest;
pub mod zebra;

/// A named drawing procedure.
pub struct Scene {
    /// Lowercase scene name (e.g., "lion")
    pub name: &'static str,
    draw_fn: fn(&mut Canvas),
}

impl Scene {
    pub const fn new(name: &'static str, draw_fn: fn(&mut Canvas)) -> Self {
        Self { name, draw_fn }
    }

    /// Paint this scene onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        (self.draw_fn)(canvas)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene").field("name", &self.name).finish()
    }
}

/// All available scenes, in display order.
pub static SCENES: &[Scene] = &[
    Scene::new("lion", lion::draw),
    Scene::new("elephant", elephant::draw),
    Scene::new("giraffe", giraffe::draw),
    Scene::new("zebra", zebra::draw),
    Scene::new("rhino", rhino::draw),
    Scene::new("buffalo", buffalo::draw),
    Scene::new("cheetah", cheetah::draw),
    Scene::new("hyena", hyena::draw),
    Scene::new("leopard", leopard::draw),
    Scene::new("hippo", hippo::draw),
    Scene::new("wildebeest", wildebeest::draw),
    Scene::new("ostrich", ostrich::draw),
];

/// Get a scene by name (case insensitive).
pub fn by_name(name: &str) -> Option<&'static Scene> {
    let name = name.to_lowercase();
    SCENES.iter().find(|s| s.name == name)
}

/// List all available scene names.
pub fn list_scenes() -> impl Iterator<Item = &'static str> {
    SCENES.iter().map(|s| s.name)
}

/// `trunc(n * ratio)`, matching how the fixtures were first laid out.
#[inline]
pub(crate) fn frac(n: u32, ratio: f64) -> i32 {
    (n as f64 * ratio) as i32
}

/// Body box anchored at the horizontal center and 55% of the height.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Body {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Body {
    /// Body of `width / w_div` by `height / h_div`.
    pub fn new(canvas: &Canvas, w_div: i32, h_div: i32) -> Self {
        let w = canvas.width() as i32 / w_div;
        let h = canvas.height() as i32 / h_div;
        Self {
            x: canvas.width() as i32 / 2 - w / 2,
            y: frac(canvas.height(), 0.55),
            w,
            h,
        }
    }

    /// The standard third-by-fifth body.
    pub fn standard(canvas: &Canvas) -> Self {
        Self::new(canvas, 3, 5)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn fill(&self, canvas: &mut Canvas, color: crate::canvas::Rgb) {
        canvas.rect(self.x, self.y, self.right(), self.bottom(), color);
    }
}
