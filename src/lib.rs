//! # Savanna - Placeholder Image Fixtures
//!
//! Savanna draws simple, deterministic placeholder pictures and writes them
//! as real image files for tests that need photos on disk. It provides:
//!
//! - **Canvas**: an RGB pixel grid with clipped rect, circle and line primitives
//! - **Scenes**: twelve procedural animals scaled to any canvas size
//! - **PNG encoder**: signature, IHDR, zlib IDAT, IEND, CRC32-checked chunks
//! - **PPM export + handoff**: raw pixmaps for an external JPEG converter
//!
//! ## Quick Start
//!
//! ```no_run
//! use savanna::{art, canvas::Canvas, encode::png};
//! use std::path::Path;
//!
//! let mut canvas = Canvas::new(1280, 720)?;
//! art::by_name("rhino").unwrap().draw(&mut canvas);
//! png::write_png(Path::new("rhino.png"), &canvas)?;
//!
//! # Ok::<(), savanna::error::SavannaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Pixel grid and drawing primitives |
//! | [`art`] | Scene drawing procedures |
//! | [`encode`] | PNG and PPM serializers |
//! | [`handoff`] | External lossy encoder boundary |
//! | [`fixtures`] | The fixture manifest and batch generator |
//! | [`config`] | Generator settings |
//! | [`error`] | Error types |

pub mod art;
pub mod canvas;
pub mod config;
pub mod encode;
pub mod error;
pub mod fixtures;
pub mod handoff;

// Re-exports for convenience
pub use canvas::{Canvas, Rgb};
pub use config::GeneratorConfig;
pub use error::SavannaError;
