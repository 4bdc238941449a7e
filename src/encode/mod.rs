//! # Canvas Encoders
//!
//! Serializers that turn a finished [`Canvas`](crate::canvas::Canvas) into
//! bytes.
//!
//! ## Modules
//!
//! - [`png`]: PNG container (IHDR, zlib IDAT, IEND), 8-bit truecolor
//! - [`ppm`]: binary PPM (`P6`) for handing pixels to an external encoder
//!
//! ## Usage Example
//!
//! ```
//! use savanna::canvas::Canvas;
//! use savanna::encode::{png, ppm};
//!
//! let canvas = Canvas::new(16, 9)?;
//! let png_bytes = png::encode(&canvas)?;
//! let ppm_bytes = ppm::export(&canvas);
//!
//! assert_eq!(&png_bytes[..8], &png::SIGNATURE);
//! assert!(ppm_bytes.starts_with(b"P6\n16 9\n255\n"));
//! # Ok::<(), savanna::SavannaError>(())
//! ```

pub mod png;
pub mod ppm;

pub use png::{PngEncoder, write_png};
pub use ppm::write_ppm;
