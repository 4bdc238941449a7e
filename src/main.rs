//! # Savanna CLI
//!
//! Command-line interface for drawing placeholder images.
//!
//! ## Usage
//!
//! ```bash
//! # List available scenes and the fixture manifest
//! savanna list
//!
//! # Draw one scene to a PNG
//! savanna draw lion --width 1024 --height 1024 --png lion.png
//!
//! # Write the raw pixmap instead
//! savanna draw zebra --width 1080 --height 1920 --ppm zebra.ppm
//!
//! # Generate the whole fixture set, converting JPEGs with an external tool
//! savanna generate --out-dir tests/images --jpeg-encoder ./ppm_to_jpeg
//!
//! # Check chunk CRCs of a PNG
//! savanna inspect tests/images/lion_square.png
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use savanna::{
    Canvas, GeneratorConfig, SavannaError, art,
    encode::{PngEncoder, png, ppm},
    fixtures::{self, FIXTURES},
    handoff::{ExternalEncoder, LossyEncoder},
};

/// Savanna - placeholder image generator
#[derive(Parser, Debug)]
#[command(name = "savanna")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List scenes and fixtures
    List {
        /// Print the fixture manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a single scene
    Draw {
        /// Scene name
        scene: String,

        /// Canvas width in pixels
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value = "768")]
        height: u32,

        /// Write a PNG file
        #[arg(long, value_name = "FILE", conflicts_with = "ppm", required_unless_present = "ppm")]
        png: Option<PathBuf>,

        /// Write a binary PPM file
        #[arg(long, value_name = "FILE")]
        ppm: Option<PathBuf>,

        /// zlib compression level (0-9)
        #[arg(long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..=9))]
        level: u32,
    },

    /// Generate the full fixture set
    Generate {
        /// JSON config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// External P6-to-JPEG converter, called as `<prog> in.ppm out.jpg`
        #[arg(long, value_name = "PROG")]
        jpeg_encoder: Option<PathBuf>,

        /// zlib compression level (0-9)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
        level: Option<u32>,
    },

    /// List the chunks of a PNG file and verify their CRCs
    Inspect {
        /// PNG file
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SavannaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => {
            if json {
                let text = serde_json::to_string_pretty(FIXTURES)
                    .map_err(|e| SavannaError::Format(e.to_string()))?;
                println!("{}", text);
                return Ok(());
            }

            println!("Available scenes:");
            for name in art::list_scenes() {
                println!("  {}", name);
            }
            println!("\nFixtures:");
            for f in FIXTURES {
                println!("  {:<28} {:>4}x{:<4} {}", f.file_name, f.width, f.height, f.scene);
            }
        }

        Commands::Draw {
            scene,
            width,
            height,
            png,
            ppm,
            level,
        } => {
            let scene_impl = art::by_name(&scene).ok_or_else(|| SavannaError::UnknownScene(scene))?;

            log::info!("Drawing {} ({}x{})", scene_impl.name, width, height);
            let mut canvas = Canvas::new(width, height)?;
            scene_impl.draw(&mut canvas);

            if let Some(path) = png {
                let bytes = PngEncoder::new().compression(level).encode(&canvas)?;
                std::fs::write(&path, &bytes)?;
                println!("Saved to {}", path.display());
            } else if let Some(path) = ppm {
                ppm::write_ppm(&path, &canvas)?;
                println!("Saved to {}", path.display());
            }
        }

        Commands::Generate {
            config,
            out_dir,
            jpeg_encoder,
            level,
        } => {
            let mut settings = match config {
                Some(path) => GeneratorConfig::load(&path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(dir) = out_dir {
                settings.out_dir = dir;
            }
            if jpeg_encoder.is_some() {
                settings.jpeg_encoder = jpeg_encoder;
            }
            if let Some(level) = level {
                settings.compression = level;
            }

            let external = settings.jpeg_encoder.as_ref().map(ExternalEncoder::new);
            let lossy = external.as_ref().map(|e| e as &dyn LossyEncoder);

            let written = fixtures::generate(&settings, lossy)?;
            println!(
                "Wrote {} of {} fixtures to {}",
                written.len(),
                FIXTURES.len(),
                settings.out_dir.display()
            );
        }

        Commands::Inspect { file } => {
            let bytes = std::fs::read(&file)?;
            let chunks = png::chunks(&bytes)?;

            let mut bad = 0;
            for chunk in &chunks {
                let ok = chunk.crc_ok();
                if !ok {
                    bad += 1;
                }
                println!(
                    "{} {:>10} bytes  crc {:08x} {}",
                    chunk.tag_str(),
                    chunk.data.len(),
                    chunk.crc,
                    if ok {
                        "ok".to_string()
                    } else {
                        format!("MISMATCH (expected {:08x})", chunk.computed_crc())
                    }
                );
            }

            if bad > 0 {
                return Err(SavannaError::Format(format!(
                    "{} chunk(s) with bad CRC in {}",
                    bad,
                    file.display()
                )));
            }
        }
    }

    Ok(())
}
