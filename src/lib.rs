//! Procedural village icon generator.
//!
//! Renders the fixed village scene (grass bands, path, house, roof, door,
//! window, tree) into a square pixel canvas with a small software
//! rasterizer, then serializes the result as a plain-text PPM (P3) file.
//!
//! The pipeline is linear and deterministic: the scene composes an ordered
//! list of draw commands, the painter replays them onto the canvas (later
//! commands overwrite earlier ones), and the serializer writes the canvas
//! out. Identical configs always produce byte-identical files.
//!
//! # Example
//!
//! ```no_run
//! use icongen::{generate, GeneratorConfig};
//!
//! # fn main() -> icongen::Result<()> {
//! let config = GeneratorConfig {
//!     size: 256,
//!     ..Default::default()
//! };
//! let path = generate(&config)?;
//! println!("icon written to {}", path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::{debug, info};

pub mod error;
pub mod ppm;
pub mod rendering;
pub mod scene;

pub use error::{Error, Result};
pub use rendering::{Canvas, Color, PaintCommand};

/// Configuration for one generation run.
///
/// The defaults reproduce the shipped 1024x1024 app icon; tests shrink
/// `size` and point `output` somewhere disposable.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Canvas dimension; the output image is always square
    pub size: u32,
    /// Destination of the serialized PPM, relative to the working directory
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            output: PathBuf::from("assets/app-icon/babushka-village-1024.ppm"),
        }
    }
}

/// Render the scene into a fresh canvas.
///
/// Pure in-memory transform: no I/O, and the same config always produces
/// the same pixels.
pub fn render(config: &GeneratorConfig) -> Canvas {
    let n = config.size as i32;
    let commands = scene::compose(n);
    debug!("Composed {} draw commands for a {n}x{n} scene", commands.len());

    let mut canvas = Canvas::new(config.size as usize, scene::BACKGROUND);
    rendering::paint(&mut canvas, &commands);
    canvas
}

/// Render the scene and write it to `config.output`, creating parent
/// directories as needed. Returns the path written.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    let canvas = render(config);
    let document = ppm::encode(&canvas);
    if log::log_enabled!(log::Level::Debug) {
        debug!("Document sha256: {}", ppm::digest(&document));
    }
    ppm::save(&document, &config.output)?;
    info!(
        "Generated {}x{} icon at {}",
        config.size,
        config.size,
        config.output.display()
    );
    Ok(config.output.clone())
}
