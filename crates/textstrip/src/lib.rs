//! textstrip - one line of text, one RGBA raster
//!
//! The facade ties the pipeline in `textstrip-core` to the skrifa font engine
//! and exposes the whole lifecycle as plain functions:
//!
//! 1. [`init_engine`] brings the engine up
//! 2. [`create_rasterizer`] opens a face from font bytes
//! 3. [`Rasterizer::rasterize`](textstrip_core::Rasterizer::rasterize) renders a string
//! 4. [`free_raster`], [`destroy_rasterizer`], [`shutdown_engine`] tear it down
//!
//! Lifetimes keep the order honest: a rasterizer borrows its engine, so the
//! engine cannot be shut down while one is alive.
//!
//! # Example
//!
//! ```ignore
//! use textstrip::prelude::*;
//!
//! let engine = textstrip::init_engine()?;
//! let mut rasterizer = textstrip::create_rasterizer(&engine, std::fs::read("font.ttf")?)?;
//! let raster = rasterizer.rasterize("Hello", 32)?;
//! println!("{}x{}", raster.width, raster.height);
//! textstrip::free_raster(raster);
//! textstrip::destroy_rasterizer(rasterizer);
//! textstrip::shutdown_engine(engine)?;
//! ```
//!
//! For callers that want "render with whatever was opened last", see
//! [`DefaultRasterizer`].
//!
//! # Feature Flags
//!
//! - `export` (default): PNG and PGM encoders, re-exported as [`export`]

mod default_instance;

use std::fs;
use std::path::Path;

pub use textstrip_core::{
    error, traits, BoundingBox, Color, F26Dot6, Raster, RasterError, RasterizerConfig, Result,
};
pub use textstrip_skrifa::{SkrifaEngine, SkrifaFace};

#[cfg(feature = "export")]
pub use textstrip_export as export;

pub use default_instance::{DefaultRasterizer, RasterizerId};

use textstrip_core::error::FontLoadError;

/// The engine this crate runs on
pub type Engine = SkrifaEngine;

/// A rasterizer bound to the skrifa engine
pub type Rasterizer<'e> = textstrip_core::Rasterizer<'e, SkrifaEngine>;

/// Bring up the font engine
pub fn init_engine() -> Result<Engine> {
    SkrifaEngine::init()
}

/// Shut the font engine down; fails if faces are still open
pub fn shutdown_engine(engine: Engine) -> Result<()> {
    engine.shutdown()
}

/// Open a face from font bytes and wrap it in a rasterizer
pub fn create_rasterizer(engine: &Engine, font: Vec<u8>) -> Result<Rasterizer<'_>> {
    Rasterizer::create(engine, font)
}

/// Same as [`create_rasterizer`] with explicit settings
pub fn create_rasterizer_with_config(
    engine: &Engine,
    font: Vec<u8>,
    config: RasterizerConfig,
) -> Result<Rasterizer<'_>> {
    Rasterizer::create_with_config(engine, font, config)
}

/// Close the rasterizer's face
pub fn destroy_rasterizer(rasterizer: Rasterizer<'_>) {
    rasterizer.destroy();
}

/// Release a raster's pixel buffer
pub fn free_raster(raster: Raster) {
    raster.free();
}

/// Read a font file into memory
pub fn load_font_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()).into())
}

/// Common imports for typical usage
pub mod prelude {
    pub use crate::{
        create_rasterizer, destroy_rasterizer, free_raster, init_engine, shutdown_engine,
        DefaultRasterizer, Engine, Rasterizer,
    };
    pub use textstrip_core::{
        error::{RasterError, Result},
        traits::{Face, FontEngine, GlyphImage},
        types::{Color, Raster},
        RasterizerConfig,
    };
}
