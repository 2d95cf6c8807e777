//! Error types for textstrip

use thiserror::Error;

use crate::types::GlyphId;

pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for textstrip
///
/// Only whole-call failures surface here. A glyph that fails to load or
/// render is logged and skipped; its [`GlyphError`] never reaches the caller
/// of `rasterize`.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Font engine initialization failed: {0}")]
    EngineInit(String),

    #[error("Font engine error: {0}")]
    Engine(String),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Invalid pixel size: {0}")]
    Size(#[from] SizeError),

    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Canvas too large: {width}x{height}")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("No default rasterizer registered")]
    NoDefault,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Unknown font file format")]
    UnknownFormat,

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Font file not found: {0}")]
    FileNotFound(String),
}

/// Pixel size errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("pixel size must be positive, got {0}")]
    NonPositive(i32),

    #[error("face has no scalable outlines")]
    NoScalableOutlines,
}

/// Per-glyph errors, recovered locally by the pipeline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("failed to load glyph {glyph}: {reason}")]
    Load { glyph: GlyphId, reason: String },

    #[error("failed to render glyph {glyph}: {reason}")]
    Render { glyph: GlyphId, reason: String },
}
