//! Export for textstrip rasters
//!
//! A [`Raster`] is white ink with coverage in alpha. This crate turns it into
//! files: [`encode_png`] for RGBA PNG, [`encode_pgm`] for the bare coverage as
//! a graymap, and [`tint`] to recolor the ink first.

use std::io::Write;

use thiserror::Error;
use textstrip_core::types::{Color, Raster, BYTES_PER_PIXEL};

pub mod png;

pub use png::encode_png;

pub type Result<T> = std::result::Result<T, ExportError>;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File formats a raster can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    /// ASCII graymap of the alpha channel
    Pgm,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pgm => "pgm",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Pgm => "image/x-portable-graymap",
        }
    }

    /// Encode `raster`; the color only applies to PNG
    pub fn encode(&self, raster: &Raster, color: Option<Color>) -> Result<Vec<u8>> {
        match self {
            Self::Png => encode_png(raster, color),
            Self::Pgm => encode_pgm(raster),
        }
    }
}

/// Recolor the ink, keeping coverage
///
/// Every pixel takes the color's RGB; alpha becomes coverage scaled by the
/// color's alpha.
pub fn tint(raster: &Raster, color: Color) -> Raster {
    let mut data = Vec::with_capacity(raster.data.len());
    for px in raster.data.chunks_exact(BYTES_PER_PIXEL) {
        let alpha = (u32::from(px[3]) * u32::from(color.a) + 127) / 255;
        data.extend_from_slice(&[color.r, color.g, color.b, alpha as u8]);
    }
    Raster {
        data,
        ..raster.clone()
    }
}

/// Write the alpha channel as an ASCII PGM (P2)
pub fn encode_pgm(raster: &Raster) -> Result<Vec<u8>> {
    let expected = raster.width as usize * raster.height as usize;
    if raster.data.len() < expected * BYTES_PER_PIXEL {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small for {}x{} raster",
            raster.width, raster.height
        )));
    }

    let mut output = Vec::new();
    writeln!(&mut output, "P2")?;
    writeln!(&mut output, "{} {}", raster.width, raster.height)?;
    writeln!(&mut output, "255")?;

    if raster.width > 0 {
        let alpha: Vec<u8> = raster.alpha_channel().take(expected).collect();
        for row in alpha.chunks(raster.width as usize) {
            for value in row {
                write!(&mut output, "{} ", value)?;
            }
            writeln!(&mut output)?;
        }
    }

    Ok(output)
}
