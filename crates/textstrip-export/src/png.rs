//! PNG export
//!
//! Writes a raster as 8-bit RGBA PNG using the `image` crate.

use image::{ImageBuffer, ImageEncoder, RgbaImage};
use textstrip_core::types::{Color, Raster, BYTES_PER_PIXEL};

use crate::{tint, ExportError, Result};

/// Encode a raster to PNG, tinting it first when `color` is given
///
/// Without a color the raster's own pixels are written as-is: white ink
/// whose alpha is the coverage.
pub fn encode_png(raster: &Raster, color: Option<Color>) -> Result<Vec<u8>> {
    let expected = raster.width as usize * raster.height as usize * BYTES_PER_PIXEL;
    if raster.data.len() < expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small: expected {} bytes for {}x{}, got {}",
            expected,
            raster.width,
            raster.height,
            raster.data.len()
        )));
    }

    let pixels = match color {
        Some(color) => tint(raster, color).data,
        None => raster.data[..expected].to_vec(),
    };

    let img: RgbaImage = ImageBuffer::from_raw(raster.width, raster.height, pixels)
        .ok_or_else(|| ExportError::EncodingFailed("Failed to create image buffer".into()))?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), raster.width, raster.height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}
