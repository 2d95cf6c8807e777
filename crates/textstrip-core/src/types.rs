//! The data that flows through the pipeline

use std::fmt;

/// Glyph index within a face; 0 is `.notdef`
pub type GlyphId = u32;

/// Glyph index of the `.notdef` glyph
pub const NOTDEF: GlyphId = 0;

/// Integer pixel position, y-up, relative to the start of the baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel box
///
/// Glyph-local boxes are y-up with the origin on the baseline at the glyph
/// origin. A box that nothing contributed to is the zero box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox::new(0, 0, 0, 0);

    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Move the box by a pixel offset
    pub const fn translate(self, by: IntPoint) -> Self {
        Self::new(
            self.x_min + by.x,
            self.y_min + by.y,
            self.x_max + by.x,
            self.y_max + by.y,
        )
    }

    /// Smallest box containing both
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.x_min.min(other.x_min),
            self.y_min.min(other.y_min),
            self.x_max.max(other.x_max),
            self.y_max.max(other.y_max),
        )
    }
}

/// 8-bit coverage produced by the font engine for one glyph
///
/// Rows run top to bottom. `left` is the horizontal offset of column 0 and
/// `top` is the height of row 0 above the baseline, both in whole pixels and
/// relative to the origin the pen put the glyph at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageMask {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub data: Vec<u8>,
}

impl CoverageMask {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at column `p`, row `q`
    #[inline]
    pub fn coverage(&self, p: u32, q: u32) -> u8 {
        self.data
            .get((q * self.width + p) as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Rasterized string, owned outright by the caller
///
/// `data` holds `width * height` RGBA8 pixels, row-major, top row first.
/// The RGB channels are white everywhere; glyph coverage lives in alpha only,
/// so the raster is meant to be tinted when drawn.
///
/// `origin_x`/`origin_y` locate the string's anchor (the left end of the
/// baseline) in canvas pixels, with `origin_y` counted up from the bottom
/// edge: the baseline sits on row `height - origin_y`.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub data: Vec<u8>,
}

impl Raster {
    /// Alpha of the pixel at (x, y), top-left origin
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL + 3;
        self.data.get(idx).copied()
    }

    /// Iterate over the alpha channel in row-major order
    pub fn alpha_channel(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.chunks_exact(BYTES_PER_PIXEL).map(|px| px[3])
    }

    /// True when no pixel carries coverage
    pub fn is_blank(&self) -> bool {
        self.alpha_channel().all(|a| a == 0)
    }

    /// Release the pixel buffer
    ///
    /// Dropping the raster does the same; this exists so ownership hand-back
    /// reads explicitly at call sites.
    pub fn free(self) {
        drop(self);
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Simple RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }
}
