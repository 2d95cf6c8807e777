//! Canvas allocation and coverage compositing
//!
//! The canvas is the string's bounding box plus a one pixel margin on every
//! side, so anti-aliased edges that bleed past the control box are not
//! clipped. It starts as transparent white; glyph coverage is OR-ed into the
//! alpha channel and RGB is never touched again.

use crate::error::{RasterError, Result};
use crate::fixed::Vector;
use crate::layout::GlyphPlacement;
use crate::traits::GlyphImage;
use crate::types::{BoundingBox, CoverageMask, IntPoint, Raster, BYTES_PER_PIXEL};

/// Margin around the string bounds, in pixels
pub const MARGIN: i32 = 1;

const BLANK_PIXEL: [u8; BYTES_PER_PIXEL] = [0xff, 0xff, 0xff, 0x00];

/// Half-open pixel rectangle in canvas space (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl CanvasRect {
    /// Whether the rectangle lies fully inside a `width` x `height` canvas
    pub fn within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0 && self.y0 >= 0 && self.x1 <= width as i32 && self.y1 <= height as i32
    }
}

/// Map a y-up glyph box into y-down canvas rows
///
/// `local` is in glyph space (origin on the baseline, y up) and `pen` is the
/// glyph origin in canvas-level y-up coordinates, where the canvas bottom
/// edge is y = 0. The returned rectangle is in canvas pixel space: column
/// `x` is unchanged, and a glyph-space height `y` lands on row
/// `canvas_height - y`. Row `y0` is the top of the box.
pub fn glyph_to_canvas(local: BoundingBox, pen: IntPoint, canvas_height: u32) -> CanvasRect {
    let b = local.translate(pen);
    let h = canvas_height as i32;
    CanvasRect {
        x0: b.x_min,
        y0: h - b.y_max,
        x1: b.x_max,
        y1: h - b.y_min,
    }
}

/// The RGBA buffer a string is composited into
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    origin_x: i32,
    origin_y: i32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas for `bounds`, refusing anything larger than `max_size`
    /// on either side
    pub fn for_bounds(bounds: BoundingBox, max_size: u32) -> Result<Self> {
        let width = i64::from(bounds.width()) + 2 * i64::from(MARGIN);
        let height = i64::from(bounds.height()) + 2 * i64::from(MARGIN);

        if width > i64::from(max_size) || height > i64::from(max_size) {
            return Err(RasterError::CanvasTooLarge {
                width: width.clamp(0, i64::from(u32::MAX)) as u32,
                height: height.clamp(0, i64::from(u32::MAX)) as u32,
            });
        }

        let (width, height) = (width as u32, height as u32);
        let data = BLANK_PIXEL.repeat(width as usize * height as usize);

        log::debug!("Canvas {}x{} for bounds {:?}", width, height, bounds);

        Ok(Self {
            width,
            height,
            origin_x: -(bounds.x_min - MARGIN),
            origin_y: -(bounds.y_min - MARGIN),
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas-level origin of a glyph laid out at `pen`, in whole pixels
    pub fn glyph_origin(&self, pen: IntPoint) -> IntPoint {
        IntPoint::new(self.origin_x + pen.x, self.origin_y + pen.y)
    }

    /// Same as [`Canvas::glyph_origin`], in the 26.6 units the engine expects
    pub fn engine_pen(&self, pen: IntPoint) -> Vector {
        let origin = self.glyph_origin(pen);
        Vector::from_pixels(origin.x, origin.y)
    }

    /// OR a coverage mask into the alpha channel
    ///
    /// Pixels falling outside the canvas are dropped.
    pub fn blit(&mut self, mask: &CoverageMask) {
        if mask.is_empty() {
            return;
        }

        let mask_box = BoundingBox::new(
            mask.left,
            mask.top - mask.height as i32,
            mask.left + mask.width as i32,
            mask.top,
        );
        let rect = glyph_to_canvas(mask_box, IntPoint::default(), self.height);
        if !rect.within(self.width, self.height) {
            log::debug!("Mask {:?} clipped by {}x{} canvas", rect, self.width, self.height);
        }

        let (w, h) = (self.width as i32, self.height as i32);
        for q in 0..mask.height {
            let y = rect.y0 + q as i32;
            if y < 0 || y >= h {
                continue;
            }
            for p in 0..mask.width {
                let x = rect.x0 + p as i32;
                if x < 0 || x >= w {
                    continue;
                }
                let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL + 3;
                self.data[idx] |= mask.coverage(p, q);
            }
        }
    }

    pub fn into_raster(self) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            data: self.data,
        }
    }
}

/// Composite every placement into a fresh canvas sized to `bounds`
///
/// A glyph whose mask fails to render is logged and left out.
pub fn composite<G: GlyphImage>(
    placements: &[GlyphPlacement<G>],
    bounds: BoundingBox,
    max_size: u32,
) -> Result<Raster> {
    let mut canvas = Canvas::for_bounds(bounds, max_size)?;

    for placement in placements {
        match placement.glyph.render_to_mask(canvas.engine_pen(placement.pen)) {
            Ok(mask) => canvas.blit(&mask),
            Err(err) => log::warn!("Skipping glyph {}: {}", placement.glyph_id, err),
        }
    }

    Ok(canvas.into_raster())
}
