//! Pen positions for a run of characters
//!
//! The whole run is mapped to glyphs and loaded up front, then walked left to
//! right: apply pair kerning against the previous glyph, record the pen and
//! advance. All positions are whole pixels; the engine's 26.6 values are
//! shifted down as they arrive.
//!
//! A glyph that fails to load is skipped entirely. It gets no placement, it
//! does not move the pen, and it does not become the kerning partner of the
//! next glyph. The rest of the string lays out exactly as if the failing
//! character had never been there.

use crate::error::SizeError;
use crate::traits::{Face, GlyphImage};
use crate::types::{GlyphId, IntPoint, NOTDEF};

/// A loaded glyph and where its origin sits on the baseline
#[derive(Debug, Clone)]
pub struct GlyphPlacement<G> {
    pub glyph_id: GlyphId,
    pub glyph: G,
    pub pen: IntPoint,
}

/// Result of laying out one string
#[derive(Debug, Clone)]
pub struct Layout<G> {
    /// Successfully loaded glyphs, in input order
    pub placements: Vec<GlyphPlacement<G>>,
    /// Pen position after the last placed glyph
    pub pen: IntPoint,
    /// Characters dropped because their glyph failed to load
    pub skipped: usize,
}

impl<G> Layout<G> {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Pen x of every placement, in order
    pub fn pen_xs(&self) -> Vec<i32> {
        self.placements.iter().map(|p| p.pen.x).collect()
    }
}

/// Lay out `codepoints` at `pixel_size`
///
/// Fails only when the face rejects the pixel size. Set `kerning` to false
/// to ignore the face's kerning data.
pub fn layout<F, I>(
    face: &mut F,
    codepoints: I,
    pixel_size: i32,
    kerning: bool,
) -> Result<Layout<F::Glyph>, SizeError>
where
    F: Face,
    I: IntoIterator<Item = u32>,
{
    face.set_pixel_size(pixel_size)?;

    let use_kerning = kerning && face.has_kerning();
    let codepoints: Vec<u32> = codepoints.into_iter().collect();
    let glyph_ids = face.char_indices(&codepoints);
    let loaded = face.load_glyphs(&glyph_ids);

    let mut placements = Vec::with_capacity(codepoints.len());
    let mut pen = IntPoint::default();
    let mut previous: Option<GlyphId> = None;
    let mut skipped = 0;

    for ((&codepoint, glyph_id), result) in codepoints.iter().zip(glyph_ids).zip(loaded) {
        // Candidate pen: a failed load must leave `pen` untouched
        let mut x = pen.x;
        if use_kerning && glyph_id != NOTDEF {
            if let Some(prev) = previous.filter(|&p| p != NOTDEF) {
                x += face.kerning_delta(prev, glyph_id).x.to_int();
            }
        }

        let glyph = match result {
            Ok(glyph) => glyph,
            Err(err) => {
                log::warn!("Skipping U+{:04X}: {}", codepoint, err);
                skipped += 1;
                continue;
            },
        };

        let at = IntPoint::new(x, pen.y);
        log::trace!("glyph {} at ({}, {})", glyph_id, at.x, at.y);

        pen.x = x + glyph.advance().to_int();
        previous = Some(glyph_id);

        placements.push(GlyphPlacement {
            glyph_id,
            glyph,
            pen: at,
        });
    }

    log::debug!(
        "Laid out {} glyphs at {}px ({} skipped, advance {})",
        placements.len(),
        pixel_size,
        skipped,
        pen.x
    );

    Ok(Layout {
        placements,
        pen,
        skipped,
    })
}
