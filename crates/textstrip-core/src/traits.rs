//! The contract with the font engine
//!
//! The pipeline never decodes a font itself. Everything it needs from the
//! engine goes through these three traits:
//!
//! - [`FontEngine`] - opens faces from in-memory font bytes
//! - [`Face`] - pixel size, charmap, kerning, glyph loading
//! - [`GlyphImage`] - a loaded glyph: advance, control box, coverage mask
//!
//! Closing a face is dropping it.

use crate::error::{GlyphError, Result, SizeError};
use crate::fixed::{F26Dot6, Vector};
use crate::types::{BoundingBox, CoverageMask, GlyphId};

/// Opens faces
///
/// ```ignore
/// struct MyEngine;
///
/// impl FontEngine for MyEngine {
///     type Face = MyFace;
///
///     fn name(&self) -> &'static str {
///         "my-engine"
///     }
///
///     fn open_face(&self, data: Vec<u8>) -> Result<MyFace> {
///         MyFace::parse(data)
///     }
/// }
/// ```
pub trait FontEngine {
    type Face: Face;

    /// Used in logs
    fn name(&self) -> &'static str;

    /// Open a face from font bytes
    ///
    /// Fails with [`FontLoadError`](crate::error::FontLoadError) when the
    /// bytes are not a recognized font, or [`RasterError::Engine`](crate::RasterError::Engine)
    /// for any other engine failure.
    fn open_face(&self, data: Vec<u8>) -> Result<Self::Face>;
}

/// One opened font face
///
/// A face is mutable only through its pixel size, which is why rasterizing
/// needs exclusive access.
pub trait Face {
    type Glyph: GlyphImage;

    /// Set the em size in pixels used by every later glyph load
    fn set_pixel_size(&mut self, size: i32) -> std::result::Result<(), SizeError>;

    /// Map a code point to a glyph; unmapped code points give `.notdef` (0)
    fn char_index(&self, codepoint: u32) -> GlyphId;

    /// Whether the face carries pair kerning data
    fn has_kerning(&self) -> bool;

    /// Grid-fitted kerning between two glyphs at the current size
    ///
    /// Pairs without an entry return [`Vector::ZERO`].
    fn kerning_delta(&self, left: GlyphId, right: GlyphId) -> Vector;

    /// Load a glyph at the current size
    fn load_glyph(&self, glyph: GlyphId) -> std::result::Result<Self::Glyph, GlyphError>;

    /// Map a whole run of code points, one glyph per code point
    ///
    /// Layout calls this once per string. Engines with per-lookup setup
    /// cost override it to do that setup once.
    fn char_indices(&self, codepoints: &[u32]) -> Vec<GlyphId> {
        codepoints.iter().map(|&cp| self.char_index(cp)).collect()
    }

    /// Load a run of glyphs at the current size, one result per glyph
    fn load_glyphs(
        &self,
        glyphs: &[GlyphId],
    ) -> Vec<std::result::Result<Self::Glyph, GlyphError>> {
        glyphs.iter().map(|&glyph| self.load_glyph(glyph)).collect()
    }

    /// Glyphs in the face, when known
    fn glyph_count(&self) -> Option<u32> {
        None
    }
}

/// A loaded, renderable glyph
pub trait GlyphImage {
    /// Horizontal advance
    fn advance(&self) -> F26Dot6;

    /// Pixel control box in glyph-local, y-up coordinates
    ///
    /// Edges are snapped outward to whole pixels. An empty glyph such as a
    /// space reports the zero box.
    fn control_box(&self) -> BoundingBox;

    /// Render coverage with the glyph origin placed at `pen`
    ///
    /// The returned mask's `left`/`top` already include the pen offset.
    fn render_to_mask(&self, pen: Vector) -> std::result::Result<CoverageMask, GlyphError>;
}
