//! Tight bounds of a laid-out string

use crate::layout::GlyphPlacement;
use crate::traits::GlyphImage;
use crate::types::BoundingBox;

/// Union of every placed glyph's control box, translated by its pen
///
/// Empty glyphs still contribute their origin point. With no placements at
/// all the result is [`BoundingBox::ZERO`].
pub fn string_bounds<G: GlyphImage>(placements: &[GlyphPlacement<G>]) -> BoundingBox {
    placements
        .iter()
        .map(|p| p.glyph.control_box().translate(p.pen))
        .reduce(BoundingBox::union)
        .unwrap_or(BoundingBox::ZERO)
}
