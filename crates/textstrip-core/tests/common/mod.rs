//! Stub font engine for pipeline tests
//!
//! Glyphs are solid rectangles with fixed advances, so every pixel of the
//! output can be predicted by hand.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use textstrip_core::{
    error::{FontLoadError, GlyphError, Result, SizeError},
    traits::{Face, FontEngine, GlyphImage},
    types::{BoundingBox, CoverageMask, GlyphId},
    F26Dot6, Vector,
};

pub const GLYPH_A: GlyphId = 1;
pub const GLYPH_B: GlyphId = 2;
pub const GLYPH_V: GlyphId = 22;
pub const GLYPH_SPACE: GlyphId = 50;
pub const GLYPH_J: GlyphId = 60;
/// Loads fine, fails to render
pub const GLYPH_BROKEN_RENDER: GlyphId = 98;
/// Fails to load
pub const GLYPH_BROKEN_LOAD: GlyphId = 99;

/// Kerning between A and V, in whole pixels
pub const KERN_AV: i32 = -2;

/// Letter advance in whole pixels
pub const LETTER_ADVANCE: i32 = 6;

pub struct StubEngine {
    live_faces: Rc<Cell<usize>>,
    kerning: bool,
}

impl StubEngine {
    pub fn new() -> Self {
        Self {
            live_faces: Rc::new(Cell::new(0)),
            kerning: true,
        }
    }

    pub fn without_kerning_table() -> Self {
        Self {
            kerning: false,
            ..Self::new()
        }
    }

    pub fn live_faces(&self) -> usize {
        self.live_faces.get()
    }
}

impl FontEngine for StubEngine {
    type Face = StubFace;

    fn name(&self) -> &'static str {
        "stub"
    }

    fn open_face(&self, data: Vec<u8>) -> Result<StubFace> {
        if data.as_slice() != b"stub-font" {
            return Err(FontLoadError::UnknownFormat.into());
        }
        self.live_faces.set(self.live_faces.get() + 1);
        Ok(StubFace {
            live_faces: Rc::clone(&self.live_faces),
            kerning: self.kerning,
            pixel_size: 0,
        })
    }
}

pub fn font_bytes() -> Vec<u8> {
    b"stub-font".to_vec()
}

pub struct StubFace {
    live_faces: Rc<Cell<usize>>,
    kerning: bool,
    pixel_size: i32,
}

impl StubFace {
    pub fn pixel_size(&self) -> i32 {
        self.pixel_size
    }
}

impl Drop for StubFace {
    fn drop(&mut self) {
        self.live_faces.set(self.live_faces.get() - 1);
    }
}

impl Face for StubFace {
    type Glyph = StubGlyph;

    fn set_pixel_size(&mut self, size: i32) -> std::result::Result<(), SizeError> {
        if size <= 0 {
            return Err(SizeError::NonPositive(size));
        }
        self.pixel_size = size;
        Ok(())
    }

    fn char_index(&self, codepoint: u32) -> GlyphId {
        match char::from_u32(codepoint) {
            Some('A') => GLYPH_A,
            Some('B') => GLYPH_B,
            Some('V') => GLYPH_V,
            Some(' ') => GLYPH_SPACE,
            Some('j') => GLYPH_J,
            Some('r') => GLYPH_BROKEN_RENDER,
            Some('x') => GLYPH_BROKEN_LOAD,
            _ => 0,
        }
    }

    fn has_kerning(&self) -> bool {
        self.kerning
    }

    fn kerning_delta(&self, left: GlyphId, right: GlyphId) -> Vector {
        match (left, right) {
            (GLYPH_A, GLYPH_V) => Vector::new(F26Dot6::from_int(KERN_AV), F26Dot6::ZERO),
            // Never consulted by layout; nonzero so a stray lookup shows up
            (0, _) | (_, 0) => Vector::new(F26Dot6::from_int(-1), F26Dot6::ZERO),
            _ => Vector::ZERO,
        }
    }

    fn load_glyph(&self, glyph: GlyphId) -> std::result::Result<StubGlyph, GlyphError> {
        let (bbox, advance) = match glyph {
            0 => (BoundingBox::new(0, 0, 4, 6), 5),
            GLYPH_A | GLYPH_B | GLYPH_V => (BoundingBox::new(1, 0, 5, 7), LETTER_ADVANCE),
            GLYPH_SPACE => (BoundingBox::ZERO, 3),
            GLYPH_J => (BoundingBox::new(0, -3, 3, 6), 4),
            GLYPH_BROKEN_RENDER => (BoundingBox::new(1, 0, 5, 7), LETTER_ADVANCE),
            _ => {
                return Err(GlyphError::Load {
                    glyph,
                    reason: "no outline".into(),
                })
            },
        };
        Ok(StubGlyph {
            id: glyph,
            bbox,
            advance: F26Dot6::from_int(advance),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StubGlyph {
    id: GlyphId,
    bbox: BoundingBox,
    advance: F26Dot6,
}

impl GlyphImage for StubGlyph {
    fn advance(&self) -> F26Dot6 {
        self.advance
    }

    fn control_box(&self) -> BoundingBox {
        self.bbox
    }

    fn render_to_mask(&self, pen: Vector) -> std::result::Result<CoverageMask, GlyphError> {
        if self.id == GLYPH_BROKEN_RENDER {
            return Err(GlyphError::Render {
                glyph: self.id,
                reason: "rasterizer refused".into(),
            });
        }
        let width = self.bbox.width() as u32;
        let height = self.bbox.height() as u32;
        Ok(CoverageMask {
            width,
            height,
            left: self.bbox.x_min + pen.x.to_int(),
            top: self.bbox.y_max + pen.y.to_int(),
            data: vec![0xff; (width * height) as usize],
        })
    }
}
