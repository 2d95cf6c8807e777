//! Pure Rust font engine for textstrip
//!
//! Faces are parsed with skrifa/read-fonts, outlines are drawn unhinted at the
//! requested pixel size, and coverage comes from zeno. Pair kerning comes
//! from the TrueType `kern` table as read-fonts parses it.
//!
//! Tables are re-read from the stored bytes on demand. Whole runs go through
//! [`Face::char_indices`] and [`Face::load_glyphs`], which parse the charmap
//! and outline tables once per run instead of once per glyph.
//!
//! The engine is an owned value. Every face it opens holds a guard that keeps
//! a live-face count, and [`SkrifaEngine::shutdown`] refuses to run while any
//! face is still open.
//!
//! ```rust,ignore
//! use textstrip_core::Rasterizer;
//! use textstrip_skrifa::SkrifaEngine;
//!
//! let engine = SkrifaEngine::init()?;
//! let mut rasterizer = Rasterizer::create(&engine, std::fs::read("font.ttf")?)?;
//! let raster = rasterizer.rasterize("Hello", 32)?;
//! rasterizer.destroy();
//! engine.shutdown()?;
//! ```

mod kern;
mod outline;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use read_fonts::tables::hmtx::Hmtx;
use read_fonts::types::Tag;
use read_fonts::{FontRef, ReadError, TableProvider};
use skrifa::charmap::Charmap;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlineGlyphCollection};
use skrifa::MetadataProvider;

use textstrip_core::{
    error::{FontLoadError, GlyphError, RasterError, Result, SizeError},
    traits::{Face, FontEngine},
    types::{GlyphId, NOTDEF},
    F26Dot6, Vector,
};

pub use kern::KernTable;
pub use outline::OutlineGlyph;

use outline::OutlineRecorder;

const TAG_GLYF: Tag = Tag::new(b"glyf");
const TAG_CFF: Tag = Tag::new(b"CFF ");
const TAG_CFF2: Tag = Tag::new(b"CFF2");

/// The font engine: opens faces and tracks how many are alive
#[derive(Debug, Default)]
pub struct SkrifaEngine {
    live_faces: Arc<AtomicUsize>,
}

impl SkrifaEngine {
    /// Bring up the engine
    pub fn init() -> Result<Self> {
        log::debug!("skrifa engine up");
        Ok(Self::default())
    }

    /// Faces opened by this engine and not yet dropped
    pub fn open_faces(&self) -> usize {
        self.live_faces.load(Ordering::Acquire)
    }

    /// Tear the engine down
    ///
    /// Fails with [`RasterError::Engine`] when faces are still open. With the
    /// borrow checker in play that only happens if a face was leaked.
    pub fn shutdown(self) -> Result<()> {
        let open = self.open_faces();
        if open > 0 {
            return Err(RasterError::Engine(format!(
                "{} face(s) still open at shutdown",
                open
            )));
        }
        log::debug!("skrifa engine down");
        Ok(())
    }

    /// Open one face of a font file; `index` selects within a collection
    pub fn open_face_at(&self, data: Vec<u8>, face_index: u32) -> Result<SkrifaFace> {
        let font =
            FontRef::from_index(&data, face_index).map_err(|e| map_read_error(e, face_index))?;

        let units_per_em = font
            .head()
            .map(|head| head.units_per_em())
            .ok()
            .filter(|&upem| upem > 0)
            .unwrap_or(1000);
        let scalable = [TAG_GLYF, TAG_CFF, TAG_CFF2]
            .iter()
            .any(|&tag| font.table_data(tag).is_some());
        let kern = KernTable::from_font(&font);

        log::debug!(
            "opened face {} ({} bytes, upem {}, {} kern pairs)",
            face_index,
            data.len(),
            units_per_em,
            kern.as_ref().map_or(0, KernTable::len)
        );

        Ok(SkrifaFace {
            data,
            face_index,
            units_per_em,
            scalable,
            kern,
            ppem: None,
            _guard: FaceGuard::new(&self.live_faces),
        })
    }
}

impl FontEngine for SkrifaEngine {
    type Face = SkrifaFace;

    fn name(&self) -> &'static str {
        "skrifa"
    }

    fn open_face(&self, data: Vec<u8>) -> Result<SkrifaFace> {
        self.open_face_at(data, 0)
    }
}

fn map_read_error(err: ReadError, face_index: u32) -> RasterError {
    match err {
        ReadError::InvalidSfnt(_) | ReadError::InvalidTtc(_) | ReadError::OutOfBounds => {
            FontLoadError::UnknownFormat.into()
        },
        ReadError::InvalidCollectionIndex(_) => {
            RasterError::Engine(format!("no face {} in collection", face_index))
        },
        other => FontLoadError::InvalidData(other.to_string()).into(),
    }
}

/// Decrements the engine's live-face count when its face goes away
#[derive(Debug)]
struct FaceGuard(Arc<AtomicUsize>);

impl FaceGuard {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(Arc::clone(counter))
    }
}

impl Drop for FaceGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// An opened face
///
/// Keeps the font bytes and builds a `FontRef` on demand, so the face owns
/// its data outright.
#[derive(Debug)]
pub struct SkrifaFace {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    scalable: bool,
    kern: Option<KernTable>,
    ppem: Option<f32>,
    _guard: FaceGuard,
}

impl SkrifaFace {
    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face_index).ok()
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Current em size in pixels, if one was set
    pub fn pixel_size(&self) -> Option<f32> {
        self.ppem
    }

    pub fn kern_table(&self) -> Option<&KernTable> {
        self.kern.as_ref()
    }

    /// Scale font units to 26.6 at the current size
    fn scale(&self, units: i32) -> F26Dot6 {
        let ppem = self.ppem.unwrap_or(0.0);
        F26Dot6::from_float(units as f32 * ppem / f32::from(self.units_per_em))
    }

    /// Load one glyph from tables already parsed for the run
    fn load_with(
        &self,
        outlines: &OutlineGlyphCollection<'_>,
        hmtx: Option<&Hmtx<'_>>,
        glyph: GlyphId,
    ) -> std::result::Result<OutlineGlyph, GlyphError> {
        let load_error = |reason: String| GlyphError::Load { glyph, reason };

        let ppem = self.ppem.ok_or_else(|| load_error("pixel size not set".into()))?;
        let outline = outlines
            .get(skrifa::GlyphId::new(glyph))
            .ok_or_else(|| load_error("no outline".into()))?;

        let mut recorder = OutlineRecorder::default();
        let settings = DrawSettings::unhinted(Size::new(ppem), LocationRef::default());
        outline
            .draw(settings, &mut recorder)
            .map_err(|e| load_error(format!("{:?}", e)))?;

        let units = hmtx
            .and_then(|hmtx| hmtx.advance(read_fonts::types::GlyphId::new(glyph)))
            .unwrap_or(0);
        Ok(recorder.finish(glyph, self.scale(i32::from(units)).round()))
    }
}

fn map_codepoint(charmap: &Charmap<'_>, codepoint: u32) -> GlyphId {
    charmap.map(codepoint).map_or(NOTDEF, |gid| gid.to_u32())
}

fn unparsable(glyph: GlyphId) -> GlyphError {
    GlyphError::Load {
        glyph,
        reason: "font data no longer parses".into(),
    }
}

impl Face for SkrifaFace {
    type Glyph = OutlineGlyph;

    fn set_pixel_size(&mut self, size: i32) -> std::result::Result<(), SizeError> {
        if size <= 0 {
            return Err(SizeError::NonPositive(size));
        }
        if !self.scalable {
            return Err(SizeError::NoScalableOutlines);
        }
        if self.ppem != Some(size as f32) {
            log::debug!("face {}: pixel size {}", self.face_index, size);
        }
        self.ppem = Some(size as f32);
        Ok(())
    }

    fn char_index(&self, codepoint: u32) -> GlyphId {
        self.font_ref()
            .map_or(NOTDEF, |font| map_codepoint(&font.charmap(), codepoint))
    }

    fn has_kerning(&self) -> bool {
        self.kern.is_some()
    }

    fn kerning_delta(&self, left: GlyphId, right: GlyphId) -> Vector {
        let units = self.kern.as_ref().map_or(0, |kern| kern.get(left, right));
        if units == 0 {
            return Vector::ZERO;
        }
        Vector::new(self.scale(units).round(), F26Dot6::ZERO)
    }

    fn load_glyph(&self, glyph: GlyphId) -> std::result::Result<OutlineGlyph, GlyphError> {
        let font = self.font_ref().ok_or_else(|| unparsable(glyph))?;
        self.load_with(&font.outline_glyphs(), font.hmtx().ok().as_ref(), glyph)
    }

    fn char_indices(&self, codepoints: &[u32]) -> Vec<GlyphId> {
        let Some(font) = self.font_ref() else {
            return vec![NOTDEF; codepoints.len()];
        };
        let charmap = font.charmap();
        codepoints
            .iter()
            .map(|&cp| map_codepoint(&charmap, cp))
            .collect()
    }

    fn load_glyphs(
        &self,
        glyphs: &[GlyphId],
    ) -> Vec<std::result::Result<OutlineGlyph, GlyphError>> {
        let Some(font) = self.font_ref() else {
            return glyphs.iter().map(|&glyph| Err(unparsable(glyph))).collect();
        };
        let outlines = font.outline_glyphs();
        let hmtx = font.hmtx().ok();
        glyphs
            .iter()
            .map(|&glyph| self.load_with(&outlines, hmtx.as_ref(), glyph))
            .collect()
    }

    fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| u32::from(maxp.num_glyphs())))
    }
}
