//! One face, many strings
//!
//! A [`Rasterizer`] owns a single opened face and runs the whole pipeline
//! for each call: layout, bounds, canvas, composite. It borrows the engine
//! that opened it, so the engine cannot be shut down while it is alive.

use std::marker::PhantomData;

use crate::bounds::string_bounds;
use crate::compositor::composite;
use crate::error::Result;
use crate::layout::{layout, Layout};
use crate::traits::{Face, FontEngine};
use crate::types::Raster;

/// Largest canvas side accepted by default
pub const DEFAULT_MAX_CANVAS_SIZE: u32 = 65535;

/// How a rasterizer behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterizerConfig {
    /// Apply the face's pair kerning
    pub kerning: bool,
    /// Reject canvases wider or taller than this
    pub max_canvas_size: u32,
}

impl RasterizerConfig {
    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn with_max_canvas_size(mut self, max_canvas_size: u32) -> Self {
        self.max_canvas_size = max_canvas_size;
        self
    }
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            kerning: true,
            max_canvas_size: DEFAULT_MAX_CANVAS_SIZE,
        }
    }
}

/// Turns strings into rasters with one face
///
/// ```ignore
/// let engine = SkrifaEngine::init()?;
/// let mut rasterizer = Rasterizer::create(&engine, font_bytes)?;
/// let raster = rasterizer.rasterize("Hello", 32)?;
/// // draw raster.data, tinted, with the baseline anchor at (origin_x, origin_y)
/// raster.free();
/// rasterizer.destroy();
/// ```
pub struct Rasterizer<'e, E: FontEngine> {
    face: E::Face,
    config: RasterizerConfig,
    engine: PhantomData<&'e E>,
}

impl<'e, E: FontEngine> Rasterizer<'e, E> {
    /// Open `font_data` with `engine`
    pub fn create(engine: &'e E, font_data: Vec<u8>) -> Result<Self> {
        Self::create_with_config(engine, font_data, RasterizerConfig::default())
    }

    pub fn create_with_config(
        engine: &'e E,
        font_data: Vec<u8>,
        config: RasterizerConfig,
    ) -> Result<Self> {
        let size = font_data.len();
        let face = engine.open_face(font_data)?;
        log::debug!("{}: opened face from {} bytes", engine.name(), size);

        Ok(Self {
            face,
            config,
            engine: PhantomData,
        })
    }

    /// Close the face and release its engine resources
    pub fn destroy(self) {
        drop(self);
    }

    pub fn face(&self) -> &E::Face {
        &self.face
    }

    pub fn config(&self) -> RasterizerConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RasterizerConfig) {
        self.config = config;
    }

    /// Render `text` at `pixel_size` pixels per em
    pub fn rasterize(&mut self, text: &str, pixel_size: i32) -> Result<Raster> {
        self.rasterize_codepoints(text.chars().map(u32::from), pixel_size)
    }

    /// Render a sequence of raw code points
    ///
    /// Code points need not be valid `char`s; anything the face cannot map
    /// renders as `.notdef`.
    pub fn rasterize_codepoints<I>(&mut self, codepoints: I, pixel_size: i32) -> Result<Raster>
    where
        I: IntoIterator<Item = u32>,
    {
        let laid_out = self.layout(codepoints, pixel_size)?;
        let bounds = string_bounds(&laid_out.placements);
        composite(&laid_out.placements, bounds, self.config.max_canvas_size)
    }

    /// Lay out without rendering
    pub fn layout<I>(
        &mut self,
        codepoints: I,
        pixel_size: i32,
    ) -> Result<Layout<<E::Face as Face>::Glyph>>
    where
        I: IntoIterator<Item = u32>,
    {
        Ok(layout(
            &mut self.face,
            codepoints,
            pixel_size,
            self.config.kerning,
        )?)
    }
}
