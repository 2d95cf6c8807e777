//! Textstrip Core: one string in, one RGBA raster out
//!
//! This crate holds the pipeline that turns a run of characters into a single
//! tightly cropped image, and the traits a font engine implements to feed it.
//!
//! ## The Pipeline
//!
//! 1. **Layout** - code points become glyphs at pen positions, with kerning
//! 2. **Bounds** - per-glyph control boxes merge into the string box
//! 3. **Canvas** - an RGBA buffer sized to the box plus a one pixel margin
//! 4. **Composite** - each glyph's coverage mask is OR-ed into alpha
//!
//! ```rust,ignore
//! use textstrip_core::Rasterizer;
//!
//! let mut rasterizer = Rasterizer::create(&engine, font_bytes)?;
//! let raster = rasterizer.rasterize("Hello, World!", 24)?;
//! assert!(raster.width >= 2 && raster.height >= 2);
//! ```
//!
//! The font engine sits behind [`traits::FontEngine`], [`traits::Face`] and
//! [`traits::GlyphImage`]. Nothing here parses fonts.

pub mod bounds;
pub mod compositor;
pub mod error;
pub mod fixed;
pub mod layout;
pub mod rasterizer;
pub mod traits;
pub mod types;

pub use error::{FontLoadError, GlyphError, RasterError, Result, SizeError};
pub use fixed::{F26Dot6, Vector};
pub use layout::{GlyphPlacement, Layout};
pub use rasterizer::{Rasterizer, RasterizerConfig};
pub use traits::{Face, FontEngine, GlyphImage};
pub use types::{BoundingBox, Color, CoverageMask, GlyphId, IntPoint, Raster};
