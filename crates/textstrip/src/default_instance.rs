//! "Most recently created" rasterizer, without a global
//!
//! Some callers only ever have one font open and want to render without
//! passing a handle around. [`DefaultRasterizer`] owns the rasterizers it
//! creates, remembers the newest one, and renders through it. Destroying the
//! current one leaves no default until another is created.

use std::collections::BTreeMap;

use textstrip_core::{FontEngine, Raster, RasterError, Rasterizer, RasterizerConfig, Result};
use textstrip_skrifa::SkrifaEngine;

/// Handle to a rasterizer owned by a [`DefaultRasterizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RasterizerId(u64);

/// Registry of rasterizers with a "current" one
pub struct DefaultRasterizer<'e, E: FontEngine = SkrifaEngine> {
    engine: &'e E,
    rasterizers: BTreeMap<RasterizerId, Rasterizer<'e, E>>,
    current: Option<RasterizerId>,
    next_id: u64,
}

impl<'e, E: FontEngine> DefaultRasterizer<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self {
            engine,
            rasterizers: BTreeMap::new(),
            current: None,
            next_id: 0,
        }
    }

    /// Create a rasterizer and make it the default
    pub fn create(&mut self, font: Vec<u8>) -> Result<RasterizerId> {
        self.create_with_config(font, RasterizerConfig::default())
    }

    pub fn create_with_config(
        &mut self,
        font: Vec<u8>,
        config: RasterizerConfig,
    ) -> Result<RasterizerId> {
        let rasterizer = Rasterizer::create_with_config(self.engine, font, config)?;
        let id = RasterizerId(self.next_id);
        self.next_id += 1;

        self.rasterizers.insert(id, rasterizer);
        self.current = Some(id);
        log::debug!("rasterizer {:?} is now the default", id);
        Ok(id)
    }

    /// Destroy a rasterizer; returns false for an unknown id
    ///
    /// When `id` was the default, no default remains. The previous one is
    /// not restored.
    pub fn destroy(&mut self, id: RasterizerId) -> bool {
        let Some(rasterizer) = self.rasterizers.remove(&id) else {
            return false;
        };
        rasterizer.destroy();
        if self.current == Some(id) {
            log::debug!("default rasterizer {:?} destroyed", id);
            self.current = None;
        }
        true
    }

    /// Render through the default rasterizer
    pub fn rasterize(&mut self, text: &str, pixel_size: i32) -> Result<Raster> {
        self.current_mut()?.rasterize(text, pixel_size)
    }

    /// Render through a specific rasterizer; `None` for an unknown id
    pub fn rasterize_with(
        &mut self,
        id: RasterizerId,
        text: &str,
        pixel_size: i32,
    ) -> Option<Result<Raster>> {
        self.rasterizers
            .get_mut(&id)
            .map(|rasterizer| rasterizer.rasterize(text, pixel_size))
    }

    pub fn current(&self) -> Option<RasterizerId> {
        self.current
    }

    /// The default rasterizer, or [`RasterError::NoDefault`]
    pub fn current_mut(&mut self) -> Result<&mut Rasterizer<'e, E>> {
        self.current
            .and_then(|id| self.rasterizers.get_mut(&id))
            .ok_or(RasterError::NoDefault)
    }

    pub fn get(&self, id: RasterizerId) -> Option<&Rasterizer<'e, E>> {
        self.rasterizers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.rasterizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rasterizers.is_empty()
    }

    /// Destroy every rasterizer
    pub fn clear(&mut self) {
        for (_, rasterizer) in std::mem::take(&mut self.rasterizers) {
            rasterizer.destroy();
        }
        self.current = None;
    }
}

impl<'e, E: FontEngine> std::fmt::Debug for DefaultRasterizer<'e, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultRasterizer")
            .field("engine", &self.engine.name())
            .field("rasterizers", &self.rasterizers.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}
