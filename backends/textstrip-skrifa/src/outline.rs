//! Scaled glyph outlines and their rasterization
//!
//! skrifa draws each outline once, already scaled to pixels, into
//! [`OutlineRecorder`]. The recorded commands are kept with the glyph so it
//! can be rendered later at any pen position without going back to the font.

use skrifa::outline::OutlinePen;
use textstrip_core::{BoundingBox, CoverageMask, F26Dot6, GlyphError, GlyphId, GlyphImage, Vector};
use zeno::{Command, Mask, Point};

/// Collects path commands and the control box while skrifa draws
#[derive(Debug, Default)]
pub(crate) struct OutlineRecorder {
    commands: Vec<Command>,
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
    has_points: bool,
}

impl OutlineRecorder {
    fn update(&mut self, x: f32, y: f32) {
        if self.has_points {
            self.x_min = self.x_min.min(x);
            self.y_min = self.y_min.min(y);
            self.x_max = self.x_max.max(x);
            self.y_max = self.y_max.max(y);
        } else {
            (self.x_min, self.y_min, self.x_max, self.y_max) = (x, y, x, y);
            self.has_points = true;
        }
    }

    /// Control box snapped outward to whole pixels
    fn control_box(&self) -> BoundingBox {
        if !self.has_points {
            return BoundingBox::ZERO;
        }
        BoundingBox::new(
            F26Dot6::from_float(self.x_min).floor().to_int(),
            F26Dot6::from_float(self.y_min).floor().to_int(),
            F26Dot6::from_float(self.x_max).ceil().to_int(),
            F26Dot6::from_float(self.y_max).ceil().to_int(),
        )
    }

    pub(crate) fn finish(self, id: GlyphId, advance: F26Dot6) -> OutlineGlyph {
        OutlineGlyph {
            id,
            advance,
            control_box: self.control_box(),
            commands: self.commands,
        }
    }
}

impl OutlinePen for OutlineRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.update(x, y);
        self.commands.push(Command::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.update(x, y);
        self.commands.push(Command::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.update(cx0, cy0);
        self.update(x, y);
        self.commands
            .push(Command::QuadTo(Point::new(cx0, cy0), Point::new(x, y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.update(cx0, cy0);
        self.update(cx1, cy1);
        self.update(x, y);
        self.commands.push(Command::CurveTo(
            Point::new(cx0, cy0),
            Point::new(cx1, cy1),
            Point::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}

/// A glyph outline scaled to the face's pixel size
#[derive(Debug, Clone)]
pub struct OutlineGlyph {
    id: GlyphId,
    advance: F26Dot6,
    control_box: BoundingBox,
    commands: Vec<Command>,
}

impl OutlineGlyph {
    pub fn id(&self) -> GlyphId {
        self.id
    }

    /// True for glyphs with no contours, such as a space
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

impl GlyphImage for OutlineGlyph {
    fn advance(&self) -> F26Dot6 {
        self.advance
    }

    fn control_box(&self) -> BoundingBox {
        self.control_box
    }

    fn render_to_mask(&self, pen: Vector) -> Result<CoverageMask, GlyphError> {
        if self.is_blank() {
            return Ok(CoverageMask::default());
        }

        // Move the glyph to the pen and flip it into zeno's y-down space, so
        // the mask's top-left placement is simply the negated top edge
        let (dx, dy) = (pen.x.to_float(), pen.y.to_float());
        let flip = |p: Point| Point::new(p.x + dx, -(p.y + dy));
        let path: Vec<Command> = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                Command::MoveTo(p) => Command::MoveTo(flip(p)),
                Command::LineTo(p) => Command::LineTo(flip(p)),
                Command::QuadTo(c, p) => Command::QuadTo(flip(c), flip(p)),
                Command::CurveTo(c0, c1, p) => Command::CurveTo(flip(c0), flip(c1), flip(p)),
                Command::Close => Command::Close,
            })
            .collect();

        let (data, placement) = Mask::new(&path[..]).render();

        let expected = placement.width as usize * placement.height as usize;
        if data.len() < expected {
            return Err(GlyphError::Render {
                glyph: self.id,
                reason: format!(
                    "mask holds {} bytes, expected {} for {}x{}",
                    data.len(),
                    expected,
                    placement.width,
                    placement.height
                ),
            });
        }

        Ok(CoverageMask {
            width: placement.width,
            height: placement.height,
            left: placement.left,
            top: -placement.top,
            data,
        })
    }
}
