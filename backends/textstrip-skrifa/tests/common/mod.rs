//! A tiny TrueType font assembled in memory
//!
//! 1000 units per em, so at 10 pixels one pixel is 100 units and every
//! metric below lands on whole pixels.
//!
//! | gid | char  | outline                 | advance |
//! |-----|-------|-------------------------|---------|
//! | 0   |       | empty                   | 500     |
//! | 1   | `A`   | rect (100,0)-(500,700)  | 600     |
//! | 2   | `V`   | rect (100,0)-(500,700)  | 600     |
//! | 3   | space | empty                   | 250     |
//! | 4   | `g`   | rect (100,-200)-(400,500) | 500   |
//!
//! The `kern` table holds one pair, A-V at -100.

#![allow(dead_code)]

pub const UPEM: u16 = 1000;
pub const GID_A: u32 = 1;
pub const GID_V: u32 = 2;
pub const GID_SPACE: u32 = 3;
pub const GID_G: u32 = 4;
pub const KERN_AV_UNITS: i16 = -100;

struct Glyph {
    rect: Option<(i16, i16, i16, i16)>,
    advance: u16,
}

const GLYPHS: [Glyph; 5] = [
    Glyph { rect: None, advance: 500 },
    Glyph { rect: Some((100, 0, 500, 700)), advance: 600 },
    Glyph { rect: Some((100, 0, 500, 700)), advance: 600 },
    Glyph { rect: None, advance: 250 },
    Glyph { rect: Some((100, -200, 400, 500)), advance: 500 },
];

/// (first char, last char, first glyph), sorted by char
const CMAP_GROUPS: [(u32, u32, u32); 4] = [
    (0x20, 0x20, 3),
    (0x41, 0x41, 1),
    (0x56, 0x56, 2),
    (0x67, 0x67, 4),
];

/// Full font with outlines and a kern table
pub fn test_font() -> Vec<u8> {
    FontBuilder { kern: true, outlines: true }.build()
}

/// Same font, no `kern` table
pub fn test_font_without_kern() -> Vec<u8> {
    FontBuilder { kern: false, outlines: true }.build()
}

/// A font with metrics and a charmap but no `glyf`/`loca`
pub fn font_without_outlines() -> Vec<u8> {
    FontBuilder { kern: false, outlines: false }.build()
}

struct FontBuilder {
    kern: bool,
    outlines: bool,
}

impl FontBuilder {
    fn build(&self) -> Vec<u8> {
        let (glyf, loca) = glyf_and_loca();

        // Tags must stay sorted for the table directory
        let mut tables: Vec<(&[u8; 4], Vec<u8>)> = vec![(b"cmap", cmap())];
        if self.outlines {
            tables.push((b"glyf", glyf));
        }
        tables.push((b"head", head()));
        tables.push((b"hhea", hhea()));
        tables.push((b"hmtx", hmtx()));
        if self.kern {
            tables.push((b"kern", kern()));
        }
        if self.outlines {
            tables.push((b"loca", loca));
        }
        tables.push((b"maxp", maxp()));

        sfnt(&tables)
    }
}

fn sfnt(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = 16u16 << entry_selector;

    let mut out = Vec::new();
    put_u32(&mut out, 0x0001_0000);
    put_u16(&mut out, num_tables);
    put_u16(&mut out, search_range);
    put_u16(&mut out, entry_selector);
    put_u16(&mut out, num_tables * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in tables {
        out.extend_from_slice(*tag);
        put_u32(&mut out, 0); // checksum, not verified by readers
        put_u32(&mut out, offset as u32);
        put_u32(&mut out, data.len() as u32);
        offset += padded(data.len());
    }
    for (_, data) in tables {
        out.extend_from_slice(data);
        out.resize(padded(out.len()), 0);
    }
    out
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn head() -> Vec<u8> {
    let mut out = Vec::new();
    put_u16(&mut out, 1);
    put_u16(&mut out, 0);
    put_u32(&mut out, 0x0001_0000); // fontRevision
    put_u32(&mut out, 0); // checksumAdjustment
    put_u32(&mut out, 0x5F0F_3CF5);
    put_u16(&mut out, 0); // flags
    put_u16(&mut out, UPEM);
    out.extend_from_slice(&[0; 16]); // created, modified
    put_i16(&mut out, 100);
    put_i16(&mut out, -200);
    put_i16(&mut out, 500);
    put_i16(&mut out, 700);
    put_u16(&mut out, 0); // macStyle
    put_u16(&mut out, 8); // lowestRecPPEM
    put_i16(&mut out, 2); // fontDirectionHint
    put_i16(&mut out, 1); // indexToLocFormat: long
    put_i16(&mut out, 0);
    assert_eq!(out.len(), 54);
    out
}

fn hhea() -> Vec<u8> {
    let mut out = Vec::new();
    put_u32(&mut out, 0x0001_0000);
    put_i16(&mut out, 800); // ascender
    put_i16(&mut out, -200); // descender
    put_i16(&mut out, 0); // lineGap
    put_u16(&mut out, 600); // advanceWidthMax
    put_i16(&mut out, 0); // minLeftSideBearing
    put_i16(&mut out, 0); // minRightSideBearing
    put_i16(&mut out, 500); // xMaxExtent
    put_i16(&mut out, 1); // caretSlopeRise
    put_i16(&mut out, 0); // caretSlopeRun
    put_i16(&mut out, 0); // caretOffset
    out.extend_from_slice(&[0; 8]); // reserved
    put_i16(&mut out, 0); // metricDataFormat
    put_u16(&mut out, GLYPHS.len() as u16);
    assert_eq!(out.len(), 36);
    out
}

fn maxp() -> Vec<u8> {
    let mut out = Vec::new();
    put_u32(&mut out, 0x0001_0000);
    put_u16(&mut out, GLYPHS.len() as u16);
    put_u16(&mut out, 4); // maxPoints
    put_u16(&mut out, 1); // maxContours
    put_u16(&mut out, 0); // maxCompositePoints
    put_u16(&mut out, 0); // maxCompositeContours
    put_u16(&mut out, 2); // maxZones
    out.extend_from_slice(&[0; 16]); // twilight points through component depth
    assert_eq!(out.len(), 32);
    out
}

fn hmtx() -> Vec<u8> {
    let mut out = Vec::new();
    for glyph in &GLYPHS {
        put_u16(&mut out, glyph.advance);
        // lsb equals xMin so the outline is not shifted
        put_i16(&mut out, glyph.rect.map_or(0, |(x_min, ..)| x_min));
    }
    out
}

fn cmap() -> Vec<u8> {
    let mut out = Vec::new();
    put_u16(&mut out, 0);
    put_u16(&mut out, 1);
    put_u16(&mut out, 3); // Windows
    put_u16(&mut out, 10); // full Unicode
    put_u32(&mut out, 12);

    put_u16(&mut out, 12);
    put_u16(&mut out, 0);
    put_u32(&mut out, 16 + 12 * CMAP_GROUPS.len() as u32);
    put_u32(&mut out, 0); // language
    put_u32(&mut out, CMAP_GROUPS.len() as u32);
    for (start, end, glyph) in CMAP_GROUPS {
        put_u32(&mut out, start);
        put_u32(&mut out, end);
        put_u32(&mut out, glyph);
    }
    out
}

fn glyf_and_loca() -> (Vec<u8>, Vec<u8>) {
    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    for glyph in &GLYPHS {
        put_u32(&mut loca, glyf.len() as u32);
        if let Some(rect) = glyph.rect {
            glyf.extend_from_slice(&rect_glyph(rect));
            glyf.resize(padded(glyf.len()), 0);
        }
    }
    put_u32(&mut loca, glyf.len() as u32);
    (glyf, loca)
}

/// One clockwise contour with all points on-curve and word-sized deltas
fn rect_glyph((x0, y0, x1, y1): (i16, i16, i16, i16)) -> Vec<u8> {
    let points = [(x0, y0), (x0, y1), (x1, y1), (x1, y0)];

    let mut out = Vec::new();
    put_i16(&mut out, 1);
    put_i16(&mut out, x0);
    put_i16(&mut out, y0);
    put_i16(&mut out, x1);
    put_i16(&mut out, y1);
    put_u16(&mut out, points.len() as u16 - 1);
    put_u16(&mut out, 0); // no instructions
    out.extend_from_slice(&[0x01; 4]);

    let mut prev = 0;
    for &(x, _) in &points {
        put_i16(&mut out, x - prev);
        prev = x;
    }
    prev = 0;
    for &(_, y) in &points {
        put_i16(&mut out, y - prev);
        prev = y;
    }
    out
}

fn kern() -> Vec<u8> {
    let pairs = [(GID_A as u16, GID_V as u16, KERN_AV_UNITS)];

    let mut out = Vec::new();
    put_u16(&mut out, 0);
    put_u16(&mut out, 1);

    put_u16(&mut out, 0);
    put_u16(&mut out, (6 + 8 + 6 * pairs.len()) as u16);
    put_u16(&mut out, 0x0001); // horizontal, format 0
    put_u16(&mut out, pairs.len() as u16);
    put_u16(&mut out, 6); // searchRange
    put_u16(&mut out, 0); // entrySelector
    put_u16(&mut out, 0); // rangeShift
    for (left, right, value) in pairs {
        put_u16(&mut out, left);
        put_u16(&mut out, right);
        put_i16(&mut out, value);
    }
    out
}

fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}
