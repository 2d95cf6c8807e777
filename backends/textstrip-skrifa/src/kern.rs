//! Pair kerning from the TrueType `kern` table
//!
//! Only the Microsoft layout (version 0) with format 0 subtables is used,
//! which is what `FT_Get_Kerning` consults. Horizontal subtables that are
//! neither cross-stream nor minimum-value contribute; values from several
//! subtables add up unless a subtable sets the override bit. GPOS kerning is
//! a shaping concern and not looked at here.
//!
//! Parsing is read-fonts' job. The face cannot hold a borrowed table next to
//! the bytes it borrows from, so the usable subtables are copied out once and
//! re-read as [`Subtable0`] on lookup, which only touches their header.

use read_fonts::tables::kern::{Kern, Subtable, Subtable0, SubtableKind};
use read_fonts::types::GlyphId;
use read_fonts::{FontData, FontRead, FontRef, TableProvider};

const COVERAGE_MINIMUM: u16 = 0x0002;
const COVERAGE_OVERRIDE: u16 = 0x0008;

/// The horizontal format 0 subtables of a `kern` table
#[derive(Debug, Clone, Default)]
pub struct KernTable {
    subtables: Vec<PairSubtable>,
}

#[derive(Debug, Clone)]
struct PairSubtable {
    data: Vec<u8>,
    overrides: bool,
}

impl PairSubtable {
    fn from_subtable(subtable: &Subtable<'_>) -> Option<Self> {
        let Subtable::Ot(ot) = subtable else {
            return None;
        };
        let coverage = ot.coverage();
        if !subtable.is_horizontal()
            || subtable.is_cross_stream()
            || coverage & COVERAGE_MINIMUM != 0
        {
            return None;
        }

        match subtable.kind() {
            Ok(SubtableKind::Format0(table)) if !table.pairs().is_empty() => Some(Self {
                data: ot.data().to_vec(),
                overrides: coverage & COVERAGE_OVERRIDE != 0,
            }),
            Ok(_) => None,
            Err(err) => {
                log::debug!("kern: unreadable subtable: {}", err);
                None
            },
        }
    }

    fn table(&self) -> Option<Subtable0<'_>> {
        Subtable0::read(FontData::new(&self.data)).ok()
    }
}

impl KernTable {
    /// Read the font's `kern` table; `None` when it is missing or has no
    /// usable pairs
    pub fn from_font(font: &FontRef<'_>) -> Option<Self> {
        font.kern().ok().and_then(|kern| Self::from_kern(&kern))
    }

    pub fn from_kern(kern: &Kern<'_>) -> Option<Self> {
        if let Kern::Aat(_) = kern {
            log::debug!("kern: Apple table layout, ignored");
            return None;
        }

        let subtables: Vec<PairSubtable> = kern
            .subtables()
            .filter_map(|subtable| match subtable {
                Ok(subtable) => PairSubtable::from_subtable(&subtable),
                Err(err) => {
                    log::debug!("kern: skipping subtable: {}", err);
                    None
                },
            })
            .collect();

        (!subtables.is_empty()).then_some(Self { subtables })
    }

    /// Kerning value for an ordered pair in font units, 0 when absent
    pub fn get(&self, left: u32, right: u32) -> i32 {
        let (left, right) = (GlyphId::new(left), GlyphId::new(right));
        self.subtables.iter().fold(0, |total, subtable| {
            match subtable.table().and_then(|t| t.kerning(left, right)) {
                Some(value) if subtable.overrides => value,
                Some(value) => total + value,
                None => total,
            }
        })
    }

    /// Pair records across all usable subtables
    pub fn len(&self) -> usize {
        self.subtables
            .iter()
            .filter_map(PairSubtable::table)
            .map(|t| t.pairs().len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
