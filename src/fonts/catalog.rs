use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use crate::{
    fonts::glyphs::{GLYPHS_3X5, GLYPHS_5X7},
    foundation::error::{PixmatrixError, PixmatrixResult},
};

/// Name of the font used when a text widget does not ask for one.
pub const DEFAULT_FONT: &str = "tb-8";

const FIRST_GLYPH: u32 = ' ' as u32;
const LAST_GLYPH: u32 = '~' as u32;

/// A fixed-size table of bitmap glyphs covering printable ASCII.
#[derive(Debug)]
struct GlyphSet {
    width: u32,
    height: u32,
    rows: &'static [u8],
}

impl GlyphSet {
    fn rows_for(&self, ch: char) -> &'static [u8] {
        let code = u32::from(ch);
        let code = if (FIRST_GLYPH..=LAST_GLYPH).contains(&code) {
            code
        } else {
            u32::from('?')
        };
        let h = self.height as usize;
        let start = ((code - FIRST_GLYPH) as usize) * h;
        &self.rows[start..start + h]
    }
}

static SET_5X7: GlyphSet = GlyphSet {
    width: 5,
    height: 7,
    rows: &GLYPHS_5X7,
};

static SET_3X5: GlyphSet = GlyphSet {
    width: 3,
    height: 5,
    rows: &GLYPHS_3X5,
};

/// A fixed-width bitmap font.
///
/// Every character occupies a `cell_width × cell_height` cell. The glyph bitmap sits at the
/// cell's left edge, shifted down by a per-font offset. Characters outside printable ASCII
/// render as `?`.
#[derive(Debug)]
pub struct Font {
    name: &'static str,
    cell_width: u32,
    cell_height: u32,
    glyph_y: u32,
    glyphs: &'static GlyphSet,
}

impl Font {
    /// Catalog name, as accepted by [`get_font`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Horizontal advance of one character, in pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Line height, in pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Whether pixel `(x, y)` of the cell for `ch` is lit.
    pub fn is_set(&self, ch: char, x: u32, y: u32) -> bool {
        let set = self.glyphs;
        if y < self.glyph_y {
            return false;
        }
        let (gx, gy) = (x, y - self.glyph_y);
        if gx >= set.width || gy >= set.height {
            return false;
        }
        let row = set.rows_for(ch)[gy as usize];
        (row >> (set.width - 1 - gx)) & 1 != 0
    }

    /// Lit pixels of the cell for `ch`, as cell-relative coordinates.
    pub fn lit_pixels(&self, ch: char) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (w, h) = (self.glyphs.width, self.glyphs.height);
        (0..h).flat_map(move |gy| {
            (0..w).filter_map(move |gx| {
                let (x, y) = (gx, gy + self.glyph_y);
                self.is_set(ch, x, y).then_some((x, y))
            })
        })
    }
}

struct FontCatalog {
    fonts: BTreeMap<&'static str, Font>,
}

impl FontCatalog {
    fn bundled() -> Self {
        let specs: [(&'static str, u32, u32, u32, &'static GlyphSet); 6] = [
            ("tb-8", 6, 8, 1, &SET_5X7),
            ("5x8", 5, 8, 0, &SET_5X7),
            ("6x10", 6, 10, 2, &SET_5X7),
            ("6x13", 6, 13, 3, &SET_5X7),
            ("tom-thumb", 4, 6, 1, &SET_3X5),
            ("CG-pixel-3x5-mono", 4, 5, 0, &SET_3X5),
        ];

        let fonts = specs
            .into_iter()
            .map(|(name, cell_width, cell_height, glyph_y, glyphs)| {
                let font = Font {
                    name,
                    cell_width,
                    cell_height,
                    glyph_y,
                    glyphs,
                };
                (name, font)
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(fonts = fonts.len(), "font catalog initialized");
        Self { fonts }
    }
}

static CATALOG: Lazy<FontCatalog> = Lazy::new(FontCatalog::bundled);

/// Names of every font in the catalog.
pub fn get_font_list() -> BTreeSet<&'static str> {
    CATALOG.fonts.keys().copied().collect()
}

/// Look up a font by exact, case-sensitive name.
pub fn get_font(name: &str) -> PixmatrixResult<&'static Font> {
    CATALOG
        .fonts
        .get(name)
        .ok_or_else(|| PixmatrixError::font_not_found(name))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/catalog.rs"]
mod tests;
