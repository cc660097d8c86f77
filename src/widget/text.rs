use crate::{
    fonts::catalog::{DEFAULT_FONT, Font, get_font},
    foundation::core::{Bounds, FrameIndex, Rgba8Premul},
    foundation::error::PixmatrixResult,
    render::frame::FrameRGBA,
    widget::Widget,
};

/// A single line of text drawn with a fixed-width bitmap font.
///
/// The font is resolved when the widget is built, so an unknown font name is reported
/// up front and painting cannot fail.
#[derive(Clone, Debug)]
pub struct Text {
    content: String,
    font: &'static Font,
    color: Rgba8Premul,
    spacing: u32,
    line_height: Option<u32>,
    offset: i32,
}

impl Text {
    /// Text in the named font, drawn in white.
    pub fn new(content: impl Into<String>, font: &str) -> PixmatrixResult<Self> {
        Ok(Self {
            content: content.into(),
            font: get_font(font)?,
            color: Rgba8Premul::WHITE,
            spacing: 0,
            line_height: None,
            offset: 0,
        })
    }

    /// Text in [`DEFAULT_FONT`].
    pub fn with_default_font(content: impl Into<String>) -> PixmatrixResult<Self> {
        Self::new(content, DEFAULT_FONT)
    }

    /// Glyph color.
    pub fn color(mut self, color: Rgba8Premul) -> Self {
        self.color = color;
        self
    }

    /// Extra pixels between adjacent character cells.
    pub fn spacing(mut self, px: u32) -> Self {
        self.spacing = px;
        self
    }

    /// Override the font's line height.
    pub fn line_height(mut self, px: u32) -> Self {
        self.line_height = Some(px);
        self
    }

    /// Shift glyphs vertically inside the line (positive moves down).
    pub fn offset(mut self, px: i32) -> Self {
        self.offset = px;
        self
    }

    /// The string being drawn.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The resolved font.
    pub fn font(&self) -> &'static Font {
        self.font
    }

    fn advance(&self) -> i64 {
        i64::from(self.font.cell_width()) + i64::from(self.spacing)
    }

    fn natural_size(&self) -> (i64, i64) {
        let n = self.content.chars().count() as i64;
        let width = if n == 0 {
            0
        } else {
            n * i64::from(self.font.cell_width()) + (n - 1) * i64::from(self.spacing)
        };
        let height = i64::from(self.line_height.unwrap_or(self.font.cell_height()));
        (width, height)
    }
}

impl Widget for Text {
    fn paint_bounds(&self, bounds: Bounds, _frame: FrameIndex) -> Bounds {
        let (w, h) = self.natural_size();
        bounds.fit(w, h)
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let fp = self.paint_bounds(bounds, frame);
        let mut out = FrameRGBA::for_bounds(fp);
        if out.is_empty() {
            return out;
        }

        let (w, h) = (i64::from(out.width), i64::from(out.height));
        for (i, ch) in self.content.chars().enumerate() {
            let cell_x = (i as i64) * self.advance();
            if cell_x >= w {
                break;
            }
            for (gx, gy) in self.font.lit_pixels(ch) {
                let x = cell_x + i64::from(gx);
                let y = i64::from(gy) + i64::from(self.offset);
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    out.blend_pixel(x as u32, y as u32, self.color);
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/text.rs"]
mod tests;
