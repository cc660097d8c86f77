use crate::{
    foundation::core::{Bounds, FrameIndex, Rgba8Premul},
    render::frame::FrameRGBA,
    widget::Widget,
};

/// A solid rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxWidget {
    /// Requested width; clamped to the available space.
    pub width: u32,
    /// Requested height; clamped to the available space.
    pub height: u32,
    /// Fill color.
    pub color: Rgba8Premul,
}

impl BoxWidget {
    /// A `width × height` rectangle of `color`.
    pub fn new(width: u32, height: u32, color: Rgba8Premul) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

impl Widget for BoxWidget {
    fn paint_bounds(&self, bounds: Bounds, _frame: FrameIndex) -> Bounds {
        bounds.fit(i64::from(self.width), i64::from(self.height))
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let fp = self.paint_bounds(bounds, frame);
        FrameRGBA::filled(fp.dx(), fp.dy(), self.color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/box_widget.rs"]
mod tests;
