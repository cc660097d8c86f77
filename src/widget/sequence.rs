use crate::{
    foundation::core::{Bounds, FrameIndex},
    render::frame::FrameRGBA,
    widget::{Widget, WidgetBox, union_bounds},
};

/// Children shown one per frame, in order.
///
/// Each child occupies exactly one slot of the cycle; a child's own animation is not
/// expanded. The footprint is the union of all children so it stays stable while the
/// content changes.
#[derive(Debug, Default)]
pub struct Sequence {
    children: Vec<WidgetBox>,
}

impl Sequence {
    /// Sequence showing `children` in order.
    pub fn new(children: Vec<WidgetBox>) -> Self {
        Self { children }
    }

    /// Append a frame.
    pub fn push(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// All children, in display order.
    pub fn children(&self) -> &[WidgetBox] {
        &self.children
    }

    /// The child visible at `frame`, if any.
    pub fn active_child(&self, frame: FrameIndex) -> Option<&dyn Widget> {
        let n = u32::try_from(self.children.len()).ok()?;
        let idx = frame.cycle(n).0 as usize;
        self.children.get(idx).map(|c| c.as_ref())
    }
}

impl Widget for Sequence {
    fn paint_bounds(&self, bounds: Bounds, frame: FrameIndex) -> Bounds {
        union_bounds(&self.children, bounds, frame)
    }

    fn frame_count(&self) -> u32 {
        u32::try_from(self.children.len())
            .unwrap_or(u32::MAX)
            .max(1)
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let fp = self.paint_bounds(bounds, frame);
        let mut out = FrameRGBA::for_bounds(fp);
        if let Some(child) = self.active_child(frame) {
            out.draw_over(&child.paint(bounds, frame), 0, 0);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/sequence.rs"]
mod tests;
