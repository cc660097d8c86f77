use crate::{
    foundation::core::{Bounds, FrameIndex},
    render::frame::FrameRGBA,
    widget::{Widget, WidgetBox, max_frame_count, union_bounds},
};

/// Children drawn on top of each other, later children on top.
///
/// Every child gets the same available space and is anchored at the stack's top-left
/// corner. Each child runs its own animation cycle; the stack repeats once all of them line
/// up again.
#[derive(Debug, Default)]
pub struct Stack {
    children: Vec<WidgetBox>,
}

impl Stack {
    /// Stack of `children`, bottom first.
    pub fn new(children: Vec<WidgetBox>) -> Self {
        Self { children }
    }

    /// Add a layer on top.
    pub fn push(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Layers, bottom first.
    pub fn children(&self) -> &[WidgetBox] {
        &self.children
    }
}

impl Widget for Stack {
    fn paint_bounds(&self, bounds: Bounds, frame: FrameIndex) -> Bounds {
        union_bounds(&self.children, bounds, frame)
    }

    fn frame_count(&self) -> u32 {
        max_frame_count(&self.children)
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let fp = self.paint_bounds(bounds, frame);
        let mut out = FrameRGBA::for_bounds(fp);
        for child in &self.children {
            let local = frame.cycle(child.frame_count());
            let img = child.paint(bounds, local);
            out.draw_over(&img, 0, 0);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/stack.rs"]
mod tests;
