//! The widget contract and the built-in widgets.
//!
//! A widget answers three questions for a given available-space rectangle and frame index:
//! how big it will be ([`Widget::paint_bounds`]), how many frames its subtree cycles through
//! ([`Widget::frame_count`]), and what it looks like ([`Widget::paint`]).

use std::fmt;

use crate::{
    foundation::core::{Bounds, FrameIndex},
    foundation::math::lcm_u64,
    render::frame::FrameRGBA,
};

pub(crate) mod box_widget;
pub(crate) mod circle;
pub(crate) mod pie_chart;
pub(crate) mod sequence;
pub(crate) mod stack;
pub(crate) mod text;

/// A node in the render tree.
///
/// Widgets are immutable once built and are never mutated by painting, so a single tree
/// can be painted for many frames concurrently.
pub trait Widget: fmt::Debug + Send + Sync {
    /// Footprint this widget occupies inside `bounds` at `frame`, anchored at the origin.
    ///
    /// Must agree with the size of the buffer [`Widget::paint`] returns for the same
    /// arguments.
    fn paint_bounds(&self, bounds: Bounds, frame: FrameIndex) -> Bounds;

    /// Number of distinct frames this widget and its subtree cycle through. Always `>= 1`.
    fn frame_count(&self) -> u32 {
        1
    }

    /// Render into a fresh buffer sized to [`Widget::paint_bounds`].
    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA;
}

/// Owned child widget.
pub type WidgetBox = Box<dyn Widget>;

/// Frame count that keeps every widget in `widgets` in sync: the least common multiple of
/// their individual frame counts.
///
/// An empty collection yields `1`: no animated content means one static frame.
/// Saturates at `u32::MAX` if the multiple does not fit.
pub fn max_frame_count(widgets: &[WidgetBox]) -> u32 {
    let mut acc = 1u64;
    for w in widgets {
        let n = u64::from(w.frame_count().max(1));
        acc = match lcm_u64(acc, n) {
            Some(v) if v <= u64::from(u32::MAX) => v,
            _ => return u32::MAX,
        };
    }
    acc as u32
}

/// Componentwise maximum of every child's footprint, clamped to the available size.
pub(crate) fn union_bounds(children: &[WidgetBox], bounds: Bounds, frame: FrameIndex) -> Bounds {
    let union = children
        .iter()
        .map(|c| c.paint_bounds(bounds, frame))
        .fold(Bounds::EMPTY, Bounds::union_size);
    bounds.fit(i64::from(union.width), i64::from(union.height))
}

#[cfg(test)]
#[path = "../../tests/unit/widget/mod.rs"]
mod tests;
