//! Pixmatrix renders small animated widget trees into RGBA frames for low-resolution LED
//! matrix displays.
//!
//! A tree is built from a handful of widgets ([`BoxWidget`], [`Text`], [`Circle`],
//! [`PieChart`], [`Stack`], [`Sequence`]), either directly or from a JSON [`RootDef`]:
//!
//! - Paint one frame with [`paint_widget`]
//! - Ask a tree how many frames its animation needs with [`Widget::frame_count`]
//! - Render the whole animation, optionally in parallel, with [`render_frames`]
//!
//! Frames hold **premultiplied** RGBA8 pixels; use [`FrameRGBA::to_rgba_image`] to get a
//! straight-alpha image for encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod fonts;
mod foundation;
mod render;
mod scene;
mod widget;

pub use crate::foundation::core::{Bounds, FrameIndex, Point, Rgba8Premul, Vec2};
pub use crate::foundation::error::{PixmatrixError, PixmatrixResult};
pub use crate::foundation::math::mod_int;

pub use crate::fonts::catalog::{DEFAULT_FONT, Font, get_font, get_font_list};

pub use crate::widget::box_widget::BoxWidget;
pub use crate::widget::circle::Circle;
pub use crate::widget::pie_chart::PieChart;
pub use crate::widget::sequence::Sequence;
pub use crate::widget::stack::Stack;
pub use crate::widget::text::Text;
pub use crate::widget::{Widget, WidgetBox, max_frame_count};

pub use crate::render::composite::{PremulRgba8, over};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::pipeline::{
    DEFAULT_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderThreading, Root, paint_widget,
    render_frames,
};

pub use crate::scene::color::ColorDef;
pub use crate::scene::model::{MAX_TREE_DEPTH, RootDef, WidgetDef};
