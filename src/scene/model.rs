use serde::{Deserialize, Serialize};

use crate::{
    fonts::catalog::DEFAULT_FONT,
    foundation::error::{PixmatrixError, PixmatrixResult},
    render::pipeline::{DEFAULT_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, Root},
    scene::color::ColorDef,
    widget::{
        WidgetBox, box_widget::BoxWidget, circle::Circle, pie_chart::PieChart,
        sequence::Sequence, stack::Stack, text::Text,
    },
};

/// Deepest widget nesting accepted from a scene description.
pub const MAX_TREE_DEPTH: usize = 64;

/// A widget tree as handed over by a script host, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetDef {
    /// [`BoxWidget`].
    Box {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Fill color.
        #[serde(default)]
        color: ColorDef,
    },
    /// [`Text`].
    Text {
        /// The string to draw.
        content: String,
        /// Catalog font name; defaults to [`DEFAULT_FONT`].
        #[serde(default = "default_font")]
        font: String,
        /// Glyph color.
        #[serde(default)]
        color: ColorDef,
        /// Pixels between character cells.
        #[serde(default)]
        spacing: u32,
        /// Line height override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        /// Vertical glyph shift.
        #[serde(default)]
        offset: i32,
    },
    /// [`Circle`].
    Circle {
        /// Disc diameter; must be positive.
        diameter: u32,
        /// Disc color.
        #[serde(default)]
        color: ColorDef,
        /// Widget centered inside the disc.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<std::boxed::Box<WidgetDef>>,
    },
    /// [`PieChart`].
    PieChart {
        /// Slice colors, cycled.
        colors: Vec<ColorDef>,
        /// Relative slice sizes.
        weights: Vec<f64>,
        /// Disc diameter; must be positive.
        diameter: u32,
    },
    /// [`Stack`].
    Stack {
        /// Layers, bottom first.
        #[serde(default)]
        children: Vec<WidgetDef>,
    },
    /// [`Sequence`].
    Sequence {
        /// One child per frame.
        #[serde(default)]
        children: Vec<WidgetDef>,
    },
}

fn default_font() -> String {
    DEFAULT_FONT.to_owned()
}

impl WidgetDef {
    /// Validate and build the widget tree.
    ///
    /// Fails on the first invalid node (unknown font, bad shape parameters, excessive
    /// nesting); nothing is rendered from a tree that fails to build.
    pub fn build(&self) -> PixmatrixResult<WidgetBox> {
        self.build_at(1)
    }

    fn build_at(&self, depth: usize) -> PixmatrixResult<WidgetBox> {
        if depth > MAX_TREE_DEPTH {
            return Err(PixmatrixError::validation(format!(
                "widget tree is deeper than {MAX_TREE_DEPTH} levels"
            )));
        }
        let build_all = |children: &[WidgetDef]| {
            children
                .iter()
                .map(|c| c.build_at(depth + 1))
                .collect::<PixmatrixResult<Vec<_>>>()
        };

        let widget: WidgetBox = match self {
            WidgetDef::Box {
                width,
                height,
                color,
            } => Box::new(BoxWidget::new(*width, *height, color.to_rgba8_premul())),
            WidgetDef::Text {
                content,
                font,
                color,
                spacing,
                height,
                offset,
            } => {
                let mut text = Text::new(content.clone(), font)?
                    .color(color.to_rgba8_premul())
                    .spacing(*spacing)
                    .offset(*offset);
                if let Some(h) = height {
                    text = text.line_height(*h);
                }
                Box::new(text)
            }
            WidgetDef::Circle {
                diameter,
                color,
                child,
            } => {
                let mut circle = Circle::new(*diameter, color.to_rgba8_premul())?;
                if let Some(child) = child {
                    circle = circle.with_boxed_child(child.build_at(depth + 1)?);
                }
                Box::new(circle)
            }
            WidgetDef::PieChart {
                colors,
                weights,
                diameter,
            } => Box::new(PieChart::new(
                colors.iter().map(|c| c.to_rgba8_premul()).collect(),
                weights.clone(),
                *diameter,
            )?),
            WidgetDef::Stack { children } => Box::new(Stack::new(build_all(children)?)),
            WidgetDef::Sequence { children } => {
                Box::new(Sequence::new(build_all(children)?))
            }
        };
        Ok(widget)
    }
}

/// Top-level scene description: the display size, frame delay and the widget tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootDef {
    /// Display width, 64 by default.
    #[serde(default = "default_width")]
    pub width: i32,
    /// Display height, 32 by default.
    #[serde(default = "default_height")]
    pub height: i32,
    /// Per-frame delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
    /// The widget tree.
    pub child: WidgetDef,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_delay_ms() -> u32 {
    DEFAULT_DELAY_MS
}

impl RootDef {
    /// Parse a scene from JSON text. Malformed input is a [`PixmatrixError::Serde`].
    pub fn from_json_str(s: &str) -> PixmatrixResult<Self> {
        serde_json::from_str(s).map_err(|e| PixmatrixError::serde(e.to_string()))
    }

    /// Parse a scene from an already decoded JSON value.
    pub fn from_json_value(v: serde_json::Value) -> PixmatrixResult<Self> {
        serde_json::from_value(v).map_err(|e| PixmatrixError::serde(e.to_string()))
    }

    /// Serialize back to compact JSON.
    pub fn to_json_string(&self) -> PixmatrixResult<String> {
        serde_json::to_string(self).map_err(|e| PixmatrixError::serde(e.to_string()))
    }

    /// Validate the tree and wrap it in a [`Root`] for the described display.
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> PixmatrixResult<Root> {
        let child = self.child.build()?;
        tracing::debug!(frames = child.frame_count(), "built widget tree");
        Ok(Root::from_boxed(child)
            .with_viewport(self.width, self.height)
            .with_delay_ms(self.delay_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
