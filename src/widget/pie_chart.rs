use crate::{
    foundation::core::{Bounds, FrameIndex, Rgba8Premul},
    foundation::error::{PixmatrixError, PixmatrixResult},
    render::frame::FrameRGBA,
    widget::Widget,
    widget::circle::{check_diameter, disc_center, in_disc, pixel_center},
};

/// A disc split into slices proportional to a list of weights.
///
/// Slices start at 12 o'clock and run clockwise in list order. Colors cycle when there are
/// fewer colors than weights; the weight list alone decides how many slices there are.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    colors: Vec<Rgba8Premul>,
    weights: Vec<f64>,
    diameter: u32,
    total: f64,
}

impl PieChart {
    /// Build a chart; both lists must be non-empty and the weights finite, non-negative
    /// and not all zero.
    pub fn new(
        colors: Vec<Rgba8Premul>,
        weights: Vec<f64>,
        diameter: u32,
    ) -> PixmatrixResult<Self> {
        check_diameter("pie chart", diameter)?;
        if colors.is_empty() {
            return Err(PixmatrixError::validation(
                "pie chart needs at least one color",
            ));
        }
        if weights.is_empty() {
            return Err(PixmatrixError::validation(
                "pie chart needs at least one weight",
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(PixmatrixError::validation(format!(
                "pie chart weights must be finite and >= 0, got {bad}"
            )));
        }
        let total: f64 = weights.iter().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(PixmatrixError::validation(
                "pie chart weights must sum to a positive finite value",
            ));
        }
        Ok(Self {
            colors,
            weights,
            diameter,
            total,
        })
    }

    /// Diameter in pixels.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Angular span of each slice, in degrees.
    pub fn slice_spans(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|w| 360.0 * w / self.total)
            .collect()
    }

    /// Color of slice `i`, cycling through the configured colors.
    pub fn slice_color(&self, i: usize) -> Rgba8Premul {
        self.colors[i % self.colors.len()]
    }

    /// Index of the slice covering `deg` (degrees clockwise from 12 o'clock, in `[0, 360)`).
    pub fn slice_at(&self, deg: f64) -> usize {
        let mut cum = 0.0;
        for (i, w) in self.weights.iter().enumerate() {
            cum += w;
            if deg < cum / self.total * 360.0 {
                return i;
            }
        }
        self.weights.len() - 1
    }
}

impl Widget for PieChart {
    fn paint_bounds(&self, bounds: Bounds, _frame: FrameIndex) -> Bounds {
        let d = i64::from(self.diameter);
        bounds.fit(d, d)
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let fp = self.paint_bounds(bounds, frame);
        let mut out = FrameRGBA::for_bounds(fp);
        let d = self.diameter;
        let center = disc_center(d);

        for y in 0..out.height {
            for x in 0..out.width {
                if !in_disc(d, x, y) {
                    continue;
                }
                let v = pixel_center(x, y) - center;
                let mut deg = v.x.atan2(-v.y).to_degrees();
                if deg < 0.0 {
                    deg += 360.0;
                }
                out.set_pixel(x, y, self.slice_color(self.slice_at(deg)));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/pie_chart.rs"]
mod tests;
