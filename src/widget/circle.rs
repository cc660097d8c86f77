use kurbo::Point;

use crate::{
    foundation::core::{Bounds, FrameIndex, Rgba8Premul},
    foundation::error::{PixmatrixError, PixmatrixResult},
    render::frame::FrameRGBA,
    widget::{Widget, WidgetBox},
};

/// Center of the pixel at `(x, y)`.
pub(crate) fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Center of a `diameter × diameter` square.
pub(crate) fn disc_center(diameter: u32) -> Point {
    let r = f64::from(diameter) / 2.0;
    Point::new(r, r)
}

/// Whether the pixel at `(x, y)` lies inside the disc inscribed in a
/// `diameter × diameter` square.
pub(crate) fn in_disc(diameter: u32, x: u32, y: u32) -> bool {
    pixel_center(x, y).distance(disc_center(diameter)) <= f64::from(diameter) / 2.0
}

pub(crate) fn check_diameter(kind: &str, diameter: u32) -> PixmatrixResult<()> {
    if diameter == 0 {
        return Err(PixmatrixError::validation(format!(
            "{kind} diameter must be > 0"
        )));
    }
    if i32::try_from(diameter).is_err() {
        return Err(PixmatrixError::validation(format!(
            "{kind} diameter {diameter} is too large"
        )));
    }
    Ok(())
}

/// A disc of a fixed diameter, optionally masking a centered child.
#[derive(Debug)]
pub struct Circle {
    diameter: u32,
    color: Rgba8Premul,
    child: Option<WidgetBox>,
}

impl Circle {
    /// A plain disc. Fails for a zero or oversized diameter.
    pub fn new(diameter: u32, color: Rgba8Premul) -> PixmatrixResult<Self> {
        check_diameter("circle", diameter)?;
        Ok(Self {
            diameter,
            color,
            child: None,
        })
    }

    /// Draw `child` centered over the disc, clipped to the circle.
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Like [`Circle::with_child`] for an already boxed child.
    pub fn with_boxed_child(mut self, child: WidgetBox) -> Self {
        self.child = Some(child);
        self
    }

    /// Diameter in pixels.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// The centered child, if any.
    pub fn child(&self) -> Option<&dyn Widget> {
        self.child.as_deref()
    }
}

impl Widget for Circle {
    fn paint_bounds(&self, bounds: Bounds, _frame: FrameIndex) -> Bounds {
        let d = i64::from(self.diameter);
        bounds.fit(d, d)
    }

    fn frame_count(&self) -> u32 {
        self.child.as_ref().map_or(1, |c| c.frame_count())
    }

    fn paint(&self, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
        let d = self.diameter;
        let fp = self.paint_bounds(bounds, frame);
        let mut out = FrameRGBA::filled(fp.dx(), fp.dy(), self.color);
        if out.is_empty() {
            return out;
        }

        if let Some(child) = &self.child {
            let square = Bounds::from_size(d as i32, d as i32);
            let size = child.paint_bounds(square, frame);
            let x = (i64::from(d) - i64::from(size.dx())) / 2;
            let y = (i64::from(d) - i64::from(size.dy())) / 2;
            // Widgets anchor top-left, so painting into less space yields the top-left crop
            // of the full child; only the part that lands inside `fp` is ever painted.
            let visible = size.fit(i64::from(fp.width) - x, i64::from(fp.height) - y);
            if !visible.is_empty() {
                out.draw_over(&child.paint(visible, frame), x, y);
            }
        }

        out.retain_pixels(|x, y| in_disc(d, x, y));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/circle.rs"]
mod tests;
