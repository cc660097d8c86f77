use crate::{
    foundation::core::{Bounds, Rgba8Premul},
    render::composite::{over, over_at},
};

/// A rendered frame as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed and row-major. Every paint call
/// allocates a fresh buffer that the caller owns outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, premultiplied.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// A fully transparent `width × height` frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// A transparent frame sized to a footprint. Negative sizes become zero.
    pub fn for_bounds(bounds: Bounds) -> Self {
        Self::new(bounds.dx(), bounds.dy())
    }

    /// A frame with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> Self {
        let px = color.to_array();
        let data = std::iter::repeat_n(px, (width as usize) * (height as usize))
            .flatten()
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// `true` for a zero-area frame.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// The pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let i = self.index(x, y)?;
        Some(Rgba8Premul::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8Premul) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Source-over one pixel. Out-of-range coordinates are ignored.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba8Premul) {
        if let Some(i) = self.index(x, y) {
            let d = [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ];
            self.data[i..i + 4].copy_from_slice(&over(d, color.to_array()));
        }
    }

    /// Composite `src` over this frame with its top-left corner at `(x, y)`.
    pub fn draw_over(&mut self, src: &FrameRGBA, x: i64, y: i64) {
        if src.is_empty() || self.is_empty() {
            return;
        }
        let dst_size = self.size();
        over_at(&mut self.data, dst_size, &src.data, src.size(), (x, y));
    }

    /// Set every pixel for which `keep(x, y)` is false to transparent.
    pub fn retain_pixels(&mut self, mut keep: impl FnMut(u32, u32) -> bool) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for (i, px) in self.data.chunks_exact_mut(4).enumerate() {
            let (x, y) = ((i % w) as u32, (i / w) as u32);
            if !keep(x, y) {
                px.copy_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    /// Convert to a straight-alpha [`image::RgbaImage`] for encoders built on `image`.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut straight = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
            straight.extend_from_slice(&c.to_straight_rgba());
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
