use crate::foundation::math::mod_int;

pub use kurbo::{Point, Vec2};

/// A point on the animation timeline.
///
/// Renders walk `0..frame_count`; negative values are accepted and wrap through
/// [`mod_int`](crate::mod_int) like any other index.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

impl FrameIndex {
    /// Map this global index onto a local cycle of `count` frames.
    ///
    /// A `count` of zero is treated as a static (single frame) cycle.
    pub fn cycle(self, count: u32) -> FrameIndex {
        let n = i64::from(count.max(1));
        FrameIndex(mod_int(self.0, n))
    }
}

/// Axis-aligned integer rectangle.
///
/// Used both for the available space handed down to a widget and for the footprint a widget
/// reports back. Footprints are anchored at the origin; only their size carries meaning.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels; may be negative for degenerate space.
    pub width: i32,
    /// Height in pixels; may be negative for degenerate space.
    pub height: i32,
}

impl Bounds {
    /// Zero-sized rectangle at the origin.
    pub const EMPTY: Bounds = Bounds::from_size(0, 0);

    /// Rectangle with its top-left corner at `(x, y)`.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width with negative values clamped to zero.
    pub fn dx(self) -> u32 {
        self.width.max(0) as u32
    }

    /// Height with negative values clamped to zero.
    pub fn dy(self) -> u32 {
        self.height.max(0) as u32
    }

    /// `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Footprint of a `width × height` request inside this available space.
    ///
    /// Each dimension is clamped to `[0, available]`, so a degenerate available rectangle
    /// always yields an empty footprint.
    pub fn fit(self, width: i64, height: i64) -> Bounds {
        fn clamp(req: i64, avail: i32) -> i32 {
            req.clamp(0, i64::from(avail.max(0))) as i32
        }
        Bounds::from_size(clamp(width, self.width), clamp(height, self.height))
    }

    /// Componentwise maximum of two footprint sizes, anchored at the origin.
    pub fn union_size(self, other: Bounds) -> Bounds {
        Bounds::from_size(
            self.width.max(other.width).max(0),
            self.height.max(other.height).max(0),
        )
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8Premul = Rgba8Premul {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque white.
    pub const WHITE: Rgba8Premul = Rgba8Premul {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Same as [`Rgba8Premul::TRANSPARENT`].
    pub fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// Premultiply a straight-alpha color, rounding to nearest.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Opaque color; premultiplication is a no-op at full alpha.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Undo premultiplication. Fully transparent pixels come back as transparent black.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        fn unpremul(c: u8, a: u8) -> u8 {
            let c = u32::from(c);
            let a = u32::from(a);
            ((c * 255 + a / 2) / a).min(255) as u8
        }

        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        [
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        ]
    }

    /// `[r, g, b, a]` bytes as stored in a frame buffer.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Rgba8Premul::to_array`].
    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
