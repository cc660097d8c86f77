use rayon::prelude::*;

use crate::{
    foundation::core::{Bounds, FrameIndex},
    foundation::error::{PixmatrixError, PixmatrixResult},
    render::frame::FrameRGBA,
    widget::{Widget, WidgetBox},
};

/// Width of the reference display.
pub const DEFAULT_WIDTH: i32 = 64;
/// Height of the reference display.
pub const DEFAULT_HEIGHT: i32 = 32;
/// Per-frame delay used when a root does not set one.
pub const DEFAULT_DELAY_MS: u32 = 50;

/// Paint a single frame of `widget` inside `bounds`.
///
/// This is the primary one-shot API: the result is sized to the widget's
/// [`paint_bounds`](Widget::paint_bounds) for the same arguments and holds
/// **premultiplied** RGBA8 pixels.
#[tracing::instrument(skip(widget))]
pub fn paint_widget(widget: &dyn Widget, bounds: Bounds, frame: FrameIndex) -> FrameRGBA {
    let img = widget.paint(bounds, frame);
    tracing::debug!(width = img.width, height = img.height, "painted frame");
    img
}

/// The top of a widget tree: the display it targets and how long each frame is shown.
#[derive(Debug)]
pub struct Root {
    /// Top widget of the tree.
    pub child: WidgetBox,
    /// Available space handed to the child; also the size of every rendered frame.
    pub viewport: Bounds,
    /// How long each frame should be displayed, in milliseconds.
    pub delay_ms: u32,
}

impl Root {
    /// Root for the default 64×32 display.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self::from_boxed(Box::new(child))
    }

    /// Like [`Root::new`] for an already boxed child.
    pub fn from_boxed(child: WidgetBox) -> Self {
        Self {
            child,
            viewport: Bounds::from_size(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    /// Target a `width × height` display.
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Bounds::from_size(width, height);
        self
    }

    /// Set the per-frame delay.
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Length of the animation, from the child tree.
    pub fn frame_count(&self) -> u32 {
        self.child.frame_count()
    }

    /// Paint one frame onto a transparent canvas the size of the viewport, child anchored
    /// top-left.
    pub fn paint_frame(&self, frame: FrameIndex) -> FrameRGBA {
        let mut canvas = FrameRGBA::for_bounds(self.viewport);
        let img = paint_widget(self.child.as_ref(), self.viewport, frame);
        canvas.draw_over(&img, 0, 0);
        canvas
    }
}

/// Threading and limits for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Largest frame count a tree may request.
    pub max_frames: u32,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            max_frames: 10_000,
        }
    }
}

/// Render every frame of `root`'s animation, in order.
///
/// Frames are independent, so the parallel path paints each on its own worker with a fresh
/// buffer and produces output identical to the sequential path.
#[tracing::instrument(skip(root))]
pub fn render_frames(root: &Root, threading: &RenderThreading) -> PixmatrixResult<Vec<FrameRGBA>> {
    let count = root.frame_count();
    if count > threading.max_frames {
        return Err(PixmatrixError::validation(format!(
            "tree needs {count} frames, more than the limit of {}",
            threading.max_frames
        )));
    }
    tracing::debug!(frames = count, parallel = threading.parallel, "rendering");

    let frames = 0..i64::from(count);
    if !threading.parallel {
        return Ok(frames.map(|f| root.paint_frame(FrameIndex(f))).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| {
        frames
            .into_par_iter()
            .map(|f| root.paint_frame(FrameIndex(f)))
            .collect()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> PixmatrixResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(PixmatrixError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
