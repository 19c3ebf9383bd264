use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use escapetime_core::EscapeTime;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::frame::FrameBuffer;
use crate::sink::FrameSink;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Tracks the current render generation for cancellation and progress.
///
/// Incrementing the generation signals all in-flight rows to stop early.
/// The progress counters let a caller display a progress bar.
#[derive(Debug)]
pub struct RenderCancel {
    generation: AtomicU64,
    progress_done: AtomicUsize,
    progress_total: AtomicUsize,
}

impl RenderCancel {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            progress_done: AtomicUsize::new(0),
            progress_total: AtomicUsize::new(0),
        }
    }

    /// Cancel the current render by advancing the generation.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Reset progress for a new pass with `total` work units.
    pub fn reset_progress(&self, total: usize) {
        self.progress_total.store(total, Ordering::Relaxed);
        self.progress_done.store(0, Ordering::Relaxed);
    }

    /// Increment completed work units by one.
    pub fn inc_progress(&self) {
        self.progress_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current progress as `(done, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.progress_done.load(Ordering::Relaxed),
            self.progress_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for RenderCancel {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The result of a full-frame render.
pub struct RenderResult {
    pub frame: FrameBuffer,
    pub elapsed: Duration,
    pub cancelled: bool,
    pub rows_rendered: usize,
}

// ---------------------------------------------------------------------------
// Full-frame render
// ---------------------------------------------------------------------------

/// Render a full frame as a data-parallel map over the pixel grid.
///
/// Rows are split into disjoint mutable slices of the frame buffer and
/// processed in parallel via Rayon, so no two workers ever touch the same
/// pixel and no locking is needed. Completion order between rows is
/// irrelevant; the frame is complete once every row has been written.
///
/// Cancellation is coarse-grained: the `cancel` handle is checked once per
/// row, which is cheap enough since a single pixel runs in bounded time.
/// Rows skipped after cancellation keep their initial black fill and the
/// result is flagged `cancelled`.
pub fn render(config: &RenderConfig, cancel: &Arc<RenderCancel>) -> RenderResult {
    let start = Instant::now();
    let generation = cancel.generation();

    let raster = config.raster;
    let width = raster.width() as usize;
    let eval = EscapeTime::new(config.params);
    let cap = config.params.iteration_cap;

    debug!(
        width = raster.width(),
        height = raster.height(),
        iteration_cap = cap,
        policy = ?config.policy,
        "Starting frame render"
    );

    cancel.reset_progress(raster.height() as usize);
    let rows_done = AtomicUsize::new(0);

    let mut frame = FrameBuffer::new(raster);
    frame
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(py, row)| {
            if cancel.generation() != generation {
                return;
            }
            for (px, out) in row.iter_mut().enumerate() {
                let (x0, y0) = config.viewport.pixel_to_point(px as u32, py as u32, raster);
                let result = eval.evaluate(x0, y0);
                *out = config.policy.color(result, cap);
            }
            rows_done.fetch_add(1, Ordering::Relaxed);
            cancel.inc_progress();
        });

    let cancelled = cancel.generation() != generation;
    let rows_rendered = rows_done.load(Ordering::Relaxed);
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        rows_rendered, cancelled, "Frame render complete"
    );

    RenderResult {
        frame,
        elapsed,
        cancelled,
        rows_rendered,
    }
}

/// Render a frame and hand it to the display collaborator.
///
/// A cancelled pass never reaches the sink; the caller gets
/// [`RenderError::Cancelled`] instead of a partially black frame.
pub fn render_to_sink<S: FrameSink>(
    config: &RenderConfig,
    cancel: &Arc<RenderCancel>,
    sink: &mut S,
) -> crate::Result<()> {
    let result = render(config, cancel);
    if result.cancelled {
        return Err(RenderError::Cancelled);
    }
    sink.present(&result.frame);
    Ok(())
}
