use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use julia_fractal_core::{Complex, EscapeParams, GenerateRequest, Julia, Viewport};

use crate::escape_image::EscapeImage;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Tracks the current render generation for cancellation and progress.
///
/// Incrementing the generation signals all in-flight rows to stop early.
/// The progress counters count finished rows.
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

    fn reset_progress(&self, total: usize) {
        self.progress_total.store(total, Ordering::Relaxed);
        self.progress_done.store(0, Ordering::Relaxed);
    }

    fn inc_progress(&self) {
        self.progress_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current progress as `(rows_done, rows_total)`.
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

/// A completed full-frame render.
#[derive(Debug)]
pub struct RenderResult {
    pub image: EscapeImage,
    pub elapsed: Duration,
    /// Rows iterated by the workers.
    pub rows_computed: usize,
    /// Rows copied from their mirror across the real axis.
    pub rows_mirrored: usize,
}

// ---------------------------------------------------------------------------
// Full-frame render
// ---------------------------------------------------------------------------

/// Compute the escape-count image for `julia` over `viewport`.
///
/// Rows are processed in parallel via Rayon; each worker owns one output
/// row. When `c` is real and the viewport is centred on the real axis only
/// the top half is iterated and the bottom half is mirrored from it.
///
/// If `cancel` is triggered from another thread, remaining rows are skipped
/// and [`RenderError::Cancelled`] is returned instead of a partial image.
pub fn render(
    julia: &Julia,
    viewport: &Viewport,
    cancel: &RenderCancel,
) -> crate::Result<RenderResult> {
    let start = Instant::now();
    let gen = cancel.generation();
    let width = viewport.width as usize;
    let height = viewport.height as usize;
    let max_iterations = julia.params().max_iterations;

    let symmetric = julia.is_real_axis_symmetric() && viewport.is_centered_on_real_axis();
    let rows_computed = if symmetric {
        height.div_ceil(2)
    } else {
        height
    };
    debug!(
        width,
        height,
        max_iterations,
        symmetric,
        c = %julia.c(),
        "Starting row render"
    );
    cancel.reset_progress(rows_computed);

    let mut image = EscapeImage::zeroed(viewport.width, viewport.height, max_iterations);
    {
        let data = image.data_mut();
        let (computed, _) = data.split_at_mut(rows_computed * width);
        computed
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                if cancel.generation() != gen {
                    return;
                }
                render_row(julia, viewport, row as u32, out);
                cancel.inc_progress();
            });

        if cancel.generation() != gen {
            let (done, total) = cancel.progress();
            warn!(rows_done = done, rows_total = total, "Render cancelled");
            return Err(RenderError::Cancelled);
        }

        if symmetric {
            mirror_rows(data, width, height);
        }
    }

    let rows_mirrored = height - rows_computed;
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        rows_computed,
        rows_mirrored,
        bounded = image.bounded_count(),
        "Render complete"
    );

    Ok(RenderResult {
        image,
        elapsed,
        rows_computed,
        rows_mirrored,
    })
}

fn render_row(julia: &Julia, viewport: &Viewport, row: u32, out: &mut [u32]) {
    for (col, cell) in out.iter_mut().enumerate() {
        *cell = julia.escape_count(viewport.pixel_to_complex(col as u32, row));
    }
}

/// Fill the bottom half from the top half, flipped vertically.
fn mirror_rows(data: &mut [u32], width: usize, height: usize) {
    for row in height.div_ceil(2)..height {
        let src = (height - 1 - row) * width;
        data.copy_within(src..src + width, row * width);
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Generate a Julia-set escape-count image.
///
/// Pixel `(row, col)` starts at
/// `z₀ = (col + ½ − width/2) / zoom + (row + ½ − height/2) / zoom · i`
/// and is iterated under `z → z² + c` with escape radius 2.
///
/// Fails with an invalid-argument error when `width`, `height`, `zoom` or
/// `max_iterations` is not positive, or `c` is not finite.
pub fn generate(
    width: u32,
    height: u32,
    zoom: f64,
    c: Complex,
    max_iterations: u32,
) -> crate::Result<EscapeImage> {
    let julia = Julia::new(c, EscapeParams::with_max_iterations(max_iterations)?)?;
    let viewport = Viewport::from_zoom(width, height, zoom)?;
    Ok(render(&julia, &viewport, &RenderCancel::new())?.image)
}

/// Generate from a deserialized request.
pub fn generate_request(request: &GenerateRequest) -> crate::Result<EscapeImage> {
    let (julia, viewport) = request.build()?;
    Ok(render(&julia, &viewport, &RenderCancel::new())?.image)
}
