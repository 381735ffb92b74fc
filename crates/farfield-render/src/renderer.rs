//! Parallel per-pixel frame evaluation.

use crossbeam_channel::bounded;
use glam::Vec2;

use crate::frame::Frame;

/// A per-pixel shader: one logical invocation per output pixel.
///
/// Implementations must be pure functions of `uv` and `&self` — no interior
/// mutability, no global state — so a frame may be evaluated across any
/// number of threads in any order with bit-identical results.
pub trait Shade: Sync {
    /// Evaluate the color at a normalized screen coordinate in [0, 1]^2.
    fn shade(&self, uv: Vec2) -> [f32; 4];
}

/// Evaluates a [`Shade`] implementation over a pixel grid.
pub struct FrameRenderer {
    thread_count: usize,
}

impl FrameRenderer {
    /// Create a renderer with an explicit worker thread count (minimum 1).
    pub fn new(thread_count: usize) -> Self {
        Self {
            thread_count: thread_count.max(1),
        }
    }

    /// Create a renderer sized from the machine's CPU count, leaving
    /// headroom for the main thread.
    pub fn from_cpus() -> Self {
        Self::new(num_cpus::get().saturating_sub(2).max(1))
    }

    /// Worker thread count used by [`FrameRenderer::render`].
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Render `shader` into a `width x height` frame.
    ///
    /// Pixels sample at their centers: `uv = ((x + 0.5) / w, (y + 0.5) / h)`.
    /// Rows are distributed over the worker pool and reassembled in place;
    /// the output is identical to a serial evaluation regardless of thread
    /// count or scheduling. Zero dimensions are clamped to one pixel.
    pub fn render<S: Shade>(&self, shader: &S, width: u32, height: u32) -> Frame {
        let width = width.max(1);
        let height = height.max(1);
        log::debug!(
            "rendering {width}x{height} frame on {} worker(s)",
            self.thread_count
        );

        if self.thread_count == 1 {
            let mut pixels = Vec::with_capacity((width * height) as usize);
            for y in 0..height {
                pixels.extend_from_slice(&shade_row(shader, width, height, y));
            }
            return Frame::from_pixels(width, height, pixels);
        }

        let (row_tx, row_rx) = bounded::<u32>(height as usize);
        let (result_tx, result_rx) = bounded::<(u32, Vec<[f32; 4]>)>(height as usize);
        for y in 0..height {
            // Cannot fail: the queue is sized to hold every row.
            let _ = row_tx.send(y);
        }
        drop(row_tx);

        let mut pixels = vec![[0.0, 0.0, 0.0, 1.0]; (width * height) as usize];
        std::thread::scope(|scope| {
            for _ in 0..self.thread_count {
                let row_rx = row_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    while let Ok(y) = row_rx.recv() {
                        let row = shade_row(shader, width, height, y);
                        if result_tx.send((y, row)).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(result_tx);

            while let Ok((y, row)) = result_rx.recv() {
                let start = (y * width) as usize;
                pixels[start..start + width as usize].copy_from_slice(&row);
            }
        });

        Frame::from_pixels(width, height, pixels)
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::from_cpus()
    }
}

fn shade_row<S: Shade>(shader: &S, width: u32, height: u32, y: u32) -> Vec<[f32; 4]> {
    let v = (y as f32 + 0.5) / height as f32;
    let mut row = Vec::with_capacity(width as usize);
    for x in 0..width {
        let u = (x as f32 + 0.5) / width as f32;
        row.push(shader.shade(Vec2::new(u, v)));
    }
    row
}
