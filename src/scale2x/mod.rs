//! Edge-directed 2x upscaling for pixel art.
//!
//! Each source pixel becomes a 2x2 block. A sub-pixel either copies the
//! source pixel or takes the color of an orthogonal neighbor, when that
//! neighbor and its partner look like one region cutting across the corner.
//! Nothing is ever blended, so the output only holds colors from the input.
//!
//! # Algorithm
//!
//! For each source pixel `c5` with neighbors:
//! ```text
//!   c7 c8 c9
//!   c4 c5 c6
//!   c1 c2 c3
//! ```
//!
//! the output block
//! ```text
//!   TL TR
//!   BL BR
//! ```
//! stays solid `c5` when `c5` lies on a straight run. Otherwise each corner
//! is decided by a [`SubPixelRule`] over the two neighbors facing it, the
//! diagonal between them, and the opposite diagonal. Fully transparent
//! pixels all compare equal, so edges between invisible pixels never form.
//! Pixels on the border drop the missing neighbors and fall back to the
//! color of pixel (0, 0) as a background reference.
//!
//! This is the magnification step of RotSprite-style rotation: scale 8x
//! (three passes), rotate, then sample back down.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pxscale::scale2x::{upscale, Scale2xOptions};
//!
//! let input = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
//! let output = upscale(&input, &Scale2xOptions::default()).unwrap();
//! assert_eq!(output.dimensions(), (32, 32));
//! ```

pub mod heuristic;
mod pass;
pub mod window;

pub use heuristic::{closer_or_equal, SubPixelRule};
pub use window::NeighborWindow;

use crate::surface::{PixelSource, PixelTarget, RowCursor, RowOrder, BYTES_PER_PIXEL};
use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;

/// Largest supported number of chained passes (16x).
pub const MAX_PASSES: u8 = 4;

/// Errors from the image-level entry points.
///
/// The pixel pass itself cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScaleError {
    #[error("passes must be between 1 and {max}, got {passes}", max = MAX_PASSES)]
    InvalidPasses { passes: u8 },
    #[error("{width}x{height} image is too large to scale {factor}x")]
    TooLarge { width: u32, height: u32, factor: u32 },
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Options for [`upscale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale2xOptions {
    /// Number of chained 2x passes. Output scale is `2^passes`.
    pub passes: u8,
    /// Worker threads. `1` runs the serial pass, `0` uses rayon's global
    /// pool, anything else gets a dedicated pool of that size.
    pub jobs: usize,
}

impl Default for Scale2xOptions {
    fn default() -> Self {
        Self { passes: 1, jobs: 0 }
    }
}

impl Scale2xOptions {
    /// Single-threaded, single pass.
    pub fn serial() -> Self {
        Self { passes: 1, jobs: 1 }
    }

    /// Three passes, the 8x magnification used before rotating sprites.
    pub fn rotsprite() -> Self {
        Self { passes: 3, ..Self::default() }
    }

    pub fn with_passes(mut self, passes: u8) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Total magnification, `2^passes`.
    pub fn factor(&self) -> u32 {
        1u32 << self.passes.min(31)
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.passes == 0 || self.passes > MAX_PASSES {
            return Err(ScaleError::InvalidPasses { passes: self.passes });
        }
        Ok(())
    }
}

/// Scale `src` (`width x height`) into `dst`, which must hold
/// `2 * width * 2 * height` pixels stored top-down.
///
/// A zero dimension writes nothing.
///
/// # Panics
///
/// When `dst` is smaller than the scaled image, or `src` cannot serve a
/// coordinate inside `width x height`.
pub fn scale2x<S, T>(dst: &mut T, src: &S, width: u32, height: u32)
where
    S: PixelSource + ?Sized,
    T: PixelTarget + ?Sized,
{
    scale2x_with_order(dst, src, width, height, RowOrder::TopDown);
}

/// Like [`scale2x`], writing destination rows in `order`.
pub fn scale2x_with_order<S, T>(dst: &mut T, src: &S, width: u32, height: u32, order: RowOrder)
where
    S: PixelSource + ?Sized,
    T: PixelTarget + ?Sized,
{
    if width == 0 || height == 0 {
        return;
    }
    let start = RowCursor::first_line(order, 2 * width as usize, 2 * height as usize);
    pass::scan_rows(dst, src, width, height, 0..height, start);
}

/// Scale into a packed RGBA byte buffer, splitting the source rows into one
/// band per rayon worker.
///
/// Bands write disjoint destination rows and produce the same bytes as the
/// serial pass.
///
/// # Panics
///
/// When `dst` is shorter than `2 * width * 2 * height * 4` bytes.
pub fn scale2x_parallel<S>(dst: &mut [u8], src: &S, width: u32, height: u32)
where
    S: PixelSource + Sync + ?Sized,
{
    if width == 0 || height == 0 {
        return;
    }
    // One source row produces two destination rows
    let line_bytes = 2 * (2 * width as usize) * BYTES_PER_PIXEL;
    let workers = rayon::current_num_threads().max(1);
    let rows_per_band = (height as usize).div_ceil(workers);
    log::debug!(
        "scale2x {}x{}: {} rows per band across {} workers",
        width,
        height,
        rows_per_band,
        workers
    );

    dst[..line_bytes * height as usize]
        .par_chunks_mut(rows_per_band * line_bytes)
        .enumerate()
        .for_each(|(band, chunk)| {
            let first = (band * rows_per_band) as u32;
            let last = first + (chunk.len() / line_bytes) as u32;
            log::trace!("band {} scaling source rows {}..{}", band, first, last);
            pass::scan_rows(
                chunk,
                src,
                width,
                height,
                first..last,
                RowCursor::at(0, RowOrder::TopDown),
            );
        });
}

/// Serial single pass over an `RgbaImage`.
///
/// An image with a zero dimension yields an empty 0x0 image. Use [`upscale`]
/// for inputs whose doubled size may not fit.
pub fn scale2x_image(input: &RgbaImage) -> RgbaImage {
    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(0, 0);
    }
    let mut output = RgbaImage::new(width * 2, height * 2);
    scale2x(&mut output, input, width, height);
    output
}

/// Apply `options.passes` chained 2x passes.
pub fn upscale(input: &RgbaImage, options: &Scale2xOptions) -> Result<RgbaImage, ScaleError> {
    options.validate()?;
    let (width, height) = input.dimensions();
    let factor = options.factor();
    check_output_size(width, height, factor)?;

    log::debug!(
        "upscaling {}x{} by {}x ({} passes, jobs={})",
        width,
        height,
        factor,
        options.passes,
        options.jobs
    );

    let pool = match options.jobs {
        0 | 1 => None,
        n => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
    };

    let run = |src: &RgbaImage| -> RgbaImage {
        let (w, h) = src.dimensions();
        let mut out = RgbaImage::new(w * 2, h * 2);
        match (options.jobs, &pool) {
            (1, _) => scale2x(&mut out, src, w, h),
            (_, Some(pool)) => pool.install(|| scale2x_parallel(&mut out, src, w, h)),
            (_, None) => scale2x_parallel(&mut out, src, w, h),
        }
        out
    };

    let mut current = run(input);
    for _ in 1..options.passes {
        current = run(&current);
    }
    Ok(current)
}

fn check_output_size(width: u32, height: u32, factor: u32) -> Result<(), ScaleError> {
    let too_large = || ScaleError::TooLarge { width, height, factor };
    let out_w = width.checked_mul(factor).ok_or_else(too_large)?;
    let out_h = height.checked_mul(factor).ok_or_else(too_large)?;
    (out_w as usize)
        .checked_mul(out_h as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(too_large)?;
    Ok(())
}
