//! Pixel source and destination seams used by the scaler
//!
//! The scaler never owns image storage. It reads through [`PixelSource`] and
//! writes through [`PixelTarget`], addressing the destination with a
//! [`RowCursor`] that only ever moves forward within a row and jumps between
//! rows.

use crate::color::PixelColor;
use image::RgbaImage;

/// Bytes per packed RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Read-only pixel accessor.
///
/// Callers guarantee `x < width` and `y < height` for the dimensions they
/// hand to the scaler; implementations may panic otherwise.
pub trait PixelSource {
    fn pixel(&self, x: u32, y: u32) -> PixelColor;
}

/// Writable, linearly indexed pixel storage.
///
/// `index` counts pixels, not bytes. Writing past the end is a caller bug and
/// panics through the underlying slice index.
pub trait PixelTarget {
    fn put_pixel(&mut self, index: usize, color: PixelColor);
}

impl PixelSource for RgbaImage {
    fn pixel(&self, x: u32, y: u32) -> PixelColor {
        PixelColor::from(*self.get_pixel(x, y))
    }
}

impl PixelTarget for RgbaImage {
    fn put_pixel(&mut self, index: usize, color: PixelColor) {
        let raw: &mut [u8] = self;
        raw.put_pixel(index, color);
    }
}

/// Packed `[r, g, b, a, r, g, b, a, ...]` bytes.
impl PixelTarget for [u8] {
    fn put_pixel(&mut self, index: usize, color: PixelColor) {
        let start = index * BYTES_PER_PIXEL;
        self[start..start + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
    }
}

impl PixelTarget for [PixelColor] {
    fn put_pixel(&mut self, index: usize, color: PixelColor) {
        self[index] = color;
    }
}

/// Borrowed row-major view over a slice of colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorGrid<'a> {
    pixels: &'a [PixelColor],
    width: u32,
}

impl<'a> ColorGrid<'a> {
    /// Wrap `pixels` as rows of `width` colors.
    ///
    /// Returns `None` when the slice length is not a multiple of `width`.
    /// A zero width is only accepted for an empty slice.
    pub fn new(pixels: &'a [PixelColor], width: u32) -> Option<Self> {
        let ok = if width == 0 { pixels.is_empty() } else { pixels.len() % width as usize == 0 };
        ok.then_some(Self { pixels, width })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        if self.width == 0 {
            0
        } else {
            (self.pixels.len() / self.width as usize) as u32
        }
    }
}

impl PixelSource for ColorGrid<'_> {
    fn pixel(&self, x: u32, y: u32) -> PixelColor {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Memory order of destination rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Image row 0 is stored first.
    #[default]
    TopDown,
    /// Image row 0 is stored last, as in BMP-style buffers.
    BottomUp,
}

/// Sequential write position inside a [`PixelTarget`].
///
/// The cursor is a plain index, so several cursors can address the same
/// target at once; the scaler keeps one for each destination row of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    offset: usize,
    order: RowOrder,
}

impl RowCursor {
    /// Cursor at the start of image row 0 of a `width x height` target.
    pub fn first_line(order: RowOrder, width: usize, height: usize) -> Self {
        let offset = match order {
            RowOrder::TopDown => 0,
            RowOrder::BottomUp => height.saturating_sub(1) * width,
        };
        Self { offset, order }
    }

    /// Cursor at an absolute pixel offset.
    pub fn at(offset: usize, order: RowOrder) -> Self {
        Self { offset, order }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Write `color` at the cursor and return the cursor one pixel further on.
    #[must_use]
    pub fn write_pixel<T: PixelTarget + ?Sized>(self, dst: &mut T, color: PixelColor) -> Self {
        dst.put_pixel(self.offset, color);
        Self { offset: self.offset + 1, ..self }
    }

    /// Move one row forward in memory.
    #[must_use]
    pub fn advance_to_next_row(self, width: usize) -> Self {
        Self { offset: self.offset + width, ..self }
    }

    /// Move one row back in memory.
    #[must_use]
    pub fn rewind_to_previous_row(self, width: usize) -> Self {
        Self { offset: self.offset - width, ..self }
    }

    /// Move to the next image row, whichever direction that is in memory.
    #[must_use]
    pub fn next_line(self, width: usize) -> Self {
        match self.order {
            RowOrder::TopDown => self.advance_to_next_row(width),
            RowOrder::BottomUp => self.rewind_to_previous_row(width),
        }
    }
}
