//! 3x3 sliding neighborhood over the source image.
//!
//! ```text
//! c7 c8 c9   <- up row
//! c4 c5 c6   <- current row, c5 is the pixel being scaled
//! c1 c2 c3   <- down row
//! ```
//!
//! Rows that do not exist for the current scan line are never written, so
//! their slots keep whatever they held before (opaque black until first
//! loaded). The window is reused from one scan line to the next.

use crate::color::PixelColor;

/// One source column as seen by the window: up, current and down rows.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub up: Option<PixelColor>,
    pub mid: PixelColor,
    pub down: Option<PixelColor>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborWindow {
    pub c1: PixelColor,
    pub c2: PixelColor,
    pub c3: PixelColor,
    pub c4: PixelColor,
    pub c5: PixelColor,
    pub c6: PixelColor,
    pub c7: PixelColor,
    pub c8: PixelColor,
    pub c9: PixelColor,
    has_up: bool,
    has_down: bool,
}

impl NeighborWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scan line: load the first column into the center column.
    ///
    /// Which of `first.up` / `first.down` are present fixes the rows this
    /// window touches until the next call.
    pub fn begin_line(&mut self, first: Column) {
        self.has_up = first.up.is_some();
        self.has_down = first.down.is_some();
        if let Some(up) = first.up {
            self.c8 = up;
        }
        self.c5 = first.mid;
        if let Some(down) = first.down {
            self.c2 = down;
        }
    }

    /// Fill the right column from `next`, or replicate the center column
    /// when the image is a single pixel wide.
    pub fn load_right(&mut self, next: Option<Column>) {
        match next {
            Some(col) => self.set_right(col),
            None => {
                if self.has_up {
                    self.c9 = self.c8;
                }
                self.c6 = self.c5;
                if self.has_down {
                    self.c3 = self.c2;
                }
            }
        }
    }

    /// Shift one column left and read `next` into the right column.
    pub fn slide(&mut self, next: Column) {
        self.shift_left();
        self.set_right(next);
    }

    /// Shift one column left at the end of a line, leaving the right column
    /// as a copy of the new center.
    pub fn slide_out(&mut self) {
        self.shift_left();
    }

    fn shift_left(&mut self) {
        if self.has_up {
            self.c7 = self.c8;
            self.c8 = self.c9;
        }
        self.c4 = self.c5;
        self.c5 = self.c6;
        if self.has_down {
            self.c1 = self.c2;
            self.c2 = self.c3;
        }
    }

    fn set_right(&mut self, col: Column) {
        if self.has_up {
            if let Some(up) = col.up {
                self.c9 = up;
            }
        }
        self.c6 = col.mid;
        if self.has_down {
            if let Some(down) = col.down {
                self.c3 = down;
            }
        }
    }
}
