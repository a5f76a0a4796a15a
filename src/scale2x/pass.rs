//! Row and column scan that turns each source pixel into a 2x2 block.
//!
//! Each scan line reads up to three source rows through a [`NeighborWindow`]
//! and writes two destination rows. Border lines and columns use reduced
//! rules: slots outside the image are replaced by the background reference
//! or dropped from the decision entirely.

use std::ops::Range;

use super::heuristic::{closer_or_equal, SubPixelRule};
use super::window::{Column, NeighborWindow};
use crate::color::PixelColor;
use crate::surface::{PixelSource, PixelTarget, RowCursor};

/// Position of a scan line or column relative to the image border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    Middle,
    End,
}

impl Edge {
    /// Classify index `i` of `len`. A length of 1 is `Start`.
    fn of(i: u32, len: u32) -> Self {
        if i == 0 {
            Edge::Start
        } else if i + 1 == len {
            Edge::End
        } else {
            Edge::Middle
        }
    }
}

/// Colors fixed for the whole pass.
#[derive(Debug, Clone, Copy)]
struct Refs {
    /// Source pixel (0, 0).
    origin: PixelColor,
    /// Stand-in for slots beyond the image border. Same value as `origin`.
    background: PixelColor,
}

/// Output for one source pixel.
#[derive(Debug, Clone, Copy)]
struct Block {
    top: [PixelColor; 2],
    bottom: [PixelColor; 2],
}

impl Block {
    fn solid(c: PixelColor) -> Self {
        Self { top: [c, c], bottom: [c, c] }
    }
}

/// Source rows feeding one scan line.
struct LineReader<'a, S: ?Sized> {
    src: &'a S,
    up: Option<u32>,
    mid: u32,
    down: Option<u32>,
}

impl<'a, S: PixelSource + ?Sized> LineReader<'a, S> {
    fn new(src: &'a S, y: u32, height: u32) -> Self {
        let (up, down) = match Edge::of(y, height) {
            // A one-row image reads row 0 as its own down row
            Edge::Start => (None, Some(if height > 1 { 1 } else { 0 })),
            Edge::Middle => (Some(y - 1), Some(y + 1)),
            Edge::End => (Some(y - 1), None),
        };
        Self { src, up, mid: y, down }
    }

    fn column(&self, x: u32) -> Column {
        Column {
            up: self.up.map(|row| self.src.pixel(x, row)),
            mid: self.src.pixel(x, self.mid),
            down: self.down.map(|row| self.src.pixel(x, row)),
        }
    }
}

/// Scale source rows `rows` of a `width x height` image into `dst`.
///
/// `start` addresses the first destination row of `rows.start`. Destination
/// rows are `2 * width` pixels long. The caller guarantees `width` and
/// `height` are non-zero and that `dst` covers every row written.
pub(crate) fn scan_rows<S, T>(
    dst: &mut T,
    src: &S,
    width: u32,
    height: u32,
    rows: Range<u32>,
    start: RowCursor,
) where
    S: PixelSource + ?Sized,
    T: PixelTarget + ?Sized,
{
    let origin = src.pixel(0, 0);
    let refs = Refs { origin, background: origin };
    let line_width = 2 * width as usize;

    let mut window = NeighborWindow::new();
    let mut top = start;
    for (i, y) in rows.enumerate() {
        if i > 0 {
            // Step past the previous pair only once another row follows
            top = top.next_line(line_width).next_line(line_width);
        }
        let reader = LineReader::new(src, y, height);
        let kind = Edge::of(y, height);
        let bottom = top.next_line(line_width);
        scan_line(dst, &reader, &mut window, kind, width, &refs, top, bottom);
    }
}

fn scan_line<S, T>(
    dst: &mut T,
    reader: &LineReader<'_, S>,
    window: &mut NeighborWindow,
    kind: Edge,
    width: u32,
    refs: &Refs,
    mut top: RowCursor,
    mut bottom: RowCursor,
) where
    S: PixelSource + ?Sized,
    T: PixelTarget + ?Sized,
{
    let block_at = |window: &NeighborWindow, column: Edge| match kind {
        Edge::Start => first_line_block(column, window, refs),
        Edge::Middle => interior_line_block(column, window, refs),
        Edge::End => last_line_block(column, window, refs),
    };
    let mut emit = |block: Block| {
        top = top.write_pixel(&mut *dst, block.top[0]).write_pixel(&mut *dst, block.top[1]);
        bottom = bottom
            .write_pixel(&mut *dst, block.bottom[0])
            .write_pixel(&mut *dst, block.bottom[1]);
    };

    window.begin_line(reader.column(0));
    window.load_right((width > 1).then(|| reader.column(1)));
    emit(block_at(window, Edge::Start));

    for x in 1..width.saturating_sub(1) {
        window.slide(reader.column(x + 1));
        emit(block_at(window, Edge::Middle));
    }

    if width > 1 {
        window.slide_out();
        emit(block_at(window, Edge::End));
    }
}

/// Top line: the up row is outside the image, so the top sub-pixels always
/// keep the center.
fn first_line_block(column: Edge, w: &NeighborWindow, refs: &Refs) -> Block {
    let c5 = w.c5;
    let t = refs.background;
    let pick = |rule: SubPixelRule| rule.resolve(c5, refs.origin);

    match column {
        Edge::Start => {
            if w.c6 == c5 || w.c2 == c5 {
                return Block::solid(c5);
            }
            let br = pick(SubPixelRule::new(w.c2, w.c6, w.c3, t, t, t));
            Block { top: [c5, c5], bottom: [c5, br] }
        }
        Edge::Middle => {
            if closer_or_equal(w.c4, w.c6, c5) || w.c2 == c5 {
                return Block::solid(c5);
            }
            let bl = pick(SubPixelRule::new(w.c4, w.c2, w.c1, t, t, w.c3));
            let br = pick(SubPixelRule::new(w.c2, w.c6, w.c3, t, w.c1, t));
            Block { top: [c5, c5], bottom: [bl, br] }
        }
        Edge::End => {
            if w.c4 == c5 || w.c2 == c5 {
                return Block::solid(c5);
            }
            let bl = pick(SubPixelRule::new(w.c4, w.c2, w.c1, t, t, t));
            Block { top: [c5, c5], bottom: [bl, c5] }
        }
    }
}

fn interior_line_block(column: Edge, w: &NeighborWindow, refs: &Refs) -> Block {
    let c5 = w.c5;
    let t = refs.background;
    let pick = |rule: SubPixelRule| rule.resolve(c5, refs.origin);

    match column {
        Edge::Start => {
            if w.c6 == c5 || closer_or_equal(w.c2, w.c8, c5) {
                return Block::solid(c5);
            }
            let tr = pick(SubPixelRule::new(w.c6, w.c8, w.c9, t, w.c3, t));
            let br = pick(SubPixelRule::new(w.c2, w.c6, w.c3, t, t, w.c9));
            Block { top: [c5, tr], bottom: [c5, br] }
        }
        Edge::Middle => {
            if interior_is_flat(w) {
                return Block::solid(c5);
            }
            Block {
                top: [
                    pick(SubPixelRule::new(w.c8, w.c4, w.c7, w.c3, w.c9, w.c1)),
                    pick(SubPixelRule::new(w.c6, w.c8, w.c9, w.c1, w.c3, w.c7)),
                ],
                bottom: [
                    pick(SubPixelRule::new(w.c4, w.c2, w.c1, w.c9, w.c7, w.c3)),
                    pick(SubPixelRule::new(w.c2, w.c6, w.c3, w.c7, w.c1, w.c9)),
                ],
            }
        }
        Edge::End => {
            if w.c4 == c5 || closer_or_equal(w.c2, w.c8, c5) {
                return Block::solid(c5);
            }
            let tl = pick(SubPixelRule::new(w.c8, w.c4, w.c7, t, t, w.c1));
            let bl = pick(SubPixelRule::new(w.c4, w.c2, w.c1, t, w.c7, t));
            Block { top: [tl, c5], bottom: [bl, c5] }
        }
    }
}

/// Whether an interior pixel sits on a straight run or an isolated diagonal,
/// in which case its block is left solid.
fn interior_is_flat(w: &NeighborWindow) -> bool {
    let c5 = w.c5;
    if closer_or_equal(w.c4, w.c6, c5) || closer_or_equal(w.c2, w.c8, c5) {
        return true;
    }
    let orthogonals_differ = w.c4 != c5 && w.c2 != c5 && w.c6 != c5 && w.c8 != c5;
    orthogonals_differ
        && ((closer_or_equal(w.c7, w.c3, c5) && w.c1 != c5 && w.c9 != c5)
            || (closer_or_equal(w.c1, w.c9, c5) && w.c7 != c5 && w.c3 != c5))
}

/// Bottom line: the down row is outside the image, so the bottom sub-pixels
/// always keep the center.
fn last_line_block(column: Edge, w: &NeighborWindow, refs: &Refs) -> Block {
    let c5 = w.c5;
    let t = refs.background;
    let pick = |rule: SubPixelRule| rule.resolve(c5, refs.origin);

    let top = match column {
        Edge::Start => {
            if w.c6 == c5 || w.c8 == c5 {
                [c5, c5]
            } else {
                // c7 still holds the previous line's value here. The clause
                // that reads it only fires when c6 == c5, which the gate
                // above already ruled out.
                [c5, pick(SubPixelRule::new(w.c6, w.c8, w.c9, t, t, w.c7))]
            }
        }
        Edge::Middle => {
            if closer_or_equal(w.c4, w.c6, c5) || w.c8 == c5 {
                [c5, c5]
            } else {
                [
                    pick(SubPixelRule::new(w.c8, w.c4, w.c7, t, w.c9, t)),
                    pick(SubPixelRule::new(w.c6, w.c8, w.c9, t, t, w.c7)),
                ]
            }
        }
        // slide_out leaves c6 == c5, so the bottom-right corner never blends
        Edge::End => [c5, c5],
    };
    Block { top, bottom: [c5, c5] }
}
