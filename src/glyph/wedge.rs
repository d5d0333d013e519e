//! Wedge glyphs (`U+1FB3C`–`U+1FB8B`).
//!
//! This range's exact glyph identities need verification against the
//! published Legacy Computing block tables; this crate uses a parametric
//! approximation (index-driven corner/size selection) rather than a
//! hand-tuned per-codepoint table.

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// Which cell corner a triangular wedge originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-left.
    BottomLeft,
    /// Bottom-right.
    BottomRight,
}

/// Wedge size factor, as a fraction of the cell's width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// 1/3.
    Small,
    /// 1/2.
    Half,
    /// 2/3.
    Large,
}

impl Size {
    fn factor(self) -> f64 {
        match self {
            Size::Small => 1.0 / 3.0,
            Size::Half => 1.0 / 2.0,
            Size::Large => 2.0 / 3.0,
        }
    }
}

/// A decoded wedge glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wedge {
    /// A right-triangle fill originating at `corner`, sized by `size`.
    Triangle(Corner, Size),
    /// A half-cell rectangle, selected by vertical half and horizontal half.
    HalfRect { upper: bool, left: bool },
}

const RANGE_START: u32 = 0x1FB3C;
const RANGE_END: u32 = 0x1FB8B;
const TRIANGLE_COUNT: u32 = 52;

/// Decodes a wedge codepoint.
pub fn decode(cp: u32) -> Option<Wedge> {
    if !(RANGE_START..=RANGE_END).contains(&cp) {
        return None;
    }
    let idx = cp - RANGE_START;
    if idx < TRIANGLE_COUNT {
        const CORNERS: [Corner; 4] =
            [Corner::BottomLeft, Corner::BottomRight, Corner::TopLeft, Corner::TopRight];
        const SIZES: [Size; 3] = [Size::Small, Size::Half, Size::Large];
        let corner = CORNERS[(idx as usize / 13) % 4];
        let size = SIZES[idx as usize % 3];
        Some(Wedge::Triangle(corner, size))
    } else {
        let idx2 = idx - TRIANGLE_COUNT;
        let upper = idx2 % 2 == 0;
        let left = (idx2 / 2) % 2 == 0;
        Some(Wedge::HalfRect { upper, left })
    }
}

/// Renders a decoded wedge.
pub fn draw(wedge: Wedge, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;
    match wedge {
        Wedge::Triangle(corner, size) => {
            let f = size.factor();
            let (fw, fh) = (f * w, f * h);
            let p = match corner {
                Corner::TopLeft => [(0.0, 0.0), (fw, 0.0), (0.0, fh)],
                Corner::TopRight => [(w, 0.0), (w - fw, 0.0), (w, fh)],
                Corner::BottomLeft => [(0.0, h), (fw, h), (0.0, h - fh)],
                Corner::BottomRight => [(w, h), (w - fw, h), (w, h - fh)],
            };
            vec![Shape::triangle(p)]
        }
        Wedge::HalfRect { upper, left } => {
            let half_w = (w / 2.0).floor();
            let half_h = (h / 2.0).floor();
            let (x, rw) = if left { (0.0, half_w) } else { (half_w, w - half_w) };
            let (y, rh) = if upper { (0.0, half_h) } else { (half_h, h - half_h) };
            vec![Shape::rect(x, y, rw, rh)]
        }
    }
}
