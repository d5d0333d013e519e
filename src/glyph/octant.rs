//! Octant mosaics (`U+1CD00`–`U+1CDE5`).
//!
//! The Symbols for Legacy Computing Supplement does not assign octant
//! codepoints in simple bitmap order the way the sextant block does — its
//! range skips several patterns already covered by other blocks (the
//! quadrant and sextant codepoints). This approximates the encoding as a
//! direct 8-bit row-major bitmap over the 2×4 grid, offset from the start of
//! the range; this should be validated against the Unicode block's
//! published table before shipping.

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// Bit index → (col, row) on the 2×4 octant grid, row-major.
const GRID: [(u8, u8); 8] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)];

/// Approximates the 8-bit fill pattern for an octant codepoint.
pub fn pattern_for(cp: u32) -> Option<u8> {
    if !(0x1CD00..=0x1CDE5).contains(&cp) {
        return None;
    }
    Some(((cp - 0x1CD00) & 0xFF) as u8)
}

/// Renders an 8-bit octant pattern as up to eight rectangles on a 2×4 grid,
/// the same edge-absorbs-remainder rule as sextants.
pub fn draw(pattern: u8, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;

    let left_w = (w / 2.0).ceil();
    let col_w = [left_w, w - left_w];
    let col_x = [0.0, col_w[0]];

    let unit_h = (h / 4.0).ceil();
    let row_h = [unit_h, unit_h, unit_h, h - 3.0 * unit_h];
    let row_y = [0.0, unit_h, 2.0 * unit_h, 3.0 * unit_h];

    let mut shapes = Vec::new();
    for (bit, &(col, row)) in GRID.iter().enumerate() {
        if pattern & (1 << bit) == 0 {
            continue;
        }
        let (col, row) = (col as usize, row as usize);
        shapes.push(Shape::rect(col_x[col], row_y[row], col_w[col], row_h[row]));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 9.0, height: 17.0, baseline: 14.0 }
    }

    #[test]
    fn full_pattern_tiles_exactly_to_cell_bounds() {
        let shapes = draw(0xFF, metrics());
        let total_h: f64 = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Rect { x, h, .. } if *x == 0.0 => Some(*h),
                _ => None,
            })
            .sum();
        assert_eq!(total_h, metrics().height);
    }

    #[test]
    fn out_of_range_codepoint_has_no_pattern() {
        assert_eq!(pattern_for(0x1234), None);
    }
}
