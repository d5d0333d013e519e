//! Sextant mosaics (`U+1FB00`–`U+1FB3B`).

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// Bit index → (col, row) on the 2×3 sextant grid.
const GRID: [(u8, u8); 6] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)];

/// Decodes the 6-bit fill pattern for a sextant codepoint.
///
/// The pattern index is `codepoint - 0x1FB00 + 1`, since the all-off (0) and
/// all-on (63, already `U+2588`) patterns are not assigned codepoints in
/// this block.
pub fn pattern_for(cp: u32) -> Option<u8> {
    if !(0x1FB00..=0x1FB3B).contains(&cp) {
        return None;
    }
    Some((cp - 0x1FB00 + 1) as u8)
}

/// Renders a 6-bit sextant pattern as up to six rectangles on a 2×3 grid.
/// Edge cells absorb the rounding remainder so the grid exactly tiles the
/// cell with no gap or overlap.
pub fn draw(pattern: u8, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;

    let left_w = (w / 2.0).ceil();
    let col_w = [left_w, w - left_w];
    let col_x = [0.0, col_w[0]];

    let row_h0 = (h / 3.0).ceil();
    let row_h1 = (h / 3.0).ceil();
    let row_h2 = h - row_h0 - row_h1;
    let row_h = [row_h0, row_h1, row_h2];
    let row_y = [0.0, row_h0, row_h0 + row_h1];

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
    fn pattern_index_skips_all_off_and_all_on() {
        assert_eq!(pattern_for(0x1FB00), Some(1));
        assert_eq!(pattern_for(0x1FB3B), Some(62));
    }

    #[test]
    fn single_bit_renders_one_rect_in_correct_cell() {
        let shapes = draw(0b000010, metrics()); // bit index 1 -> (1, 0)
        assert_eq!(shapes.len(), 1);
        match shapes[0] {
            Shape::Rect { x, y, .. } => {
                assert_eq!(x, (metrics().width / 2.0).ceil());
                assert_eq!(y, 0.0);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn full_pattern_tiles_exactly_to_cell_bounds() {
        let shapes = draw(0b111111, metrics());
        let total_w: f64 = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Rect { y, w, .. } if *y == 0.0 => Some(*w),
                _ => None,
            })
            .sum();
        assert_eq!(total_w, metrics().width);
    }
}
