//! Rounded box-drawing corners (`U+256D`–`U+2570`).
//!
//! Each glyph is a quarter arc centered on the cell center plus two straight
//! stub extensions from the arc's endpoints out to the cell edge, so it
//! tiles seamlessly with plain box-drawing stubs on the adjoining cells.

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// Which two edges a rounded corner joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Connects the right and bottom edges (`╭`).
    DownRight,
    /// Connects the left and bottom edges (`╮`).
    DownLeft,
    /// Connects the left and top edges (`╯`).
    UpLeft,
    /// Connects the right and top edges (`╰`).
    UpRight,
}

/// Decodes a rounded-corner codepoint.
pub fn decode(cp: u32) -> Option<Corner> {
    Some(match cp {
        0x256D => Corner::DownRight,
        0x256E => Corner::DownLeft,
        0x256F => Corner::UpLeft,
        0x2570 => Corner::UpRight,
        _ => return None,
    })
}

fn thickness(h: f64) -> f64 {
    (h / 12.0).round().max(1.0)
}

/// Renders a decoded rounded corner.
pub fn draw(corner: Corner, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let t = thickness(h);
    let r = (w.min(h) / 2.0 - t / 2.0).max(0.0);

    use std::f64::consts::FRAC_PI_2;

    let (arc_start, arc_end, right_end, left_end, up_end, down_end) = match corner {
        Corner::DownRight => (0.0, FRAC_PI_2, Some((cx + r, cy)), None, None, Some((cx, cy + r))),
        Corner::DownLeft => (FRAC_PI_2, std::f64::consts::PI, None, Some((cx - r, cy)), None, Some((cx, cy + r))),
        Corner::UpLeft => (std::f64::consts::PI, 1.5 * std::f64::consts::PI, None, Some((cx - r, cy)), Some((cx, cy - r)), None),
        Corner::UpRight => (1.5 * std::f64::consts::PI, 2.0 * std::f64::consts::PI, Some((cx + r, cy)), None, Some((cx, cy - r)), None),
    };

    let mut shapes = vec![Shape::Arc { cx, cy, r, start: arc_start, end: arc_end, thickness: t, alpha: 1.0 }];

    if let Some((x, y)) = right_end {
        shapes.push(Shape::Segment { x1: x, y1: y, x2: w, y2: cy, thickness: t, alpha: 1.0 });
    }
    if let Some((x, y)) = left_end {
        shapes.push(Shape::Segment { x1: x, y1: y, x2: 0.0, y2: cy, thickness: t, alpha: 1.0 });
    }
    if let Some((x, y)) = up_end {
        shapes.push(Shape::Segment { x1: x, y1: y, x2: cx, y2: 0.0, thickness: t, alpha: 1.0 });
    }
    if let Some((x, y)) = down_end {
        shapes.push(Shape::Segment { x1: x, y1: y, x2: cx, y2: h, thickness: t, alpha: 1.0 });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 12.0, height: 24.0, baseline: 19.0 }
    }

    #[test]
    fn decodes_all_four_corners() {
        assert_eq!(decode(0x256D), Some(Corner::DownRight));
        assert_eq!(decode(0x256E), Some(Corner::DownLeft));
        assert_eq!(decode(0x256F), Some(Corner::UpLeft));
        assert_eq!(decode(0x2570), Some(Corner::UpRight));
        assert_eq!(decode(0x2571), None);
    }

    #[test]
    fn down_right_has_an_arc_and_two_stub_extensions() {
        let shapes = draw(Corner::DownRight, metrics());
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Arc { .. }));
    }

    #[test]
    fn right_stub_extension_reaches_the_cell_edge() {
        let shapes = draw(Corner::DownRight, metrics());
        let reaches_edge = shapes.iter().any(|s| matches!(s, Shape::Segment { x2, .. } if *x2 == metrics().width));
        assert!(reaches_edge);
    }
}
