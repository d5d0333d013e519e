//! Block elements (`U+2580`–`U+259F`).

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// A decoded block-element glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    /// Full block.
    Full,
    /// Upper `n/8` of the cell filled.
    Upper(u8),
    /// Lower `n/8` of the cell filled.
    Lower(u8),
    /// Left `n/8` of the cell filled.
    Left(u8),
    /// Right `n/8` of the cell filled.
    Right(u8),
    /// Quadrant fill: top-left, top-right, bottom-left, bottom-right.
    Quadrants { tl: bool, tr: bool, bl: bool, br: bool },
    /// Uniform shade at the given density (0.25, 0.5, or 0.75).
    Shade(f64),
}

/// Decodes a block-element codepoint.
pub fn decode(cp: u32) -> Option<Block> {
    Some(match cp {
        0x2580 => Block::Upper(4),
        0x2581 => Block::Lower(1),
        0x2582 => Block::Lower(2),
        0x2583 => Block::Lower(3),
        0x2584 => Block::Lower(4),
        0x2585 => Block::Lower(5),
        0x2586 => Block::Lower(6),
        0x2587 => Block::Lower(7),
        0x2588 => Block::Full,
        0x2589 => Block::Left(7),
        0x258A => Block::Left(6),
        0x258B => Block::Left(5),
        0x258C => Block::Left(4),
        0x258D => Block::Left(3),
        0x258E => Block::Left(2),
        0x258F => Block::Left(1),
        0x2590 => Block::Right(4),
        0x2591 => Block::Shade(0.25),
        0x2592 => Block::Shade(0.5),
        0x2593 => Block::Shade(0.75),
        0x2594 => Block::Upper(1),
        0x2595 => Block::Right(1),
        0x2596 => Block::Quadrants { tl: false, tr: false, bl: true, br: false },
        0x2597 => Block::Quadrants { tl: false, tr: false, bl: false, br: true },
        0x2598 => Block::Quadrants { tl: true, tr: false, bl: false, br: false },
        0x2599 => Block::Quadrants { tl: true, tr: false, bl: true, br: true },
        0x259A => Block::Quadrants { tl: true, tr: false, bl: true, br: false },
        0x259B => Block::Quadrants { tl: true, tr: true, bl: true, br: false },
        0x259C => Block::Quadrants { tl: true, tr: true, bl: false, br: true },
        0x259D => Block::Quadrants { tl: false, tr: true, bl: false, br: false },
        0x259E => Block::Quadrants { tl: false, tr: true, bl: true, br: false },
        0x259F => Block::Quadrants { tl: false, tr: true, bl: true, br: true },
        _ => return None,
    })
}

/// Renders a decoded block element into shapes.
///
/// Eighth-partitions use `round(h*n/8)`/`round(w*n/8)`; quadrants split at
/// `floor(w/2)`/`floor(h/2)` with the second half absorbing the rounding
/// remainder.
pub fn draw(block: Block, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;
    match block {
        Block::Full => vec![Shape::rect(0.0, 0.0, w, h)],
        Block::Upper(n) => {
            let fh = (h * n as f64 / 8.0).round();
            vec![Shape::rect(0.0, 0.0, w, fh)]
        }
        Block::Lower(n) => {
            let fh = (h * n as f64 / 8.0).round();
            vec![Shape::rect(0.0, h - fh, w, fh)]
        }
        Block::Left(n) => {
            let fw = (w * n as f64 / 8.0).round();
            vec![Shape::rect(0.0, 0.0, fw, h)]
        }
        Block::Right(n) => {
            let fw = (w * n as f64 / 8.0).round();
            vec![Shape::rect(w - fw, 0.0, fw, h)]
        }
        Block::Shade(density) => vec![Shape::rect_alpha(0.0, 0.0, w, h, density)],
        Block::Quadrants { tl, tr, bl, br } => {
            let half_w = (w / 2.0).floor();
            let half_h = (h / 2.0).floor();
            let right_w = w - half_w;
            let bottom_h = h - half_h;
            let mut shapes = Vec::new();
            if tl {
                shapes.push(Shape::rect(0.0, 0.0, half_w, half_h));
            }
            if tr {
                shapes.push(Shape::rect(half_w, 0.0, right_w, half_h));
            }
            if bl {
                shapes.push(Shape::rect(0.0, half_h, half_w, bottom_h));
            }
            if br {
                shapes.push(Shape::rect(half_w, half_h, right_w, bottom_h));
            }
            shapes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 9.0, height: 17.0, baseline: 14.0 }
    }

    #[test]
    fn full_block_covers_whole_cell() {
        let shapes = draw(Block::Full, metrics());
        assert_eq!(shapes, vec![Shape::rect(0.0, 0.0, 9.0, 17.0)]);
    }

    #[test]
    fn quadrants_split_absorbs_remainder_in_second_half() {
        let m = metrics(); // w=9 -> floor(9/2)=4, right=5
        let shapes = draw(Block::Quadrants { tl: false, tr: true, bl: false, br: false }, m);
        match shapes[0] {
            Shape::Rect { x, w, .. } => {
                assert_eq!(x, 4.0);
                assert_eq!(w, 5.0);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn shade_uses_alpha_not_a_partial_rect() {
        let shapes = draw(Block::Shade(0.5), metrics());
        match shapes[0] {
            Shape::Rect { w, h, alpha, .. } => {
                assert_eq!((w, h), (9.0, 17.0));
                assert_eq!(alpha, 0.5);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn eighths_round_to_nearest_pixel() {
        let shapes = draw(Block::Lower(1), metrics()); // h*1/8 = 2.125 -> 2
        match shapes[0] {
            Shape::Rect { h, .. } => assert_eq!(h, 2.0),
            _ => panic!(),
        }
    }
}
