//! Corner triangles (`U+25E2`–`U+25E5`) and directional/powerline triangles.
//!
//! Powerline separators (`U+E0B0`, `U+E0B2`, `U+E0B4`, `U+E0B6`) are drawn as
//! plain filled triangles; the "rounded" separator variants (`U+E0B4`,
//! `U+E0B6`) collapse onto the same geometry as their sharp counterparts
//! since there is no half-circle primitive in this crate's shape set.

use super::shapes::Shape;
use crate::metrics::FontMetrics;

/// A corner or directional triangle glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triangle {
    /// One of the four half-cell corner triangles.
    Corner(Corner),
    /// A full-height triangle pointing in a cardinal direction, apex at the
    /// midpoint of the opposite edge.
    Direction(Direction),
}

/// Which diagonal half a corner triangle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Fills the upper-left half, split along the anti-diagonal.
    UpperLeft,
    /// Fills the upper-right half, split along the main diagonal.
    UpperRight,
    /// Fills the lower-left half, split along the main diagonal.
    LowerLeft,
    /// Fills the lower-right half, split along the anti-diagonal.
    LowerRight,
}

/// Which cardinal direction a directional triangle points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apex on the right edge.
    Right,
    /// Apex on the left edge.
    Left,
    /// Apex on the bottom edge.
    Up,
    /// Apex on the top edge.
    Down,
}

/// Decodes a corner or directional triangle codepoint.
pub fn decode(cp: u32) -> Option<Triangle> {
    Some(match cp {
        0x25E2 => Triangle::Corner(Corner::LowerRight),
        0x25E3 => Triangle::Corner(Corner::LowerLeft),
        0x25E4 => Triangle::Corner(Corner::UpperLeft),
        0x25E5 => Triangle::Corner(Corner::UpperRight),
        0x25B2 => Triangle::Direction(Direction::Up),
        0x25BC => Triangle::Direction(Direction::Down),
        0x25B6 | 0x25BA | 0xE0B0 | 0xE0B4 => Triangle::Direction(Direction::Right),
        0x25C0 | 0x25C4 | 0xE0B2 | 0xE0B6 => Triangle::Direction(Direction::Left),
        _ => return None,
    })
}

/// Renders a decoded triangle.
pub fn draw(triangle: Triangle, m: FontMetrics) -> Vec<Shape> {
    let w = m.width;
    let h = m.height;
    let p = match triangle {
        Triangle::Corner(Corner::LowerRight) => [(w, 0.0), (w, h), (0.0, h)],
        Triangle::Corner(Corner::LowerLeft) => [(0.0, 0.0), (0.0, h), (w, h)],
        Triangle::Corner(Corner::UpperLeft) => [(0.0, 0.0), (w, 0.0), (0.0, h)],
        Triangle::Corner(Corner::UpperRight) => [(0.0, 0.0), (w, 0.0), (w, h)],
        Triangle::Direction(Direction::Right) => [(0.0, 0.0), (0.0, h), (w, h / 2.0)],
        Triangle::Direction(Direction::Left) => [(w, 0.0), (w, h), (0.0, h / 2.0)],
        Triangle::Direction(Direction::Up) => [(0.0, h), (w, h), (w / 2.0, 0.0)],
        Triangle::Direction(Direction::Down) => [(0.0, 0.0), (w, 0.0), (w / 2.0, h)],
    };
    vec![Shape::triangle(p)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 10.0, height: 20.0, baseline: 16.0 }
    }

    #[test]
    fn powerline_right_variants_share_geometry() {
        let a = decode(0xE0B0).unwrap();
        let b = decode(0xE0B4).unwrap();
        assert_eq!(draw(a, metrics()), draw(b, metrics()));
    }

    #[test]
    fn directional_triangle_apex_on_opposite_edge() {
        let shapes = draw(Triangle::Direction(Direction::Right), metrics());
        match &shapes[0] {
            Shape::Triangle { p, .. } => assert!(p.contains(&(metrics().width, metrics().height / 2.0))),
            _ => panic!(),
        }
    }

    #[test]
    fn unrecognized_codepoint_decodes_to_none() {
        assert_eq!(decode(0x0041), None);
    }
}
