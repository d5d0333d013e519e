//! Host-independent drawing primitives produced by the procedural glyph
//! families. [`crate::paint`] translates these into
//! `CanvasRenderingContext2d` calls; keeping them as plain data lets every
//! family's geometry be unit-tested without a DOM.

/// A primitive shape in cell-local coordinates (origin at the cell's
/// top-left corner), with its own alpha multiplier so shade fills
/// (`U+2591`-style) compose with the painter's FAINT alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// An axis-aligned filled rectangle.
    Rect {
        /// Left edge, cell-local.
        x: f64,
        /// Top edge, cell-local.
        y: f64,
        /// Width.
        w: f64,
        /// Height.
        h: f64,
        /// Alpha multiplier, `1.0` for opaque.
        alpha: f64,
    },
    /// A filled triangle.
    Triangle {
        /// Three vertices, cell-local.
        p: [(f64, f64); 3],
        /// Alpha multiplier.
        alpha: f64,
    },
    /// A filled circle (braille dots).
    Circle {
        /// Center x, cell-local.
        cx: f64,
        /// Center y, cell-local.
        cy: f64,
        /// Radius.
        r: f64,
        /// Alpha multiplier.
        alpha: f64,
    },
    /// A stroked arc (rounded corners), with square caps.
    Arc {
        /// Center x, cell-local.
        cx: f64,
        /// Center y, cell-local.
        cy: f64,
        /// Radius.
        r: f64,
        /// Start angle, radians.
        start: f64,
        /// End angle, radians.
        end: f64,
        /// Stroke thickness.
        thickness: f64,
        /// Alpha multiplier.
        alpha: f64,
    },
    /// A straight stroked segment (diagonals).
    Segment {
        /// Start point, cell-local.
        x1: f64,
        /// Start point, cell-local.
        y1: f64,
        /// End point, cell-local.
        x2: f64,
        /// End point, cell-local.
        y2: f64,
        /// Stroke thickness.
        thickness: f64,
        /// Alpha multiplier.
        alpha: f64,
    },
}

impl Shape {
    /// A fully opaque rectangle.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Shape::Rect { x, y, w, h, alpha: 1.0 }
    }

    /// Same rectangle with an explicit alpha (shade fills).
    pub fn rect_alpha(x: f64, y: f64, w: f64, h: f64, alpha: f64) -> Self {
        Shape::Rect { x, y, w, h, alpha }
    }

    /// A fully opaque triangle.
    pub fn triangle(p: [(f64, f64); 3]) -> Self {
        Shape::Triangle { p, alpha: 1.0 }
    }

    /// A fully opaque circle.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Shape::Circle { cx, cy, r, alpha: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_alpha_defaults_to_opaque() {
        match Shape::rect(0.0, 0.0, 1.0, 1.0) {
            Shape::Rect { alpha, .. } => assert_eq!(alpha, 1.0),
            _ => panic!("wrong variant"),
        }
    }
}
