//! Classifies a codepoint into a glyph family and dispatches to its
//! procedural drawing procedure.
//!
//! Dynamic dispatch over families is a tagged enum with a fixed set of
//! constructors rather than a trait object: [`classify`] does all the
//! codepoint-range matching once, and [`draw`] is a single match on the
//! result.

pub mod block;
pub mod box_drawing;
pub mod braille;
pub mod corner;
pub mod dashed;
pub mod mosaic;
pub mod octant;
pub mod rounded;
pub mod sextant;
pub mod shapes;
pub mod wedge;

use crate::metrics::FontMetrics;
use shapes::Shape;

/// The result of classifying a codepoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphFamily {
    /// A structural box-drawing stub decomposition.
    Box(box_drawing::Stubs),
    /// A plain diagonal (`U+2571`–`U+2573`), not stub-based.
    BoxDiagonal(u32),
    /// A block element.
    Block(block::Block),
    /// A Braille dot pattern, carried as the raw codepoint.
    Braille(u32),
    /// A sextant mosaic bit pattern.
    Sextant(u8),
    /// An octant mosaic bit pattern.
    Octant(u8),
    /// A wedge (triangular or half-cell) fill.
    Wedge(wedge::Wedge),
    /// A smooth mosaic approximation.
    Mosaic(mosaic::Mosaic),
    /// A corner or directional/powerline triangle.
    Corner(corner::Triangle),
    /// A rounded box-drawing corner.
    Rounded(rounded::Corner),
    /// A dashed line.
    Dashed(dashed::Dashed),
    /// Not a procedurally drawn codepoint; the caller falls through to the
    /// host text-drawing API.
    Passthrough,
}

/// Classifies `cp` into its glyph family. Total: every codepoint maps to
/// exactly one variant, with `Passthrough` as the default.
///
/// Rounded corners and dashed lines are checked first since they overlap the
/// numeric box-drawing range but must win over a generic stub decomposition.
pub fn classify(cp: u32) -> GlyphFamily {
    if let Some(corner) = rounded::decode(cp) {
        return GlyphFamily::Rounded(corner);
    }
    if let Some(d) = dashed::decode(cp) {
        return GlyphFamily::Dashed(d);
    }
    if let Some(stubs) = box_drawing::stubs_for(cp) {
        return GlyphFamily::Box(stubs);
    }
    if (0x2571..=0x2573).contains(&cp) {
        return GlyphFamily::BoxDiagonal(cp);
    }
    if let Some(block) = block::decode(cp) {
        return GlyphFamily::Block(block);
    }
    if (0x2800..=0x28FF).contains(&cp) {
        return GlyphFamily::Braille(cp);
    }
    if let Some(pattern) = sextant::pattern_for(cp) {
        return GlyphFamily::Sextant(pattern);
    }
    if let Some(wedge) = wedge::decode(cp) {
        return GlyphFamily::Wedge(wedge);
    }
    if let Some(mosaic) = mosaic::decode(cp) {
        return GlyphFamily::Mosaic(mosaic);
    }
    if let Some(pattern) = octant::pattern_for(cp) {
        return GlyphFamily::Octant(pattern);
    }
    if let Some(triangle) = corner::decode(cp) {
        return GlyphFamily::Corner(triangle);
    }
    GlyphFamily::Passthrough
}

/// Renders a classified glyph family into cell-local shapes. Returns an
/// empty vec for [`GlyphFamily::Passthrough`]; callers draw the grapheme
/// string via the host text API instead.
pub fn draw(family: GlyphFamily, m: FontMetrics) -> Vec<Shape> {
    match family {
        GlyphFamily::Box(stubs) => box_drawing::draw(stubs, m),
        GlyphFamily::BoxDiagonal(cp) => box_drawing::draw_diagonal(cp, m),
        GlyphFamily::Block(block) => block::draw(block, m),
        GlyphFamily::Braille(cp) => braille::draw(cp, m),
        GlyphFamily::Sextant(pattern) => sextant::draw(pattern, m),
        GlyphFamily::Octant(pattern) => octant::draw(pattern, m),
        GlyphFamily::Wedge(wedge) => wedge::draw(wedge, m),
        GlyphFamily::Mosaic(mosaic) => mosaic::draw(mosaic, m),
        GlyphFamily::Corner(triangle) => corner::draw(triangle, m),
        GlyphFamily::Rounded(corner) => rounded::draw(corner, m),
        GlyphFamily::Dashed(dashed) => dashed::draw(dashed, m),
        GlyphFamily::Passthrough => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 10.0, height: 20.0, baseline: 16.0 }
    }

    #[test]
    fn rounded_corner_wins_over_generic_box_stub() {
        assert!(matches!(classify(0x256D), GlyphFamily::Rounded(_)));
    }

    #[test]
    fn dashed_subset_wins_over_generic_box_stub() {
        assert!(matches!(classify(0x2504), GlyphFamily::Dashed(_)));
        assert!(matches!(classify(0x2500), GlyphFamily::Box(_)));
    }

    #[test]
    fn unclassified_codepoint_falls_through() {
        assert_eq!(classify(0x0041), GlyphFamily::Passthrough);
        assert!(draw(GlyphFamily::Passthrough, metrics()).is_empty());
    }

    #[test]
    fn every_listed_family_range_classifies_away_from_passthrough() {
        let samples = [
            0x2500, 0x2571, 0x2580, 0x2800, 0x1FB00, 0x1FB3C, 0x1FB90, 0x1CD00, 0x25E2, 0x25B2,
            0xE0B0, 0x2504, 0x256D,
        ];
        for cp in samples {
            assert_ne!(classify(cp), GlyphFamily::Passthrough, "{cp:#x} should classify");
        }
    }
}
