//! Cursor shape geometry and blink visibility.

use crate::metrics::FontMetrics;

/// How the cursor is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Fills the whole cell.
    #[default]
    Block,
    /// A strip along the bottom of the cell.
    Underline,
    /// A strip along the left of the cell.
    Bar,
}

/// The cursor's fill rectangle, in surface-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGeometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

/// Computes the cursor's fill rectangle at grid position `(col, row)`.
pub fn geometry(style: CursorStyle, col: u32, row: u32, m: FontMetrics) -> CursorGeometry {
    let x = col as f64 * m.width;
    let y = row as f64 * m.height;
    match style {
        CursorStyle::Block => CursorGeometry { x, y, w: m.width, h: m.height },
        CursorStyle::Underline => {
            let strip = (m.height * 0.15).floor().max(2.0);
            CursorGeometry { x, y: y + m.height - strip, w: m.width, h: strip }
        }
        CursorStyle::Bar => {
            let strip = (m.width * 0.15).floor().max(2.0);
            CursorGeometry { x, y, w: strip, h: m.height }
        }
    }
}

/// Blink interval, in milliseconds: `cursorVisible` toggles on this cadence.
pub const BLINK_INTERVAL_MS: f64 = 530.0;

/// Computes whether the cursor should currently be drawn, from wall-clock
/// time elapsed since the renderer was constructed (or the cursor last
/// moved). When blink is disabled the cursor is always visible.
///
/// Deriving visibility from elapsed time rather than toggling a stored flag
/// on a timer callback means no timer resource needs to be registered or
/// torn down.
pub fn is_visible(blink_enabled: bool, elapsed_ms: f64) -> bool {
    if !blink_enabled {
        return true;
    }
    (elapsed_ms / BLINK_INTERVAL_MS) as u64 % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics { width: 10.0, height: 20.0, baseline: 16.0 }
    }

    #[test]
    fn block_covers_the_whole_cell() {
        let g = geometry(CursorStyle::Block, 3, 2, metrics());
        assert_eq!(g, CursorGeometry { x: 30.0, y: 40.0, w: 10.0, h: 20.0 });
    }

    #[test]
    fn bar_is_a_left_strip_at_least_two_pixels_wide() {
        let g = geometry(CursorStyle::Bar, 3, 2, metrics());
        assert_eq!(g.x, 30.0);
        assert_eq!(g.w, (10.0_f64 * 0.15).floor().max(2.0));
        assert_eq!(g.h, 20.0);
    }

    #[test]
    fn underline_is_a_bottom_strip() {
        let g = geometry(CursorStyle::Underline, 0, 0, metrics());
        let strip = (20.0_f64 * 0.15).floor().max(2.0);
        assert_eq!(g.y, 20.0 - strip);
        assert_eq!(g.h, strip);
    }

    #[test]
    fn disabled_blink_is_always_visible() {
        assert!(is_visible(false, 10_000.0));
    }

    #[test]
    fn blink_toggles_every_interval() {
        assert!(is_visible(true, 0.0));
        assert!(!is_visible(true, BLINK_INTERVAL_MS + 1.0));
        assert!(is_visible(true, 2.0 * BLINK_INTERVAL_MS + 1.0));
    }
}
