//! Scrollbar thumb sizing, positioning, and fade opacity.

/// Scrollbar track width.
pub const WIDTH: f64 = 8.0;
/// Gap between the track and the right edge of the surface.
pub const RIGHT_PADDING: f64 = 4.0;
/// Gap between the track and the top/bottom edges of the surface.
pub const VERTICAL_PADDING: f64 = 4.0;
/// Minimum thumb height regardless of content ratio.
pub const MIN_THUMB_HEIGHT: f64 = 20.0;
/// Base color, before alpha.
pub const COLOR_RGB: (u8, u8, u8) = (128, 128, 128);

/// The scrollbar track and thumb rectangles plus fade alphas for a given
/// surface height and scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrollbar {
    /// Track left edge.
    pub x: f64,
    /// Track top edge.
    pub track_top: f64,
    /// Track height.
    pub track_height: f64,
    /// Thumb top edge.
    pub thumb_top: f64,
    /// Thumb height.
    pub thumb_height: f64,
    /// Track fill alpha.
    pub track_alpha: f64,
    /// Thumb fill alpha.
    pub thumb_alpha: f64,
}

/// Computes scrollbar geometry. `viewport_y` is the current scroll offset
/// (0 = live view); `scrollback_length` and `visible_rows` determine the
/// thumb's proportional height. Returns `None` when there is nothing to
/// scroll (`scrollback_length == 0`).
pub fn compute(
    surface_width: f64,
    surface_height: f64,
    viewport_y: f64,
    scrollback_length: u32,
    visible_rows: u32,
    opacity: f64,
) -> Option<Scrollbar> {
    if scrollback_length == 0 {
        return None;
    }

    let track_top = VERTICAL_PADDING;
    let track_height = (surface_height - 2.0 * VERTICAL_PADDING).max(0.0);
    let total_lines = scrollback_length as f64 + visible_rows as f64;
    let thumb_height =
        (visible_rows as f64 / total_lines * track_height).max(MIN_THUMB_HEIGHT).min(track_height);

    let scroll_fraction = viewport_y / scrollback_length as f64;
    let thumb_top = track_top + (track_height - thumb_height) * (1.0 - scroll_fraction);

    let scrolled = viewport_y > 0.0;
    Some(Scrollbar {
        x: surface_width - WIDTH - RIGHT_PADDING,
        track_top,
        track_height,
        thumb_top,
        thumb_height,
        track_alpha: 0.1 * opacity,
        thumb_alpha: if scrolled { 0.5 * opacity } else { 0.3 * opacity },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scrollback_yields_no_scrollbar() {
        assert!(compute(800.0, 600.0, 0.0, 0, 30, 1.0).is_none());
    }

    #[test]
    fn thumb_height_has_a_floor() {
        let sb = compute(800.0, 600.0, 0.0, 100_000, 30, 1.0).unwrap();
        assert_eq!(sb.thumb_height, MIN_THUMB_HEIGHT);
    }

    #[test]
    fn fully_scrolled_up_puts_thumb_at_track_top() {
        let sb = compute(800.0, 600.0, 20.0, 20, 10, 1.0).unwrap();
        assert!((sb.thumb_top - sb.track_top).abs() < 1e-9);
    }

    #[test]
    fn live_view_puts_thumb_at_track_bottom() {
        let sb = compute(800.0, 600.0, 0.0, 20, 10, 1.0).unwrap();
        assert!((sb.thumb_top + sb.thumb_height - (sb.track_top + sb.track_height)).abs() < 1e-9);
    }

    #[test]
    fn scrolled_thumb_is_more_opaque_than_idle() {
        let idle = compute(800.0, 600.0, 0.0, 20, 10, 1.0).unwrap();
        let scrolled = compute(800.0, 600.0, 5.0, 20, 10, 1.0).unwrap();
        assert!(scrolled.thumb_alpha > idle.thumb_alpha);
    }

    #[test]
    fn track_sits_against_the_right_edge() {
        let sb = compute(800.0, 600.0, 0.0, 20, 10, 1.0).unwrap();
        assert_eq!(sb.x, 800.0 - WIDTH - RIGHT_PADDING);
    }
}
