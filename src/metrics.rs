//! Font metrics derivation.
//!
//! The pure derivation logic in [`derive`] has no `web_sys` dependency and
//! is exercised directly in tests; [`FontMetrics::measure`] is the thin
//! DOM-facing wrapper that feeds it real measurements.

use web_sys::CanvasRenderingContext2d;

/// Cell geometry derived once per font change, in CSS pixels. All cell
/// positions are integer multiples of `width`/`height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Monospace advance width of a single cell.
    pub width: f64,
    /// Cell height (ascent + descent).
    pub height: f64,
    /// Distance from the top of the cell to the text baseline.
    pub baseline: f64,
}

/// Fallback ascent/descent ratios used when no font-declared metric is
/// available.
const FALLBACK_ASCENT_RATIO: f64 = 0.8;
const FALLBACK_DESCENT_RATIO: f64 = 0.2;

fn is_usable(metric: Option<f64>) -> Option<f64> {
    metric.filter(|v| v.is_finite() && *v > 0.0)
}

/// Derives [`FontMetrics`] from raw measurements.
///
/// `font_bb_{ascent,descent}` are preferred (font-declared, stable across
/// content); `actual_bb_{ascent,descent}` (per-glyph, for `'M'`) are the
/// second choice; the `font_size`-relative fallback is last.
pub fn derive(
    advance_width: f64,
    font_size: f64,
    font_bb_ascent: Option<f64>,
    font_bb_descent: Option<f64>,
    actual_bb_ascent: Option<f64>,
    actual_bb_descent: Option<f64>,
) -> FontMetrics {
    let (ascent, descent) = match (
        is_usable(font_bb_ascent),
        is_usable(font_bb_descent),
    ) {
        (Some(a), Some(d)) => (a, d),
        _ => match (is_usable(actual_bb_ascent), is_usable(actual_bb_descent)) {
            (Some(a), Some(d)) => (a, d),
            _ => (
                font_size * FALLBACK_ASCENT_RATIO,
                font_size * FALLBACK_DESCENT_RATIO,
            ),
        },
    };

    FontMetrics {
        width: advance_width.ceil().max(1.0),
        height: (ascent + descent).ceil().max(1.0),
        baseline: ascent.ceil(),
    }
}

impl FontMetrics {
    /// Measures `'M'` in `${font_size}px ${font_family}` on the given 2D
    /// context and derives cell geometry from it.
    ///
    /// The context's `font` property is left set to the measured font.
    pub fn measure(ctx: &CanvasRenderingContext2d, font_size: f64, font_family: &str) -> Self {
        ctx.set_font(&format!("{font_size}px {font_family}"));
        let Ok(text_metrics) = ctx.measure_text("M") else {
            // Surface initialization failures are handled at construction;
            // if measurement itself fails, fall back entirely.
            return derive(font_size * 0.6, font_size, None, None, None, None);
        };

        let advance = text_metrics.width();
        let font_bb_ascent = Some(text_metrics.font_bounding_box_ascent());
        let font_bb_descent = Some(text_metrics.font_bounding_box_descent());
        let actual_ascent = Some(text_metrics.actual_bounding_box_ascent());
        let actual_descent = Some(text_metrics.actual_bounding_box_descent());

        derive(
            advance,
            font_size,
            font_bb_ascent,
            font_bb_descent,
            actual_ascent,
            actual_descent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_font_declared_bounding_box() {
        let m = derive(10.0, 15.0, Some(12.0), Some(3.0), Some(99.0), Some(99.0));
        assert_eq!(m.height, 15.0);
        assert_eq!(m.baseline, 12.0);
    }

    #[test]
    fn falls_back_to_actual_bounding_box() {
        let m = derive(10.0, 15.0, None, None, Some(11.0), Some(4.0));
        assert_eq!(m.height, 15.0);
        assert_eq!(m.baseline, 11.0);
    }

    #[test]
    fn falls_back_to_font_size_ratio_when_nothing_available() {
        let m = derive(10.0, 20.0, None, None, None, None);
        assert_eq!(m.baseline, (20.0 * FALLBACK_ASCENT_RATIO).ceil());
        assert_eq!(m.height, (20.0 * (FALLBACK_ASCENT_RATIO + FALLBACK_DESCENT_RATIO)).ceil());
    }

    #[test]
    fn treats_nan_and_nonpositive_as_unavailable() {
        let m = derive(10.0, 20.0, Some(f64::NAN), Some(-1.0), None, None);
        // Neither font_bb value usable -> falls through to ratio fallback.
        assert_eq!(m.baseline, (20.0 * FALLBACK_ASCENT_RATIO).ceil());
    }

    #[test]
    fn width_is_ceiling_of_advance() {
        let m = derive(9.2, 15.0, Some(12.0), Some(3.0), None, None);
        assert_eq!(m.width, 10.0);
    }
}
