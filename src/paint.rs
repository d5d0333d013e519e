//! Two-pass cell painter: a background pass over a row, then a text and
//! decoration pass. Drawing all backgrounds before any text means a tall
//! diacritic overflowing from one cell's text pass never gets erased by a
//! later cell's background fill.

use web_sys::CanvasRenderingContext2d;

use crate::cell::{Cell, CellFlags, Rgb};
use crate::error::Error;
use crate::glyph::{self, shapes::Shape};
use crate::metrics::FontMetrics;
use crate::theme::{Theme, HYPERLINK_HOVER_COLOR};

/// The background color a cell should paint, or `None` to let the
/// surface's already-cleared background show through (the default-bg
/// optimization). Selection forces a solid fill and bypasses it.
pub fn background_fill(cell: &Cell, theme: &Theme, selected: bool) -> Option<Rgb> {
    if selected {
        return Some(theme.selection_background);
    }
    let (_, bg) = cell.effective_colors();
    if bg != Rgb::default() {
        Some(bg)
    } else {
        None
    }
}

/// The `(fg, bg)` pair to paint text with, after inverse and selection.
pub fn text_colors(cell: &Cell, theme: &Theme, selected: bool) -> (Rgb, Rgb) {
    if selected {
        (theme.selection_foreground, theme.selection_background)
    } else {
        cell.effective_colors()
    }
}

/// Global alpha for the glyph/text draw: halved under `FAINT`.
pub fn alpha_for(flags: CellFlags) -> f64 {
    if flags.contains(CellFlags::FAINT) {
        0.5
    } else {
        1.0
    }
}

/// The CSS `font` shorthand for a cell's style bits.
pub fn font_string(flags: CellFlags, font_size: f64, font_family: &str) -> String {
    let italic = if flags.contains(CellFlags::ITALIC) { "italic " } else { "" };
    let bold = if flags.contains(CellFlags::BOLD) { "bold " } else { "" };
    format!("{italic}{bold}{font_size}px {font_family}")
}

/// Whether `col` in `row` falls within an inclusive viewport-relative
/// selection span.
pub fn is_selected(
    selection: Option<(u32, u32, u32, u32)>,
    row: u32,
    col: u32,
) -> bool {
    let Some((start_col, start_row, end_col, end_row)) = selection else {
        return false;
    };
    if row < start_row || row > end_row {
        return false;
    }
    let from = if row == start_row { start_col } else { 0 };
    let to = if row == end_row { end_col } else { u32::MAX };
    col >= from && col <= to
}

fn set_fill(ctx: &CanvasRenderingContext2d, c: Rgb) {
    ctx.set_fill_style_str(&c.to_css());
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: Shape, ox: f64, oy: f64, extra_alpha: f64) {
    match shape {
        Shape::Rect { x, y, w, h, alpha } => {
            ctx.set_global_alpha(alpha * extra_alpha);
            ctx.fill_rect(ox + x, oy + y, w, h);
        }
        Shape::Triangle { p, alpha } => {
            ctx.set_global_alpha(alpha * extra_alpha);
            ctx.begin_path();
            ctx.move_to(ox + p[0].0, oy + p[0].1);
            ctx.line_to(ox + p[1].0, oy + p[1].1);
            ctx.line_to(ox + p[2].0, oy + p[2].1);
            ctx.close_path();
            ctx.fill();
        }
        Shape::Circle { cx, cy, r, alpha } => {
            ctx.set_global_alpha(alpha * extra_alpha);
            ctx.begin_path();
            let _ = ctx.arc(ox + cx, oy + cy, r, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        Shape::Arc { cx, cy, r, start, end, thickness, alpha } => {
            ctx.set_global_alpha(alpha * extra_alpha);
            ctx.set_line_width(thickness);
            ctx.set_line_cap("square");
            ctx.begin_path();
            let _ = ctx.arc(ox + cx, oy + cy, r, start, end);
            ctx.stroke();
        }
        Shape::Segment { x1, y1, x2, y2, thickness, alpha } => {
            ctx.set_global_alpha(alpha * extra_alpha);
            ctx.set_line_width(thickness);
            ctx.set_line_cap("square");
            ctx.begin_path();
            ctx.move_to(ox + x1, oy + y1);
            ctx.line_to(ox + x2, oy + y2);
            ctx.stroke();
        }
    }
}

/// Paints one visible row: backgrounds for every `width > 0` cell, then
/// text and decorations for every `width > 0` cell.
///
/// `selection` and `link_range` are `(start_col, start_row, end_col,
/// end_row)` tuples in viewport-relative, inclusive coordinates, already
/// resolved by the caller for the current frame.
#[allow(clippy::too_many_arguments)]
pub fn paint_row(
    ctx: &CanvasRenderingContext2d,
    cells: &[Cell],
    graphemes: impl Fn(u32) -> Option<String>,
    row: u32,
    row_y: f64,
    m: FontMetrics,
    theme: &Theme,
    font_size: f64,
    font_family: &str,
    selection: Option<(u32, u32, u32, u32)>,
    hovered_hyperlink_id: u32,
    hovered_link_range: Option<(u32, u32, u32, u32)>,
) -> Result<(), Error> {
    // Pass 1: backgrounds.
    for (col, cell) in cells.iter().enumerate() {
        if cell.is_spacer() {
            continue;
        }
        let col = col as u32;
        let selected = is_selected(selection, row, col);
        if let Some(bg) = background_fill(cell, theme, selected) {
            set_fill(ctx, bg);
            ctx.set_global_alpha(1.0);
            ctx.fill_rect(col as f64 * m.width, row_y, cell.width as f64 * m.width, m.height);
        }
    }

    // Pass 2: text + decoration.
    ctx.set_text_baseline("top");
    for (col, cell) in cells.iter().enumerate() {
        if cell.is_spacer() || cell.flags.contains(CellFlags::INVISIBLE) {
            continue;
        }
        let col = col as u32;
        let selected = is_selected(selection, row, col);
        let (fg, _bg) = text_colors(cell, theme, selected);
        let alpha = alpha_for(cell.flags);
        let cell_x = col as f64 * m.width;

        let family = glyph::classify(cell.codepoint);
        if matches!(family, glyph::GlyphFamily::Passthrough) {
            if cell.codepoint != 0 || cell.has_extended_grapheme() {
                let text = if cell.has_extended_grapheme() {
                    graphemes(col).unwrap_or_default()
                } else {
                    char::from_u32(cell.codepoint).map(String::from).unwrap_or_default()
                };
                if !text.is_empty() {
                    ctx.set_font(&font_string(cell.flags, font_size, font_family));
                    set_fill(ctx, fg);
                    ctx.set_global_alpha(alpha);
                    ctx.fill_text(&text, cell_x, row_y)?;
                }
            }
        } else {
            set_fill(ctx, fg);
            for shape in glyph::draw(family, m) {
                draw_shape(ctx, shape, cell_x, row_y, alpha);
            }
        }
        ctx.set_global_alpha(1.0);

        let cell_w = cell.width.max(1) as f64 * m.width;
        if cell.flags.contains(CellFlags::UNDERLINE) {
            set_fill(ctx, fg);
            ctx.fill_rect(cell_x, row_y + m.baseline + 2.0, cell_w, 1.0);
        }
        if cell.flags.contains(CellFlags::STRIKETHROUGH) {
            set_fill(ctx, fg);
            ctx.fill_rect(cell_x, row_y + m.height / 2.0, cell_w, 1.0);
        }
        if hovered_hyperlink_id != 0 && cell.hyperlink_id == hovered_hyperlink_id {
            set_fill(ctx, HYPERLINK_HOVER_COLOR);
            ctx.fill_rect(cell_x, row_y + m.baseline + 2.0, cell_w, 1.0);
        } else if let Some((sc, sr, ec, er)) = hovered_link_range {
            if is_selected(Some((sc, sr, ec, er)), row, col) {
                set_fill(ctx, HYPERLINK_HOVER_COLOR);
                ctx.fill_rect(cell_x, row_y + m.baseline + 2.0, cell_w, 1.0);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn background_is_skipped_for_default_black_bg() {
        let cell = Cell::empty();
        assert_eq!(background_fill(&cell, &Theme::default(), false), None);
    }

    #[test]
    fn selection_forces_solid_background_regardless_of_cell_bg() {
        let cell = Cell::empty();
        let theme = Theme::default();
        assert_eq!(background_fill(&cell, &theme, true), Some(theme.selection_background));
    }

    #[test]
    fn non_default_bg_is_painted() {
        let mut cell = Cell::empty();
        cell.bg = Rgb::new(10, 20, 30);
        assert_eq!(background_fill(&cell, &Theme::default(), false), Some(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn faint_halves_alpha() {
        let mut flags = CellFlags::empty();
        flags |= CellFlags::FAINT;
        assert_eq!(alpha_for(flags), 0.5);
        assert_eq!(alpha_for(CellFlags::empty()), 1.0);
    }

    #[test]
    fn bold_italic_prefix_both_present() {
        let mut flags = CellFlags::empty();
        flags |= CellFlags::BOLD | CellFlags::ITALIC;
        assert_eq!(font_string(flags, 15.0, "monospace"), "italic bold 15px monospace");
    }

    #[test]
    fn selection_span_is_inclusive_and_row_bounded() {
        let sel = Some((2, 0, 5, 0));
        assert!(!is_selected(sel, 0, 1));
        assert!(is_selected(sel, 0, 2));
        assert!(is_selected(sel, 0, 5));
        assert!(!is_selected(sel, 0, 6));
        assert!(!is_selected(sel, 1, 2));
    }

    #[test]
    fn multi_row_selection_spans_full_width_on_middle_rows() {
        let sel = Some((5, 0, 2, 2));
        assert!(is_selected(sel, 1, 9999));
        assert!(is_selected(sel, 0, 5));
        assert!(!is_selected(sel, 0, 4));
        assert!(is_selected(sel, 2, 2));
        assert!(!is_selected(sel, 2, 3));
    }
}
