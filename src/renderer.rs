//! The public renderer surface and its per-frame orchestration.
//!
//! [`Renderer::render`] is the Frame Orchestrator: it decides which rows
//! need repainting, composes scrollback with live content, and drives the
//! two-pass [`crate::paint`] over each one.

use std::collections::BTreeSet;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::cell::Cell;
use crate::cursor::{self, CursorStyle};
use crate::error::Error;
use crate::metrics::FontMetrics;
use crate::paint;
use crate::scrollbar;
use crate::theme::{Theme, ThemeOverride};
use crate::traits::{IRenderable, IScrollbackProvider, SelectionCoords, SelectionManager};
use crate::utils;

/// Construction and default-rendering options, consumed by [`Renderer::new`]
/// and [`Renderer::mount`].
#[derive(Debug, Clone)]
pub struct RendererOptions {
    font_size: f64,
    font_family: String,
    cursor_style: CursorStyle,
    cursor_blink: bool,
    theme_override: ThemeOverride,
    device_pixel_ratio: Option<f64>,
    grid_id: Option<String>,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            font_family: "monospace".to_string(),
            cursor_style: CursorStyle::Block,
            cursor_blink: false,
            theme_override: ThemeOverride::default(),
            device_pixel_ratio: None,
            grid_id: None,
        }
    }
}

impl RendererOptions {
    /// Sets the font size, in CSS pixels. Default `15`.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the font family. Default `"monospace"`.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the cursor shape. Default [`CursorStyle::Block`].
    pub fn cursor_style(mut self, style: CursorStyle) -> Self {
        self.cursor_style = style;
        self
    }

    /// Enables or disables cursor blink. Default `false`.
    pub fn cursor_blink(mut self, blink: bool) -> Self {
        self.cursor_blink = blink;
        self
    }

    /// Applies a partial override to the default theme.
    pub fn theme(mut self, theme_override: ThemeOverride) -> Self {
        self.theme_override = theme_override;
        self
    }

    /// Overrides the device pixel ratio. Defaults to the host window's.
    pub fn device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = Some(dpr);
        self
    }

    /// Sets the id of the element [`Renderer::mount`] should create the
    /// canvas inside. Defaults to `<body>`.
    pub fn grid_id(mut self, id: impl Into<String>) -> Self {
        self.grid_id = Some(id.into());
        self
    }
}

/// A procedural terminal cell renderer bound to an HTML canvas.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    metrics: FontMetrics,
    font_size: f64,
    font_family: String,
    theme: Theme,
    cursor_style: CursorStyle,
    cursor_blink: bool,
    cursor_suppressed: bool,
    dpr: f64,
    start_time_ms: f64,
    selection_manager: Option<Box<dyn SelectionManager>>,
    hovered_hyperlink_id: u32,
    previous_hovered_hyperlink_id: u32,
    hovered_link_range: Option<SelectionCoords>,
    previous_hovered_link_range: Option<SelectionCoords>,
    current_selection_coords: Option<SelectionCoords>,
    last_cursor_position: Option<(u32, u32)>,
    last_viewport_y: f64,
}

impl Renderer {
    /// Constructs a renderer drawing onto an existing `canvas`.
    pub fn new(canvas: HtmlCanvasElement, options: RendererOptions) -> Result<Self, Error> {
        console_error_panic_hook::set_once();
        let ctx = utils::context_2d(&canvas)?;
        let metrics = FontMetrics::measure(&ctx, options.font_size, &options.font_family);
        let theme = Theme::default().overlay(&options.theme_override);
        let dpr = options
            .device_pixel_ratio
            .unwrap_or_else(|| utils::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0));

        Ok(Self {
            canvas,
            ctx,
            metrics,
            font_size: options.font_size,
            font_family: options.font_family,
            theme,
            cursor_style: options.cursor_style,
            cursor_blink: options.cursor_blink,
            cursor_suppressed: false,
            dpr,
            start_time_ms: utils::now_ms(),
            selection_manager: None,
            hovered_hyperlink_id: 0,
            previous_hovered_hyperlink_id: 0,
            hovered_link_range: None,
            previous_hovered_link_range: None,
            current_selection_coords: None,
            last_cursor_position: None,
            last_viewport_y: -1.0,
        })
    }

    /// Constructs a renderer, creating its own canvas inside the element
    /// named by [`RendererOptions::grid_id`] (or `<body>` if unset), sized to
    /// that element's current client box.
    pub fn mount(options: RendererOptions) -> Result<Self, Error> {
        let parent = utils::get_element_by_id_or_body(options.grid_id.as_deref())?;
        let width = parent.client_width().max(0) as u32;
        let height = parent.client_height().max(0) as u32;
        let canvas = utils::create_canvas_in_element(&parent, width, height)?;
        Self::new(canvas, options)
    }

    /// Resolves the line at row `y` of the current viewport, from live
    /// content or scrollback, per the §4.E step 8 rule.
    fn resolve_line(
        buffer: &dyn IRenderable,
        scrollback: Option<&dyn IScrollbackProvider>,
        scrollback_length: u32,
        viewport_y: f64,
        y: u32,
    ) -> Option<Vec<Cell>> {
        if viewport_y == 0.0 {
            return buffer.get_line(y);
        }
        let viewport_floor = viewport_y.floor() as u32;
        if y < viewport_floor {
            let offset = scrollback_length as i64 - viewport_floor as i64 + y as i64;
            if offset < 0 {
                return None;
            }
            scrollback?.get_scrollback_line(offset as u32)
        } else {
            buffer.get_line(y - viewport_floor)
        }
    }

    /// Renders one frame.
    ///
    /// `viewport_y` is the number of lines scrolled up from the live view
    /// (`0` = live). `scrollback` is consulted only for rows that fall
    /// inside scrolled-off history; omit it when there is none.
    pub fn render(
        &mut self,
        buffer: &mut dyn IRenderable,
        force_all: bool,
        viewport_y: f64,
        scrollback: Option<&dyn IScrollbackProvider>,
        scrollbar_opacity: f64,
    ) -> Result<(), Error> {
        let dims = buffer.get_dimensions();
        if dims.cols == 0 || dims.rows == 0 {
            buffer.clear_dirty();
            return Ok(());
        }

        let mut force_all = force_all || buffer.needs_full_redraw();

        let css_width = dims.cols as f64 * self.metrics.width;
        let css_height = dims.rows as f64 * self.metrics.height;
        let want_w = (css_width * self.dpr).round() as u32;
        let want_h = (css_height * self.dpr).round() as u32;
        if self.canvas.width() != want_w || self.canvas.height() != want_h {
            utils::resize_canvas(&self.canvas, &self.ctx, css_width, css_height, self.dpr)?;
            force_all = true;
        }

        if (viewport_y - self.last_viewport_y).abs() > f64::EPSILON {
            force_all = true;
        }

        let cursor = buffer.get_cursor();
        let cursor_moved = self.last_cursor_position != Some((cursor.x, cursor.y));

        let mut rows: BTreeSet<u32> = BTreeSet::new();

        if cursor_moved || self.cursor_blink {
            rows.insert(cursor.y);
            if cursor_moved {
                if let Some((_, prev_y)) = self.last_cursor_position {
                    rows.insert(prev_y);
                }
            }
        }

        let selection_coords = self
            .selection_manager
            .as_ref()
            .filter(|s| s.has_selection())
            .and_then(|s| s.get_selection_coords());
        if let Some(sel) = selection_coords {
            for r in sel.start_row..=sel.end_row {
                rows.insert(r);
            }
        }
        if let Some(sel_mgr) = self.selection_manager.as_mut() {
            for r in sel_mgr.get_dirty_selection_rows() {
                rows.insert(r);
            }
            sel_mgr.clear_dirty_selection_rows();
        }
        self.current_selection_coords = selection_coords;

        let scrollback_length = scrollback.map(|s| s.get_scrollback_length()).unwrap_or(0);

        if self.hovered_hyperlink_id != self.previous_hovered_hyperlink_id {
            for y in 0..dims.rows {
                if let Some(line) =
                    Self::resolve_line(buffer, scrollback, scrollback_length, viewport_y, y)
                {
                    let hit = line.iter().any(|c| {
                        c.hyperlink_id == self.hovered_hyperlink_id
                            || c.hyperlink_id == self.previous_hovered_hyperlink_id
                    });
                    if hit {
                        rows.insert(y);
                    }
                }
            }
            self.previous_hovered_hyperlink_id = self.hovered_hyperlink_id;
        }

        if self.hovered_link_range != self.previous_hovered_link_range {
            if let Some(r) = self.hovered_link_range {
                for row in r.start_row..=r.end_row {
                    rows.insert(row);
                }
            }
            if let Some(r) = self.previous_hovered_link_range {
                for row in r.start_row..=r.end_row {
                    rows.insert(row);
                }
            }
            self.previous_hovered_link_range = self.hovered_link_range;
        }

        for y in 0..dims.rows {
            if buffer.is_row_dirty(y) {
                rows.insert(y);
            }
        }

        if force_all || viewport_y > 0.0 {
            rows = (0..dims.rows).collect();
        }

        let mut expanded: BTreeSet<u32> = BTreeSet::new();
        for &y in &rows {
            if y > 0 {
                expanded.insert(y - 1);
            }
            expanded.insert(y);
            if y + 1 < dims.rows {
                expanded.insert(y + 1);
            }
        }

        for y in expanded {
            let Some(line) = Self::resolve_line(buffer, scrollback, scrollback_length, viewport_y, y)
            else {
                continue;
            };
            let row_y = y as f64 * self.metrics.height;
            let selection_row =
                self.current_selection_coords.map(|s| (s.start_col, s.start_row, s.end_col, s.end_row));
            let link_row = self.hovered_link_range.map(|r| (r.start_col, r.start_row, r.end_col, r.end_row));
            paint::paint_row(
                &self.ctx,
                &line,
                |col| Some(buffer.grapheme_string(y, col)),
                y,
                row_y,
                self.metrics,
                &self.theme,
                self.font_size,
                &self.font_family,
                selection_row,
                self.hovered_hyperlink_id,
                link_row,
            )?;
        }

        if viewport_y == 0.0 && cursor.visible && !self.cursor_suppressed {
            let elapsed = utils::now_ms() - self.start_time_ms;
            if cursor::is_visible(self.cursor_blink, elapsed) {
                let geom = cursor::geometry(self.cursor_style, cursor.x, cursor.y, self.metrics);
                self.ctx.set_fill_style_str(&self.theme.cursor.to_css());
                self.ctx.set_global_alpha(1.0);
                self.ctx.fill_rect(geom.x, geom.y, geom.w, geom.h);
            }
        }

        if scrollback.is_some() && scrollbar_opacity > 0.0 {
            let surface_w = dims.cols as f64 * self.metrics.width;
            let surface_h = dims.rows as f64 * self.metrics.height;
            let gutter_x = surface_w - scrollbar::WIDTH - scrollbar::RIGHT_PADDING;
            self.ctx.clear_rect(gutter_x, 0.0, scrollbar::WIDTH, surface_h);
            if let Some(sb) =
                scrollbar::compute(surface_w, surface_h, viewport_y, scrollback_length, dims.rows, scrollbar_opacity)
            {
                let (r, g, b) = scrollbar::COLOR_RGB;
                self.ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {})", sb.track_alpha));
                self.ctx.fill_rect(sb.x, sb.track_top, scrollbar::WIDTH, sb.track_height);
                self.ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {})", sb.thumb_alpha));
                self.ctx.fill_rect(sb.x, sb.thumb_top, scrollbar::WIDTH, sb.thumb_height);
            }
        }

        self.last_cursor_position = Some((cursor.x, cursor.y));
        self.last_viewport_y = viewport_y;
        buffer.clear_dirty();

        Ok(())
    }

    /// Replaces the theme with `Theme::default()` overlaid by `over`.
    pub fn set_theme(&mut self, over: &ThemeOverride) {
        self.theme = Theme::default().overlay(over);
    }

    /// Sets the font size and re-measures cell metrics.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.remeasure_font();
    }

    /// Sets the font family and re-measures cell metrics.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
        self.remeasure_font();
    }

    /// Sets the cursor shape.
    pub fn set_cursor_style(&mut self, style: CursorStyle) {
        self.cursor_style = style;
    }

    /// Enables or disables cursor blink.
    pub fn set_cursor_blink(&mut self, blink: bool) {
        self.cursor_blink = blink;
    }

    /// Forces the cursor to be hidden regardless of blink phase, until
    /// called again with `false`.
    pub fn suppress_cursor(&mut self, suppressed: bool) {
        self.cursor_suppressed = suppressed;
    }

    /// Installs (or clears) the selection manager consulted during `render`.
    pub fn set_selection_manager(&mut self, manager: Option<Box<dyn SelectionManager>>) {
        self.selection_manager = manager;
    }

    /// Sets the currently hovered hyperlink group id. `0` means no hover.
    pub fn set_hovered_hyperlink_id(&mut self, id: u32) {
        self.hovered_hyperlink_id = id;
    }

    /// Sets the currently hovered regex-matched link range, if any.
    pub fn set_hovered_link_range(&mut self, range: Option<SelectionCoords>) {
        self.hovered_link_range = range;
    }

    /// Re-measures font metrics from the current font size/family.
    pub fn remeasure_font(&mut self) {
        self.metrics = FontMetrics::measure(&self.ctx, self.font_size, &self.font_family);
    }

    /// Resizes the backing canvas to exactly `cols x rows` cells.
    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), Error> {
        let css_width = cols as f64 * self.metrics.width;
        let css_height = rows as f64 * self.metrics.height;
        utils::resize_canvas(&self.canvas, &self.ctx, css_width, css_height, self.dpr)
    }

    /// Fills the entire surface with the current theme background.
    pub fn clear(&mut self) {
        self.ctx.set_fill_style_str(&self.theme.background.to_css());
        self.ctx.set_global_alpha(1.0);
        let w = self.canvas.width() as f64 / self.dpr;
        let h = self.canvas.height() as f64 / self.dpr;
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    /// Returns the current font metrics.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Cell width in CSS pixels.
    pub fn char_width(&self) -> f64 {
        self.metrics.width
    }

    /// Cell height in CSS pixels.
    pub fn char_height(&self) -> f64 {
        self.metrics.height
    }

    /// Releases the renderer. There is no timer resource to unregister,
    /// since blink visibility is derived from wall-clock time at draw time
    /// rather than a registered callback.
    pub fn dispose(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::mock::MockScrollback;

    #[test]
    fn resolve_line_uses_buffer_directly_when_viewport_is_live() {
        let mut buf = crate::traits::mock::MockRenderable::new(4, 2);
        buf.lines[0][0].codepoint = 65;
        let line = Renderer::resolve_line(&buf, None, 0, 0.0, 0);
        assert_eq!(line.unwrap()[0].codepoint, 65);
    }

    #[test]
    fn resolve_line_reads_scrollback_above_the_viewport_floor() {
        let buf = crate::traits::mock::MockRenderable::new(4, 3);
        let mut sb = MockScrollback::default();
        sb.lines = vec![vec![Cell::empty(); 4]; 20];
        sb.lines[17][0].codepoint = 99;
        // viewport_y = 3: rows 0..3 come from scrollback offsets 20-3+0=17..19
        let line = Renderer::resolve_line(&buf, Some(&sb), 20, 3.0, 0);
        assert_eq!(line.unwrap()[0].codepoint, 99);
    }

    #[test]
    fn resolve_line_falls_back_to_buffer_below_the_viewport_floor() {
        let mut buf = crate::traits::mock::MockRenderable::new(4, 3);
        buf.lines[0][0].codepoint = 42;
        let line = Renderer::resolve_line(&buf, None, 20, 3.0, 3);
        assert_eq!(line.unwrap()[0].codepoint, 42);
    }
}
