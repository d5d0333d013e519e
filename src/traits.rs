//! Host-provided collaborator interfaces.
//!
//! These traits are deliberately free of any `web_sys` dependency so that
//! mock implementations can drive the orchestrator and painter in plain
//! `#[test]`s on the host target.

use crate::cell::Cell;

/// Grid dimensions in columns/rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Column count.
    pub cols: u32,
    /// Row count.
    pub rows: u32,
}

/// Cursor position and visibility, as reported by the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Whether the emulator wants the cursor drawn at all (independent of
    /// blink phase and [`crate::renderer::Renderer::suppress_cursor`]).
    pub visible: bool,
}

/// The styled-cell grid plus dirty-tracking, consumed from the terminal
/// emulator.
pub trait IRenderable {
    /// Returns a row of cells for the visible viewport, or `None` if `y` is
    /// out of range. When present, length is `dimensions().cols`.
    fn get_line(&self, y: u32) -> Option<Vec<Cell>>;

    /// Returns the current cursor state. Implementations that need to
    /// refresh internal state to keep the cursor consistent with cell
    /// contents MUST do so before returning, since both are read in the same
    /// frame.
    fn get_cursor(&self) -> CursorState;

    /// Grid dimensions.
    fn get_dimensions(&self) -> Dimensions;

    /// Whether row `y` has been mutated since the last `clear_dirty()`.
    fn is_row_dirty(&self, y: u32) -> bool;

    /// Clears all dirty-row bits. Called exactly once per frame, at the end
    /// of `render()`, unconditionally.
    fn clear_dirty(&mut self);

    /// Optional: force the next frame to redraw every row regardless of
    /// dirty bits (e.g. after a theme/font change the renderer doesn't
    /// itself know about).
    fn needs_full_redraw(&self) -> bool {
        false
    }

    /// Optional: resolves the full grapheme cluster at `(row, col)` for
    /// cells with `grapheme_len > 0`. Default implementation panics, since
    /// any cell claiming an extended grapheme must come from a renderable
    /// that implements this.
    fn grapheme_string(&self, row: u32, col: u32) -> String {
        let _ = (row, col);
        unimplemented!("IRenderable::grapheme_string must be overridden to support grapheme_len > 0 cells")
    }
}

/// Historical (scrolled-off) lines, consumed from scrollback storage.
/// Offsets are 0-based from the oldest line.
pub trait IScrollbackProvider {
    /// Returns the line at `offset`, or `None` if out of range.
    fn get_scrollback_line(&self, offset: u32) -> Option<Vec<Cell>>;

    /// Total number of scrollback lines.
    fn get_scrollback_length(&self) -> u32;
}

/// Viewport-relative, inclusive selection coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCoords {
    /// Starting column.
    pub start_col: u32,
    /// Starting row.
    pub start_row: u32,
    /// Ending column (inclusive).
    pub end_col: u32,
    /// Ending row (inclusive).
    pub end_row: u32,
}

/// Selection state, consumed from the selection manager.
pub trait SelectionManager {
    /// Whether any selection currently exists.
    fn has_selection(&self) -> bool;

    /// The current selection coordinates, if any.
    fn get_selection_coords(&self) -> Option<SelectionCoords>;

    /// Rows that must be redrawn to clear a previous selection, populated by
    /// the selection manager as selection state changes out-of-band from
    /// `render()`.
    fn get_dirty_selection_rows(&self) -> Vec<u32>;

    /// Clears the dirty-selection-row set. Called once per frame.
    fn clear_dirty_selection_rows(&mut self);
}

#[cfg(test)]
pub(crate) mod mock {
    //! Minimal in-memory implementations of the external traits, used by
    //! unit tests throughout the crate.
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Default)]
    pub struct MockRenderable {
        pub lines: Vec<Vec<Cell>>,
        pub cursor: CursorState,
        pub dirty: HashSet<u32>,
        pub full_redraw: bool,
        pub graphemes: std::collections::HashMap<(u32, u32), String>,
    }

    impl MockRenderable {
        pub fn new(cols: u32, rows: u32) -> Self {
            Self {
                lines: (0..rows)
                    .map(|_| (0..cols).map(|_| Cell::empty()).collect())
                    .collect(),
                dirty: (0..rows).collect(),
                ..Default::default()
            }
        }

        pub fn mark_dirty(&mut self, y: u32) {
            self.dirty.insert(y);
        }
    }

    impl IRenderable for MockRenderable {
        fn get_line(&self, y: u32) -> Option<Vec<Cell>> {
            self.lines.get(y as usize).cloned()
        }

        fn get_cursor(&self) -> CursorState {
            self.cursor
        }

        fn get_dimensions(&self) -> Dimensions {
            Dimensions {
                cols: self.lines.first().map(|l| l.len() as u32).unwrap_or(0),
                rows: self.lines.len() as u32,
            }
        }

        fn is_row_dirty(&self, y: u32) -> bool {
            self.dirty.contains(&y)
        }

        fn clear_dirty(&mut self) {
            self.dirty.clear();
        }

        fn needs_full_redraw(&self) -> bool {
            self.full_redraw
        }

        fn grapheme_string(&self, row: u32, col: u32) -> String {
            self.graphemes.get(&(row, col)).cloned().unwrap_or_default()
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct MockScrollback {
        pub lines: Vec<Vec<Cell>>,
    }

    impl IScrollbackProvider for MockScrollback {
        fn get_scrollback_line(&self, offset: u32) -> Option<Vec<Cell>> {
            self.lines.get(offset as usize).cloned()
        }

        fn get_scrollback_length(&self) -> u32 {
            self.lines.len() as u32
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct MockSelection {
        pub coords: Option<SelectionCoords>,
        pub dirty_rows: Vec<u32>,
    }

    impl SelectionManager for MockSelection {
        fn has_selection(&self) -> bool {
            self.coords.is_some()
        }

        fn get_selection_coords(&self) -> Option<SelectionCoords> {
            self.coords
        }

        fn get_dirty_selection_rows(&self) -> Vec<u32> {
            self.dirty_rows.clone()
        }

        fn clear_dirty_selection_rows(&mut self) {
            self.dirty_rows.clear();
        }
    }
}
