use crate::cell::Rgb;

/// The 16 ANSI colors plus the named UI colors a renderer needs.
///
/// Selection is **solid replacement**, not an alpha overlay: selected cells
/// paint `selection_background` and text in `selection_foreground`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Standard ANSI colors 0–15 (black, red, green, yellow, blue, magenta,
    /// cyan, white, then their bright variants in the same order).
    pub ansi: [Rgb; 16],
    /// Default text color.
    pub foreground: Rgb,
    /// Default cell background.
    pub background: Rgb,
    /// Cursor fill color.
    pub cursor: Rgb,
    /// Color used for glyphs drawn *under* a block cursor.
    pub cursor_accent: Rgb,
    /// Selection background (solid replacement).
    pub selection_background: Rgb,
    /// Selection foreground (solid replacement).
    pub selection_foreground: Rgb,
}

/// Accent color for hyperlink hover underlines.
pub const HYPERLINK_HOVER_COLOR: Rgb = Rgb::from_hex("#4A90E2");

impl Default for Theme {
    /// Matches the VS Code dark palette.
    fn default() -> Self {
        Self {
            ansi: [
                Rgb::from_hex("#000000"),
                Rgb::from_hex("#cd3131"),
                Rgb::from_hex("#0dbc79"),
                Rgb::from_hex("#e5e510"),
                Rgb::from_hex("#2472c8"),
                Rgb::from_hex("#bc3fbc"),
                Rgb::from_hex("#11a8cd"),
                Rgb::from_hex("#e5e5e5"),
                Rgb::from_hex("#666666"),
                Rgb::from_hex("#f14c4c"),
                Rgb::from_hex("#23d18b"),
                Rgb::from_hex("#f5f543"),
                Rgb::from_hex("#3b8eea"),
                Rgb::from_hex("#d670d6"),
                Rgb::from_hex("#29b8db"),
                Rgb::from_hex("#ffffff"),
            ],
            foreground: Rgb::from_hex("#d4d4d4"),
            background: Rgb::from_hex("#1e1e1e"),
            cursor: Rgb::from_hex("#ffffff"),
            cursor_accent: Rgb::from_hex("#1e1e1e"),
            selection_background: Rgb::from_hex("#d4d4d4"),
            selection_foreground: Rgb::from_hex("#1e1e1e"),
        }
    }
}

/// A sparse override of [`Theme`] fields, applied atomically by
/// [`crate::renderer::Renderer::set_theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeOverride {
    /// Overrides for ANSI colors 0–15, by index.
    pub ansi: [Option<Rgb>; 16],
    /// See [`Theme::foreground`].
    pub foreground: Option<Rgb>,
    /// See [`Theme::background`].
    pub background: Option<Rgb>,
    /// See [`Theme::cursor`].
    pub cursor: Option<Rgb>,
    /// See [`Theme::cursor_accent`].
    pub cursor_accent: Option<Rgb>,
    /// See [`Theme::selection_background`].
    pub selection_background: Option<Rgb>,
    /// See [`Theme::selection_foreground`].
    pub selection_foreground: Option<Rgb>,
}

impl Theme {
    /// Applies a partial override on top of `self`, field by field.
    pub fn overlay(mut self, over: &ThemeOverride) -> Self {
        for (slot, ov) in self.ansi.iter_mut().zip(over.ansi.iter()) {
            if let Some(c) = ov {
                *slot = *c;
            }
        }
        if let Some(c) = over.foreground {
            self.foreground = c;
        }
        if let Some(c) = over.background {
            self.background = c;
        }
        if let Some(c) = over.cursor {
            self.cursor = c;
        }
        if let Some(c) = over.cursor_accent {
            self.cursor_accent = c;
        }
        if let Some(c) = over.selection_background {
            self.selection_background = c;
        }
        if let Some(c) = over.selection_foreground {
            self.selection_foreground = c;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_vs_code_dark_palette() {
        let t = Theme::default();
        assert_eq!(t.background, Rgb::new(0x1e, 0x1e, 0x1e));
        assert_eq!(t.foreground, Rgb::new(0xd4, 0xd4, 0xd4));
        assert_eq!(t.ansi[1], Rgb::new(0xcd, 0x31, 0x31));
        assert_eq!(t.ansi[15], Rgb::new(0xff, 0xff, 0xff));
    }

    #[test]
    fn overlay_only_touches_set_fields() {
        let base = Theme::default();
        let mut over = ThemeOverride::default();
        over.background = Some(Rgb::new(1, 2, 3));
        let themed = base.overlay(&over);
        assert_eq!(themed.background, Rgb::new(1, 2, 3));
        assert_eq!(themed.foreground, base.foreground);
    }

    #[test]
    fn repeated_overlay_is_idempotent() {
        let mut over = ThemeOverride::default();
        over.cursor = Some(Rgb::new(9, 9, 9));
        let once = Theme::default().overlay(&over);
        let twice = Theme::default().overlay(&over).overlay(&over);
        assert_eq!(once, twice);
    }
}
