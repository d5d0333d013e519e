use bitflags::bitflags;

bitflags! {
    /// SGR-derived style bits carried by a [`Cell`].
    ///
    /// `BLINK` is recognized for completeness but is never animated by this
    /// crate; blink state is carried but never animated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u16 {
        /// Bold.
        const BOLD          = 1 << 0;
        /// Italic.
        const ITALIC        = 1 << 1;
        /// Underline.
        const UNDERLINE     = 1 << 2;
        /// Strikethrough.
        const STRIKETHROUGH = 1 << 3;
        /// Swap foreground/background before color selection.
        const INVERSE       = 1 << 4;
        /// Render at reduced alpha.
        const FAINT         = 1 << 5;
        /// Suppress text entirely.
        const INVISIBLE     = 1 << 6;
        /// Recognized, not animated.
        const BLINK         = 1 << 7;
    }
}

/// An 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Constructs a new [`Rgb`].
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders as a CSS `rgb(...)` string suitable for
    /// `CanvasRenderingContext2d::set_fill_style_str`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parses a `#rrggbb` hex string. Panics on malformed input; only used
    /// for literal theme constants at construction time.
    pub const fn from_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        // Accept with or without leading '#'.
        let start = if bytes[0] == b'#' { 1 } else { 0 };
        let r = hex_byte(bytes[start], bytes[start + 1]);
        let g = hex_byte(bytes[start + 2], bytes[start + 3]);
        let b = hex_byte(bytes[start + 4], bytes[start + 5]);
        Self { r, g, b }
    }
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_byte(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

/// The atomic unit of terminal content, as delivered by the emulator.
///
/// A cell with `width == 0` is a spacer for the trailing half of a
/// double-width glyph and must never be drawn on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Primary codepoint. `0` means empty.
    pub codepoint: u32,
    /// Non-zero when additional codepoints combine with the base codepoint;
    /// in that case the full grapheme is fetched via
    /// [`crate::traits::IRenderable::grapheme_string`].
    pub grapheme_len: u8,
    /// Column width: `0` (spacer), `1` (normal), or `2` (wide).
    pub width: u8,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// SGR-derived style flags.
    pub flags: CellFlags,
    /// OSC-8 hyperlink group id. `0` means "no link".
    pub hyperlink_id: u32,
}

impl Cell {
    /// An empty cell: codepoint 0, width 1, default colors and flags.
    pub fn empty() -> Self {
        Self {
            width: 1,
            ..Default::default()
        }
    }

    /// True if this cell is a spacer occupying the trailing column of a
    /// wide glyph and must be skipped entirely by the painter.
    pub fn is_spacer(&self) -> bool {
        self.width == 0
    }

    /// Effective foreground/background after applying `INVERSE`.
    ///
    /// Returns `(fg, bg)` with the swap already resolved; callers layer
    /// `SELECTED` (solid replacement) and `FAINT` (alpha) on top of this.
    pub fn effective_colors(&self) -> (Rgb, Rgb) {
        if self.flags.contains(CellFlags::INVERSE) {
            (self.bg, self.fg)
        } else {
            (self.fg, self.bg)
        }
    }

    /// Whether this cell carries a grapheme cluster beyond its base codepoint.
    pub fn has_extended_grapheme(&self) -> bool {
        self.grapheme_len > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacer_cells_are_never_drawable() {
        let mut c = Cell::empty();
        c.width = 0;
        assert!(c.is_spacer());
    }

    #[test]
    fn inverse_swaps_fg_and_bg() {
        let mut c = Cell::empty();
        c.fg = Rgb::new(1, 2, 3);
        c.bg = Rgb::new(4, 5, 6);
        c.flags |= CellFlags::INVERSE;
        assert_eq!(c.effective_colors(), (Rgb::new(4, 5, 6), Rgb::new(1, 2, 3)));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff0080"), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_hex("1e1e1e"), Rgb::new(0x1e, 0x1e, 0x1e));
    }
}
