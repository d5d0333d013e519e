#![warn(missing_docs, clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

/// Cell and color types.
pub mod cell;

/// Cursor shape geometry and blink visibility.
pub mod cursor;

/// Custom error type.
pub mod error;

/// Procedural glyph classification and drawing.
pub mod glyph;

/// Font metrics derivation.
pub mod metrics;

/// Cell painting.
pub mod paint;

/// The frame orchestrator and public renderer API.
pub mod renderer;

/// Scrollbar geometry.
pub mod scrollbar;

/// Color theme.
pub mod theme;

/// Host-provided collaborator interfaces.
pub mod traits;

/// Web utility functions.
pub mod utils;

// Re-export web_sys so consumers can construct `HtmlCanvasElement`s and
// register listeners without pinning their own version.
pub use web_sys;

pub use cell::{Cell, CellFlags, Rgb};
pub use cursor::{CursorGeometry, CursorStyle};
pub use error::Error;
pub use metrics::FontMetrics;
pub use renderer::{Renderer, RendererOptions};
pub use theme::{Theme, ThemeOverride};
pub use traits::{CursorState, Dimensions, IRenderable, IScrollbackProvider, SelectionCoords, SelectionManager};
