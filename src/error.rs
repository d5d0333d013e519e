use web_sys::wasm_bindgen::JsValue;

/// Errors surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `web_sys::window()` returned `None`.
    #[error("unable to retrieve window")]
    UnableToRetrieveWindow,
    /// `Window::document()` returned `None`.
    #[error("unable to retrieve document")]
    UnableToRetrieveDocument,
    /// `get_context(\"2d\")` returned `None`, or its cast to
    /// `CanvasRenderingContext2d` failed.
    #[error("unable to retrieve 2d canvas context")]
    UnableToRetrieveCanvasContext,
    /// The configured mount element id does not exist in the document.
    #[error("element not found: {0}")]
    ElementNotFound(String),
    /// Catch-all conversion from a `web_sys` call returning `Result<_, JsValue>`.
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
