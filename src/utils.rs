//! DOM helper functions used by the renderer's construction and resize paths.

use web_sys::{wasm_bindgen::JsCast, CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use crate::error::Error;

/// Returns the global `window`, or an error if unavailable (e.g. outside a
/// browser context).
pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns `window.document`.
pub fn document() -> Result<web_sys::Document, Error> {
    window()?.document().ok_or(Error::UnableToRetrieveDocument)
}

/// Looks up `id` in the document, falling back to `<body>` when `id` is
/// `None`. Returns an error if an explicit `id` does not resolve to an
/// element.
pub fn get_element_by_id_or_body(id: Option<&str>) -> Result<Element, Error> {
    let document = document()?;
    match id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| Error::ElementNotFound(id.to_string())),
        None => document
            .body()
            .map(Element::from)
            .ok_or(Error::UnableToRetrieveDocument),
    }
}

/// Creates a `<canvas>` element inside `parent` with the given device-pixel
/// dimensions.
pub fn create_canvas_in_element(
    parent: &Element,
    width: u32,
    height: u32,
) -> Result<HtmlCanvasElement, Error> {
    let canvas = document()?
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::UnableToRetrieveCanvasContext)?;
    canvas.set_width(width);
    canvas.set_height(height);
    parent.append_child(&canvas)?;
    Ok(canvas)
}

/// Retrieves the canvas's 2D drawing context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, Error> {
    canvas
        .get_context("2d")?
        .ok_or(Error::UnableToRetrieveCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::UnableToRetrieveCanvasContext)
}

/// Resizes `canvas` to `cols*cell_width x rows*cell_height` CSS pixels,
/// scaled by `dpr` for the backing pixel buffer, and reapplies the device
/// pixel ratio transform on `ctx` — required because resizing a canvas
/// resets its drawing transform.
pub fn resize_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    css_width: f64,
    css_height: f64,
    dpr: f64,
) -> Result<(), Error> {
    canvas.set_width((css_width * dpr).round() as u32);
    canvas.set_height((css_height * dpr).round() as u32);
    canvas.set_attribute("style", &format!("width: {css_width}px; height: {css_height}px;"))?;
    ctx.scale(dpr, dpr)?;
    Ok(())
}

/// Milliseconds since the navigation start, used to derive cursor blink
/// visibility without registering a timer.
pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
