use crate::constants::{CANVAS_STYLE, DATA_ATTR_PREFIX, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use anyhow::anyhow;
use starfield_core::{FieldConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current `innerWidth` x `innerHeight`, falling back to 1920x1080.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|d| d.is_finite() && *d >= 1.0)
            .map(|d| d as u32)
    };
    Viewport::new(
        dim(window.inner_width()).unwrap_or(FALLBACK_WIDTH),
        dim(window.inner_height()).unwrap_or(FALLBACK_HEIGHT),
    )
}

#[inline]
pub fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Look up `#id`, or create a fixed background canvas with that id at the end
/// of `<body>`.
pub fn find_or_create_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(id) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow!("#{} is not a <canvas>", id));
    }
    let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    canvas.set_id(id);
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    body.append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    log::info!("[dom] created #{}", id);
    Ok(canvas)
}

#[inline]
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}

/// Config from the canvas' `data-*` attributes. Invalid overrides are logged
/// and the defaults are used instead.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let lookup = |key: &str| canvas.get_attribute(&format!("{DATA_ATTR_PREFIX}{key}"));
    match FieldConfig::from_lookup(lookup) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldConfig::default()
        }
    }
}
