#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::events::EventListener;
use crate::frame::FrameLoop;
use anyhow::anyhow;
use starfield_core::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web loaded");
    Ok(())
}

/// Handle to a mounted starfield. Call `unmount()` (or `free()`) when the
/// owning view goes away.
#[wasm_bindgen]
pub struct Starfield {
    mounted: Option<Mounted>,
}

struct Mounted {
    renderer: Rc<RefCell<Renderer<CanvasSurface>>>,
    listeners: Vec<EventListener>,
    frames: FrameLoop,
}

impl Mounted {
    // Stop first so anything still queued is inert, then detach listeners
    // and cancel the pending frame.
    fn teardown(mut self) {
        match self.renderer.try_borrow_mut() {
            Ok(mut r) => r.stop(),
            Err(_) => log::warn!("[starfield] renderer busy during unmount"),
        }
        self.listeners.clear();
        self.frames.cancel();
    }
}

#[wasm_bindgen]
impl Starfield {
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.teardown();
            log::info!("[starfield] unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.renderer.try_borrow().ok().map(|r| r.is_running()))
            .unwrap_or(false)
    }
}

impl Drop for Starfield {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the starfield on `#canvas_id` (default `starfield-bg`), creating the
/// canvas if it does not exist. Fails when no 2D surface can be obtained.
#[wasm_bindgen]
pub fn mount(canvas_id: Option<String>) -> Result<Starfield, JsValue> {
    let id = canvas_id.as_deref().unwrap_or(constants::CANVAS_ID);
    match mount_on(id) {
        Ok(mounted) => Ok(Starfield {
            mounted: Some(mounted),
        }),
        Err(e) => {
            log::error!("[starfield] mount error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

fn mount_on(canvas_id: &str) -> anyhow::Result<Mounted> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
    let canvas = dom::find_or_create_canvas(&document, canvas_id)?;

    let viewport = dom::viewport(&window);
    dom::sync_canvas_size(&canvas, viewport);
    let config = dom::read_config(&canvas);
    let surface = CanvasSurface::from_canvas(&canvas)?;

    let mut renderer = Renderer::new(surface, viewport, &config);
    renderer.start(dom::now_ms(&window));
    let renderer = Rc::new(RefCell::new(renderer));

    let listeners = events::wire_input_handlers(&events::InputWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        renderer: renderer.clone(),
    })?;

    let renderer_tick = renderer.clone();
    let frames = FrameLoop::start(move |now| {
        if let Ok(mut r) = renderer_tick.try_borrow_mut() {
            r.tick(now);
        }
    })?;

    Ok(Mounted {
        renderer,
        listeners,
        frames,
    })
}
