use crate::canvas::CanvasSurface;
use crate::dom;
use anyhow::anyhow;
use starfield_core::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener synchronously,
/// so no event can reach the handler afterwards.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web::EventTarget, event: &'static str, handler: F) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Rc<RefCell<Renderer<CanvasSurface>>>,
}

/// Register resize, pointer-move and scroll listeners on the window. The
/// returned guards must be kept alive for as long as the starfield runs.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![wire_resize(w)?, wire_pointermove(w)?, wire_scroll(w)?])
}

fn wire_resize(w: &InputWiring) -> anyhow::Result<EventListener> {
    let renderer = w.renderer.clone();
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    let target: &web::EventTarget = w.window.as_ref();
    EventListener::new(target, "resize", move |_ev| {
        let Ok(mut r) = renderer.try_borrow_mut() else {
            return;
        };
        if !r.is_running() {
            return;
        }
        let vp = dom::viewport(&window);
        dom::sync_canvas_size(&canvas, vp);
        r.on_resize(vp.width, vp.height);
    })
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<EventListener> {
    let renderer = w.renderer.clone();
    let target: &web::EventTarget = w.window.as_ref();
    EventListener::new(target, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Ok(mut r) = renderer.try_borrow_mut() {
            r.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

fn wire_scroll(w: &InputWiring) -> anyhow::Result<EventListener> {
    let renderer = w.renderer.clone();
    let window = w.window.clone();
    let target: &web::EventTarget = w.window.as_ref();
    EventListener::new(target, "scroll", move |_ev| {
        if let Ok(mut r) = renderer.try_borrow_mut() {
            r.on_scroll(dom::scroll_y(&window));
        }
    })
}
