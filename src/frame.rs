use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop that re-requests itself after every callback
/// until `cancel` is called (or the loop is dropped).
pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    active: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Schedule `on_frame` for every display refresh. It receives the
    /// high-resolution timestamp (ms) passed to the rAF callback.
    pub fn start<F>(mut on_frame: F) -> anyhow::Result<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let active = Rc::new(Cell::new(true));

        let callback_tick = callback.clone();
        let pending_tick = pending.clone();
        let active_tick = active.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            pending_tick.set(None);
            if !active_tick.get() {
                return;
            }
            on_frame(now);
            if active_tick.get() {
                pending_tick.set(request_frame(&callback_tick));
            }
        }) as Box<dyn FnMut(f64)>));

        let id = request_frame(&callback).ok_or_else(|| anyhow!("requestAnimationFrame failed"))?;
        pending.set(Some(id));
        Ok(Self {
            callback,
            pending,
            active,
        })
    }

    /// Stop the loop: no further callbacks run, the pending request is
    /// cancelled and the self-referencing closure is released.
    pub fn cancel(&mut self) {
        self.active.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web::window()?;
    let slot = callback.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
