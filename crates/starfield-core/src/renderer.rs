//! Renderer lifecycle: owns the field, the frame limiter and the surface.
//!
//! The host drives it with display-refresh timestamps (`tick`) and raw input
//! values (`on_pointer_move`, `on_scroll`, `on_resize`). Everything runs on
//! one thread; inputs are last-write-wins and only take effect at the next
//! admitted tick. Once stopped, every entry point is inert.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::pacing::FrameLimiter;
use crate::particle::Viewport;
use crate::signals::{PointerSignal, ScrollSignal};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame executed and painted.
    Drawn,
    /// Too soon after the previous frame; nothing touched.
    Throttled,
    /// Renderer is not running; nothing touched.
    Stopped,
    /// Surface reported an error; the frame was dropped.
    Failed,
}

pub struct Renderer<S: Surface> {
    field: ParticleField,
    limiter: FrameLimiter,
    surface: S,
    running: bool,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, viewport: Viewport, config: &FieldConfig) -> Self {
        Self {
            field: ParticleField::new(viewport, config),
            limiter: FrameLimiter::new(config.frame_interval_ms(), 0.0),
            surface,
            running: false,
        }
    }

    /// Begin accepting ticks. Pacing restarts from `now_ms`, so the first
    /// frame runs one interval later.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        self.limiter.reset(now_ms);
        self.running = true;
        log::info!(
            "[starfield] start stars={} viewport={}x{}",
            self.field.particles().len(),
            self.field.viewport().width,
            self.field.viewport().height
        );
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        log::info!("[starfield] stop");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one display-refresh callback. Surface errors are logged and
    /// swallowed here so a broken frame never reaches the host page.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        if !self.limiter.admit(now_ms) {
            return TickOutcome::Throttled;
        }
        match self.field.paint(&mut self.surface) {
            Ok(()) => TickOutcome::Drawn,
            Err(e) => {
                log::warn!("[starfield] frame skipped: {}", e);
                // leave a blank frame rather than a half-drawn one
                _ = self.surface.clear(self.field.viewport());
                TickOutcome::Failed
            }
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        if !self.running {
            return;
        }
        let signal = PointerSignal::from_client(client_x, client_y, self.field.viewport());
        self.field.set_pointer(signal);
    }

    pub fn on_scroll(&mut self, scroll_y_px: f32) {
        if !self.running {
            return;
        }
        self.field
            .set_scroll(ScrollSignal::from_scroll_offset(scroll_y_px));
    }

    /// Regenerate the field for a new viewport. Returns true when the
    /// particles were replaced.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        if !self.running {
            return false;
        }
        let viewport = Viewport::new(width, height);
        let replaced = self.field.resize(viewport);
        if replaced {
            log::info!("[starfield] resize {}x{}", viewport.width, viewport.height);
        }
        replaced
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
