use anyhow::anyhow;
use glam::Vec2;
use starfield_core::{DotStyle, Surface, SurfaceError, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a canvas 2D context. Holds exclusive painting rights;
/// nothing else draws on this canvas.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context. Failing here means there is nothing to paint
    /// on and the starfield is not mounted.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(2d): {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        Ok(())
    }

    fn fill_dot(&mut self, center: Vec2, style: &DotStyle<'_>) -> Result<(), SurfaceError> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(center.x as f64, center.y as f64, style.radius as f64, 0.0, TAU)
            .map_err(|e| SurfaceError::Draw(format!("{:?}", e)))?;
        ctx.set_fill_style_str(style.color);
        ctx.set_global_alpha(style.opacity as f64);
        ctx.set_shadow_blur(style.blur as f64);
        ctx.set_shadow_color(style.color);
        ctx.fill();
        ctx.close_path();
        Ok(())
    }
}
