//! The particle field: stars, viewport and the two input signals.
//!
//! Screen positions are recomputed from scratch every frame:
//!
//! ```text
//! x = wrap(base.x + norm_x * 60 * depth + velocity_y * 30 * depth, width)
//! y = wrap(base.y + norm_y * 40 * depth + velocity_y * 80 * depth, height)
//! ```

use crate::config::FieldConfig;
use crate::constants::{POINTER_GAIN_X, POINTER_GAIN_Y, SCROLL_GAIN_X, SCROLL_GAIN_Y};
use crate::error::SurfaceError;
use crate::particle::{sample_particles, Particle, Viewport};
use crate::signals::{PointerSignal, ScrollSignal};
use crate::surface::{DotStyle, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Single-step wraparound into `[0, limit)`.
///
/// Only correct while `-limit <= v < 2 * limit`; drift beyond one viewport
/// dimension per frame is not corrected further.
#[inline]
pub fn wrap(v: f32, limit: f32) -> f32 {
    if v < 0.0 {
        // a tiny negative `v` can round up to exactly `limit`
        let r = limit + v;
        if r >= limit {
            0.0
        } else {
            r
        }
    } else if v >= limit {
        v - limit
    } else {
        v
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    pointer: PointerSignal,
    scroll: ScrollSignal,
    star_count: usize,
    star_size: f32,
    color: String,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(viewport: Viewport, config: &FieldConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = sample_particles(&mut rng, viewport, config.star_count);
        Self {
            particles,
            viewport,
            pointer: PointerSignal::default(),
            scroll: ScrollSignal::default(),
            star_count: config.star_count,
            star_size: config.star_size,
            color: config.color.clone(),
            rng,
        }
    }

    /// Replace every particle with a fresh sample over `viewport`.
    /// Returns false when the size is unchanged and nothing was regenerated.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.particles = sample_particles(&mut self.rng, viewport, self.star_count);
        true
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: PointerSignal) {
        self.pointer = pointer;
    }

    #[inline]
    pub fn set_scroll(&mut self, scroll: ScrollSignal) {
        self.scroll = scroll;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> PointerSignal {
        self.pointer
    }

    pub fn scroll(&self) -> ScrollSignal {
        self.scroll
    }

    /// Screen position of `p` under the current signals.
    #[inline]
    pub fn project(&self, p: &Particle) -> Vec2 {
        let v = self.scroll.velocity_y;
        let dx = (self.pointer.norm_x * POINTER_GAIN_X + v * SCROLL_GAIN_X) * p.depth;
        let dy = (self.pointer.norm_y * POINTER_GAIN_Y + v * SCROLL_GAIN_Y) * p.depth;
        let size = self.viewport.size();
        Vec2::new(wrap(p.base.x + dx, size.x), wrap(p.base.y + dy, size.y))
    }

    /// Projected positions in insertion order.
    pub fn projected(&self) -> impl Iterator<Item = (Vec2, &Particle)> + '_ {
        self.particles.iter().map(move |p| (self.project(p), p))
    }

    /// Clear `surface` and draw every star, back to front in insertion order.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.clear(self.viewport)?;
        for (pos, p) in self.projected() {
            let style = DotStyle::for_depth(p.depth, self.star_size, &self.color);
            surface.fill_dot(pos, &style)?;
        }
        Ok(())
    }
}
