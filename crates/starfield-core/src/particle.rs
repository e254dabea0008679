//! Particles and the viewport they are sampled against.

use crate::constants::{DEPTH_MAX, DEPTH_MIN};
use glam::Vec2;
use rand::Rng;

/// Drawable area in CSS pixels. Each side is at least 1 so sampling ranges
/// are never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A single star. Immutable once sampled; the whole set is replaced on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub base: Vec2,
    /// Parallax factor in `[DEPTH_MIN, DEPTH_MAX]`.
    pub depth: f32,
}

/// Sample `count` particles uniformly over `viewport`.
pub fn sample_particles<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
    count: usize,
) -> Vec<Particle> {
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    (0..count)
        .map(|_| Particle {
            base: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
            depth: rng.gen_range(DEPTH_MIN..=DEPTH_MAX),
        })
        .collect()
}
