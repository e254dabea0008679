//! Drawing-surface seam between the field and the host.

use crate::constants::{GLOW_BLUR_PER_DEPTH, OPACITY_BASE, OPACITY_SPAN, RADIUS_BASE, RADIUS_SPAN};
use crate::error::SurfaceError;
use crate::particle::Viewport;
use glam::Vec2;

/// Paint parameters for one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle<'a> {
    pub radius: f32,
    pub opacity: f32,
    /// Shadow blur radius for the glow.
    pub blur: f32,
    pub color: &'a str,
}

impl<'a> DotStyle<'a> {
    /// Style for a star of `depth` with base radius `star_size`.
    #[inline]
    pub fn for_depth(depth: f32, star_size: f32, color: &'a str) -> Self {
        Self {
            radius: star_size * (RADIUS_BASE + RADIUS_SPAN * depth),
            opacity: OPACITY_BASE + OPACITY_SPAN * depth,
            blur: GLOW_BLUR_PER_DEPTH * depth,
            color,
        }
    }
}

/// Exclusive 2D drawing target.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError>;
    fn fill_dot(&mut self, center: Vec2, style: &DotStyle<'_>) -> Result<(), SurfaceError>;
}
