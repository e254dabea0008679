//! Input signals read once per frame.
//!
//! Producers (pointer and scroll listeners) overwrite these between ticks;
//! the next tick reads whatever was written last. A value may be up to one
//! frame stale.

use crate::constants::SCROLL_VELOCITY_PER_PX;
use crate::particle::Viewport;

/// Pointer position normalised to `[-1, 1]` on both axes, centre at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub norm_x: f32,
    pub norm_y: f32,
}

impl PointerSignal {
    #[inline]
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        let size = viewport.size();
        Self {
            norm_x: ((client_x / size.x) * 2.0 - 1.0).clamp(-1.0, 1.0),
            norm_y: ((client_y / size.y) * 2.0 - 1.0).clamp(-1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSignal {
    pub velocity_y: f32,
}

impl ScrollSignal {
    #[inline]
    pub fn from_scroll_offset(scroll_y_px: f32) -> Self {
        Self {
            velocity_y: scroll_y_px * SCROLL_VELOCITY_PER_PX,
        }
    }
}
