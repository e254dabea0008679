// Shared test doubles for host-side tests.

#![allow(dead_code)]
use glam::Vec2;
use starfield_core::{DotStyle, Surface, SurfaceError, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(Viewport),
    Dot {
        center: Vec2,
        radius: f32,
        opacity: f32,
        blur: f32,
        color: String,
    },
}

/// Surface that records every call instead of painting.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    /// When set, `fill_dot` fails once this many dots have been drawn.
    pub fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn dots(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(|c| matches!(c, Call::Dot { .. }))
    }

    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Clear(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.calls.push(Call::Clear(viewport));
        Ok(())
    }

    fn fill_dot(&mut self, center: Vec2, style: &DotStyle<'_>) -> Result<(), SurfaceError> {
        if let Some(limit) = self.fail_after {
            if self.dots().count() >= limit {
                return Err(SurfaceError::Draw("boom".into()));
            }
        }
        self.calls.push(Call::Dot {
            center,
            radius: style.radius,
            opacity: style.opacity,
            blur: style.blur,
            color: style.color.to_string(),
        });
        Ok(())
    }
}
