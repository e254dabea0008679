/// Fixed-interval frame limiter.
///
/// Throttles an uncapped refresh signal (e.g. requestAnimationFrame on a
/// 120/144Hz display) down to at most one admitted frame per `interval_ms`.
/// The last admitted timestamp is the raw `now`, so lateness never carries
/// over more than one frame.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
    interval_ms: f64,
    last_frame_ms: f64,
}

impl FrameLimiter {
    pub fn new(interval_ms: f64, start_ms: f64) -> Self {
        Self {
            interval_ms,
            last_frame_ms: start_ms,
        }
    }

    /// Returns true when a frame should run at `now_ms`. A rejected call
    /// leaves the limiter untouched.
    #[inline]
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_frame_ms < self.interval_ms {
            return false;
        }
        self.last_frame_ms = now_ms;
        true
    }

    /// Restart timing from `now_ms` without admitting a frame.
    #[inline]
    pub fn reset(&mut self, now_ms: f64) {
        self.last_frame_ms = now_ms;
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[inline]
    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }
}
