// Shared tuning constants for the starfield. The web front end only reads these
// through `FieldConfig` defaults and the projection/style helpers.

// Field population
pub const STAR_COUNT: usize = 130;
pub const MAX_STAR_COUNT: usize = 5_000; // upper bound for configured counts
pub const STAR_SIZE: f32 = 2.0; // base radius in CSS pixels
pub const STAR_COLOR: &str = "#fff";

// Depth factor range; closer stars are larger, brighter and move more
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_MAX: f32 = 1.0;

// Parallax gains (pixels per unit of signal at depth 1.0)
pub const POINTER_GAIN_X: f32 = 60.0;
pub const POINTER_GAIN_Y: f32 = 40.0;
pub const SCROLL_GAIN_X: f32 = 30.0;
pub const SCROLL_GAIN_Y: f32 = 80.0;

// Scroll offset (px) to velocity signal
pub const SCROLL_VELOCITY_PER_PX: f32 = 0.008;

// Dot styling: value = BASE + SPAN * depth
pub const RADIUS_BASE: f32 = 0.7;
pub const RADIUS_SPAN: f32 = 0.3;
pub const OPACITY_BASE: f32 = 0.7;
pub const OPACITY_SPAN: f32 = 0.3;
pub const GLOW_BLUR_PER_DEPTH: f32 = 6.0;

// Frame pacing
pub const TARGET_FPS: f32 = 60.0;
