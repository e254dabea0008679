// Web-side constants for mounting the starfield canvas.

// Element id looked up (or created) when `mount` is called without one
pub const CANVAS_ID: &str = "starfield-bg";

// Fixed full-viewport layer behind the page that never takes input
pub const CANVAS_STYLE: &str = "position:fixed;left:0;top:0;width:100vw;height:100vh;\
z-index:-1;pointer-events:none;background:transparent;display:block";

// Used when the window reports no usable inner size
pub const FALLBACK_WIDTH: u32 = 1920;
pub const FALLBACK_HEIGHT: u32 = 1080;

// Config overrides are read from `data-<key>` attributes on the canvas
pub const DATA_ATTR_PREFIX: &str = "data-";
