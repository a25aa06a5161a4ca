// Browser-side constants for the starfield overlay.

// Canvas picked up automatically at startup, if present
pub const DEFAULT_CANVAS_ID: &str = "starscape";

// Star fill colour (white); alpha comes from each star
pub const STAR_HUE: u32 = 0;
pub const STAR_SATURATION_PCT: u32 = 100;
pub const STAR_LIGHTNESS_PCT: u32 = 100;

// DOM events the overlay reacts to
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_POINTER_LEAVE: &str = "pointerleave";
