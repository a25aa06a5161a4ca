// Shared tuning constants for the starfield.

// Particle creation
pub const MAX_DENSITY_RATIO: f32 = 4.0; // stars per px of the short side
pub const MAX_STARS: usize = 20_000; // hard cap whatever the viewport
pub const MIN_ALPHA: f32 = 0.1; // dimmest star at creation
pub const MIN_SIZE: f32 = 1.0; // smallest star diameter in px
pub const POSITION_SNAP: f32 = 1.0; // stars sit on whole pixels
pub const SIZE_SNAP: f32 = 1.0;
pub const ALPHA_SNAP: f32 = 0.1;

// Resting state
pub const REST_SCALE: f32 = 1.0;

// Pointer distance at which a star is fully lit
pub const NEAR_DISTANCE: f32 = 0.0;
pub const NEAR_ALPHA: f32 = 1.0;

// Defaults for StarfieldConfig
pub const DEFAULT_DENSITY_RATIO: f32 = 0.5;
pub const DEFAULT_SIZE_LIMIT: f32 = 5.0;
pub const DEFAULT_ALPHA: f32 = 0.2;
pub const DEFAULT_SCALE_LIMIT: f32 = 2.0;
pub const DEFAULT_PROXIMITY_RATIO: f32 = 0.1;
pub const DEFAULT_FPS: f32 = 24.0;
pub const DEFAULT_TWEEN_DURATION_SEC: f32 = 0.5;

// Ticker lag smoothing (seconds)
pub const LAG_THRESHOLD_SEC: f32 = 0.5; // longer gaps are treated as a stall
pub const LAG_ADJUSTED_SEC: f32 = 1.0 / 30.0; // elapsed time reported after a stall
