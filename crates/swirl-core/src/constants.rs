// Shared camera/warp tuning constants used by both web and native frontends.

// Camera transform
pub const BASE_SCALE: f64 = 1.0; // world-to-clip multiplier applied on top of the zoom scale
pub const DEFAULT_SCALE: f64 = 0.5; // initial zoom (and zoom target) for a fresh view

// Zoom behaviour
pub const ZOOM_SPEED: f64 = 0.005; // wheel delta to exponential zoom factor
pub const SCALE_MIN: f64 = 0.25;
pub const SCALE_MAX: f64 = 50.0;
pub const SCALE_SMOOTHING: f64 = 0.05; // per-frame low-pass weight toward target scale

// Pan behaviour
pub const PAN_LIMIT: f64 = 2.0; // pans are clamped to [-PAN_LIMIT, PAN_LIMIT]

// Spiral warp
pub const SPIRAL_TWIST: f32 = 15.0; // radians of twist per unit radius
pub const JITTER_AMPLITUDE: f32 = 0.05; // radius jitter span fed by the sine hash

// Point rendering
pub const POINT_SIZE_BASE: f64 = 2.0; // device pixels per unit of zoom scale
pub const POINT_SIZE_MIN: f64 = 1.0; // never below one device pixel

// Grid / world layout
pub const WORLD_EXTENT: f64 = 1000.0; // world is WORLD_EXTENT x WORLD_EXTENT units
pub const GRID_CELLS: u32 = 10; // cells per axis
pub const GRID_CELL_SIZE: f64 = WORLD_EXTENT / GRID_CELLS as f64;

// Dataset limits
pub const MAX_POINTS: usize = 500_000;
