/// Per-axis distance, in canvas units, under which a piece counts as solved.
/// Absolute: not scaled by piece size or display scale.
pub const COMPLETION_TOLERANCE: f64 = 15.0;

/// Number of scatter bands around the target rectangle.
pub const ZONE_COUNT: usize = 4;

pub const DEFAULT_ROWS: u32 = 4;
pub const DEFAULT_COLS: u32 = 6;
/// Share of the canvas the target rectangle may take when fitting the image.
pub const DEFAULT_FIT_FRACTION: f64 = 0.6;
pub const DEFAULT_SNAP_DISTANCE: f64 = 15.0;
