//! Browser-side constants. Distances are CSS pixels.

/// `localStorage` key holding the URL of the current puzzle image.
pub const STORAGE_KEY: &str = "puzzle_image";
pub const UNSPLASH_RANDOM_URL: &str =
    "https://api.unsplash.com/photos/random?orientation=landscape";
/// Global set by the host page with the Unsplash access key.
pub const ACCESS_KEY_GLOBAL: &str = "__UNSPLASH_ACCESS_KEY";
pub const CANVAS_ID: &str = "cv";
pub const BACKGROUND: &str = "#f4f1ea";
pub const TARGET_FILL: &str = "rgba(0, 0, 0, 0.06)";
pub const TARGET_STROKE: &str = "#8a8070";
pub const FIXED_STROKE: &str = "rgba(60, 140, 60, 0.8)";
pub const PIECE_STROKE: &str = "rgba(255, 255, 255, 0.9)";
