//! Shared constants for the sync engine.

// ── Surface geometry ────────────────────────────────────────────

/// X coordinate the shape is centered on when first drawn, in surface pixels.
pub const ANCHOR_X: f64 = 300.0;

/// Y coordinate the shape is centered on when first drawn, in surface pixels.
pub const ANCHOR_Y: f64 = 200.0;

/// Width of the mounted drawing area, in surface pixels.
pub const SURFACE_WIDTH: f64 = 1000.0;

/// Height of the mounted drawing area, in surface pixels.
pub const SURFACE_HEIGHT: f64 = 1000.0;

/// Fill color applied to the rectangle.
pub const SHAPE_FILL: &str = "#f06";

// ── Persistence ─────────────────────────────────────────────────

/// Quiet period before a pending write is sent to the store.
pub const DEFAULT_PERSIST_DEBOUNCE_MS: u64 = 3000;

/// File name used when exporting the persisted payload.
pub const EXPORT_FILE_NAME: &str = "rectangle-dimensions.json";
