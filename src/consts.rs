//! Shared numeric constants for the seat-planner engine.

// ── Grid ────────────────────────────────────────────────────────

/// Snapping quantum for placement and movement, in canvas units.
pub const GRID_SIZE: f64 = 25.0;

/// Side length of a chair shape (one grid cell).
pub const CHAIR_SIZE: f64 = 25.0;

/// Smallest width/height a resize may leave behind.
pub const MIN_SHAPE_SIZE: f64 = 20.0;

/// Default bounding-box width for freshly stamped text and comment shapes.
pub const TEXT_DEFAULT_WIDTH: f64 = 100.0;

/// Default bounding-box height for freshly stamped text and comment shapes.
pub const TEXT_DEFAULT_HEIGHT: f64 = 50.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower bound for the viewport scale.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper bound for the viewport scale.
pub const MAX_ZOOM: f64 = 2.0;

/// Scale change per zoom button press.
pub const ZOOM_STEP: f64 = 0.1;

/// Scale change per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.05;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for corner resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Bulk add ────────────────────────────────────────────────────

/// Left edge of the bulk-add grid.
pub const BULK_START_X: f64 = 50.0;

/// Top edge of the bulk-add grid.
pub const BULK_START_Y: f64 = 50.0;

/// Gap between bulk-added items, in canvas units.
pub const BULK_GAP: f64 = 10.0;

/// Items per row in the bulk-add grid.
pub const BULK_COLS: usize = 10;

/// Side length of non-chair bulk items (tables and the like).
pub const BULK_ITEM_SIZE: f64 = 50.0;

// ── Auto-build chart ────────────────────────────────────────────

/// Seats per row in row-layout charts.
pub const SEATS_PER_ROW: i64 = 15;

/// Seats per table in table-layout charts.
pub const SEATS_PER_TABLE: i64 = 10;
