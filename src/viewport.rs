//! Pan/zoom viewport and the screen→canvas coordinate transform.
//!
//! The canvas content is scaled from its top-left origin and the
//! *container* scrolls, so scroll offsets never enter the coordinate
//! formula: `canvas = (screen - origin) / scale`. Grid snapping lives
//! here too because it operates on canvas coordinates.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{GRID_SIZE, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP, ZOOM_STEP};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snap one canvas coordinate to the nearest grid line. Halves round up.
#[must_use]
pub fn snap(v: f64) -> f64 {
    (v / GRID_SIZE + 0.5).floor() * GRID_SIZE
}

/// Snap both axes of a canvas point independently.
#[must_use]
pub fn snap_point(p: Point) -> Point {
    Point::new(snap(p.x), snap(p.y))
}

/// Viewport state: zoom scale plus container scroll offsets.
///
/// `scale` stays within `[MIN_ZOOM, MAX_ZOOM]`; every mutation clamps.
/// Scroll offsets are in screen pixels and floor at zero, matching a
/// scrollable container.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scale: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0, scroll_left: 0.0, scroll_top: 0.0 }
    }
}

impl Viewport {
    /// Convert a screen-space point to canvas coordinates, given the
    /// canvas bounding origin in screen space.
    #[must_use]
    pub fn to_canvas(&self, screen: Point, origin: Point) -> Point {
        Point {
            x: (screen.x - origin.x) / self.scale,
            y: (screen.y - origin.y) / self.scale,
        }
    }

    /// Convert a screen-space distance (pixels) to canvas units.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Increase scale by one button step.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + ZOOM_STEP);
    }

    /// Decrease scale by one button step.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - ZOOM_STEP);
    }

    /// Wheel zoom: wheel-up (negative delta) zooms in by one notch,
    /// anything else zooms out.
    pub fn wheel_zoom(&mut self, delta_y: f64) {
        let step = if delta_y < 0.0 { WHEEL_ZOOM_STEP } else { -WHEEL_ZOOM_STEP };
        self.set_scale(self.scale + step);
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Drag-to-pan: scroll moves opposite to the pointer delta since the
    /// gesture began. No snapping.
    pub fn pan_to(&mut self, start_scroll: Point, pointer_delta: Point) {
        self.scroll_left = (start_scroll.x - pointer_delta.x).max(0.0);
        self.scroll_top = (start_scroll.y - pointer_delta.y).max(0.0);
    }

    /// The current scroll offset as a point.
    #[must_use]
    pub fn scroll(&self) -> Point {
        Point::new(self.scroll_left, self.scroll_top)
    }
}
