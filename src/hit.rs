#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_RADIUS_PX;
use crate::scene::{Scene, Shape, ShapeId};
use crate::viewport::{Point, Viewport};

/// One of the four corner resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    /// Whether this handle moves the left edge.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// Whether this handle moves the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }
}

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(Corner),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Test what lies under `canvas_pt`, checking the selected shape's resize
/// handles before any body. The topmost (most recently placed) body wins.
#[must_use]
pub fn hit_test(
    canvas_pt: Point,
    scene: &Scene,
    viewport: &Viewport,
    selected_id: Option<ShapeId>,
) -> Option<Hit> {
    if let Some(sel) = selected_id {
        if let Some(shape) = scene.get(&sel) {
            if let Some(corner) = handle_at(canvas_pt, shape, viewport) {
                return Some(Hit { shape_id: sel, part: HitPart::ResizeHandle(corner) });
            }
        }
    }

    scene
        .shapes()
        .rev()
        .find(|shape| shape.contains(canvas_pt))
        .map(|shape| Hit { shape_id: shape.id, part: HitPart::Body })
}

/// Handle slop is a fixed screen size, so it shrinks in canvas units as
/// the zoom grows.
fn handle_at(p: Point, shape: &Shape, viewport: &Viewport) -> Option<Corner> {
    let slop = viewport.screen_dist_to_canvas(HANDLE_RADIUS_PX);
    let corners = [
        (Corner::Nw, shape.x, shape.y),
        (Corner::Ne, shape.x + shape.width, shape.y),
        (Corner::Sw, shape.x, shape.y + shape.height),
        (Corner::Se, shape.x + shape.width, shape.y + shape.height),
    ];
    corners
        .into_iter()
        .find(|(_, cx, cy)| (p.x - cx).abs() <= slop && (p.y - cy).abs() <= slop)
        .map(|(corner, _, _)| corner)
}
