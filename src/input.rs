//! Input model: tools, mouse buttons, and the gesture state machine.
//!
//! `Tool` captures what a click or drag produces. `UiState` is the
//! persistent state the renderer reads. `Gesture` is the active pointer
//! gesture tracked between pointer-down and pointer-up, carrying the
//! context needed to compute deltas each motion frame; exactly one
//! gesture can be in progress at a time, by construction.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::hit::Corner;
use crate::scene::{ShapeId, ShapeKind};
use crate::viewport::Point;

/// Which tool is currently armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Stamp a single chair.
    Chair,
    /// Drag out a rectangle.
    Rect,
    /// Drag out a circle.
    Circle,
    /// Stamp an editable text label.
    Text,
    /// Stamp an editable comment note.
    Comment,
}

impl Tool {
    /// Whether this tool creates shapes by dragging out a box.
    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, Self::Rect | Self::Circle)
    }

    /// Whether this tool stamps a fixed/default-size shape on click.
    #[must_use]
    pub fn is_stamp(self) -> bool {
        matches!(self, Self::Chair | Self::Text | Self::Comment)
    }

    /// The shape kind this tool produces, if any.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Chair => Some(ShapeKind::Chair),
            Self::Rect => Some(ShapeKind::Rect),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Text => Some(ShapeKind::Text),
            Self::Comment => Some(ShapeKind::Comment),
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click); pans the canvas.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Wheel / trackpad scroll delta in pixels.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    /// Positive = wheel-down.
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently armed tool.
    pub tool: Tool,
    /// The id of the currently selected shape, if any. At most one shape
    /// is ever selected.
    pub selected_id: Option<ShapeId>,
    /// Grid overlay visibility; display-only, snapping is unaffected.
    pub show_grid: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: Tool::default(), selected_id: None, show_grid: true }
    }
}

/// The active gesture. Entry into a new gesture is only possible from
/// `Idle`, so panning, drawing, dragging and resizing are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Middle-button drag scrolling the container.
    Panning {
        /// Screen position at gesture start, for the pointer delta.
        start_screen: Point,
        /// Container scroll offset at gesture start.
        start_scroll: Point,
    },
    /// Dragging out a provisional rect/circle from a snapped anchor.
    Drawing {
        /// Id of the provisional shape being sized.
        id: ShapeId,
        /// Snapped canvas-space corner where the drag started.
        anchor: Point,
    },
    /// Moving a shape across the canvas.
    Dragging {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Canvas-space offset from the shape's top-left to the grab point.
        grab_offset: Point,
    },
    /// Resizing a shape from one of its four corner handles.
    Resizing {
        /// Id of the shape being resized.
        id: ShapeId,
        /// Which corner handle is being dragged.
        corner: Corner,
        /// Canvas-space pointer position at gesture start.
        start_canvas: Point,
        /// Shape x at gesture start.
        orig_x: f64,
        /// Shape y at gesture start.
        orig_y: f64,
        /// Shape width at gesture start.
        orig_w: f64,
        /// Shape height at gesture start.
        orig_h: f64,
    },
}
