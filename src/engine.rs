//! Core editor: interprets pointer input and mutates the scene.
//!
//! All interaction flows through [`Editor::on_pointer_down`],
//! [`Editor::on_pointer_move`] and [`Editor::on_pointer_up`]. The active
//! gesture is a [`Gesture`] value; pointer-up resets it to `Idle` on every
//! path, so a gesture can never leak past its release even when the
//! pointer comes up outside the canvas bounds.
//!
//! Snapping discipline: create and move operations land on the 25-unit
//! grid every frame. Resize deltas are divided by the scale but never
//! snapped, so resized edges may rest off-grid. That asymmetry is
//! intentional — resize stays precise while placement stays tidy.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::consts::{
    BULK_COLS, BULK_GAP, BULK_ITEM_SIZE, BULK_START_X, BULK_START_Y, CHAIR_SIZE, MIN_SHAPE_SIZE,
    TEXT_DEFAULT_HEIGHT, TEXT_DEFAULT_WIDTH,
};
use crate::hit::{self, Corner, HitPart};
use crate::input::{Button, Gesture, Tool, UiState, WheelDelta};
use crate::scene::{Scene, Shape, ShapeId, ShapeKind};
use crate::viewport::{snap_point, Point, Viewport};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A shape was committed into the scene.
    ShapeCreated(ShapeId),
    /// A shape's position, size or content changed and is final.
    ShapeUpdated(ShapeId),
    /// The selection moved (or cleared).
    SelectionChanged(Option<ShapeId>),
    /// The container scroll offset changed.
    ScrollChanged,
    /// The host should switch the pointer cursor.
    SetCursor(&'static str),
    /// The scene must be redrawn.
    RenderNeeded,
}

/// Core editor state: scene, viewport, UI state and the active gesture.
///
/// Owns no host resources; one instance per mounted seat-planner view.
pub struct Editor {
    pub scene: Scene,
    pub viewport: Viewport,
    pub ui: UiState,
    pub gesture: Gesture,
    /// Canvas bounding origin in screen coordinates, supplied by the host.
    pub canvas_origin: Point,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            gesture: Gesture::Idle,
            canvas_origin: Point::new(0.0, 0.0),
        }
    }
}

impl Editor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Host wiring ---

    /// Record where the canvas sits in screen space.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    /// Arm a tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Flip grid overlay visibility, returning the new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.ui.show_grid = !self.ui.show_grid;
        self.ui.show_grid
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.scene.get(id)
    }

    /// Number of placed seat units.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.scene.seat_count()
    }

    fn to_canvas(&self, screen: Point) -> Point {
        self.viewport.to_canvas(screen, self.canvas_origin)
    }

    // --- Zoom ---

    /// Step the zoom in by one button increment.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom_in();
        vec![Action::RenderNeeded]
    }

    /// Step the zoom out by one button increment.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom_out();
        vec![Action::RenderNeeded]
    }

    /// Wheel zoom over the canvas surface. The host must suppress the
    /// default scroll while the pointer is over the canvas.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.viewport.wheel_zoom(delta.dy);
        vec![Action::RenderNeeded]
    }

    // --- Pointer events ---

    /// Pointer-down: begins at most one gesture, or stamps a shape.
    ///
    /// A pointer-down while another gesture is active is ignored, so a
    /// drag can never double as a click-to-create.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if !matches!(self.gesture, Gesture::Idle) {
            return Vec::new();
        }

        if button == Button::Middle {
            self.gesture = Gesture::Panning {
                start_screen: screen,
                start_scroll: self.viewport.scroll(),
            };
            return vec![Action::SetCursor("grabbing")];
        }

        if button != Button::Primary {
            return Vec::new();
        }

        let canvas_pt = self.to_canvas(screen);

        // Shapes win over tools: grabbing a body or handle always drags
        // or resizes, regardless of the armed tool.
        if let Some(hit) = hit::hit_test(canvas_pt, &self.scene, &self.viewport, self.ui.selected_id)
        {
            return match hit.part {
                HitPart::ResizeHandle(corner) => self.begin_resize(hit.shape_id, corner, canvas_pt),
                HitPart::Body => self.begin_drag(hit.shape_id, canvas_pt),
            };
        }

        let tool = self.ui.tool;
        if tool.is_draw() {
            self.begin_draw(tool, canvas_pt)
        } else if tool.is_stamp() {
            self.stamp(tool, canvas_pt)
        } else {
            self.deselect()
        }
    }

    /// Pointer motion: advances whichever gesture is active.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.gesture {
            Gesture::Idle => Vec::new(),
            Gesture::Panning { start_screen, start_scroll } => {
                let delta = Point::new(screen.x - start_screen.x, screen.y - start_screen.y);
                self.viewport.pan_to(start_scroll, delta);
                vec![Action::ScrollChanged]
            }
            Gesture::Drawing { id, anchor } => {
                let cur = snap_point(self.to_canvas(screen));
                let Some(shape) = self.scene.get_mut(&id) else {
                    return Vec::new();
                };
                shape.x = anchor.x.min(cur.x);
                shape.y = anchor.y.min(cur.y);
                shape.width = (cur.x - anchor.x).abs();
                shape.height = (cur.y - anchor.y).abs();
                vec![Action::RenderNeeded]
            }
            Gesture::Dragging { id, grab_offset } => {
                let p = self.to_canvas(screen);
                let pos = snap_point(Point::new(p.x - grab_offset.x, p.y - grab_offset.y));
                let Some(shape) = self.scene.get_mut(&id) else {
                    return Vec::new();
                };
                shape.x = pos.x;
                shape.y = pos.y;
                vec![Action::RenderNeeded]
            }
            Gesture::Resizing { id, corner, start_canvas, orig_x, orig_y, orig_w, orig_h } => {
                let cur = self.to_canvas(screen);
                // Scale-corrected but unsnapped, unlike move/create.
                let dx = cur.x - start_canvas.x;
                let dy = cur.y - start_canvas.y;
                let Some(shape) = self.scene.get_mut(&id) else {
                    return Vec::new();
                };
                if corner.is_left() {
                    let width = (orig_w - dx).max(MIN_SHAPE_SIZE);
                    shape.x = orig_x + orig_w - width;
                    shape.width = width;
                } else {
                    shape.width = (orig_w + dx).max(MIN_SHAPE_SIZE);
                }
                if corner.is_top() {
                    let height = (orig_h - dy).max(MIN_SHAPE_SIZE);
                    shape.y = orig_y + orig_h - height;
                    shape.height = height;
                } else {
                    shape.height = (orig_h + dy).max(MIN_SHAPE_SIZE);
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer-up: releases the active gesture unconditionally — any
    /// button, any position, including outside the canvas.
    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button) -> Vec<Action> {
        let finished = std::mem::take(&mut self.gesture);
        match finished {
            Gesture::Idle => Vec::new(),
            Gesture::Panning { .. } => vec![Action::SetCursor("default")],
            Gesture::Drawing { id, .. } => {
                debug!(shape = %id, "draw committed");
                vec![Action::ShapeCreated(id), Action::RenderNeeded]
            }
            Gesture::Dragging { id, .. } => {
                debug!(shape = %id, "drag committed");
                vec![Action::ShapeUpdated(id)]
            }
            Gesture::Resizing { id, .. } => {
                debug!(shape = %id, "resize committed");
                vec![Action::ShapeUpdated(id)]
            }
        }
    }

    // --- Gesture entry ---

    fn begin_drag(&mut self, id: ShapeId, canvas_pt: Point) -> Vec<Action> {
        let Some(shape) = self.scene.get(&id) else {
            return Vec::new();
        };
        let grab_offset = Point::new(canvas_pt.x - shape.x, canvas_pt.y - shape.y);
        self.gesture = Gesture::Dragging { id, grab_offset };
        self.select(id)
    }

    fn begin_resize(&mut self, id: ShapeId, corner: Corner, canvas_pt: Point) -> Vec<Action> {
        let Some(shape) = self.scene.get(&id) else {
            return Vec::new();
        };
        self.gesture = Gesture::Resizing {
            id,
            corner,
            start_canvas: canvas_pt,
            orig_x: shape.x,
            orig_y: shape.y,
            orig_w: shape.width,
            orig_h: shape.height,
        };
        Vec::new()
    }

    fn begin_draw(&mut self, tool: Tool, canvas_pt: Point) -> Vec<Action> {
        let Some(kind) = tool.shape_kind() else {
            return Vec::new();
        };
        let anchor = snap_point(canvas_pt);
        let id = self.scene.insert(Shape::new(kind, anchor.x, anchor.y, 0.0, 0.0));
        self.gesture = Gesture::Drawing { id, anchor };
        let mut actions = self.select(id);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Chair/text/comment: a single click commits a fixed- or default-size
    /// shape at the snapped point and stays in `Idle`.
    fn stamp(&mut self, tool: Tool, canvas_pt: Point) -> Vec<Action> {
        let Some(kind) = tool.shape_kind() else {
            return Vec::new();
        };
        let p = snap_point(canvas_pt);
        let mut shape = match kind {
            ShapeKind::Chair => Shape::new(kind, p.x, p.y, CHAIR_SIZE, CHAIR_SIZE),
            _ => Shape::new(kind, p.x, p.y, TEXT_DEFAULT_WIDTH, TEXT_DEFAULT_HEIGHT),
        };
        shape.content = match kind {
            ShapeKind::Text => "Text".to_owned(),
            ShapeKind::Comment => "Comment".to_owned(),
            _ => String::new(),
        };
        let id = self.scene.insert(shape);
        let mut actions = vec![Action::ShapeCreated(id)];
        actions.extend(self.select(id));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Selection ---

    fn select(&mut self, id: ShapeId) -> Vec<Action> {
        if self.ui.selected_id == Some(id) {
            return vec![Action::RenderNeeded];
        }
        self.ui.selected_id = Some(id);
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    fn deselect(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_some() {
            vec![Action::SelectionChanged(None), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Editing ---

    /// Commit in-place text for a text or comment shape. Other kinds (and
    /// unknown ids) are a no-op.
    pub fn set_text(&mut self, id: &ShapeId, content: String) -> Vec<Action> {
        let Some(shape) = self.scene.get_mut(id) else {
            return Vec::new();
        };
        if !matches!(shape.kind, ShapeKind::Text | ShapeKind::Comment) {
            return Vec::new();
        }
        shape.content = content;
        vec![Action::ShapeUpdated(*id), Action::RenderNeeded]
    }

    /// Place `quantity` shapes of one kind in a left-to-right,
    /// top-to-bottom grid: 10 per row, chair-size for chairs and
    /// table-size for everything else, with a fixed gap. Non-positive
    /// quantities are a no-op. Placed shapes behave like any other.
    pub fn bulk_add(&mut self, kind: ShapeKind, quantity: i64) -> Vec<Action> {
        if quantity <= 0 {
            return Vec::new();
        }
        let item_size = if kind == ShapeKind::Chair { CHAIR_SIZE } else { BULK_ITEM_SIZE };
        let pitch = item_size + BULK_GAP;
        let mut actions = Vec::new();
        for i in 0..usize::try_from(quantity).unwrap_or(usize::MAX) {
            let col = i % BULK_COLS;
            let row = i / BULK_COLS;
            #[allow(clippy::cast_precision_loss, reason = "bulk grid indices are small")]
            let (x, y) = (
                BULK_START_X + col as f64 * pitch,
                BULK_START_Y + row as f64 * pitch,
            );
            let id = self.scene.insert(Shape::new(kind, x, y, item_size, item_size));
            actions.push(Action::ShapeCreated(id));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove every shape and drop the selection.
    pub fn clear(&mut self) -> Vec<Action> {
        self.scene.clear();
        self.gesture = Gesture::Idle;
        self.ui.selected_id = None;
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }
}
