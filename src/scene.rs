//! Scene graph: placed shapes and the arena that owns them.
//!
//! Shapes are keyed by a stable [`ShapeId`] and iterated in insertion
//! order, which doubles as draw order. Rendering is a pure projection of
//! this arena; only the engine mutates it. Shapes are serde-friendly so a
//! host can persist a whole layout as JSON.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewport::Point;

/// Unique identifier for a placed shape.
pub type ShapeId = Uuid;

/// The kind of a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A single seat; counts toward the event's seat total.
    Chair,
    /// Axis-aligned rectangle (stage, table block, dance floor).
    Rect,
    /// Circle inscribed within the bounding box.
    Circle,
    /// Free-text label, editable in place.
    Text,
    /// Annotation note, editable in place.
    Comment,
}

impl ShapeKind {
    /// Whether shapes of this kind contribute to the saved seat count.
    #[must_use]
    pub fn is_seat_unit(self) -> bool {
        matches!(self, Self::Chair)
    }
}

/// A placed shape. Position and size are in canvas units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// What the shape is.
    pub kind: ShapeKind,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Free text; meaningful for text and comment shapes only.
    #[serde(default)]
    pub content: String,
}

impl Shape {
    /// Create a shape with a fresh id and empty content.
    #[must_use]
    pub fn new(kind: ShapeKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { id: Uuid::new_v4(), kind, x, y, width, height, content: String::new() }
    }

    /// Whether a canvas-space point falls inside the bounding box.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// In-memory arena of placed shapes, preserving insertion order.
pub struct Scene {
    shapes: HashMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: HashMap::new(), order: Vec::new() }
    }

    /// Add a shape on top of the stack, returning its id.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        if self.shapes.insert(id, shape).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// All shapes in insertion (draw) order, bottom first.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Remove every shape. Individual removal is not part of the editing
    /// model; clearing the whole canvas is.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    /// Replace all shapes with a snapshot, preserving the given order.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.clear();
        for shape in shapes {
            self.insert(shape);
        }
    }

    /// Number of shapes counting toward the event's seat total.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.shapes.values().filter(|s| s.kind.is_seat_unit()).count()
    }

    /// Number of shapes currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the scene contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
