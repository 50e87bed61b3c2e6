//! Pointer/drag event model.
//!
//! The rendering layer normalizes its drag-and-drop callbacks into
//! `DragEvent`s. The payload carries the identity of what is being
//! dragged, so nothing has to be rediscovered from the view tree.

use ff_core::{Point, StepId, TemplateId};
use serde::Deserialize;

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragEventKind {
    DragStart,
    DragMove,
    DragEnd,
    Drop,
    Cancel,
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "id")]
pub enum DragPayload {
    /// A catalog template (placement gesture).
    Template(TemplateId),
    /// An already placed step (reposition gesture).
    Instance(StepId),
}

/// A drag event in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub kind: DragEventKind,
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default)]
    pub payload: Option<DragPayload>,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, x: f64, y: f64, payload: Option<DragPayload>) -> Self {
        Self {
            kind,
            client_x: x,
            client_y: y,
            payload,
        }
    }

    pub fn start_template(template: TemplateId, x: f64, y: f64) -> Self {
        Self::new(DragEventKind::DragStart, x, y, Some(DragPayload::Template(template)))
    }

    pub fn start_instance(step: StepId, x: f64, y: f64) -> Self {
        Self::new(DragEventKind::DragStart, x, y, Some(DragPayload::Instance(step)))
    }

    pub fn drag_move(x: f64, y: f64) -> Self {
        Self::new(DragEventKind::DragMove, x, y, None)
    }

    pub fn drag_end(x: f64, y: f64) -> Self {
        Self::new(DragEventKind::DragEnd, x, y, None)
    }

    pub fn drop_at(x: f64, y: f64) -> Self {
        Self::new(DragEventKind::Drop, x, y, None)
    }

    pub fn cancel() -> Self {
        Self::new(DragEventKind::Cancel, 0.0, 0.0, None)
    }

    pub fn with_payload(mut self, payload: DragPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Client position of the pointer.
    pub fn client_position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }

    /// Position relative to a canvas whose top-left sits at `origin`.
    pub fn canvas_position(&self, origin: Point) -> Point {
        Point::new(self.client_x - origin.x, self.client_y - origin.y)
    }
}
