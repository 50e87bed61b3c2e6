//! Workflow data model: templates, placed steps, and connections.

use crate::id::{ConnectionId, StepId, TemplateId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

// ─── Templates ───────────────────────────────────────────────────────────

/// Behaviour class of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Trigger,
    #[default]
    Action,
    Condition,
}

/// A catalog-defined step kind. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepTemplate {
    pub template_id: TemplateId,
    pub name: String,
    pub description: String,
    /// Symbolic icon name resolved by the rendering layer.
    pub icon: String,
    pub kind: StepKind,
    pub aria_label: String,
}

impl WorkflowStepTemplate {
    pub fn new(
        template_id: TemplateId,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        kind: StepKind,
    ) -> Self {
        let name = name.into();
        let aria_label = format!("Drag to add {name} action to workflow");
        Self {
            template_id,
            name,
            description: description.into(),
            icon: icon.into(),
            kind,
            aria_label,
        }
    }
}

// ─── Placed steps ────────────────────────────────────────────────────────

/// A template instance placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasStep {
    #[serde(flatten)]
    pub template: WorkflowStepTemplate,
    pub instance_id: StepId,
    pub x: f64,
    pub y: f64,
}

impl CanvasStep {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }
}

// ─── Connections ─────────────────────────────────────────────────────────

/// A directed edge between two placed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub connection_id: ConnectionId,
    pub from_instance_id: StepId,
    pub to_instance_id: StepId,
}

impl Connection {
    /// Whether either endpoint is `step`.
    pub fn touches(&self, step: StepId) -> bool {
        self.from_instance_id == step || self.to_instance_id == step
    }
}
