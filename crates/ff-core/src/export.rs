//! Exportable workflow document.
//!
//! Export is a pure transform of the live model. Writing the document to
//! disk or offering it as a download is left to the caller.

use crate::canvas::CanvasModel;
use crate::error::FlowError;
use crate::graph::ConnectionGraph;
use crate::model::{CanvasStep, Connection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved workflow: every placed step, every connection, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub steps: Vec<CanvasStep>,
    pub connections: Vec<Connection>,
    /// RFC 3339 / ISO-8601 timestamp.
    pub saved_at: DateTime<Utc>,
}

impl Document {
    pub fn to_json_pretty(&self) -> Result<String, FlowError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Export the current state, stamped with the current time.
pub fn export(canvas: &CanvasModel, graph: &ConnectionGraph) -> Document {
    export_at(canvas, graph, Utc::now())
}

/// Export the current state with an explicit timestamp.
pub fn export_at(
    canvas: &CanvasModel,
    graph: &ConnectionGraph,
    saved_at: DateTime<Utc>,
) -> Document {
    Document {
        steps: canvas.steps().to_vec(),
        connections: graph.connections().to_vec(),
        saved_at,
    }
}
