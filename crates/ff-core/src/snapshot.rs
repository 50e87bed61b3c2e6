use crate::canvas::CanvasModel;
use crate::graph::ConnectionGraph;
use crate::model::{CanvasStep, Connection};

/// An owned copy of the full canvas state at one point in time.
///
/// Capture and restore both clone, so a stored snapshot never shares
/// structure with the live model in either direction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    steps: Vec<CanvasStep>,
    connections: Vec<Connection>,
}

impl Snapshot {
    pub fn capture(canvas: &CanvasModel, graph: &ConnectionGraph) -> Self {
        Self {
            steps: canvas.steps().to_vec(),
            connections: graph.connections().to_vec(),
        }
    }

    /// Overwrite the live model with a copy of this snapshot.
    pub fn restore(&self, canvas: &mut CanvasModel, graph: &mut ConnectionGraph) {
        canvas.replace_steps(self.steps.clone());
        graph.replace_connections(self.connections.clone(), canvas);
    }

    pub fn steps(&self) -> &[CanvasStep] {
        &self.steps
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}
