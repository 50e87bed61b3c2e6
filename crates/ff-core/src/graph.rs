//! Directed connections between placed steps.

use crate::canvas::CanvasModel;
use crate::id::{ConnectionId, IdAllocator, StepId};
use crate::model::Connection;
use crate::path::{CurvePath, path_between};
use smallvec::SmallVec;

/// Owns every [`Connection`], in creation order.
///
/// Invariants: no self-loops, at most one edge per ordered `(from, to)`
/// pair, and both endpoints exist in the paired [`CanvasModel`].
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
    ids: IdAllocator,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `from → to`. Returns `None` without mutating when the edge would
    /// be a self-loop, a duplicate, or reference a step not on `canvas`.
    pub fn add_connection(
        &mut self,
        from: StepId,
        to: StepId,
        canvas: &CanvasModel,
    ) -> Option<&Connection> {
        if from == to {
            log::debug!("rejecting self-loop on {from}");
            return None;
        }
        if !canvas.contains(from) || !canvas.contains(to) {
            log::warn!("cannot connect {from} → {to}: endpoint missing");
            return None;
        }
        if self.contains_edge(from, to) {
            log::debug!("connection {from} → {to} already exists");
            return None;
        }

        let conn = Connection {
            connection_id: ConnectionId::from_raw(self.ids.allocate()),
            from_instance_id: from,
            to_instance_id: to,
        };
        self.connections.push(conn);
        self.connections.last()
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let pos = self.connections.iter().position(|c| c.connection_id == id)?;
        Some(self.connections.remove(pos))
    }

    /// Remove every edge with `step` at either end, preserving the order of
    /// the rest. Returns the removed edges.
    pub fn remove_incident(&mut self, step: StepId) -> SmallVec<[Connection; 2]> {
        let mut removed = SmallVec::new();
        self.connections.retain(|c| {
            if c.touches(step) {
                removed.push(*c);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn contains_edge(&self, from: StepId, to: StepId) -> bool {
        self.connections
            .iter()
            .any(|c| c.from_instance_id == from && c.to_instance_id == to)
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.connection_id == id)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn outgoing(&self, step: StepId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |c| c.from_instance_id == step)
    }

    pub fn incoming(&self, step: StepId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |c| c.to_instance_id == step)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Curve for a stored connection, or `None` if it or an endpoint is gone.
    pub fn path_of(&self, id: ConnectionId, canvas: &CanvasModel) -> Option<CurvePath> {
        let conn = self.get(id)?;
        path_between(
            canvas.get_step(conn.from_instance_id),
            canvas.get_step(conn.to_instance_id),
        )
    }

    /// Replace every connection (history restore, document load).
    ///
    /// Edges that break an invariant against `canvas` are dropped.
    pub fn replace_connections(&mut self, connections: Vec<Connection>, canvas: &CanvasModel) {
        self.connections = Vec::with_capacity(connections.len());
        for conn in connections {
            let from = conn.from_instance_id;
            let to = conn.to_instance_id;
            if from == to
                || !canvas.contains(from)
                || !canvas.contains(to)
                || self.contains_edge(from, to)
                || self.get(conn.connection_id).is_some()
            {
                log::warn!("dropping invalid connection {}", conn.connection_id);
                continue;
            }
            if !self.ids.reserve(conn.connection_id.raw()) {
                log::warn!("dropping connection with out-of-range id {}", conn.connection_id);
                continue;
            }
            self.connections.push(conn);
        }
    }
}
