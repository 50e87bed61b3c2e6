//! Linear undo/redo history of canvas snapshots.
//!
//! Each completed gesture stores one full [`Snapshot`] of steps and
//! connections. Entry 0 is the session seed and is the undo floor.
//! Pushing after an undo discards the redo tail. When the stored entry
//! count exceeds the depth limit the oldest entry is dropped and the next
//! one becomes the floor.

use ff_core::{CanvasModel, ConnectionGraph, Snapshot};
use std::collections::VecDeque;

/// Default number of stored snapshots.
pub const DEFAULT_HISTORY_DEPTH: usize = 200;

#[derive(Debug, Clone)]
struct HistoryEntry {
    snapshot: Snapshot,
    description: String,
}

pub struct HistoryManager {
    entries: VecDeque<HistoryEntry>,
    /// Index of the entry matching the live model.
    index: usize,
    /// Maximum stored entries, including the floor.
    max_depth: usize,
}

impl HistoryManager {
    pub fn new(initial: Snapshot, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        let mut entries = VecDeque::with_capacity(max_depth.min(DEFAULT_HISTORY_DEPTH));
        entries.push_back(HistoryEntry {
            snapshot: initial,
            description: "initial state".to_string(),
        });
        Self {
            entries,
            index: 0,
            max_depth,
        }
    }

    /// Record the state after a completed gesture.
    pub fn push(&mut self, snapshot: Snapshot, description: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push_back(HistoryEntry {
            snapshot,
            description: description.to_string(),
        });
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
        log::debug!("history push `{description}` ({}/{})", self.index + 1, self.entries.len());
    }

    /// Convenience: capture the live model and push it.
    pub fn record(&mut self, canvas: &CanvasModel, graph: &ConnectionGraph, description: &str) {
        self.push(Snapshot::capture(canvas, graph), description);
    }

    /// Step back one entry and restore it into the live model.
    /// Returns the description of the gesture that was undone.
    pub fn undo(&mut self, canvas: &mut CanvasModel, graph: &mut ConnectionGraph) -> Option<String> {
        if self.index == 0 {
            log::debug!("undo at oldest entry");
            return None;
        }
        let undone = self.entries[self.index].description.clone();
        self.index -= 1;
        self.entries[self.index].snapshot.restore(canvas, graph);
        Some(undone)
    }

    /// Step forward one entry and restore it into the live model.
    /// Returns the description of the gesture that was redone.
    pub fn redo(&mut self, canvas: &mut CanvasModel, graph: &mut ConnectionGraph) -> Option<String> {
        if self.index + 1 >= self.entries.len() {
            log::debug!("redo at newest entry");
            return None;
        }
        self.index += 1;
        let entry = &self.entries[self.index];
        entry.snapshot.restore(canvas, graph);
        Some(entry.description.clone())
    }

    /// Forget everything and start over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        *self = Self::new(initial, self.max_depth);
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of stored entries, including the floor.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry matching the live model.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The snapshot matching the live model.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index].snapshot
    }
}
