//! The live set of placed steps and their positions.

use crate::id::{IdAllocator, StepId};
use crate::model::{CanvasStep, WorkflowStepTemplate};
use kurbo::Point;
use std::collections::HashMap;

/// Owns every placed [`CanvasStep`], in placement order.
///
/// Lookups go through an id → slot index so position updates during a
/// drag stay O(1). Removal is O(n) since it reindexes the tail.
#[derive(Debug, Clone, Default)]
pub struct CanvasModel {
    steps: Vec<CanvasStep>,
    index: HashMap<StepId, usize>,
    ids: IdAllocator,
}

impl CanvasModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a copy of `template` at `at` under a fresh instance id.
    pub fn place_step(&mut self, template: &WorkflowStepTemplate, at: Point) -> &CanvasStep {
        let id = StepId::from_raw(self.ids.allocate());
        let slot = self.steps.len();
        self.steps.push(CanvasStep {
            template: template.clone(),
            instance_id: id,
            x: at.x,
            y: at.y,
        });
        self.index.insert(id, slot);
        &self.steps[slot]
    }

    /// Insert a step that already carries an id (seed or loaded document).
    /// Returns `false` when the id is taken or out of range.
    pub fn insert_existing(&mut self, step: CanvasStep) -> bool {
        if self.index.contains_key(&step.instance_id) {
            log::warn!("dropping step with duplicate instance id {}", step.instance_id);
            return false;
        }
        if !self.ids.reserve(step.instance_id.raw()) {
            log::warn!("dropping step with out-of-range instance id {}", step.instance_id);
            return false;
        }
        self.index.insert(step.instance_id, self.steps.len());
        self.steps.push(step);
        true
    }

    /// Remove a step. Does not touch connections; callers cascade.
    pub fn remove_step(&mut self, id: StepId) -> Option<CanvasStep> {
        let slot = self.index.remove(&id)?;
        let removed = self.steps.remove(slot);
        for (i, step) in self.steps.iter().enumerate().skip(slot) {
            self.index.insert(step.instance_id, i);
        }
        Some(removed)
    }

    /// Overwrite a step's position. Returns `false` if the step is gone.
    pub fn update_position(&mut self, id: StepId, x: f64, y: f64) -> bool {
        let Some(&slot) = self.index.get(&id) else {
            return false;
        };
        let step = &mut self.steps[slot];
        step.x = x;
        step.y = y;
        true
    }

    pub fn get_step(&self, id: StepId) -> Option<&CanvasStep> {
        self.index.get(&id).map(|&slot| &self.steps[slot])
    }

    pub fn contains(&self, id: StepId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn steps(&self) -> &[CanvasStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replace every step (history restore, document load).
    ///
    /// The id allocator is only ever advanced, so ids handed out after a
    /// restore never collide with ids that existed before it.
    pub fn replace_steps(&mut self, steps: Vec<CanvasStep>) {
        self.index.clear();
        self.steps = Vec::with_capacity(steps.len());
        for step in steps {
            self.insert_existing(step);
        }
    }
}
