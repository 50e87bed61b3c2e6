use ff_core::{CanvasModel, StepId};

/// The single selected step and the single hovered step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<StepId>,
    hovered: Option<StepId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if it is on the canvas. Returns whether it was selected.
    pub fn select(&mut self, id: StepId, canvas: &CanvasModel) -> bool {
        if !canvas.contains(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn hover(&mut self, id: Option<StepId>, canvas: &CanvasModel) {
        self.hovered = id.filter(|id| canvas.contains(*id));
    }

    pub fn selected(&self) -> Option<StepId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<StepId> {
        self.hovered
    }

    /// Drop any reference to a removed step.
    pub fn forget(&mut self, id: StepId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Drop references that no longer resolve (after a history restore).
    pub fn retain_existing(&mut self, canvas: &CanvasModel) {
        self.selected = self.selected.filter(|id| canvas.contains(*id));
        self.hovered = self.hovered.filter(|id| canvas.contains(*id));
    }
}
