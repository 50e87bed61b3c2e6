//! Two-click connect gesture: pick a source step, then a target.

use ff_core::{CanvasModel, StepId};

#[derive(Debug, Default)]
pub struct ConnectTool {
    from: Option<StepId>,
}

impl ConnectTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the tool with a source step. Ignored if the step is gone.
    pub fn begin(&mut self, from: StepId, canvas: &CanvasModel) -> bool {
        if !canvas.contains(from) {
            log::debug!("connect from missing {from}");
            return false;
        }
        self.from = Some(from);
        true
    }

    /// Finish the gesture on `to`. Returns the pair to connect, if armed.
    /// The tool is disarmed either way.
    pub fn complete(&mut self, to: StepId) -> Option<(StepId, StepId)> {
        self.from.take().map(|from| (from, to))
    }

    pub fn cancel(&mut self) {
        self.from = None;
    }

    pub fn pending(&self) -> Option<StepId> {
        self.from
    }

    /// Disarm if the pending source was `step`.
    pub fn forget(&mut self, step: StepId) {
        if self.from == Some(step) {
            self.from = None;
        }
    }
}
