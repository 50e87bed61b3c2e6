//! Drag state machine.
//!
//! Turns a stream of [`DragEvent`]s into [`CanvasMutation`]s. Two gestures
//! are recognized:
//!
//! | Gesture | Starts from | Moves | Ends with |
//! |---------|-------------|-------|-----------|
//! | **Place** | catalog template | — (preview only) | `drop` places the step |
//! | **Reposition** | placed step | live `MoveStep` per move | `dragEnd` commits |
//!
//! The controller never mutates the model itself. A completed gesture is
//! reported through [`DragResponse::commit`] so the caller can record
//! exactly one history entry for it, however many moves it contained.

use crate::input::{DragEvent, DragEventKind, DragPayload};
use crate::session::CanvasMutation;
use ff_core::model::WorkflowStepTemplate;
use ff_core::{CanvasModel, Point, StepCatalog, StepId};
use smallvec::{SmallVec, smallvec};

/// Where the controller is within a gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A template is being dragged out of the catalog.
    PendingPlace { template: Box<WorkflowStepTemplate> },
    /// A placed step is being moved; `start` is where it was picked up.
    Repositioning { step: StepId, start: Point },
}

/// Mutations to apply for one event, plus an optional gesture commit.
#[derive(Debug, Clone, Default)]
pub struct DragResponse {
    pub mutations: SmallVec<[CanvasMutation; 1]>,
    /// Description of a gesture that just completed.
    pub commit: Option<String>,
}

impl DragResponse {
    fn none() -> Self {
        Self::default()
    }

    fn apply(mutation: CanvasMutation) -> Self {
        Self {
            mutations: smallvec![mutation],
            commit: None,
        }
    }

    fn committed(mut self, description: String) -> Self {
        self.commit = Some(description);
        self
    }

    fn extend(&mut self, other: DragResponse) {
        self.mutations.extend(other.mutations);
        if other.commit.is_some() {
            self.commit = other.commit;
        }
    }
}

pub struct DragController {
    state: DragState,
    /// Snap a cancelled reposition back to where it started.
    revert_on_cancel: bool,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DragController {
    pub fn new(revert_on_cancel: bool) -> Self {
        Self {
            state: DragState::Idle,
            revert_on_cancel,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// The step under a reposition gesture, if any.
    pub fn dragged_step(&self) -> Option<StepId> {
        match self.state {
            DragState::Repositioning { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Drop any in-flight gesture without producing mutations.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Handle one event. `at` is the pointer in canvas coordinates.
    pub fn handle(
        &mut self,
        event: &DragEvent,
        at: Point,
        canvas: &CanvasModel,
        catalog: &StepCatalog,
    ) -> DragResponse {
        match event.kind {
            DragEventKind::DragStart => {
                let mut response = DragResponse::none();
                if !self.is_idle() {
                    log::debug!("drag start while {:?}; abandoning gesture", self.state);
                    response.extend(self.cancel(canvas));
                }
                self.begin(event.payload, canvas, catalog);
                response
            }
            DragEventKind::DragMove => match self.state {
                DragState::Repositioning { step, .. } if canvas.contains(step) => {
                    DragResponse::apply(CanvasMutation::MoveStep { id: step, to: at })
                }
                _ => DragResponse::none(),
            },
            DragEventKind::DragEnd => match std::mem::take(&mut self.state) {
                DragState::Repositioning { step, .. } => Self::finish_reposition(step, canvas),
                DragState::PendingPlace { template } => {
                    log::debug!("{} released outside the canvas", template.name);
                    DragResponse::none()
                }
                DragState::Idle => DragResponse::none(),
            },
            DragEventKind::Drop => match std::mem::take(&mut self.state) {
                DragState::PendingPlace { template } => Self::place(template, at),
                DragState::Repositioning { step, .. } => Self::finish_reposition(step, canvas),
                // Drops may arrive without a tracked start; trust the payload.
                DragState::Idle => match event.payload {
                    Some(DragPayload::Template(id)) => match catalog.get(id) {
                        Some(template) => Self::place(Box::new(template.clone()), at),
                        None => {
                            log::warn!("drop rejected: unknown template {id}");
                            DragResponse::none()
                        }
                    },
                    _ => DragResponse::none(),
                },
            },
            DragEventKind::Cancel => self.cancel(canvas),
        }
    }

    fn begin(&mut self, payload: Option<DragPayload>, canvas: &CanvasModel, catalog: &StepCatalog) {
        self.state = match payload {
            Some(DragPayload::Template(id)) => match catalog.get(id) {
                Some(template) => DragState::PendingPlace {
                    template: Box::new(template.clone()),
                },
                None => {
                    log::warn!("drag start rejected: unknown template {id}");
                    DragState::Idle
                }
            },
            Some(DragPayload::Instance(step)) => match canvas.get_step(step) {
                Some(s) => DragState::Repositioning {
                    step,
                    start: s.position(),
                },
                None => {
                    log::debug!("drag start on missing {step}");
                    DragState::Idle
                }
            },
            None => {
                log::warn!("drag start without payload");
                DragState::Idle
            }
        };
        log::debug!("drag state → {:?}", self.state);
    }

    fn cancel(&mut self, canvas: &CanvasModel) -> DragResponse {
        match std::mem::take(&mut self.state) {
            DragState::Repositioning { step, start } if self.revert_on_cancel => {
                if canvas.contains(step) {
                    DragResponse::apply(CanvasMutation::MoveStep { id: step, to: start })
                } else {
                    DragResponse::none()
                }
            }
            _ => DragResponse::none(),
        }
    }

    fn place(template: Box<WorkflowStepTemplate>, at: Point) -> DragResponse {
        let description = format!("place {}", template.name);
        DragResponse::apply(CanvasMutation::PlaceStep { template, at }).committed(description)
    }

    fn finish_reposition(step: StepId, canvas: &CanvasModel) -> DragResponse {
        match canvas.get_step(step) {
            Some(s) => DragResponse::none().committed(format!("move {}", s.name())),
            None => {
                log::debug!("drag end on removed {step}");
                DragResponse::none()
            }
        }
    }
}
