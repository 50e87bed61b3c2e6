//! Editor session: the single owner of canvas state.
//!
//! Routes drag events, connect clicks, and keyboard actions into model
//! mutations, and records one history entry per completed gesture:
//!
//! ```text
//! DragEvent ─▶ DragController ─▶ CanvasMutation ─▶ CanvasModel / ConnectionGraph
//!                                       │
//!                                       └─ gesture complete ─▶ HistoryManager::push
//! ```
//!
//! Bad input (stale ids, self-loops, duplicate edges, history boundaries)
//! is absorbed as a no-op; the host UI may race with removals.

use crate::config::{EditorConfig, SeedKind};
use crate::connect::ConnectTool;
use crate::drag::DragController;
use crate::history::HistoryManager;
use crate::input::DragEvent;
use crate::selection::SelectionController;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use chrono::{DateTime, Utc};
use ff_core::model::{CanvasStep, Connection, WorkflowStepTemplate};
use ff_core::{
    CanvasModel, ConnectionGraph, ConnectionId, CurvePath, Document, Point, Snapshot, StepCatalog,
    StepId, TemplateId,
};

/// A single model edit.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMutation {
    PlaceStep {
        template: Box<WorkflowStepTemplate>,
        at: Point,
    },
    MoveStep {
        id: StepId,
        to: Point,
    },
    /// Cascades to incident connections and selection.
    RemoveStep {
        id: StepId,
    },
    AddConnection {
        from: StepId,
        to: StepId,
    },
    RemoveConnection {
        id: ConnectionId,
    },
}

/// Result of a dispatched keyboard action.
#[derive(Debug, Clone, Default)]
pub struct ActionOutcome {
    /// Whether the canvas state changed.
    pub changed: bool,
    /// The exported document, for `Save`.
    pub document: Option<Document>,
}

pub struct EditorSession {
    catalog: StepCatalog,
    canvas: CanvasModel,
    graph: ConnectionGraph,
    selection: SelectionController,
    drag: DragController,
    connect: ConnectTool,
    history: HistoryManager,
    config: EditorConfig,
    /// Client-space position of the canvas's top-left corner.
    canvas_origin: Point,
}

impl EditorSession {
    /// Start a session. The seed state becomes history entry 0.
    pub fn new(catalog: StepCatalog, config: EditorConfig) -> Self {
        let mut canvas = CanvasModel::new();
        let mut graph = ConnectionGraph::new();
        if config.seed == SeedKind::Demo {
            seed_demo(&catalog, &mut canvas, &mut graph);
        }
        let history = HistoryManager::new(Snapshot::capture(&canvas, &graph), config.history_depth);

        Self {
            catalog,
            canvas,
            graph,
            selection: SelectionController::new(),
            drag: DragController::new(config.revert_cancelled_reposition),
            connect: ConnectTool::new(),
            history,
            config,
            canvas_origin: Point::ZERO,
        }
    }

    // ─── Mutation core ───────────────────────────────────────────────────

    /// Apply one mutation. Returns `true` if the model changed.
    /// Does not touch history.
    pub fn apply_mutation(&mut self, mutation: CanvasMutation) -> bool {
        match mutation {
            CanvasMutation::PlaceStep { template, at } => {
                let step = self.canvas.place_step(&template, at);
                log::debug!("placed {} as {}", step.name(), step.instance_id);
                true
            }
            CanvasMutation::MoveStep { id, to } => self.canvas.update_position(id, to.x, to.y),
            CanvasMutation::RemoveStep { id } => {
                let Some(step) = self.canvas.remove_step(id) else {
                    return false;
                };
                let dropped = self.graph.remove_incident(id);
                self.selection.forget(id);
                self.connect.forget(id);
                log::debug!(
                    "removed {} ({id}) and {} connection(s)",
                    step.name(),
                    dropped.len()
                );
                true
            }
            CanvasMutation::AddConnection { from, to } => {
                self.graph.add_connection(from, to, &self.canvas).is_some()
            }
            CanvasMutation::RemoveConnection { id } => self.graph.remove_connection(id).is_some(),
        }
    }

    fn commit(&mut self, description: &str) {
        self.history.record(&self.canvas, &self.graph, description);
    }

    // ─── Drag gestures ───────────────────────────────────────────────────

    /// Tell the session where the canvas sits in client coordinates.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    pub fn canvas_origin(&self) -> Point {
        self.canvas_origin
    }

    /// Feed one drag event. Returns `true` if the canvas changed.
    pub fn handle_drag_event(&mut self, event: &DragEvent) -> bool {
        let at = event.canvas_position(self.canvas_origin);
        let response = self.drag.handle(event, at, &self.canvas, &self.catalog);

        let mut changed = false;
        for mutation in response.mutations {
            changed |= self.apply_mutation(mutation);
        }
        if let Some(description) = response.commit {
            self.commit(&description);
        }
        changed
    }

    // ─── Direct edits ────────────────────────────────────────────────────

    /// Place a template without a drag gesture.
    pub fn place_step(&mut self, template: TemplateId, at: Point) -> Option<StepId> {
        let Some(t) = self.catalog.get(template) else {
            log::warn!("place rejected: unknown template {template}");
            return None;
        };
        let description = format!("place {}", t.name);
        let id = self.canvas.place_step(t, at).instance_id;
        self.commit(&description);
        Some(id)
    }

    /// Remove a step and every connection touching it.
    pub fn remove_step(&mut self, id: StepId) -> bool {
        let Some(name) = self.canvas.get_step(id).map(|s| s.name().to_string()) else {
            log::debug!("remove on missing {id}");
            return false;
        };
        if !self.apply_mutation(CanvasMutation::RemoveStep { id }) {
            return false;
        }
        self.commit(&format!("remove {name}"));
        true
    }

    pub fn remove_selected(&mut self) -> bool {
        match self.selection.selected() {
            Some(id) => self.remove_step(id),
            None => false,
        }
    }

    /// Connect `from → to`. Rejected pairs are a no-op returning `None`.
    pub fn connect(&mut self, from: StepId, to: StepId) -> Option<ConnectionId> {
        if !self.apply_mutation(CanvasMutation::AddConnection { from, to }) {
            return None;
        }
        // New edges are appended.
        let id = self.graph.connections().last()?.connection_id;
        self.commit(&format!("connect {from} → {to}"));
        Some(id)
    }

    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        if !self.apply_mutation(CanvasMutation::RemoveConnection { id }) {
            return false;
        }
        self.commit(&format!("disconnect {id}"));
        true
    }

    // ─── Connect gesture ─────────────────────────────────────────────────

    pub fn begin_connection(&mut self, from: StepId) -> bool {
        self.connect.begin(from, &self.canvas)
    }

    /// Finish a pending connect gesture on `to`.
    pub fn complete_connection(&mut self, to: StepId) -> Option<ConnectionId> {
        let (from, to) = self.connect.complete(to)?;
        self.connect(from, to)
    }

    pub fn cancel_connection(&mut self) {
        self.connect.cancel();
    }

    pub fn pending_connection(&self) -> Option<StepId> {
        self.connect.pending()
    }

    // ─── Selection ───────────────────────────────────────────────────────

    pub fn select(&mut self, id: StepId) -> bool {
        self.selection.select(id, &self.canvas)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn hover(&mut self, id: Option<StepId>) {
        self.selection.hover(id, &self.canvas);
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.canvas, &mut self.graph) {
            Some(desc) => {
                log::debug!("undo `{desc}`");
                self.after_restore();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.canvas, &mut self.graph) {
            Some(desc) => {
                log::debug!("redo `{desc}`");
                self.after_restore();
                true
            }
            None => false,
        }
    }

    fn after_restore(&mut self) {
        self.selection.retain_existing(&self.canvas);
        if let Some(from) = self.connect.pending()
            && !self.canvas.contains(from)
        {
            self.connect.cancel();
        }
        self.drag.reset();
    }

    // ─── Export / load ───────────────────────────────────────────────────

    pub fn export(&self) -> Document {
        let doc = ff_core::export(&self.canvas, &self.graph);
        log::info!(
            "exported {} step(s), {} connection(s)",
            doc.steps.len(),
            doc.connections.len()
        );
        doc
    }

    pub fn export_at(&self, saved_at: DateTime<Utc>) -> Document {
        ff_core::export_at(&self.canvas, &self.graph, saved_at)
    }

    /// Replace the live model with `doc` and make it the new history seed.
    /// Connections that break an invariant are dropped.
    pub fn load_document(&mut self, doc: Document) {
        let Document {
            steps, connections, ..
        } = doc;
        self.canvas.replace_steps(steps);
        self.graph.replace_connections(connections, &self.canvas);
        self.selection = SelectionController::new();
        self.connect.cancel();
        self.drag.reset();
        self.history.reset(Snapshot::capture(&self.canvas, &self.graph));
        log::info!(
            "loaded {} step(s), {} connection(s)",
            self.canvas.len(),
            self.graph.len()
        );
    }

    // ─── Keyboard actions ────────────────────────────────────────────────

    /// Resolve a key combo and dispatch it. `None` if unbound.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ActionOutcome> {
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta)?;
        Some(self.dispatch_action(action))
    }

    pub fn dispatch_action(&mut self, action: ShortcutAction) -> ActionOutcome {
        log::debug!("action {}", action.name());
        match action {
            ShortcutAction::Undo => ActionOutcome {
                changed: self.undo(),
                document: None,
            },
            ShortcutAction::Redo => ActionOutcome {
                changed: self.redo(),
                document: None,
            },
            ShortcutAction::Delete => ActionOutcome {
                changed: self.remove_selected(),
                document: None,
            },
            ShortcutAction::Save => ActionOutcome {
                changed: false,
                document: Some(self.export()),
            },
            ShortcutAction::Cancel => {
                let changed = self.handle_drag_event(&DragEvent::cancel());
                self.connect.cancel();
                self.selection.clear();
                ActionOutcome {
                    changed,
                    document: None,
                }
            }
        }
    }

    // ─── Read access for rendering ───────────────────────────────────────

    pub fn steps(&self) -> &[CanvasStep] {
        self.canvas.steps()
    }

    pub fn connections(&self) -> &[Connection] {
        self.graph.connections()
    }

    pub fn path_of(&self, id: ConnectionId) -> Option<CurvePath> {
        self.graph.path_of(id, &self.canvas)
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn canvas(&self) -> &CanvasModel {
        &self.canvas
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

/// Instance ids of the demo workflow.
pub const DEMO_STEP_IDS: [StepId; 3] = [
    StepId::from_raw(1001),
    StepId::from_raw(1002),
    StepId::from_raw(1003),
];

/// Three stock steps in a row, wired `1001 → 1002 → 1003`.
fn seed_demo(catalog: &StepCatalog, canvas: &mut CanvasModel, graph: &mut ConnectionGraph) {
    let layout = [(1, 150.0), (2, 400.0), (3, 650.0)];
    for (id, (template, x)) in DEMO_STEP_IDS.into_iter().zip(layout) {
        let Some(t) = catalog.get(TemplateId::from_raw(template)) else {
            log::warn!("demo seed: catalog has no template {template}");
            continue;
        };
        canvas.insert_existing(CanvasStep {
            template: t.clone(),
            instance_id: id,
            x,
            y: 100.0,
        });
    }
    for pair in DEMO_STEP_IDS.windows(2) {
        graph.add_connection(pair[0], pair[1], canvas);
    }
}
