//! Replay script format.

use ff_core::{ConnectionId, Document, Point, StepId, TemplateId};
use ff_editor::{DragEvent, EditorSession};
use serde::Deserialize;

/// One scripted interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ScriptEntry {
    /// A raw drag event (`kind`, `clientX`, `clientY`, `payload`).
    Drag(DragEvent),
    /// Move the canvas's client-space origin.
    Origin { x: f64, y: f64 },
    Place { template: TemplateId, x: f64, y: f64 },
    Connect { from: StepId, to: StepId },
    Disconnect { id: ConnectionId },
    Select { id: StepId },
    Hover { id: Option<StepId> },
    Remove { id: StepId },
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
    Undo,
    Redo,
}

pub fn parse(text: &str) -> serde_json::Result<Vec<ScriptEntry>> {
    serde_json::from_str(text)
}

/// Run every entry. Returns the last document produced by a save key.
pub fn replay(session: &mut EditorSession, entries: &[ScriptEntry]) -> Option<Document> {
    let mut saved = None;
    for entry in entries {
        log::debug!("replay {entry:?}");
        match entry {
            ScriptEntry::Drag(event) => {
                session.handle_drag_event(event);
            }
            ScriptEntry::Origin { x, y } => session.set_canvas_origin(Point::new(*x, *y)),
            ScriptEntry::Place { template, x, y } => {
                session.place_step(*template, Point::new(*x, *y));
            }
            ScriptEntry::Connect { from, to } => {
                session.connect(*from, *to);
            }
            ScriptEntry::Disconnect { id } => {
                session.disconnect(*id);
            }
            ScriptEntry::Select { id } => {
                session.select(*id);
            }
            ScriptEntry::Hover { id } => session.hover(*id),
            ScriptEntry::Remove { id } => {
                session.remove_step(*id);
            }
            ScriptEntry::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => {
                if let Some(outcome) = session.handle_key(key, *ctrl, *shift, *alt, *meta)
                    && outcome.document.is_some()
                {
                    saved = outcome.document;
                }
            }
            ScriptEntry::Undo => {
                session.undo();
            }
            ScriptEntry::Redo => {
                session.redo();
            }
        }
    }
    saved
}
