pub mod config;
pub mod connect;
pub mod drag;
pub mod history;
pub mod input;
pub mod selection;
pub mod session;
pub mod shortcuts;

pub use config::{EditorConfig, SeedKind};
pub use drag::{DragController, DragState};
pub use history::HistoryManager;
pub use input::{DragEvent, DragEventKind, DragPayload};
pub use selection::SelectionController;
pub use session::{ActionOutcome, CanvasMutation, EditorSession};
pub use shortcuts::{ShortcutAction, ShortcutMap};
