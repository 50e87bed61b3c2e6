pub mod canvas;
pub mod catalog;
pub mod error;
pub mod export;
pub mod graph;
pub mod id;
pub mod model;
pub mod path;
pub mod snapshot;

pub use canvas::CanvasModel;
pub use catalog::StepCatalog;
pub use error::FlowError;
pub use export::{Document, export, export_at};
pub use graph::ConnectionGraph;
pub use id::{ConnectionId, StepId, TemplateId};
pub use model::*;
pub use path::{CurvePath, path_between, path_for};
pub use snapshot::Snapshot;

// Re-export the geometry type used at the API boundary
pub use kurbo::Point;
