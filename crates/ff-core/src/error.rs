use crate::id::TemplateId;
use thiserror::Error;

/// Errors raised at the engine's serialization boundary.
///
/// Editing operations themselves never fail; they are no-ops on bad input.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template {0} is defined more than once in the catalog")]
    DuplicateTemplate(TemplateId),
}
