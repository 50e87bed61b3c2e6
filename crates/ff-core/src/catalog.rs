//! Read-only catalog of step templates.

use crate::error::FlowError;
use crate::id::TemplateId;
use crate::model::{StepKind, WorkflowStepTemplate};
use std::collections::HashSet;

/// The templates a user can drag onto the canvas.
#[derive(Debug, Clone, Default)]
pub struct StepCatalog {
    templates: Vec<WorkflowStepTemplate>,
}

impl StepCatalog {
    /// Build a catalog, rejecting duplicate template ids.
    pub fn new(templates: Vec<WorkflowStepTemplate>) -> Result<Self, FlowError> {
        let mut seen = HashSet::with_capacity(templates.len());
        for t in &templates {
            if !seen.insert(t.template_id) {
                return Err(FlowError::DuplicateTemplate(t.template_id));
            }
        }
        Ok(Self { templates })
    }

    /// Parse a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        let templates: Vec<WorkflowStepTemplate> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    /// The stock templates shipped with the editor.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                WorkflowStepTemplate::new(
                    TemplateId::from_raw(1),
                    "Send Email",
                    "Send email notifications to recipients",
                    "envelope",
                    StepKind::Action,
                ),
                WorkflowStepTemplate::new(
                    TemplateId::from_raw(2),
                    "Upload File",
                    "Upload files to cloud storage or servers",
                    "upload",
                    StepKind::Action,
                ),
                WorkflowStepTemplate::new(
                    TemplateId::from_raw(3),
                    "Post to Slack",
                    "Send messages to Slack channels or users",
                    "comment",
                    StepKind::Action,
                ),
            ],
        }
    }

    pub fn templates(&self) -> &[WorkflowStepTemplate] {
        &self.templates
    }

    pub fn get(&self, id: TemplateId) -> Option<&WorkflowStepTemplate> {
        self.templates.iter().find(|t| t.template_id == id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_actions() {
        let catalog = StepCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        let slack = catalog.get(TemplateId::from_raw(3)).unwrap();
        assert_eq!(slack.name, "Post to Slack");
        assert_eq!(slack.icon, "comment");
        assert!(catalog.templates().iter().all(|t| t.kind == StepKind::Action));
    }

    #[test]
    fn unknown_template_is_absent() {
        assert!(StepCatalog::builtin().get(TemplateId::from_raw(99)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut templates = StepCatalog::builtin().templates().to_vec();
        templates.push(templates[0].clone());
        let err = StepCatalog::new(templates).unwrap_err();
        assert!(matches!(err, FlowError::DuplicateTemplate(id) if id.raw() == 1));
    }

    #[test]
    fn parses_from_json() {
        let json = r#"[
            {"templateId": 10, "name": "Wait", "description": "Pause the run",
             "icon": "clock", "kind": "trigger", "ariaLabel": "Drag to add Wait"}
        ]"#;
        let catalog = StepCatalog::from_json(json).unwrap();
        let wait = catalog.get(TemplateId::from_raw(10)).unwrap();
        assert_eq!(wait.kind, StepKind::Trigger);
        assert_eq!(wait.aria_label, "Drag to add Wait");

        assert!(matches!(
            StepCatalog::from_json("{not json"),
            Err(FlowError::Json(_))
        ));
    }
}
