//! Care programs and their workflows.

use serde::{Deserialize, Serialize};

use openchart_core::generate_uuid;

use crate::audit::AuditInfo;
use crate::metadata::Concept;

/// A stage pipeline within a program (e.g. treatment states for an HIV
/// program). Carried for serialization; state transitions live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramWorkflow {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<Concept>,
    #[serde(default)]
    pub retired: bool,
}

impl ProgramWorkflow {
    pub fn new(concept: Concept) -> Self {
        Self {
            uuid: generate_uuid(),
            concept: Some(concept),
            retired: false,
        }
    }

    /// Workflow display text comes from its concept.
    #[must_use]
    pub fn display(&self) -> String {
        self.concept
            .as_ref()
            .map(|c| c.display.clone())
            .unwrap_or_default()
    }
}

/// A care program patients can be enrolled in. Program is metadata: deleting
/// it means retiring it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<Concept>,
    #[serde(default)]
    pub workflows: Vec<ProgramWorkflow>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,
    pub audit: AuditInfo,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uuid: generate_uuid(),
            name: String::new(),
            description: None,
            concept: None,
            workflows: Vec::new(),
            retired: false,
            retire_reason: None,
            audit: AuditInfo::new(),
        }
    }

    /// Flags the program as retired without removing it.
    pub fn retire(&mut self, reason: impl Into<String>) {
        self.retired = true;
        self.retire_reason = Some(reason.into());
        self.audit.mark_changed();
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_display_comes_from_concept() {
        let workflow = ProgramWorkflow::new(Concept::new("c-1", "HIV Treatment"));
        assert_eq!(workflow.display(), "HIV Treatment");
    }

    #[test]
    fn test_workflow_display_empty_without_concept() {
        let mut workflow = ProgramWorkflow::new(Concept::new("c-1", "x"));
        workflow.concept = None;
        assert_eq!(workflow.display(), "");
    }

    #[test]
    fn test_retire_sets_reason() {
        let mut program = Program::new();
        program.retire("superseded");
        assert!(program.retired);
        assert_eq!(program.retire_reason.as_deref(), Some("superseded"));
        assert!(program.audit.date_changed.is_some());
    }
}
