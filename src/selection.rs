//! Selection state: the two current classifications and the unsaved draft.
//!
//! Lives for the process only. Every fresh start begins at
//! Stabilization / Observer with an empty draft.

use crate::model::{HumanRole, ObjectState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    object_state: ObjectState,
    human_role: HumanRole,
    draft: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_state(&self) -> ObjectState {
        self.object_state
    }

    pub fn human_role(&self) -> HumanRole {
        self.human_role
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_object_state(&mut self, value: ObjectState) {
        self.object_state = value;
    }

    pub fn set_human_role(&mut self, value: HumanRole) {
        self.human_role = value;
    }

    /// Replaces the draft as-is. Trimming happens only when it is submitted.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn reset_draft(&mut self) {
        self.draft.clear();
    }

    /// Whether the draft would be accepted on submit.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}
