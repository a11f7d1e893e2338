// ABOUTME: Reducer store that owns the registration draft
// Every change to the draft arrives as a DraftAction and bumps the revision counter

use tracing::debug;

use super::draft::RegistrationDraft;
use super::patch::DraftAction;

/// Pure reducer: the new draft after applying `action` to `draft`
pub fn reduce(draft: &RegistrationDraft, action: DraftAction) -> RegistrationDraft {
    let mut next = draft.clone();
    action.apply_to(&mut next);
    next
}

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: RegistrationDraft,
    revision: u64,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: DraftAction) {
        let section = action.section();
        action.apply_to(&mut self.draft);
        self.revision += 1;
        debug!(section = %section, revision = self.revision, "Draft patched");
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Number of actions applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
