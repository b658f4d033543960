//! A journaling session: the log, the current selection, and the prompt
//! picked for this run.

use uuid::Uuid;

use crate::journal::{Journal, JournalError};
use crate::model::Observation;
use crate::prompt::DailyPrompt;
use crate::selection::Selection;
use crate::storage::KeyValueStore;

pub struct Session<S> {
    journal: Journal<S>,
    selection: Selection,
    prompt: DailyPrompt,
}

impl<S: KeyValueStore> Session<S> {
    /// Starts a session over an already hydrated journal, with the default
    /// selection.
    pub fn new(journal: Journal<S>, prompt: DailyPrompt) -> Self {
        Self {
            journal,
            selection: Selection::new(),
            prompt,
        }
    }

    pub fn journal(&self) -> &Journal<S> {
        &self.journal
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn prompt(&self) -> &str {
        self.prompt.text()
    }

    /// Appends the draft with the current classifications. The draft is
    /// cleared only if the append succeeds.
    pub fn submit(&mut self) -> Result<Observation, JournalError> {
        let observation = self.journal.append(
            self.selection.draft(),
            self.selection.object_state(),
            self.selection.human_role(),
        )?;
        self.selection.reset_draft();
        Ok(observation)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        self.journal.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{HumanRole, ObjectState, now_millis};
    use crate::prompt::PromptCatalog;
    use crate::storage::{MemoryStore, OBSERVATIONS_KEY, codec};

    fn new_session(store: MemoryStore) -> Session<MemoryStore> {
        let prompt = DailyPrompt::choose(&PromptCatalog::new(["Why?"]).unwrap());
        Session::new(Journal::hydrate(store), prompt)
    }

    fn write(
        session: &mut Session<MemoryStore>,
        text: &str,
        state: ObjectState,
        role: HumanRole,
    ) -> Observation {
        let selection = session.selection_mut();
        selection.set_object_state(state);
        selection.set_human_role(role);
        selection.set_draft(text);
        session.submit().unwrap()
    }

    #[test]
    fn starts_with_default_selection_and_prompt() {
        let session = new_session(MemoryStore::new());

        assert_eq!(session.selection(), &Selection::new());
        assert_eq!(session.prompt(), "Why?");
    }

    #[test]
    fn submit_clears_draft_but_keeps_classification() {
        let mut session = new_session(MemoryStore::new());

        write(
            &mut session,
            "note",
            ObjectState::Degradation,
            HumanRole::Specialist,
        );

        assert_eq!(session.selection().draft(), "");
        assert_eq!(session.selection().object_state(), ObjectState::Degradation);
        assert_eq!(session.selection().human_role(), HumanRole::Specialist);
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let mut session = new_session(MemoryStore::new());
        session.selection_mut().set_draft("   ");

        let err = session.submit().unwrap_err();

        assert!(matches!(err, JournalError::EmptyContent));
        assert_eq!(session.selection().draft(), "   ");
        assert!(session.journal().snapshot().is_empty());
    }

    #[test]
    fn record_keeps_selection_from_submit_time() {
        let mut session = new_session(MemoryStore::new());
        let obs = write(
            &mut session,
            "note",
            ObjectState::Conception,
            HumanRole::Owner,
        );

        session.selection_mut().set_object_state(ObjectState::Termination);
        session.selection_mut().set_human_role(HumanRole::Outsider);

        let stored = &session.journal().snapshot()[0];
        assert_eq!(stored.id, obs.id);
        assert_eq!(stored.object_state, ObjectState::Conception);
        assert_eq!(stored.human_role, HumanRole::Owner);
    }

    #[test]
    fn journaling_walkthrough() {
        let mut session = new_session(MemoryStore::new());
        let start = now_millis();

        let drift = write(
            &mut session,
            "Noticed drift in team focus",
            ObjectState::Stabilization,
            HumanRole::Strategist,
        );

        let log = session.journal().snapshot();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].content, "Noticed drift in team focus");
        assert_eq!(log[0].object_state, ObjectState::Stabilization);
        assert_eq!(log[0].human_role, HumanRole::Strategist);
        assert_eq!(log[0].id, drift.id);
        assert!(log[0].timestamp >= start);

        let second = write(
            &mut session,
            "Second note",
            ObjectState::Formation,
            HumanRole::Owner,
        );

        let log = session.journal().snapshot();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].id, second.id);
        assert_eq!(log[0].object_state, ObjectState::Formation);
        assert_eq!(log[0].human_role, HumanRole::Owner);
        assert_eq!(log[1].id, drift.id);

        assert!(session.remove(drift.id));

        let log = session.journal().snapshot();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id, second.id);
        assert_eq!(log[0].content, "Second note");
    }

    #[test]
    fn restart_restores_log_but_not_selection() {
        let mut session = new_session(MemoryStore::new());
        let obs = write(
            &mut session,
            "persisted",
            ObjectState::Termination,
            HumanRole::Outsider,
        );
        session.selection_mut().set_draft("unsaved draft");

        let blob = session
            .journal()
            .store()
            .slot(OBSERVATIONS_KEY)
            .unwrap()
            .to_string();
        let restarted = new_session(MemoryStore::with_slot(OBSERVATIONS_KEY, &blob));

        assert_eq!(restarted.journal().snapshot(), [obs]);
        assert_eq!(restarted.selection(), &Selection::new());
        assert_eq!(codec::decode(&blob).unwrap().len(), 1);
    }
}
