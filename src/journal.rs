//! The observation log: an ordered, newest-first sequence of observations
//! mirrored in full to durable storage after every change.
//!
//! The in-memory sequence is the source of truth for the session. Storage
//! problems never reach the caller as failures: a corrupt or unreadable slot
//! at startup yields an empty log, and a failed write is logged and retried
//! implicitly by the next successful mutation.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::model::{HumanRole, ObjectState, Observation, now_millis};
use crate::storage::{
    KeyValueStore, OBSERVATIONS_KEY, StorageError,
    codec::{self, DecodeError},
};

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("observation content is empty")]
    EmptyContent,

    #[error("persisted observation log is corrupt: {0}")]
    CorruptPersistedState(#[from] DecodeError),

    #[error("persisted observation log could not be read: {0}")]
    PersistReadFailure(#[source] StorageError),

    #[error("failed to persist observation log: {0}")]
    PersistWriteFailure(#[source] StorageError),
}

/// How the log was obtained at startup.
#[derive(Debug)]
pub enum Hydration {
    /// Nothing was stored yet.
    Missing,

    /// The stored log was read back.
    Loaded,

    /// The stored value was unusable; the log started empty.
    Recovered(JournalError),
}

/// The observation log and the store it mirrors to.
pub struct Journal<S> {
    store: S,
    observations: Vec<Observation>,
    hydration: Hydration,
    last_persist_error: Option<JournalError>,
}

impl<S: KeyValueStore> Journal<S> {
    /// Loads the log from `store`. Never fails: see [`Hydration`].
    pub fn hydrate(store: S) -> Self {
        let (observations, hydration) = match load(&store) {
            Ok(None) => {
                debug!("no stored observations, starting empty");
                (Vec::new(), Hydration::Missing)
            }
            Ok(Some(observations)) => {
                let count = observations.len();
                info!(count, "observation log hydrated");
                (observations, Hydration::Loaded)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "discarding unusable observation log, starting empty"
                );
                (Vec::new(), Hydration::Recovered(e))
            }
        };

        Self {
            store,
            observations,
            hydration,
            last_persist_error: None,
        }
    }

    /// Records a new observation at the front of the log.
    ///
    /// The draft is trimmed; a blank draft is rejected with
    /// [`JournalError::EmptyContent`] and the log is left untouched.
    pub fn append(
        &mut self,
        draft: &str,
        object_state: ObjectState,
        human_role: HumanRole,
    ) -> Result<Observation, JournalError> {
        let content = draft.trim();
        if content.is_empty() {
            return Err(JournalError::EmptyContent);
        }

        let observation = Observation {
            id: self.fresh_id(),
            timestamp: now_millis(),
            content: content.to_string(),
            object_state,
            human_role,
        };
        self.observations.insert(0, observation.clone());
        info!(
            id = %observation.id,
            object_state = object_state.name(),
            human_role = human_role.name(),
            count = self.observations.len(),
            "observation appended"
        );

        self.persist();
        Ok(observation)
    }

    /// Removes the observation with `id`. Returns `false` if there is none.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let Some(index) = self.observations.iter().position(|o| o.id == id) else {
            debug!(%id, "remove: no such observation");
            return false;
        };
        self.observations.remove(index);
        info!(%id, count = self.observations.len(), "observation removed");

        self.persist();
        true
    }

    /// The log, newest first.
    pub fn snapshot(&self) -> &[Observation] {
        &self.observations
    }

    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    /// The most recent write failure, cleared by the next successful write.
    pub fn last_persist_error(&self) -> Option<&JournalError> {
        self.last_persist_error.as_ref()
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrites the stored log with the full in-memory sequence.
    fn persist(&mut self) {
        let result = codec::encode(&self.observations)
            .map_err(StorageError::from)
            .and_then(|blob| self.store.set(OBSERVATIONS_KEY, &blob));

        match result {
            Ok(()) => {
                if self.last_persist_error.take().is_some() {
                    info!("observation log persisted after earlier failure");
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "failed to persist observation log, keeping in-memory state"
                );
                self.last_persist_error = Some(JournalError::PersistWriteFailure(e));
            }
        }
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.observations.iter().any(|o| o.id == id) {
                return id;
            }
        }
    }
}

/// Reads and decodes the stored log. A missing or blank slot is `Ok(None)`.
fn load<S: KeyValueStore>(store: &S) -> Result<Option<Vec<Observation>>, JournalError> {
    let blob = store
        .get(OBSERVATIONS_KEY)
        .map_err(JournalError::PersistReadFailure)?;

    match blob {
        Some(blob) if !blob.trim().is_empty() => Ok(Some(codec::decode(&blob)?)),
        _ => Ok(None),
    }
}
