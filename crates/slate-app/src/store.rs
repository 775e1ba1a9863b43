// Rust guideline compliant 2026-08-28

//! Single-owner handle over the persisted task document.
//!
//! `Store` pairs the storage engine with an in-memory document and the
//! session's transition history. All state lives here; nothing is
//! global. Callers mutate through `data_mut` and persist with `save`.

use crate::error::Result;
use crate::repo::RepoContext;
use slate_core::{History, Storage, TaskData};

/// Owning handle over a loaded tasks document.
pub struct Store {
    storage: Storage,
    data: TaskData,
    history: History,
}

impl Store {
    /// Opens the store for a discovered repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be opened. A missing or
    /// unreadable document loads as the default empty document.
    pub fn open(ctx: &RepoContext) -> Result<Self> {
        let storage = ctx.open_storage()?;
        let data = storage.load()?;
        Ok(Self {
            storage,
            data,
            history: History::new(),
        })
    }

    /// Returns the loaded document.
    #[must_use]
    pub fn data(&self) -> &TaskData {
        &self.data
    }

    /// Returns the loaded document for mutation.
    pub fn data_mut(&mut self) -> &mut TaskData {
        &mut self.data
    }

    /// Returns the session's transition history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the transition history for recording.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Returns the document and history together for operations that
    /// mutate both, such as status transitions.
    pub fn split_mut(&mut self) -> (&mut TaskData, &mut History) {
        (&mut self.data, &mut self.history)
    }

    /// Persists the document under an exclusive file lock.
    ///
    /// The last-update timestamp is refreshed before writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails validation, the lock
    /// cannot be acquired, or the write fails.
    pub fn save(&mut self) -> Result<()> {
        self.data.meta.updated_at = Some(chrono::Utc::now().to_rfc3339());
        let data = &self.data;
        let storage = &self.storage;
        storage.with_lock(|| storage.save(data))?;
        Ok(())
    }
}
