//! In-memory note store.
//!
//! Notes have no identifier of their own: a note is addressed by its position
//! at the time of the request, and removing one shifts every later note down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{NoteError, Result};

/// Notified on every successful mutation, while the store lock is held.
///
/// Holding the lock means observers see mutations in the order the store
/// applied them, so a gauge driven from `len` never goes stale.
pub trait StoreObserver: Send + Sync {
    fn note_created(&self, len: usize);
    fn note_deleted(&self, len: usize);
}

impl StoreObserver for () {
    fn note_created(&self, _len: usize) {}
    fn note_deleted(&self, _len: usize) {}
}

/// Ordered, process-lifetime collection of notes.
pub struct NoteStore {
    notes: Mutex<Vec<String>>,
    observer: Arc<dyn StoreObserver>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(()))
    }

    pub fn with_observer(observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
            observer,
        }
    }

    // A panic elsewhere cannot leave the Vec half-mutated, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.notes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a note and return the full list after the append.
    ///
    /// `None` and the empty string are both rejected with `Validation`.
    pub fn create(&self, content: Option<String>) -> Result<Vec<String>> {
        let content = content
            .filter(|c| !c.is_empty())
            .ok_or_else(|| NoteError::Validation("Content is required".into()))?;

        let mut notes = self.lock();
        notes.push(content);
        self.observer.note_created(notes.len());
        tracing::debug!(len = notes.len(), "note created");
        Ok(notes.clone())
    }

    /// Snapshot of all notes in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Remove the note at `index` and return the remaining list.
    pub fn delete(&self, index: i64) -> Result<Vec<String>> {
        let mut notes = self.lock();
        let pos = usize::try_from(index)
            .ok()
            .filter(|&i| i < notes.len())
            .ok_or_else(|| NoteError::NotFound("Note not found".into()))?;

        notes.remove(pos);
        self.observer.note_deleted(notes.len());
        tracing::debug!(index = pos, len = notes.len(), "note deleted");
        Ok(notes.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
