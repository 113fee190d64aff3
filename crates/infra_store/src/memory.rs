//! In-memory backend
//!
//! Keeps the last saved state in memory. Saves can be switched to fail so
//! that callers can exercise the best-effort persistence path.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::{Records, StorageBackend};
use crate::error::StorageError;

/// Backend holding the saved records in memory
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    records: Mutex<Records>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryBackend {
    /// Creates an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `records`
    pub fn with_records(records: Records) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Makes subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the last saved state
    pub fn snapshot(&self) -> Records {
        self.lock().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for InMemoryBackend {
    fn load(&self) -> Result<Records, StorageError> {
        Ok(self.lock().clone())
    }

    fn save(&self, records: &Records) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("saves are disabled".to_string()));
        }
        *self.lock() = records.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
