//! Review history store for nitpick
//!
//! Keeps a bounded, most-recent-first list of past reviews as a single JSON
//! document behind a pluggable [`StorageBackend`]. There is one writer (the
//! owning process), so every operation is a plain read-modify-write over the
//! persisted blob with no cross-process coordination.

pub mod backend;
pub mod error;
pub mod models;
pub mod stats;

use tracing::warn;
use uuid::Uuid;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use error::{Error, Result};
pub use models::{NewReview, ReviewRecord};
pub use stats::ReviewStats;

/// Maximum number of retained history entries
pub const MAX_HISTORY_ITEMS: usize = 50;

/// Bounded review history over a persistence backend
pub struct HistoryStore {
    backend: Box<dyn StorageBackend>,
    capacity: usize,
}

impl HistoryStore {
    /// Create a store with the default capacity
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_capacity(backend, MAX_HISTORY_ITEMS)
    }

    /// Create a store retaining at most `capacity` entries
    pub fn with_capacity(backend: Box<dyn StorageBackend>, capacity: usize) -> Self {
        Self { backend, capacity }
    }

    /// Open a file-backed store at the default history location
    pub fn open_default() -> Result<Self> {
        let path = JsonFileBackend::default_path()?;
        Ok(Self::new(Box::new(JsonFileBackend::new(path))))
    }

    /// Save a review, assigning it a fresh unique id.
    ///
    /// The record is prepended and the list truncated to capacity, silently
    /// dropping the oldest entries.
    pub fn save(&self, review: NewReview) -> Result<ReviewRecord> {
        let mut records = self.list()?;

        let record = ReviewRecord {
            id: Uuid::new_v4().to_string(),
            code: review.code,
            language: review.language,
            review_type: review.review_type,
            review: review.review,
            timestamp: review.timestamp,
        };

        records.insert(0, record.clone());
        records.truncate(self.capacity);
        self.persist(&records)?;

        Ok(record)
    }

    /// Current history snapshot, most recent first.
    ///
    /// A missing blob is an empty history. A corrupt blob is logged and
    /// treated as empty rather than surfaced to the caller.
    pub fn list(&self) -> Result<Vec<ReviewRecord>> {
        let Some(blob) = self.backend.load()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(error = %e, "History blob is corrupt; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Look up a single record by id
    pub fn get(&self, id: &str) -> Result<Option<ReviewRecord>> {
        Ok(self.list()?.into_iter().find(|record| record.id == id))
    }

    /// Delete the record with the given id.
    ///
    /// Returns `true` if a record was removed; deleting an unknown id is a
    /// no-op returning `false`.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            return Ok(false);
        }

        self.persist(&records)?;
        Ok(true)
    }

    /// Remove all history
    pub fn clear(&self) -> Result<()> {
        self.backend.clear()
    }

    /// Derive aggregate statistics from the current history
    pub fn stats(&self) -> Result<ReviewStats> {
        Ok(ReviewStats::from_records(&self.list()?))
    }

    fn persist(&self, records: &[ReviewRecord]) -> Result<()> {
        self.backend.store(&serde_json::to_string(records)?)
    }
}
