use thiserror::Error;

use crate::progress::PersistedProgress;

/// Key the progress blob is stored under.
pub const STORAGE_KEY: &str = "mindVaultProgress";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress storage is unavailable")]
    Unavailable,
    #[error("saved progress is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("failed to write progress: {0}")]
    Write(String),
}

/// Where the progress blob lives. Implemented by the browser bridge
/// (`localStorage`) and by `MemoryStore` for native runs.
pub trait ProgressStore {
    /// Read the saved record. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<PersistedProgress>, StoreError>;

    fn save(&mut self, progress: &PersistedProgress) -> Result<(), StoreError>;
}

/// In-memory store holding the serialized JSON text.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, e.g. to simulate a corrupt save.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            fail_writes: false,
        }
    }

    /// A store whose writes always fail (quota exceeded and the like).
    pub fn failing() -> Self {
        Self {
            blob: None,
            fail_writes: true,
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedProgress>, StoreError> {
        match &self.blob {
            Some(json) => Ok(Some(PersistedProgress::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, progress: &PersistedProgress) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("quota exceeded".into()));
        }
        self.blob = Some(progress.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Profile;

    #[test]
    fn save_then_load_returns_same_progress() {
        let mut profile = Profile::default();
        profile.crystal_shards = 12;
        profile.catalog.mark_box_completed("tutorial");
        let progress = profile.snapshot();

        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&progress).unwrap();
        assert_eq!(store.load().unwrap(), Some(progress));
    }

    #[test]
    fn corrupt_blob_reports_error() {
        let store = MemoryStore::with_blob("]]]");
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn failing_store_rejects_writes() {
        let mut store = MemoryStore::failing();
        let err = store.save(&Profile::default().snapshot()).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert!(store.blob().is_none());
    }
}
