use mind_vault::{PersistedProgress, ProgressStore, StoreError, STORAGE_KEY};

/// Progress store backed by `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl ProgressStore for LocalStorageStore {
    fn load(&self) -> Result<Option<PersistedProgress>, StoreError> {
        let raw = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable)?;
        match raw {
            Some(json) => Ok(Some(PersistedProgress::from_json(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, progress: &PersistedProgress) -> Result<(), StoreError> {
        let json = progress.to_json()?;
        Self::storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
