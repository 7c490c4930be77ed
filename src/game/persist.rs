use std::{
    fs, io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};

use crate::models::Grid;

/// Saved state of a game in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub bag: Vec<char>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where a session keeps its grid and bag between mutations
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(snapshot.clone());
        Ok(())
    }
}

/// One JSON document per session: `{ "grid": [...], "bag": [...] }`
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(snapshot)?)?;
        Ok(())
    }
}

/// Counts writes, remembers nothing
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct CountingStore {
    saves: Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl CountingStore {
    pub(crate) fn count(&self) -> usize {
        self.saves.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl SessionStore for CountingStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.saves.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}
