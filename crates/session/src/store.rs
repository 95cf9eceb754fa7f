//! Token store
//!
//! Process-wide key/value store for the staff session tokens. The store is an
//! injectable seam so the guard can run against fakes. Synchronous and
//! infallible at the trait: removal of an absent key is a no-op, and
//! persistence failures never surface to the caller.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Store key for the bearer credential read by the guard.
pub const ACCESS_TOKEN: &str = "accessToken";
/// Store key for the refresh credential (written on login, cleared on logout).
pub const REFRESH_TOKEN: &str = "refreshToken";

/// Synchronous key/value store holding session tokens.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Idempotent: removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory store. Default for tests and ephemeral gateway runs.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// File-backed store: a JSON object on disk, so the staff session survives
/// gateway restarts. The in-memory view is authoritative; a failed disk write
/// is logged and the session continues in memory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileTokenStore {
    /// Open (or create) the store at `path`, loading any existing entries.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "session file is not valid JSON, starting empty");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let result = serde_json::to_vec_pretty(entries)
            .map_err(std::io::Error::other)
            .and_then(|bytes| {
                let mut file = std::fs::File::create(&self.path)?;
                file.write_all(&bytes)
            });
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session file");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}
