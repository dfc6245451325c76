use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// The durable key-value store the rest of the system writes through.
///
/// `get` returns `Ok(None)` for an absent key. `set` must be durable by the
/// time it returns; callers treat a successful return as a completed flush.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-per-key store: key `k` lives at `<root>/k.json`.
///
/// Writes go through a temp file and a rename, so a crash mid-write leaves
/// the previous value intact. On Unix the files are created 0o600.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use an explicit root directory. The directory is created on first
    /// write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root the store under the platform data directory, e.g.
    /// `~/.local/share/<app>` on Linux.
    pub fn in_data_dir(app: &str) -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join(app)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are storage names, not paths. Reject anything that would
        // escape the root directory.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|e| StorageError::Write {
            path: self.root.clone(),
            source: e,
        })?;

        // Write to a temp file then rename for atomicity.
        let tmp_path = path.with_extension("json.tmp");
        let write_err = |e| StorageError::Write {
            path: tmp_path.clone(),
            source: e,
        };
        std::fs::write(&tmp_path, value.as_bytes()).map_err(write_err)?;

        // Set restrictive permissions on Unix before renaming.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }

        std::fs::rename(&tmp_path, &path).map_err(|e| StorageError::Write { path, source: e })?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
