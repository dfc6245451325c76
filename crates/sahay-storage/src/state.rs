use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Load a JSON state entry. Returns `Ok(None)` when the key is absent;
/// a present-but-undecodable entry is an error.
pub fn load_state<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let value: T = serde_json::from_str(&raw)?;
    Ok(Some(value))
}

/// Save a JSON state entry. Serialization and write failures propagate;
/// a successful return means the value is durable.
pub fn save_state<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore,
{
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)?;
    debug!(key, "state flushed");
    Ok(())
}

/// Load a JSON state entry, falling back to the default on absence or on
/// any read/decode failure.
///
/// This is the fail-closed startup path: an entry whose shape no longer
/// matches (or that cannot be read at all) yields the default rather than
/// an error, with a warning so the discard is visible.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: Default + DeserializeOwned,
    S: KeyValueStore,
{
    match load_state(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!(key, "no stored state, using defaults");
            T::default()
        }
        Err(e) => {
            warn!(key, error = %e, "stored state unreadable, falling back to defaults");
            T::default()
        }
    }
}
