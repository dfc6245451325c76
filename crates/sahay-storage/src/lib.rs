//! sahay-storage
//!
//! The durable key-value layer. A [`kv::KeyValueStore`] maps string keys to
//! string values; [`state`] layers generic JSON state load/save on top.

pub mod error;
pub mod kv;
pub mod state;

pub use error::StorageError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
