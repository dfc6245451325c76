//! sahay-core
//!
//! Pure domain types, the fixed content catalogs, and the durable storage
//! key conventions. No I/O — this is the shared vocabulary of the Sahay
//! system.

pub mod catalog;
pub mod models;
pub mod storage_keys;
