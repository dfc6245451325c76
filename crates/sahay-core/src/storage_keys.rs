//! Durable storage key conventions.
//!
//! Pure constants — no storage dependency. These name the two independent
//! entries in the key-value store. The values are the historical
//! `localStorage` keys, kept so existing installations rehydrate cleanly.

/// The singleton [`Settings`](crate::models::Settings) record.
pub const USER_SETTINGS: &str = "userSettings";

/// The full conversation list, newest-first.
pub const CONVERSATIONS: &str = "conversations";
