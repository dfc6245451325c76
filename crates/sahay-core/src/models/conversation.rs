use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One assistant session: an ordered, append-only message log plus the
/// metadata fixed at creation.
///
/// Serialized as part of the `conversations` array. Timestamps serialize
/// as ISO-8601 text and are reconstructed into [`jiff::Timestamp`] values
/// on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique within the store. Minted from a UUID, not time-derived.
    pub id: String,
    /// One of the fixed category names, or a free-form title used as a
    /// pseudo-category.
    pub category: String,
    /// Insertion order is chronological order.
    pub messages: Vec<Message>,
    pub timestamp: jiff::Timestamp,
    /// Display label, fixed at creation.
    pub title: String,
}

impl Conversation {
    /// Start an empty conversation with a fresh ID and the current time.
    pub fn new(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: category.into(),
            messages: Vec::new(),
            timestamp: jiff::Timestamp::now(),
            title: title.into(),
        }
    }
}

/// A single turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: jiff::Timestamp,
    /// Present in historical records; unused by current logic.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub voice_enabled: Option<bool>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, content)
    }

    fn with_role(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
            voice_enabled: None,
        }
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
