//! The conversation/settings store: single source of truth for user
//! preferences and the conversation log, with every mutation flushed to
//! durable storage before it returns.

use tracing::{info, warn};

use sahay_core::models::{Conversation, Message, Settings, SettingsPatch};
use sahay_core::storage_keys;
use sahay_storage::state::{load_or_default, save_state};
use sahay_storage::KeyValueStore;
use sahay_voice::{HapticEngine, HapticIntensity};

use crate::error::AppError;

/// In-memory state mirrored to a [`KeyValueStore`].
///
/// The conversation list is ordered newest-first. `current` is a value
/// copy of the open conversation, not an alias into the list; `add_message`
/// writes the updated copy back.
///
/// All mutations run to completion on one logical thread and flush
/// synchronously, so memory and storage never diverge by more than the
/// in-flight mutation.
pub struct AppStore<S: KeyValueStore> {
    storage: S,
    settings: Settings,
    conversations: Vec<Conversation>,
    current: Option<Conversation>,
}

impl<S: KeyValueStore> AppStore<S> {
    /// Rehydrate from storage.
    ///
    /// Both entries fall back to their defaults when absent or unreadable
    /// (the fail-closed path in `sahay-storage`); startup never fails on
    /// bad state. Timestamps come back from their ISO-8601 text form as
    /// part of decoding.
    pub fn open(storage: S) -> Self {
        let settings: Settings = load_or_default(&storage, storage_keys::USER_SETTINGS);
        let conversations: Vec<Conversation> =
            load_or_default(&storage, storage_keys::CONVERSATIONS);
        info!(conversations = conversations.len(), "store opened");
        Self {
            storage,
            settings,
            conversations,
            current: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Newest-first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current.as_ref()
    }

    /// Merge the patch into the current settings and persist the result.
    /// A storage failure propagates and leaves the previous persisted value
    /// in place; the in-memory value is only updated on success.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), AppError> {
        let mut merged = self.settings.clone();
        merged.apply(patch);
        save_state(&mut self.storage, storage_keys::USER_SETTINGS, &merged)?;
        self.settings = merged;
        Ok(())
    }

    /// Prepend a conversation (newest-first) and persist the list.
    ///
    /// A duplicate ID is rejected: two entries under one ID would make
    /// delete-by-ID and the message bump ambiguous.
    pub fn add_conversation(&mut self, conversation: Conversation) -> Result<(), AppError> {
        if self.conversations.iter().any(|c| c.id == conversation.id) {
            return Err(AppError::DuplicateConversation(conversation.id));
        }
        self.conversations.insert(0, conversation);
        self.flush_conversations()
    }

    /// Remove every entry matching `id`, keeping the others' relative
    /// order, and persist. No-op (but still a flush) if the ID is absent.
    /// The current-conversation copy is left untouched even if it matches.
    pub fn delete_conversation(&mut self, id: &str) -> Result<(), AppError> {
        self.conversations.retain(|c| c.id != id);
        self.flush_conversations()
    }

    /// Replace the current-conversation reference. In-memory only; nothing
    /// is persisted until a message lands.
    pub fn set_current_conversation(&mut self, conversation: Option<Conversation>) {
        self.current = conversation;
    }

    /// Append a message to the current conversation, bump that conversation
    /// to the front of the list, and persist.
    ///
    /// With no current conversation the message is dropped: the list and
    /// the current reference stay unchanged and the call still succeeds.
    /// That contract is pinned by tests — callers are expected to open a
    /// conversation first.
    pub fn add_message(&mut self, message: Message) -> Result<(), AppError> {
        let Some(current) = self.current.as_mut() else {
            warn!(message_id = %message.id, "add_message with no current conversation, dropping");
            return Ok(());
        };

        current.messages.push(message);
        let updated = current.clone();

        // Re-prepend rather than replace in place: sending a message bumps
        // the conversation to most-recent.
        self.conversations.retain(|c| c.id != updated.id);
        self.conversations.insert(0, updated);
        self.flush_conversations()
    }

    /// Convenience for the Home/Categories flow: create, register, and
    /// open a conversation in one step.
    pub fn start_conversation(
        &mut self,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Conversation, AppError> {
        let conversation = Conversation::new(category, title);
        self.add_conversation(conversation.clone())?;
        self.current = Some(conversation.clone());
        Ok(conversation)
    }

    /// Pulse the haptic engine at the requested intensity, unless haptics
    /// are disabled in settings.
    pub fn trigger_haptic(&self, engine: &dyn HapticEngine, intensity: HapticIntensity) {
        if !self.settings.haptics_enabled {
            return;
        }
        engine.pulse(intensity.duration());
    }

    fn flush_conversations(&mut self) -> Result<(), AppError> {
        save_state(
            &mut self.storage,
            storage_keys::CONVERSATIONS,
            &self.conversations,
        )?;
        Ok(())
    }
}
