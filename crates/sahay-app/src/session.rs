//! The chat session flow: what happens when the user sends a message,
//! speaks one, has a reply read aloud, or leaves the chat.
//!
//! A send is user-append → simulated reply → assistant-append, with the
//! reply running as a cancellable task keyed by conversation ID. Closing
//! the session while a reply is pending aborts the task, so the late
//! result is suppressed instead of landing in a conversation the user
//! already left.

use tracing::{debug, info};

use sahay_core::models::{Message, Settings};
use sahay_replies::PendingReplies;
use sahay_storage::KeyValueStore;
use sahay_voice::{HapticEngine, HapticIntensity, VoiceCapture, VoiceSynthesis};

use crate::error::AppError;
use crate::store::AppStore;

/// What a send produced. `reply` is `None` when the session was closed
/// (or the reply superseded) before the assistant answered.
#[derive(Debug)]
pub struct SendOutcome {
    pub user: Message,
    pub reply: Option<Message>,
}

/// Send a user message in the current conversation and await the
/// simulated reply.
///
/// With no current conversation this is a no-op beyond the haptic pulse —
/// the store drops the message and no reply task is spawned.
pub async fn send_message<S: KeyValueStore>(
    store: &mut AppStore<S>,
    pending: &PendingReplies,
    haptics: &dyn HapticEngine,
    text: &str,
) -> Result<SendOutcome, AppError> {
    store.trigger_haptic(haptics, HapticIntensity::Medium);

    let user = Message::user(text);
    store.add_message(user.clone())?;

    let Some(current) = store.current_conversation() else {
        return Ok(SendOutcome { user, reply: None });
    };
    let conversation_id = current.id.clone();
    let category = current.category.clone();

    let handle = pending.spawn(&conversation_id, category);
    match handle.await {
        Ok(reply_text) => {
            pending.clear(&conversation_id);
            let reply = Message::assistant(reply_text);
            store.add_message(reply.clone())?;
            Ok(SendOutcome {
                user,
                reply: Some(reply),
            })
        }
        Err(e) if e.is_cancelled() => {
            debug!(conversation_id, "reply cancelled before completion");
            Ok(SendOutcome { user, reply: None })
        }
        Err(e) => Err(AppError::ReplyTask(e.to_string())),
    }
}

/// Capture a transcript and send it as if it had been typed.
///
/// Capture errors (unsupported, denied, cancelled) propagate so the UI can
/// show an inline notice; nothing is retried and nothing reaches the store.
pub async fn send_voice_message<S, V>(
    store: &mut AppStore<S>,
    pending: &PendingReplies,
    haptics: &dyn HapticEngine,
    capture: &V,
) -> Result<SendOutcome, AppError>
where
    S: KeyValueStore,
    V: VoiceCapture,
{
    store.trigger_haptic(haptics, HapticIntensity::Medium);
    let transcript = capture.capture().await?;
    info!(chars = transcript.len(), "voice transcript captured");
    send_message(store, pending, haptics, &transcript).await
}

/// Read a reply aloud with the configured voice. Fire-and-forget.
pub fn speak_reply<V: VoiceSynthesis>(synth: &V, settings: &Settings, text: &str) {
    synth.speak(text, settings.voice);
}

/// Leave the chat: cancel any pending reply for the current conversation
/// and clear the current reference.
pub fn close_session<S: KeyValueStore>(store: &mut AppStore<S>, pending: &PendingReplies) {
    if let Some(current) = store.current_conversation() {
        pending.cancel(&current.id);
    }
    store.set_current_conversation(None);
}
