//! Plain-text transcript export (the History tab's export action).
//!
//! Renders to a string first, then writes `conversation-<id>.txt` — the
//! render itself cannot fail, only the write.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use sahay_core::models::{Conversation, Role};

use crate::error::AppError;

/// Render a conversation as a readable transcript:
/// title, category, and date, then one block per message.
pub fn render_transcript(conversation: &Conversation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", conversation.title);
    let _ = writeln!(out, "Category: {}", conversation.category);
    let _ = writeln!(
        out,
        "Date: {}",
        conversation.timestamp.strftime("%Y-%m-%d %H:%M:%S UTC")
    );

    for message in &conversation.messages {
        let role = match message.role {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        };
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{role} ({}):",
            message.timestamp.strftime("%H:%M:%S")
        );
        let _ = writeln!(out, "{}", message.content);
    }

    out
}

/// Write the transcript to `<dir>/conversation-<id>.txt` and return the
/// path.
pub fn export_to_file(conversation: &Conversation, dir: &Path) -> Result<PathBuf, AppError> {
    let path = dir.join(format!("conversation-{}.txt", conversation.id));
    let transcript = render_transcript(conversation);
    std::fs::write(&path, transcript).map_err(|source| AppError::ExportWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
