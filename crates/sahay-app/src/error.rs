use thiserror::Error;

use sahay_storage::StorageError;
use sahay_voice::VoiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("conversation {0:?} already exists")]
    DuplicateConversation(String),

    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error("reply task failed: {0}")]
    ReplyTask(String),

    #[error("failed to write export {path}: {source}")]
    ExportWrite {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
