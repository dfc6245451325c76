use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice capture is not supported on this device")]
    Unsupported,

    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("voice capture cancelled")]
    Cancelled,

    #[error("voice device error: {0}")]
    Device(String),
}
