pub mod conversation;
pub mod settings;

pub use conversation::{Conversation, Message, Role};
pub use settings::{FontSize, Settings, SettingsPatch, Theme, VoiceKind};
