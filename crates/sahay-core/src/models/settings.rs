use serde::{Deserialize, Serialize};

/// User preferences. Exactly one record exists per installation.
///
/// Serialized under the `userSettings` storage key with camelCase field
/// names, matching the durable JSON shape from day one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub voice: VoiceKind,
    pub notifications_enabled: bool,
    pub font_size: FontSize,
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            voice: VoiceKind::Neutral,
            notifications_enabled: true,
            font_size: FontSize::Medium,
            haptics_enabled: true,
        }
    }
}

impl Settings {
    /// Field-wise merge: every field the patch sets overwrites the current
    /// value, everything else is untouched.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(voice) = patch.voice {
            self.voice = voice;
        }
        if let Some(notifications_enabled) = patch.notifications_enabled {
            self.notifications_enabled = notifications_enabled;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(haptics_enabled) = patch.haptics_enabled {
            self.haptics_enabled = haptics_enabled;
        }
    }
}

/// A partial [`Settings`] update. Unset fields leave the current value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub voice: Option<VoiceKind>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub haptics_enabled: Option<bool>,
}

/// Display theme. Dark is accepted and persisted but currently inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Preferred synthesis voice, passed to the voice-synthesis collaborator
/// as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceKind {
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}
