//! Wire-shape and merge tests for the domain types.
//!
//! The JSON key names are load-bearing: existing installations hold
//! camelCase entries written by earlier versions, and these tests pin that
//! shape.

use sahay_core::catalog;
use sahay_core::models::{
    Conversation, FontSize, Message, Role, Settings, SettingsPatch, Theme, VoiceKind,
};

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.voice, VoiceKind::Neutral);
    assert!(settings.notifications_enabled);
    assert_eq!(settings.font_size, FontSize::Medium);
    assert!(settings.haptics_enabled);
}

#[test]
fn settings_serialize_camel_case() {
    let json = serde_json::to_value(Settings::default()).expect("serialize");
    assert_eq!(json["theme"], "light");
    assert_eq!(json["voice"], "neutral");
    assert_eq!(json["notificationsEnabled"], true);
    assert_eq!(json["fontSize"], "medium");
    assert_eq!(json["hapticsEnabled"], true);
}

#[test]
fn settings_patch_merges_only_set_fields() {
    let mut settings = Settings::default();
    settings.apply(SettingsPatch {
        font_size: Some(FontSize::Large),
        haptics_enabled: Some(false),
        ..Default::default()
    });
    assert_eq!(settings.font_size, FontSize::Large);
    assert!(!settings.haptics_enabled);
    // Untouched fields keep their values.
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.voice, VoiceKind::Neutral);
    assert!(settings.notifications_enabled);
}

#[test]
fn settings_round_trip() {
    let mut settings = Settings::default();
    settings.apply(SettingsPatch {
        theme: Some(Theme::Dark),
        voice: Some(VoiceKind::Female),
        ..Default::default()
    });
    let json = serde_json::to_string(&settings).expect("serialize");
    let reloaded: Settings = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(reloaded, settings);
}

#[test]
fn conversation_constructor_mints_unique_ids() {
    let a = Conversation::new("Tech", "Coding Best Practices");
    let b = Conversation::new("Tech", "Coding Best Practices");
    assert_ne!(a.id, b.id);
    assert!(a.messages.is_empty());
    assert_eq!(a.title, "Coding Best Practices");
}

#[test]
fn message_serializes_role_lowercase_and_omits_unset_voice_flag() {
    let msg = Message::user("hi");
    let json = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(json["role"], "user");
    assert!(json.get("voiceEnabled").is_none());

    let reply = Message::assistant("hello");
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(json["role"], "assistant");
}

#[test]
fn conversation_round_trip_preserves_timestamps_and_order() {
    let mut conv = Conversation::new("Agriculture", "Soil health");
    conv.messages.push(Message::user("How do I test soil pH?"));
    conv.messages.push(Message::assistant("Here's how..."));

    let json = serde_json::to_string(&conv).expect("serialize");
    let reloaded: Conversation = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(reloaded.id, conv.id);
    assert_eq!(reloaded.timestamp, conv.timestamp);
    assert_eq!(reloaded.messages.len(), 2);
    assert_eq!(reloaded.messages[0].role, Role::User);
    assert_eq!(reloaded.messages[0].timestamp, conv.messages[0].timestamp);
    assert_eq!(reloaded.messages[1].role, Role::Assistant);
}

/// Records written by the original web app: millisecond-clock IDs and
/// JS `toISOString()` timestamps. They must still decode.
#[test]
fn conversation_decodes_legacy_records() {
    let json = r#"{
        "id": "1714070223456",
        "category": "Tech",
        "messages": [
            {
                "id": "1714070223457",
                "role": "user",
                "content": "Explain machine learning basics",
                "timestamp": "2024-04-25T18:37:03.457Z",
                "voiceEnabled": true
            }
        ],
        "timestamp": "2024-04-25T18:37:03.456Z",
        "title": "Explain machine learning basics"
    }"#;

    let conv: Conversation = serde_json::from_str(json).expect("legacy record should decode");
    assert_eq!(conv.id, "1714070223456");
    assert_eq!(conv.messages[0].voice_enabled, Some(true));
    assert_eq!(
        conv.timestamp.to_string(),
        "2024-04-25T18:37:03.456Z"
    );
}

#[test]
fn catalog_has_five_categories() {
    assert_eq!(catalog::CATEGORIES.len(), 5);
    assert!(catalog::category_by_id("agriculture").is_some());
    assert!(catalog::category_by_id("cooking").is_none());
}

#[test]
fn catalog_search_matches_name_and_description() {
    let hits = catalog::search_categories("farming");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "agriculture");

    // Case-insensitive on names too.
    let hits = catalog::search_categories("TECH");
    assert!(hits.iter().any(|c| c.id == "tech"));

    // Empty query returns everything.
    assert_eq!(catalog::search_categories("").len(), 5);
}
