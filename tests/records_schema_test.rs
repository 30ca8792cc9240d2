//! Record payloads: field names and enum spellings on the wire

mod common;

use common::easy_controller;
use memory_match::core::{SessionSummary, UserPreferenceRecord};
use memory_match::types::{ColorScheme, DifficultyLevel, EmojiSet, Preferences};

#[test]
fn session_summary_field_names() {
    let (mut ctl, _) = easy_controller(41);
    ctl.start().unwrap();
    ctl.advance(2000 + 5000).unwrap();

    let v = serde_json::to_value(ctl.summary()).unwrap();
    let obj = v.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "color_scheme",
            "completed",
            "difficulty",
            "emoji_set",
            "moves",
            "time_seconds"
        ]
    );
    assert_eq!(v["time_seconds"], 5);
    assert_eq!(v["completed"], false);
    assert_eq!(v["difficulty"], "easy");
    assert_eq!(v["emoji_set"], "animals");
}

#[test]
fn session_summary_parses_back() {
    let json = r#"{"moves":14,"time_seconds":52,"difficulty":"hard","completed":true,"color_scheme":"ocean","emoji_set":"art"}"#;
    let summary: SessionSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.moves, 14);
    assert_eq!(summary.color_scheme, ColorScheme::Ocean);
    assert_eq!(summary.emoji_set, EmojiSet::Art);
}

#[test]
fn session_summary_minimal_record_takes_defaults() {
    let json = r#"{"moves":3,"difficulty":"easy","completed":false}"#;
    let summary: SessionSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.moves, 3);
    assert_eq!(summary.time_seconds, 0);
    assert_eq!(summary.difficulty, DifficultyLevel::Easy);
    assert!(!summary.completed);
    assert_eq!(summary.color_scheme, ColorScheme::Classic);
    assert_eq!(summary.emoji_set, EmojiSet::Mixed);

    let no_set = r#"{"moves":7,"time_seconds":20,"difficulty":"medium","completed":true,"color_scheme":"neon"}"#;
    let summary: SessionSummary = serde_json::from_str(no_set).unwrap();
    assert_eq!(summary.color_scheme, ColorScheme::Neon);
    assert_eq!(summary.emoji_set, EmojiSet::Mixed);

    let missing_moves = r#"{"difficulty":"easy","completed":false}"#;
    assert!(serde_json::from_str::<SessionSummary>(missing_moves).is_err());
}

#[test]
fn preference_record_round_trip_through_controller() {
    let (mut ctl, _) = easy_controller(42);
    ctl.open_settings().unwrap();
    ctl.apply_settings(Preferences {
        color_scheme: ColorScheme::Forest,
        emoji_set: EmojiSet::Mixed,
    })
    .unwrap();

    let record = UserPreferenceRecord::from(ctl.preferences());
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"memory_color_scheme":"forest","memory_emoji_set":"mixed"}"#
    );

    let empty: UserPreferenceRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.into_preferences(), Preferences::default());
}

#[test]
fn unknown_enum_values_are_rejected() {
    let bad = r#"{"memory_emoji_set":"dinosaurs"}"#;
    assert!(serde_json::from_str::<UserPreferenceRecord>(bad).is_err());
}
