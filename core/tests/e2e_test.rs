//! End-to-End Tests for the checking workflow
//!
//! These tests drive a session the way a front end would:
//! 1. Open both files from disk
//! 2. Read the attention and translated views
//! 3. Submit edits
//! 4. Save and re-open the result

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use translation_checker_core::{
    parse_key_text, AttentionReason, CheckSession, CheckerConfig, CheckerError, Encoding,
};

/// Test fixture contents
const FIXTURE_ORIGINAL: &str = include_str!("fixtures/original.txt");
const FIXTURE_TRANSLATED: &str = include_str!("fixtures/translated.txt");

fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let original = dir.path().join("english.txt");
    let translated = dir.path().join("french.txt");
    fs::write(&original, FIXTURE_ORIGINAL).expect("Failed to write original");
    fs::write(&translated, FIXTURE_TRANSLATED).expect("Failed to write translation");
    (dir, original, translated)
}

fn keys(items: Vec<translation_checker_core::CheckItem>) -> Vec<String> {
    items.into_iter().map(|item| item.key).collect()
}

#[test]
fn test_e2e_views_from_disk() {
    let (_dir, original, translated) = workspace();
    let session = CheckSession::open(&original, &translated).expect("Failed to open session");

    assert_eq!(
        keys(session.attention_items()),
        vec!["hello", "welcome", "item.potion", "volume"]
    );
    assert_eq!(
        keys(session.translated_items()),
        vec!["bye", "item.sword", "item.shield"]
    );

    let attention = session.attention_items();
    assert_eq!(attention[0].section, "Greetings");
    assert_eq!(attention[0].original, "Hello");
    assert_eq!(attention[0].translated, "Hello");
    assert_eq!(attention[1].original, "Welcome, %s!");
    assert_eq!(attention[3].section, "Settings");

    // Titles come from the original file, never from the translation
    let classification = session.classification();
    assert!(classification
        .attention
        .iter()
        .chain(classification.translated.iter())
        .all(|view| ["Greetings", "Inventory", "Settings"].contains(&view.title.as_str())));

    assert_eq!(session.translated_values()["item.shield"], "Robuste = fiable");
    assert_eq!(session.stray_keys(), vec!["legacy.key"]);
}

#[test]
fn test_e2e_edit_save_reopen() {
    let (_dir, original, translated) = workspace();
    let mut session = CheckSession::open(&original, &translated).expect("Failed to open session");

    session.submit_edits([
        ("hello", "Bonjour"),
        ("welcome", "Bienvenue, %s !"),
        ("item.potion", "Potion"),
    ]);
    let outcome = session.save().expect("Failed to save");
    assert_eq!(outcome.path, translated);
    assert_eq!(outcome.written_keys, 6);
    assert_eq!(outcome.dropped_empty, 1);
    assert_eq!(outcome.dropped_stray, 1);

    let written = fs::read_to_string(&translated).expect("Failed to read saved file");
    assert_eq!(
        written,
        "// Greetings\n\
hello = Bonjour\n\
bye = Au revoir\n\
welcome = Bienvenue, %s !\n\
\n\
// Inventory\n\
item.sword = Une lame tranchante\n\
item.shield = Robuste = fiable\n\
item.potion = Potion\n\
\n\
// Settings\n\
\n"
    );

    let reopened = CheckSession::open(&original, &translated).expect("Failed to reopen");
    assert_eq!(keys(reopened.attention_items()), vec!["item.potion", "volume"]);
    assert_eq!(reopened.reason("item.potion"), Some(AttentionReason::Identical));
    assert_eq!(reopened.reason("volume"), Some(AttentionReason::Missing));
    assert!(reopened.stray_keys().is_empty());

    let summary = reopened.summary();
    assert_eq!(summary.total, 7);
    assert_eq!(summary.translated, 5);
    assert_eq!(summary.attention(), 2);
}

#[test]
fn test_e2e_save_without_edits_is_stable() {
    let (_dir, original, translated) = workspace();

    let first = CheckSession::open(&original, &translated).expect("open 1");
    first.save().expect("save 1");
    let after_first = fs::read_to_string(&translated).expect("read 1");

    let second = CheckSession::open(&original, &translated).expect("open 2");
    second.save().expect("save 2");
    let after_second = fs::read_to_string(&translated).expect("read 2");

    assert_eq!(after_first, after_second);
    assert_eq!(
        keys(first.attention_items()),
        keys(second.attention_items())
    );
    // Empty entries never reach the file
    assert!(!after_second.contains("welcome"));
    assert!(!after_second.contains("volume"));
}

#[test]
fn test_e2e_empty_translation_file() {
    let dir = TempDir::new().expect("temp dir");
    let original = dir.path().join("english.txt");
    let translated = dir.path().join("french.txt");
    fs::write(&original, "// Greetings\nhello = Hello\nbye = Goodbye\n").expect("write");
    fs::write(&translated, "").expect("write");

    let session = CheckSession::open(&original, &translated).expect("open");
    assert_eq!(session.original_values()["hello"], "Hello");
    assert_eq!(session.translated_values()["hello"], "");
    assert_eq!(session.translated_values()["bye"], "");
    assert_eq!(keys(session.attention_items()), vec!["hello", "bye"]);
    assert!(session.translated_items().is_empty());

    session.save().expect("save");
    assert_eq!(
        fs::read_to_string(&translated).expect("read"),
        "// Greetings\n\n"
    );
}

#[test]
fn test_e2e_config_controls_encoding() {
    let (_dir, original, translated) = workspace();
    let config = CheckerConfig::from_json(r#"{"encoding": "utf8Bom", "atomicSave": false}"#)
        .expect("valid config");

    let session = CheckSession::open_with(&original, &translated, &config).expect("open");
    session.save().expect("save");

    let bytes = fs::read(&translated).expect("read");
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_eq!(Encoding::detect(&bytes), Encoding::Utf8Bom);

    // The BOM must not leak into the first header
    let reparsed = parse_key_text(&String::from_utf8(bytes).expect("utf8"));
    assert_eq!(reparsed.key_map[0].title, "Greetings");
}

#[test]
fn test_e2e_open_errors() {
    let (dir, original, _translated) = workspace();

    let missing = dir.path().join("missing.txt");
    match CheckSession::open(&original, &missing) {
        Err(CheckerError::FileAccess { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected FileAccess, got {other:?}"),
    }

    let garbage = dir.path().join("garbage.txt");
    fs::write(&garbage, [0xC3, 0x28, b'\n']).expect("write");
    assert!(matches!(
        CheckSession::open(&garbage, &original),
        Err(CheckerError::Decoding { .. })
    ));
}
