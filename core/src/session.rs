//! A checking session over one original/translated file pair.
//!
//! The session is what a front end talks to: open it with two paths, show
//! the two views, push edited values back, then save. It owns its parsed
//! structures; nothing is shared between sessions.

use crate::config::CheckerConfig;
use crate::differ::{self, CheckItem, Classification};
use crate::error::CheckerError;
use crate::parser::{self, KeyMap, ValueMap};
use crate::summary::{AttentionReason, CheckSummary};
use crate::writer::{self, SaveOptions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub written_keys: usize,
    pub dropped_empty: usize,
    pub dropped_stray: usize,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CheckSession {
    original_path: PathBuf,
    translated_path: PathBuf,
    save_options: SaveOptions,
    key_map: KeyMap,
    original: ValueMap,
    translated: ValueMap,
    /// Keys the translated file lacked until an edit supplied them
    missing: HashSet<String>,
}

impl CheckSession {
    pub fn open(
        original_path: impl AsRef<Path>,
        translated_path: impl AsRef<Path>,
    ) -> Result<Self, CheckerError> {
        Self::open_with(original_path, translated_path, &CheckerConfig::default())
    }

    pub fn open_with(
        original_path: impl AsRef<Path>,
        translated_path: impl AsRef<Path>,
        config: &CheckerConfig,
    ) -> Result<Self, CheckerError> {
        let original_path = original_path.as_ref();
        let translated_path = translated_path.as_ref();

        let parsed = parser::parse_key_file(original_path)?;
        let translated = parser::parse_value_file(translated_path)?;

        let session = Self::from_parsed(parsed, translated, config.save_options())
            .with_paths(original_path, translated_path);
        log::debug!(
            "opened check session: {} keys, {} missing from {}",
            session.original.len(),
            session.missing.len(),
            translated_path.display()
        );
        Ok(session)
    }

    /// Build a session from already parsed content. Paths default to empty
    /// until [`CheckSession::with_paths`] is called.
    pub fn from_parsed(
        parsed: parser::ParsedFile,
        mut translated: ValueMap,
        save_options: SaveOptions,
    ) -> Self {
        let missing = parser::backfill(&mut translated, &parsed.values)
            .into_iter()
            .collect();
        Self {
            original_path: PathBuf::new(),
            translated_path: PathBuf::new(),
            save_options,
            key_map: parsed.key_map,
            original: parsed.values,
            translated,
            missing,
        }
    }

    pub fn with_paths(mut self, original_path: &Path, translated_path: &Path) -> Self {
        self.original_path = original_path.to_path_buf();
        self.translated_path = translated_path.to_path_buf();
        self
    }

    pub fn original_path(&self) -> &Path {
        &self.original_path
    }

    pub fn translated_path(&self) -> &Path {
        &self.translated_path
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn original_values(&self) -> &ValueMap {
        &self.original
    }

    pub fn translated_values(&self) -> &ValueMap {
        &self.translated
    }

    pub fn classification(&self) -> Classification {
        differ::classify(&self.key_map, &self.original, &self.translated)
    }

    /// Entries that are missing, empty, or identical to the original.
    pub fn attention_items(&self) -> Vec<CheckItem> {
        self.classification().attention_items()
    }

    pub fn translated_items(&self) -> Vec<CheckItem> {
        self.classification().translated_items()
    }

    /// Keys of the translated file that the original does not know. They are
    /// never shown and are dropped on save.
    pub fn stray_keys(&self) -> Vec<&str> {
        self.translated
            .keys()
            .filter(|key| !self.original.contains_key(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn reason(&self, key: &str) -> Option<AttentionReason> {
        let original = self.original.get(key).map(String::as_str).unwrap_or("");
        let translated = self.translated.get(key).map(String::as_str).unwrap_or("");
        AttentionReason::of(original, translated, !self.missing.contains(key))
    }

    pub fn summary(&self) -> CheckSummary {
        let mut summary = CheckSummary::default();
        for section in &self.key_map {
            for key in &section.items {
                summary.record(self.reason(key));
            }
        }
        summary.stray = self.stray_keys().len();
        summary
    }

    /// Replace translated values. Line breaks inside a value become spaces so
    /// the saved file stays one entry per line. Returns how many edited keys
    /// the original file does not contain.
    pub fn submit_edits<I, K, V>(&mut self, edits: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut unknown = 0;
        for (key, value) in edits {
            let key = key.into();
            if !self.original.contains_key(&key) {
                log::warn!("edit for unknown key `{}` will not be saved", key);
                unknown += 1;
            }
            self.missing.remove(&key);
            self.translated.insert(key, single_line(value.as_ref()));
        }
        unknown
    }

    /// The file contents a save would produce.
    pub fn render(&self) -> String {
        writer::render_translation(&self.key_map, &self.translated)
    }

    /// Overwrite the translated file with the current values.
    pub fn save(&self) -> Result<SaveOutcome, CheckerError> {
        self.save_to(&self.translated_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<SaveOutcome, CheckerError> {
        let stray = self.stray_keys();
        if !stray.is_empty() {
            log::warn!(
                "dropping {} key(s) not present in the original file: {}",
                stray.len(),
                stray.join(", ")
            );
        }

        let stats =
            writer::write_translation(path, &self.key_map, &self.translated, &self.save_options)?;
        Ok(SaveOutcome {
            path: path.to_path_buf(),
            written_keys: stats.written_keys,
            dropped_empty: stats.dropped_empty,
            dropped_stray: stray.len(),
            saved_at: Utc::now(),
        })
    }
}

fn single_line(value: &str) -> String {
    if !value.contains(['\r', '\n']) {
        return value.to_string();
    }
    value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}
