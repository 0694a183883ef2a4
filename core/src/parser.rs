//! Line-oriented parser for `key = value` files with `// Section` headers.
//!
//! The original-language file yields both the section skeleton ([`KeyMap`])
//! and its values. The translated file only contributes values: its header
//! lines never become structure.

use crate::encoding::{self, BOM_CHAR};
use crate::error::CheckerError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SECTION_MARKER: &str = "// ";
pub const SEPARATOR: &str = " = ";

/// Insertion-ordered key → value mapping.
pub type ValueMap = IndexMap<String, String>;

/// Ordered sections of the original file.
pub type KeyMap = Vec<Section>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// What a single physical line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Header(&'a str),
    Entry { key: &'a str, value: &'a str },
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub key_map: KeyMap,
    pub values: ValueMap,
}

/// Strip BOM, spaces and line terminators from both ends.
pub fn strip_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == BOM_CHAR || c == ' ' || c == '\n' || c == '\r')
}

pub fn classify_line(raw: &str) -> Line<'_> {
    let stripped = strip_line(raw);
    if stripped.chars().count() > SECTION_MARKER.len() {
        if let Some(title) = stripped.strip_prefix(SECTION_MARKER) {
            return Line::Header(title);
        }
    }
    classify_entry(raw)
}

/// Key/value branch only, as applied to the translated file.
pub fn classify_entry(raw: &str) -> Line<'_> {
    if !raw.contains(SEPARATOR) {
        return Line::Ignored;
    }
    // "key = " loses its separator to stripping
    match strip_line(raw).split_once(SEPARATOR) {
        Some((key, value)) => Line::Entry { key, value },
        None => Line::Ignored,
    }
}

pub fn parse_key_text(text: &str) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    let mut current = Section::default();

    for raw in text.lines() {
        match classify_line(raw) {
            Line::Header(title) => {
                let finished = std::mem::replace(&mut current, Section::new(title));
                if !finished.items.is_empty() {
                    parsed.key_map.push(finished);
                }
            }
            Line::Entry { key, value } => {
                current.items.push(key.to_string());
                parsed.values.insert(key.to_string(), value.to_string());
            }
            Line::Ignored => {}
        }
    }

    if !current.items.is_empty() {
        parsed.key_map.push(current);
    }
    parsed
}

pub fn parse_value_text(text: &str) -> ValueMap {
    let mut values = ValueMap::new();
    for raw in text.lines() {
        if let Line::Entry { key, value } = classify_entry(raw) {
            values.insert(key.to_string(), value.to_string());
        }
    }
    values
}

/// Parse the original-language file.
pub fn parse_key_file(path: &Path) -> Result<ParsedFile, CheckerError> {
    let (text, _) = encoding::read_text(path)?;
    let parsed = parse_key_text(&text);
    log::debug!(
        "parsed {}: {} sections, {} keys",
        path.display(),
        parsed.key_map.len(),
        parsed.values.len()
    );
    Ok(parsed)
}

/// Parse the translated-language file.
pub fn parse_value_file(path: &Path) -> Result<ValueMap, CheckerError> {
    let (text, _) = encoding::read_text(path)?;
    let values = parse_value_text(&text);
    log::debug!("parsed {}: {} values", path.display(), values.len());
    Ok(values)
}

/// Insert an empty value for every original key the translation lacks.
/// Returns the keys that had to be filled in.
pub fn backfill(translated: &mut ValueMap, original: &ValueMap) -> Vec<String> {
    let mut filled = Vec::new();
    for key in original.keys() {
        if !translated.contains_key(key) {
            translated.insert(key.clone(), String::new());
            filled.push(key.clone());
        }
    }
    filled
}
