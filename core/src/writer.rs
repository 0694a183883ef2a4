//! Serializes translated values back into the sectioned file format.
//!
//! Layout comes entirely from the original file's [`KeyMap`]: every section
//! gets its header, keys follow in original order, empty values are left out
//! and a blank line closes each section.

use crate::encoding::Encoding;
use crate::error::CheckerError;
use crate::parser::{KeyMap, ValueMap, SECTION_MARKER, SEPARATOR};
use crate::persist;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    pub encoding: Encoding,
    pub atomic: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            atomic: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStats {
    pub written_keys: usize,
    pub dropped_empty: usize,
}

pub fn render_translation(key_map: &KeyMap, translated: &ValueMap) -> String {
    render_with_stats(key_map, translated).0
}

pub fn render_with_stats(key_map: &KeyMap, translated: &ValueMap) -> (String, RenderStats) {
    let mut out = String::new();
    let mut stats = RenderStats::default();

    for section in key_map {
        out.push_str(SECTION_MARKER);
        out.push_str(&section.title);
        out.push('\n');

        for key in &section.items {
            match translated.get(key) {
                Some(value) if !value.is_empty() => {
                    out.push_str(key);
                    out.push_str(SEPARATOR);
                    out.push_str(value);
                    out.push('\n');
                    stats.written_keys += 1;
                }
                _ => stats.dropped_empty += 1,
            }
        }

        out.push('\n');
    }

    (out, stats)
}

/// Overwrite `path` with the rendered translation.
pub fn write_translation(
    path: &Path,
    key_map: &KeyMap,
    translated: &ValueMap,
    options: &SaveOptions,
) -> Result<RenderStats, CheckerError> {
    let (text, stats) = render_with_stats(key_map, translated);
    let bytes = options.encoding.encode(&text);
    persist::replace_file(path, &bytes, options.atomic)
        .map_err(|err| CheckerError::file_access(path, err))?;
    log::debug!(
        "wrote {} ({} keys, {} empty dropped)",
        path.display(),
        stats.written_keys,
        stats.dropped_empty
    );
    Ok(stats)
}
