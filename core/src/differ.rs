/// Splits the original file's keys into "needs attention" and "translated"
use crate::parser::{KeyMap, ValueMap};
use serde::{Deserialize, Serialize};

/// One key with both of its values, tagged with the section it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub section: String,
    pub key: String,
    pub original: String,
    pub translated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub title: String,
    pub items: Vec<CheckItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub attention: Vec<SectionView>,
    pub translated: Vec<SectionView>,
}

impl Classification {
    pub fn attention_items(&self) -> Vec<CheckItem> {
        flatten(&self.attention)
    }

    pub fn translated_items(&self) -> Vec<CheckItem> {
        flatten(&self.translated)
    }
}

/// Missing, empty, or identical to the original.
pub fn needs_attention(original: &str, translated: &str) -> bool {
    translated.is_empty() || translated == original
}

pub fn classify(key_map: &KeyMap, original: &ValueMap, translated: &ValueMap) -> Classification {
    let mut result = Classification::default();

    for section in key_map {
        let mut attention = Vec::new();
        let mut done = Vec::new();

        for key in &section.items {
            let item = CheckItem {
                section: section.title.clone(),
                key: key.clone(),
                original: lookup(original, key).to_string(),
                translated: lookup(translated, key).to_string(),
            };
            if needs_attention(&item.original, &item.translated) {
                attention.push(item);
            } else {
                done.push(item);
            }
        }

        if !attention.is_empty() {
            result.attention.push(SectionView {
                title: section.title.clone(),
                items: attention,
            });
        }
        if !done.is_empty() {
            result.translated.push(SectionView {
                title: section.title.clone(),
                items: done,
            });
        }
    }

    result
}

fn lookup<'a>(values: &'a ValueMap, key: &str) -> &'a str {
    values.get(key).map(String::as_str).unwrap_or("")
}

fn flatten(views: &[SectionView]) -> Vec<CheckItem> {
    views.iter().flat_map(|view| view.items.iter().cloned()).collect()
}
