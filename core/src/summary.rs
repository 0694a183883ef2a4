/// Progress counters for a checking session
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttentionReason {
    /// Absent from the translated file
    Missing,
    /// Present but empty
    Empty,
    /// Same text as the original
    Identical,
}

impl AttentionReason {
    pub fn of(original: &str, translated: &str, present_in_file: bool) -> Option<Self> {
        if !present_in_file {
            Some(Self::Missing)
        } else if translated.is_empty() {
            Some(Self::Empty)
        } else if translated == original {
            Some(Self::Identical)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::Identical => "identical",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub total: usize,
    pub missing: usize,
    pub empty: usize,
    pub identical: usize,
    pub translated: usize,
    pub stray: usize,
}

impl CheckSummary {
    pub fn record(&mut self, reason: Option<AttentionReason>) {
        self.total += 1;
        match reason {
            Some(AttentionReason::Missing) => self.missing += 1,
            Some(AttentionReason::Empty) => self.empty += 1,
            Some(AttentionReason::Identical) => self.identical += 1,
            None => self.translated += 1,
        }
    }

    pub fn attention(&self) -> usize {
        self.missing + self.empty + self.identical
    }

    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.translated as f64 / self.total as f64
        }
    }
}
