use serde::Serialize;
use std::fmt::Write;
use translation_checker_core::{CheckSession, CheckSummary, SaveOutcome, SectionView};

/// Machine-readable form of a check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckReport<'a> {
    pub original: &'a std::path::Path,
    pub translated: &'a std::path::Path,
    pub summary: CheckSummary,
    pub attention: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<Vec<SectionView>>,
    pub stray_keys: Vec<&'a str>,
}

impl<'a> CheckReport<'a> {
    pub(crate) fn build(session: &'a CheckSession, show_translated: bool) -> Self {
        let classification = session.classification();
        Self {
            original: session.original_path(),
            translated: session.translated_path(),
            summary: session.summary(),
            attention: classification.attention,
            done: show_translated.then_some(classification.translated),
            stray_keys: session.stray_keys(),
        }
    }
}

pub(crate) fn render_text(session: &CheckSession, report: &CheckReport<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Missing, empty, or identical to the original:");
    render_views(&mut out, session, &report.attention);

    if let Some(done) = &report.done {
        let _ = writeln!(out, "Translated:");
        render_views(&mut out, session, done);
    }

    if !report.stray_keys.is_empty() {
        let _ = writeln!(
            out,
            "Not in the original (dropped on save): {}",
            report.stray_keys.join(", ")
        );
    }

    out.push_str(&render_summary(&report.summary));
    out
}

fn render_views(out: &mut String, session: &CheckSession, views: &[SectionView]) {
    if views.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for view in views {
        let _ = writeln!(out, "  [{}]", view.title);
        for item in &view.items {
            let reason = session
                .reason(&item.key)
                .map(|reason| format!(" ({})", reason.label()))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "    {}: {:?} -> {:?}{}",
                item.key, item.original, item.translated, reason
            );
        }
    }
}

pub(crate) fn render_summary(summary: &CheckSummary) -> String {
    format!(
        "{} of {} entries translated ({:.1}%), {} missing, {} empty, {} identical\n",
        summary.translated,
        summary.total,
        summary.completion_rate() * 100.0,
        summary.missing,
        summary.empty,
        summary.identical
    )
}

pub(crate) fn render_outcome(outcome: &SaveOutcome) -> String {
    let mut line = format!(
        "Saved {}: {} entries written",
        outcome.path.display(),
        outcome.written_keys
    );
    if outcome.dropped_empty > 0 {
        let _ = write!(line, ", {} empty left out", outcome.dropped_empty);
    }
    if outcome.dropped_stray > 0 {
        let _ = write!(line, ", {} unknown keys dropped", outcome.dropped_stray);
    }
    line.push('\n');
    line
}
