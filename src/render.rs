use crate::models::event::{EventRecord, FetchOutcome, NormalizedResult};

const UNKNOWN: &str = "不明";
const DESCRIPTION_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Cards,
    Table,
}

// Terminal rendering of a fetch outcome. Pure string building so the views
// are testable; the CLI just prints the result.
pub fn render_outcome(outcome: &FetchOutcome, view: View) -> String {
    let mut out = String::new();
    if let Some(advisory) = &outcome.advisory {
        out.push_str(&format!("注意: {}\n", advisory));
    }
    match &outcome.result {
        NormalizedResult::EventList(events) => {
            out.push_str(&format!("イベント一覧 ({}件)\n", events.len()));
            match view {
                View::Cards => out.push_str(&render_cards(events)),
                View::Table => out.push_str(&render_table(events)),
            }
        }
        NormalizedResult::RawText(text) => {
            out.push_str("APIからのレスポンス:\n");
            out.push_str(text);
            out.push('\n');
        }
        NormalizedResult::NoResult => {
            out.push_str("イベント情報がまだありません。\n");
        }
    }
    out
}

pub fn render_cards(events: &[EventRecord]) -> String {
    let mut out = String::new();
    for event in events {
        out.push_str(&format!(
            "### {}\n",
            event.name.as_deref().unwrap_or("イベント名不明")
        ));
        out.push_str(&format!(
            "日時: {}\n",
            event.datetime.as_deref().unwrap_or(UNKNOWN)
        ));
        out.push_str(&format!(
            "場所: {}\n",
            event.location.as_deref().unwrap_or(UNKNOWN)
        ));
        match event.description.as_deref() {
            Some(description) if !description.is_empty() => {
                out.push_str(&truncate_chars(description, DESCRIPTION_LIMIT));
                out.push('\n');
            }
            _ => out.push_str("説明なし\n"),
        }
        if let Some(url) = event.url.as_deref() {
            if !url.is_empty() && url != "N/A" {
                out.push_str(&format!("イベントサイト: {}\n", url));
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_table(events: &[EventRecord]) -> String {
    let mut out = String::from("イベント名 | 日時 | 場所 | URL\n");
    for event in events {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            event.name.as_deref().unwrap_or(""),
            event.datetime.as_deref().unwrap_or(""),
            event.location.as_deref().unwrap_or(""),
            event.url.as_deref().unwrap_or(""),
        ));
    }
    out
}

// Char-based truncation; byte slicing would split multibyte text.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit).collect();
    format!("{}...", head)
}
