use tracing::warn;

use crate::clients::chat_client::ChatCompletionResponse;
use crate::error::FetchError;
use crate::models::event::{EventRecord, FetchOutcome, NormalizedResult};

// Turns a transport outcome into exactly one NormalizedResult plus at most
// one advisory:
//   - transport/auth failure        -> NoResult + advisory
//   - body not chat-completion JSON -> RawText(body)
//   - structured block decodes      -> EventList
//   - structured block malformed    -> RawText(content) + Parse advisory
//   - no structured block at all    -> RawText(content), expected degraded mode
pub fn normalize(outcome: Result<String, FetchError>) -> FetchOutcome {
    let body = match outcome {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "chat completion call failed");
            return FetchOutcome::failed(err);
        }
    };

    let Some(content) = assistant_content(&body) else {
        return FetchOutcome::clean(NormalizedResult::RawText(body));
    };

    let Some(block) = structured_block(&content) else {
        return FetchOutcome::clean(NormalizedResult::RawText(content));
    };

    match decode_events(block) {
        Ok(events) => FetchOutcome::clean(NormalizedResult::EventList(events)),
        Err(err) => {
            warn!(error = %err, "structured block did not decode, keeping raw text");
            FetchOutcome {
                result: NormalizedResult::RawText(content),
                advisory: Some(FetchError::Parse(err.to_string())),
            }
        }
    }
}

// First choice's message content, or None when the body is not
// chat-completion shaped.
fn assistant_content(body: &str) -> Option<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).ok()?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
}

// Phase one of the extraction: locate the first bracket or brace run,
// greedy to the last matching closing delimiter. An unterminated run is
// still a candidate so the decode phase can report it. Only the first run
// is ever considered; later blocks in the same reply are ignored.
pub fn structured_block(text: &str) -> Option<&str> {
    let open = text.find(['[', '{'])?;
    let close = if text.as_bytes()[open] == b'[' { ']' } else { '}' };
    match text.rfind(close) {
        Some(end) if end > open => Some(&text[open..=end]),
        _ => Some(&text[open..]),
    }
}

// Phase two: strict decode. A lone object counts as a one-element list;
// missing keys stay absent, unknown keys are dropped by serde.
fn decode_events(block: &str) -> Result<Vec<EventRecord>, serde_json::Error> {
    if block.starts_with('[') {
        serde_json::from_str(block)
    } else {
        serde_json::from_str::<EventRecord>(block).map(|record| vec![record])
    }
}
