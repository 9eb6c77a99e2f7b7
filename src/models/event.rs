use serde::{Deserialize, Serialize};

use crate::error::FetchError;

// One row of event data as the model emits it. The prompt asks for the
// Japanese keys; English aliases are accepted because some models answer
// with translated keys anyway. Every field is optional at the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(
        rename = "イベント名",
        alias = "name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "日時",
        alias = "datetime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub datetime: Option<String>,
    #[serde(
        rename = "場所",
        alias = "location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        rename = "説明",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "URL",
        alias = "url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

// The three-way outcome every consumer matches exhaustively on. Records keep
// the order the model emitted them; no dedup, no ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum NormalizedResult {
    EventList(Vec<EventRecord>),
    RawText(String),
    NoResult,
}

// Result plus at most one user-visible failure condition. A Parse advisory
// rides along with RawText; Auth/Transport come with NoResult.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub result: NormalizedResult,
    pub advisory: Option<FetchError>,
}

impl FetchOutcome {
    pub fn clean(result: NormalizedResult) -> Self {
        FetchOutcome {
            result,
            advisory: None,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        FetchOutcome {
            result: NormalizedResult::NoResult,
            advisory: Some(error),
        }
    }
}
