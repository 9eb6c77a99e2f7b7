use chrono::NaiveDate;
use serde::Serialize;

// What the sidebar hands us. start_date <= end_date and the 5-100 limit
// range are enforced by the caller before this reaches the core.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_filters: Option<Vec<String>>,
    pub result_limit: u32,
}

// The fully built outbound request. Built fresh per call, never stored, and
// deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestPayload {
    pub system_instruction: String,
    pub user_query: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}
