use crate::models::query::{QueryParams, RequestPayload};

// Sentinel the category multiselect uses for "no filtering".
pub const ALL_CATEGORIES: &str = "すべて";

const SYSTEM_INSTRUCTION: &str = "あなたは都市のイベント情報の専門家です。\
実在するイベント情報をできるだけ正確に、指定されたJSON形式のみで回答してください。\
余計な前置きやマークダウンは付けないでください。";

// Deployment-fixed knobs for query construction. The city and generation
// parameters come from config at startup; build() itself stays pure.
#[derive(Debug, Clone)]
pub struct QueryProfile {
    pub city: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for QueryProfile {
    fn default() -> Self {
        QueryProfile {
            city: "東京".to_string(),
            model_id: "gpt-4o-mini".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

impl QueryProfile {
    // Pure transformation: same params in, byte-identical payload out.
    // Date validity is the caller's problem; the limit is embedded verbatim.
    pub fn build(&self, params: &QueryParams) -> RequestPayload {
        let start = params.start_date.format("%Y/%m/%d");
        let end = params.end_date.format("%Y/%m/%d");

        let mut query = format!(
            "{city}で{start}から{end}までに開催されるイベントを{limit}件教えてください。",
            city = self.city,
            start = start,
            end = end,
            limit = params.result_limit,
        );

        if let Some(category_text) = category_text(params.category_filters.as_deref()) {
            query.push_str(&format!(
                "特に {category_text} に関連するイベントを優先してください。"
            ));
        }

        query.push_str(
            "回答は必ずJSONの配列のみで返してください。\
             各イベントは「イベント名」「日時」「場所」「説明」「URL」\
             のキーを持つオブジェクトにしてください。",
        );

        RequestPayload {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_query: query,
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        }
    }
}

// None when no qualifier should be appended: absent filters, an empty set,
// or the bare ALL_CATEGORIES sentinel. Otherwise the values joined with
// spaces in caller order, no dedup.
fn category_text(filters: Option<&[String]>) -> Option<String> {
    let filters = filters?;
    if filters.is_empty() || (filters.len() == 1 && filters[0] == ALL_CATEGORIES) {
        return None;
    }
    Some(filters.join(" "))
}
