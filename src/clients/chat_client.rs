use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FetchError;
use crate::models::query::RequestPayload;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

pub fn completion_request(payload: &RequestPayload) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: payload.model_id.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: payload.system_instruction.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: payload.user_query.clone(),
            },
        ],
        max_tokens: payload.max_tokens,
        temperature: payload.temperature,
        stream: payload.stream,
    }
}

// Single POST to the chat-completion endpoint. On 2xx the raw body comes
// back untouched; shape checks belong to the normalizer. No retry and no
// timeout beyond the reqwest default.
pub async fn post_chat(
    http: &reqwest::Client,
    endpoint: &str,
    payload: &RequestPayload,
    api_key: &str,
) -> Result<String, FetchError> {
    let request = completion_request(payload);

    debug!(model = %payload.model_id, "chat completion request");

    let response = http
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(FetchError::Transport(format!(
            "status {}: {}",
            status, text
        )));
    }

    Ok(text)
}
