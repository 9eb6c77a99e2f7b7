use async_trait::async_trait;

use crate::clients::chat_client;
use crate::error::FetchError;
use crate::models::query::RequestPayload;

// Seam for the remote endpoint so the fetch flow can be exercised with
// fakes. Ok carries the raw 2xx body; Err is always a transport condition.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn complete(
        &self,
        payload: &RequestPayload,
        api_key: &str,
    ) -> Result<String, FetchError>;
}

pub struct ChatService {
    endpoint: String,
    http: reqwest::Client,
}

impl ChatService {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatApi for ChatService {
    async fn complete(
        &self,
        payload: &RequestPayload,
        api_key: &str,
    ) -> Result<String, FetchError> {
        chat_client::post_chat(&self.http, &self.endpoint, payload, api_key).await
    }
}
