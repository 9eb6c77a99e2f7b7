use std::sync::Arc;

use tracing::debug;

use crate::credentials::CredentialProvider;
use crate::error::FetchError;
use crate::models::event::FetchOutcome;
use crate::models::query::QueryParams;
use crate::service::chat_service::ChatApi;
use crate::service::normalizer::normalize;
use crate::service::query_builder::QueryProfile;

// The one operation the display layer calls: resolve credential, build the
// payload, one awaited POST, normalize. The caller owns the outcome; no
// state survives between invocations and nothing is retried.
pub struct EventService {
    chat: Arc<dyn ChatApi>,
    credentials: Arc<dyn CredentialProvider>,
    profile: QueryProfile,
}

impl EventService {
    pub fn new(
        chat: Arc<dyn ChatApi>,
        credentials: Arc<dyn CredentialProvider>,
        profile: QueryProfile,
    ) -> Self {
        Self {
            chat,
            credentials,
            profile,
        }
    }

    pub async fn fetch(&self, params: &QueryParams) -> FetchOutcome {
        // Missing credential short-circuits before any network attempt.
        let Some(api_key) = self.credentials.resolve() else {
            return normalize(Err(FetchError::Auth));
        };

        let payload = self.profile.build(params);
        debug!(
            start = %params.start_date,
            end = %params.end_date,
            limit = params.result_limit,
            "fetching events"
        );

        let outcome = self.chat.complete(&payload, &api_key).await;
        normalize(outcome)
    }
}
