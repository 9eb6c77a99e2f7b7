use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokyoEvents::credentials::ConfiguredCredentials;
use tokyoEvents::error::FetchError;
use tokyoEvents::models::event::NormalizedResult;
use tokyoEvents::models::query::{QueryParams, RequestPayload};
use tokyoEvents::service::chat_service::{ChatApi, ChatService};
use tokyoEvents::service::event_service::EventService;
use tokyoEvents::service::query_builder::QueryProfile;

struct FakeChat {
    response: Result<String, FetchError>,
    calls: AtomicUsize,
}

impl FakeChat {
    fn new(response: Result<String, FetchError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatApi for FakeChat {
    async fn complete(
        &self,
        _payload: &RequestPayload,
        _api_key: &str,
    ) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

fn params() -> QueryParams {
    QueryParams {
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        category_filters: None,
        result_limit: 10,
    }
}

fn chat_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn with_key(chat: Arc<dyn ChatApi>) -> EventService {
    let credentials = Arc::new(ConfiguredCredentials::new(Some("sk-test".to_string())));
    EventService::new(chat, credentials, QueryProfile::default())
}

#[tokio::test]
async fn missing_credential_short_circuits_before_any_call() {
    let chat = FakeChat::new(Ok(chat_body("[]")));
    let credentials = Arc::new(ConfiguredCredentials::new(None));
    let service = EventService::new(chat.clone(), credentials, QueryProfile::default());

    let outcome = service.fetch(&params()).await;

    assert_eq!(outcome.result, NormalizedResult::NoResult);
    assert_eq!(outcome.advisory, Some(FetchError::Auth));
    assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn blank_credential_counts_as_missing() {
    let chat = FakeChat::new(Ok(chat_body("[]")));
    let credentials = Arc::new(ConfiguredCredentials::new(Some("   ".to_string())));
    let service = EventService::new(chat.clone(), credentials, QueryProfile::default());

    let outcome = service.fetch(&params()).await;

    assert_eq!(outcome.advisory, Some(FetchError::Auth));
    assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn success_body_flows_through_to_event_list() {
    let chat = FakeChat::new(Ok(chat_body(
        r#"[{"イベント名":"夏祭り","日時":"2026-09-05","場所":"上野公園"}]"#,
    )));
    let service = with_key(chat.clone());

    let outcome = service.fetch(&params()).await;

    let NormalizedResult::EventList(events) = outcome.result else {
        panic!("expected EventList, got {:?}", outcome.result);
    };
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name.as_deref(), Some("夏祭り"));
    assert_eq!(chat.call_count(), 1);
}

#[tokio::test]
async fn transport_failure_yields_no_result_with_advisory() {
    let chat = FakeChat::new(Err(FetchError::Transport("status 500".to_string())));
    let service = with_key(chat.clone());

    let outcome = service.fetch(&params()).await;

    assert_eq!(outcome.result, NormalizedResult::NoResult);
    assert!(matches!(outcome.advisory, Some(FetchError::Transport(_))));
    assert_eq!(chat.call_count(), 1);
}

#[tokio::test]
async fn prose_reply_reaches_caller_as_raw_text() {
    let chat = FakeChat::new(Ok(chat_body("該当するイベントは見つかりませんでした。")));
    let service = with_key(chat);

    let outcome = service.fetch(&params()).await;

    assert_eq!(
        outcome.result,
        NormalizedResult::RawText("該当するイベントは見つかりませんでした。".to_string())
    );
    assert_eq!(outcome.advisory, None);
}

// Real client against a port nothing listens on: the refused connection
// must surface as a Transport advisory, never as a panic or an Err.
#[tokio::test]
async fn connection_refused_becomes_transport_advisory() {
    let chat = Arc::new(ChatService::new(
        "http://127.0.0.1:9/v1/chat/completions".to_string(),
    ));
    let service = with_key(chat);

    let outcome = service.fetch(&params()).await;

    assert_eq!(outcome.result, NormalizedResult::NoResult);
    assert!(matches!(outcome.advisory, Some(FetchError::Transport(_))));
}
