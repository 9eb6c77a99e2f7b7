#![allow(non_snake_case)]

use std::env;
use std::sync::Arc;

use tokyoEvents::config::AppConfig;
use tokyoEvents::{cli, runtime};
use tokyoEvents::credentials::{ConfiguredCredentials, CredentialProvider, PromptCredentials};
use tokyoEvents::service::chat_service::ChatService;
use tokyoEvents::service::event_service::EventService;
use tokyoEvents::service::query_builder::QueryProfile;

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_BIND_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let defaults = QueryProfile::default();
    let profile = QueryProfile {
        city: config.resolve("EVENT_CITY").unwrap_or(defaults.city),
        model_id: config.resolve("CHAT_MODEL").unwrap_or(defaults.model_id),
        max_tokens: config.resolve_parsed("CHAT_MAX_TOKENS", defaults.max_tokens),
        temperature: config.resolve_parsed("CHAT_TEMPERATURE", defaults.temperature),
    };

    let endpoint = config
        .resolve("CHAT_API_URL")
        .unwrap_or(DEFAULT_ENDPOINT.to_string());
    let chat = Arc::new(ChatService::new(endpoint));

    let run_mode = config
        .resolve("RUN_MODE")
        .unwrap_or(DEFAULT_RUN_MODE.to_string());

    // The interactive key prompt only makes sense with a terminal attached;
    // api mode has to rely on configuration alone.
    let configured_key = config.resolve("OPENAI_API_KEY");
    let credentials: Arc<dyn CredentialProvider> = match (&run_mode[..], configured_key) {
        (_, Some(key)) => Arc::new(ConfiguredCredentials::new(Some(key))),
        ("cli", None) => Arc::new(PromptCredentials::new()),
        (_, None) => Arc::new(ConfiguredCredentials::new(None)),
    };

    let service = EventService::new(chat, credentials, profile);

    if run_mode == "api" {
        let port = config.resolve_parsed("BIND_PORT", DEFAULT_BIND_PORT);
        runtime::run_api(Arc::new(service), port).await;
    } else if run_mode == "cli" {
        cli::cli(service).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
