pub mod chat_service;
pub mod event_service;
pub mod normalizer;
pub mod query_builder;
