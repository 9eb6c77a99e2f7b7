pub mod event;
pub mod query;
