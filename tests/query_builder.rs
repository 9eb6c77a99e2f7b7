use chrono::NaiveDate;
use tokyoEvents::models::query::QueryParams;
use tokyoEvents::service::query_builder::{ALL_CATEGORIES, QueryProfile};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn params(categories: Option<Vec<&str>>, limit: u32) -> QueryParams {
    QueryParams {
        start_date: date(2026, 9, 1),
        end_date: date(2026, 9, 30),
        category_filters: categories.map(|c| c.into_iter().map(str::to_string).collect()),
        result_limit: limit,
    }
}

#[test]
fn query_contains_both_dates_and_limit() {
    let payload = QueryProfile::default().build(&params(None, 25));
    assert!(payload.user_query.contains("2026/09/01"));
    assert!(payload.user_query.contains("2026/09/30"));
    assert!(payload.user_query.contains("25件"));
}

#[test]
fn absent_filters_add_no_category_qualifier() {
    let profile = QueryProfile::default();
    let without = profile.build(&params(None, 20));
    assert!(!without.user_query.contains("関連するイベント"));
}

#[test]
fn sentinel_filters_match_absent_filters() {
    let profile = QueryProfile::default();
    let absent = profile.build(&params(None, 20));
    let sentinel = profile.build(&params(Some(vec![ALL_CATEGORIES]), 20));
    assert_eq!(absent.user_query, sentinel.user_query);
}

#[test]
fn every_filter_value_appears_in_caller_order() {
    let payload = QueryProfile::default().build(&params(Some(vec!["音楽", "アート", "食べ物"]), 20));
    let music = payload.user_query.find("音楽").unwrap();
    let art = payload.user_query.find("アート").unwrap();
    let food = payload.user_query.find("食べ物").unwrap();
    assert!(music < art);
    assert!(art < food);
}

#[test]
fn sentinel_mixed_with_other_filters_is_kept_verbatim() {
    let payload = QueryProfile::default().build(&params(Some(vec![ALL_CATEGORIES, "音楽"]), 20));
    assert!(payload.user_query.contains(ALL_CATEGORIES));
    assert!(payload.user_query.contains("音楽"));
}

#[test]
fn query_requests_the_five_record_fields() {
    let payload = QueryProfile::default().build(&params(None, 20));
    for key in ["イベント名", "日時", "場所", "説明", "URL"] {
        assert!(payload.user_query.contains(key), "missing key {}", key);
    }
}

#[test]
fn build_is_idempotent() {
    let profile = QueryProfile::default();
    let p = params(Some(vec!["音楽"]), 10);
    let first = serde_json::to_string(&profile.build(&p)).unwrap();
    let second = serde_json::to_string(&profile.build(&p)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn configured_city_and_model_flow_into_payload() {
    let profile = QueryProfile {
        city: "大阪".to_string(),
        model_id: "gpt-4o".to_string(),
        max_tokens: 1000,
        temperature: 0.3,
    };
    let payload = profile.build(&params(None, 20));
    assert!(payload.user_query.contains("大阪"));
    assert_eq!(payload.model_id, "gpt-4o");
    assert_eq!(payload.max_tokens, 1000);
    assert!(!payload.stream);
}
