use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use warp::Filter;
use warp::http::StatusCode;

use crate::models::event::NormalizedResult;
use crate::models::query::QueryParams;
use crate::service::event_service::EventService;

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
struct EventsQuery {
    start: NaiveDate,
    end: NaiveDate,
    categories: Option<String>,
    limit: Option<u32>,
}

#[derive(Serialize)]
struct EventsReply<'a> {
    #[serde(flatten)]
    result: &'a NormalizedResult,
    advisory: Option<String>,
}

// Browser-dashboard surface: GET /api/events?start=...&end=... answered
// with the fetch outcome as JSON. One upstream call per request, no
// server-side caching of results.
pub async fn run_api(service: Arc<EventService>, port: u16) {
    let service_filter = warp::any().map(move || service.clone());
    let events = warp::path!("api" / "events")
        .and(warp::get())
        .and(warp::query::<EventsQuery>())
        .and(service_filter)
        .and_then(handle_events);

    println!("Listening on 0.0.0.0:{}", port);
    warp::serve(events).run(([0, 0, 0, 0], port)).await;
}

async fn handle_events(
    query: EventsQuery,
    service: Arc<EventService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if query.start > query.end {
        let reply = warp::reply::json(&serde_json::json!({
            "error": "start must be on or before end"
        }));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST));
    }

    let categories = query
        .categories
        .map(|raw| {
            raw.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|list| !list.is_empty());

    let params = QueryParams {
        start_date: query.start,
        end_date: query.end,
        category_filters: categories,
        result_limit: query.limit.unwrap_or(DEFAULT_LIMIT).clamp(5, 100),
    };

    let outcome = service.fetch(&params).await;
    let advisory = outcome.advisory.as_ref().map(|e| e.to_string());
    let reply = warp::reply::json(&EventsReply {
        result: &outcome.result,
        advisory,
    });
    Ok(warp::reply::with_status(reply, StatusCode::OK))
}
