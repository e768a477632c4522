//! HTTP route handlers.

use std::convert::Infallible;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use chrono::Utc;
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::domain::BusPosition;
use crate::live::LiveFeed;
use crate::planner::{Planner, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", post(search_routes))
        .route("/api/routes/search", post(search_routes))
        .route("/api/routes", get(list_routes))
        .route("/api/bus-stops", get(list_bus_stops))
        .route("/api/stops/search", get(search_stops))
        .route("/api/buses", get(list_buses))
        .route("/api/buses/live", get(live_positions))
        .route("/api/buses/:bus_id/location", post(update_bus_location))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form and route list.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let graph = state.network.current().await;
    let template = IndexTemplate {
        routes: graph.active_routes().map(RouteView::from_route).collect(),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Suggest bus routes between two places.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: SearchRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "unparseable search request");
        AppError::BadRequest {
            message: "Invalid search request".to_string(),
            details: Some(e.to_string()),
        }
    })?;
    let query = req.to_query();

    let graph = state.network.current().await;
    let result = Planner::new(&graph, &state.config).search(&query)?;

    let record_id = state.history.record(&query, &result.suggestions).await;
    info!(
        from = %query.origin.name,
        to = %query.destination.name,
        suggestions = result.suggestions.len(),
        routes_considered = result.routes_considered,
        record_id,
        "route search"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = SuggestionListTemplate {
            origin: query.origin.name.clone(),
            destination: query.destination.name.clone(),
            suggestions: result
                .suggestions
                .iter()
                .map(SuggestionView::from_suggestion)
                .collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        let suggestions = result
            .suggestions
            .iter()
            .map(SuggestionResult::from_suggestion)
            .collect();

        Ok(Json(SearchResponse { suggestions }).into_response())
    }
}

/// Active routes with stops and timetable.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteResult>> {
    let graph = state.network.current().await;
    Json(graph.active_routes().map(RouteResult::from_route).collect())
}

/// Every stop in the directory.
async fn list_bus_stops(State(state): State<AppState>) -> Json<Vec<BusStopResult>> {
    Json(
        state
            .stops
            .all()
            .iter()
            .map(BusStopResult::from_bus_stop)
            .collect(),
    )
}

/// Search stops by name.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let stops = state
        .stops
        .search(&req.q, limit)
        .into_iter()
        .map(StopSearchResult::from)
        .collect();

    Json(StopSearchResponse { stops })
}

/// Buses in service with their last known position.
async fn list_buses(State(state): State<AppState>) -> Json<Vec<BusResult>> {
    let buses = state.fleet.active().await;
    Json(buses.iter().map(BusResult::from_bus).collect())
}

/// Record a position report from a bus and publish it to live subscribers.
async fn update_bus_location(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
    body: Bytes,
) -> Result<Json<BusPositionResult>, AppError> {
    let req: LocationUpdateRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: "Invalid location update".to_string(),
            details: Some(e.to_string()),
        })?;

    let location = req.location().ok_or_else(|| AppError::BadRequest {
        message: "Latitude and longitude are required".to_string(),
        details: Some("both coordinates must be present and finite".to_string()),
    })?;

    let now = Utc::now();
    let bus = state
        .fleet
        .update_location(&bus_id, location, now)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("Bus {bus_id} not found"),
        })?;

    let position = BusPosition {
        speed: req.speed,
        heading: req.heading,
        ..BusPosition::for_bus(&bus, location, now)
    };
    let receivers = state.feed.publish(position.clone()).await;
    debug!(bus = %bus_id, %location, receivers, "bus location updated");

    Ok(Json(BusPositionResult::from_position(&position)))
}

/// Live bus positions as Server-Sent Events.
///
/// The stream opens with the latest known position of every bus, then
/// carries each new report as it is published.
async fn live_positions(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(subscribers = state.feed.subscriber_count() + 1, "live feed subscriber connected");

    let events = position_stream(&state.feed).filter_map(|position| async move {
        match Event::default()
            .event("position")
            .json_data(BusPositionResult::from_position(&position))
        {
            Ok(event) => Some(Ok::<_, Infallible>(event)),
            Err(e) => {
                error!("failed to encode position for {}: {e}", position.bus_id);
                None
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// The current snapshot followed by every position published from now on.
///
/// A subscriber that falls behind skips the reports it missed.
fn position_stream(
    feed: &LiveFeed,
) -> impl Stream<Item = BusPosition> + Send + 'static + use<> {
    // Subscribe before taking the snapshot so no report falls between them.
    let receiver = feed.subscribe();
    let snapshot = feed.snapshot();

    let updates = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(position) => return Some((position, receiver)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "live feed subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    stream::iter(snapshot).chain(updates)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        details: Option<String>,
    },
    NotFound {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidQuery(details) => AppError::BadRequest {
                message: "Invalid search request".to_string(),
                details: Some(details),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::BadRequest { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        if status.is_server_error() {
            error!(%status, details = details.as_deref(), "{error}");
        } else {
            warn!(%status, details = details.as_deref(), "{error}");
        }

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
