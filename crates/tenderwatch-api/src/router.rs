//! Route definitions for the TenderWatch HTTP API.
//!
//! REST routes are mounted under `/api`; the websocket feed lives at `/ws`.

use axum::routing::{get, post, put};
use axum::Router;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(monitor_routes())
        .merge(portal_routes())
        .merge(tender_routes())
        .merge(notification_routes())
        .route("/health", get(handlers::health::health));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(handlers::ws::ws_upgrade))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Monitor control: start, stop, status
fn monitor_routes() -> Router<AppState> {
    Router::new()
        .route("/monitor/start", post(handlers::monitor::start))
        .route("/monitor/stop", post(handlers::monitor::stop))
        .route("/monitor/status", get(handlers::monitor::status))
}

/// Portal catalog reads
fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/portals", get(handlers::portal::list))
        .route("/portals/{id}", get(handlers::portal::get))
}

/// Tender reads
fn tender_routes() -> Router<AppState> {
    Router::new()
        .route("/tenders", get(handlers::tender::list))
        .route("/tenders/{id}", get(handlers::tender::get))
}

/// Notification reads and read-state updates
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// CORS policy from `server.allowed_origins`. A `"*"` entry allows any
/// origin.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.allowed_origins;

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(parsed)
    }
}
