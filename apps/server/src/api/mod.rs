//! REST API surface, one router per resource, composed under `/api/v1`.

pub mod entries;
pub mod garden;
pub mod goals;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(entries::router())
        .merge(goals::router())
        .merge(garden::router())
        .merge(health::router())
        .with_state(state);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
