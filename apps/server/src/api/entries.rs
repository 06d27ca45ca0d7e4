use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use garden_core::entries::GratitudeEntry;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewEntryRequest {
    text: String,
    // Absent and null both mean "no category"; an empty string is
    // normalized away by the service.
    #[serde(default)]
    category: Option<String>,
}

async fn get_entries(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GratitudeEntry>>> {
    let entries = state.entry_service.get_entries()?;
    Ok(Json(entries))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEntryRequest>,
) -> ApiResult<Json<GratitudeEntry>> {
    let entry = state
        .entry_service
        .add_entry(&req.text, req.category.as_deref())
        .await?;
    Ok(Json(entry))
}

async fn delete_entry(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.entry_service.delete_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/entries", get(get_entries).post(create_entry))
        .route("/entries/{id}", delete(delete_entry))
}
