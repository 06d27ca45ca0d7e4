use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use garden_core::garden::{group_entries, PlantGroup};

/// Server-side rendering of the garden view: entries grouped into plants.
/// Pure derivation over `get_entries`; the client may equally compute this
/// itself from the entries list.
async fn get_garden(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PlantGroup>>> {
    let entries = state.entry_service.get_entries()?;
    Ok(Json(group_entries(&entries)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/garden", get(get_garden))
}
