use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use garden_core::goals::Goal;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewGoalRequest {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateGoalRequest {
    completed: bool,
}

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGoalRequest>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.add_goal(&req.text).await?;
    Ok(Json(goal))
}

async fn update_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateGoalRequest>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.update_goal(id, req.completed).await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_suggested_goals(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.goal_service.get_suggested_goals())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/suggested", get(get_suggested_goals))
        .route("/goals/{id}", put(update_goal).delete(delete_goal))
}
