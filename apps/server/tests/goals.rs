use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use garden_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_app() -> (axum::Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("garden.db").to_string_lossy().into_owned(),
        static_dir: "dist".to_string(),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn goal_lifecycle() {
    let (app, _tmp) = build_test_app().await;

    // Create: starts uncompleted.
    let created = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/goals",
            serde_json::json!({ "text": "Write 3 things daily" }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let goal = json_body(created).await;
    assert_eq!(goal["text"], "Write 3 things daily");
    assert_eq!(goal["completed"], false);
    let id = goal["id"].as_i64().unwrap();
    let created_at = goal["createdAt"].as_i64().unwrap();
    assert!(created_at > 0);

    // Complete it; text and createdAt are untouched.
    let uri = format!("/api/v1/goals/{id}");
    let updated = json_body(
        app.clone()
            .oneshot(json_request(
                Method::PUT,
                &uri,
                serde_json::json!({ "completed": true }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["text"], "Write 3 things daily");
    assert_eq!(updated["createdAt"].as_i64().unwrap(), created_at);

    // Setting the same value again is a state-wise no-op.
    let again = json_body(
        app.clone()
            .oneshot(json_request(
                Method::PUT,
                &uri,
                serde_json::json!({ "completed": true }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(again["completed"], true);

    let listed = json_body(
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/goals")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    let goals = listed.as_array().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["completed"], true);

    // Delete, then the goal really is gone.
    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_goal_text_is_rejected() {
    let (app, _tmp) = build_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/goals",
            serde_json::json!({ "text": "  " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn updating_unknown_goal_is_404() {
    let (app, _tmp) = build_test_app().await;

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/goals/12345",
            serde_json::json!({ "completed": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn suggested_goals_are_served() {
    let (app, _tmp) = build_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/goals/suggested")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let suggestions = json_body(response).await;
    let suggestions = suggestions.as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s.is_string()));
}
