use api::app::build_router;
use api::config::AppConfig;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::*;

fn test_config(introspection: bool) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "DATA_BACKEND" => Some("memory".to_string()),
        "GQL_INTROSPECTION" => Some(introspection.to_string()),
        _ => None,
    })
    .expect("memory config should be valid")
}

fn test_router(introspection: bool) -> axum::Router {
    let config = test_config(introspection);
    let schema = api::gql::build_schema(&config.graphql);
    build_router(setup_test_state(), schema, &config)
}

async fn post_json(router: axum::Router, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_root_executes_graphql() {
    let body = json!({
        "query": "mutation ($dto: CreateUserInput!) { createUser(dto: $dto) { name balance } }",
        "variables": { "dto": { "name": "Over HTTP", "balance": 1.5 } }
    });

    let (status, envelope) = post_json(test_router(false), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        envelope,
        json!({ "data": { "createUser": { "name": "Over HTTP", "balance": 1.5 } } })
    );
}

#[tokio::test]
async fn test_engine_errors_come_back_with_200() {
    let body = json!({ "query": "query { users { doesNotExist } }" });

    let (status, envelope) = post_json(test_router(false), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(envelope["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_malformed_envelope_is_a_bad_request() {
    let (status, body) = post_json(test_router(false), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("bad request: Invalid GraphQL request"));
}

#[tokio::test]
async fn test_health() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_graphiql_only_with_introspection() {
    let request = || Request::builder().uri("/").body(Body::empty()).unwrap();

    let enabled = test_router(true).oneshot(request()).await.unwrap();
    assert_eq!(enabled.status(), StatusCode::OK);

    let disabled = test_router(false).oneshot(request()).await.unwrap();
    assert_eq!(disabled.status(), StatusCode::METHOD_NOT_ALLOWED);
}
