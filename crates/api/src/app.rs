use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::state::AppState;
use infra::DataStore;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Axum router: the GraphQL endpoint at `/` plus a health probe.
pub fn build_router(state: AppState, schema: AppSchema, config: &AppConfig) -> Router {
    let mut graphql_route = post({
        let schema_clone = schema.clone();
        move |state, req| graphql_handler(state, req, schema_clone)
    });
    if config.graphql.introspection {
        graphql_route = graphql_route.get(graphiql);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        .route("/", graphql_route)
        // Liveness check; also proves store connectivity.
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

/// Execute one GraphQL document with the data-access handle attached as
/// request data. The engine's `{data, errors}` envelope is returned as is.
async fn graphql_handler(
    State(state): State<AppState>,
    req: Request,
    schema: AppSchema,
) -> Result<Response, AppError> {
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request.data(state)).await;

    Ok(Json(gql_response).into_response())
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
