//! HTTP handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::pipeline;
use super::types::{ApiResponse, AppState};

/// Query string of the check endpoint, as ordered pairs.
///
/// Kept as pairs so a repeated `url` does not fail extraction; the first
/// occurrence is used.
pub type CheckQuery = Vec<(String, String)>;

fn first_url(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.as_str())
}

/// `GET /api/check-hsts?url=<target>`
pub async fn check_hsts_handler(
    State(state): State<AppState>,
    query: Result<Query<CheckQuery>, QueryRejection>,
) -> Response {
    let Query(pairs) = match query {
        Ok(query) => query,
        Err(rejection) => {
            log::warn!("Rejected query string: {}", rejection.body_text());
            return ApiResponse::error(StatusCode::BAD_REQUEST, rejection.body_text())
                .into_http(&state.cors_origin);
        }
    };

    let checker = state.checker.clone();
    let response = pipeline::run(first_url(&pairs), |url| async move {
        checker.evaluate(&url).await
    })
    .await;
    response.into_http(&state.cors_origin)
}

/// `GET /health`
pub async fn health_handler() -> Response {
    (StatusCode::OK, "ok").into_response()
}
