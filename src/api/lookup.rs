use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::modules::isbn;

/// Decompose an ISBN against the loaded ranges
pub async fn lookup_isbn(
    State(state): State<AppState>,
    Path(input): Path<String>,
) -> impl IntoResponse {
    match isbn::split(state.ranges(), &input) {
        Ok(parts) => (
            StatusCode::OK,
            Json(json!({
                "isbn13": parts.isbn13(),
                "isbn10": parts.isbn10(),
                "hyphenated": parts.hyphenated(),
                "hyphenated10": parts.hyphenated10(),
                "parts": parts,
            })),
        )
            .into_response(),
        Err(e) => {
            let status = if e.is_malformed() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::NOT_FOUND
            };
            tracing::debug!("ISBN lookup for '{}' failed: {}", input, e);
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
