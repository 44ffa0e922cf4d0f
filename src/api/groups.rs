use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::{Prefix, RangeTable};

/// Agency and publisher ranges of one registration group
pub async fn get_group(
    State(ranges): State<Arc<RangeTable>>,
    Path((prefix, group)): Path<(String, String)>,
) -> impl IntoResponse {
    let prefix: Prefix = match prefix.parse() {
        Ok(p) => p,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response(),
    };

    match ranges.group(prefix, &group) {
        Some(entry) => (
            StatusCode::OK,
            Json(json!({
                "prefix": prefix,
                "group": group,
                "agency": entry.agency,
                "ranges": entry.ranges,
            })),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Registration group {}-{} not found", prefix, group) })),
        )
            .into_response(),
    }
}
