use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let table = state.ranges();
    let metadata = table.metadata();
    Json(json!({
        "status": "ok",
        "service": "isbn-ranges",
        "version": env!("CARGO_PKG_VERSION"),
        "ranges": {
            "source": metadata.source,
            "serial": metadata.serial,
            "date": metadata.date,
            "message_date": metadata.message_date(),
            "groups": table.len(),
            "max_group_len": table.max_group_len(),
        }
    }))
}
