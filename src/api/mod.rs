pub mod groups;
pub mod health;
pub mod lookup;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // ISBN decomposition
        .route("/isbn/:isbn", get(lookup::lookup_isbn))
        // Registration groups
        .route("/groups/:prefix/:group", get(groups::get_group))
        .with_state(state)
}
