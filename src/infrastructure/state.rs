//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::domain::RangeTable;

/// The range table is built once at startup and only read afterwards.
/// Reloading means building a new table and handing out a new state.
#[derive(Clone)]
pub struct AppState {
    pub ranges: Arc<RangeTable>,
}

impl AppState {
    pub fn new(ranges: Arc<RangeTable>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }
}

// Allow extracting the table directly from AppState
impl axum::extract::FromRef<AppState> for Arc<RangeTable> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.ranges)
    }
}
