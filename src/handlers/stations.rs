//! Stations endpoint handler.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::logging::generate_request_id;
use crate::state::AppState;

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let names = state.dataset.all_station_names();

    debug!(
        endpoint = "/api/v1.0/stations",
        request_id = %generate_request_id(),
        station_count = names.len(),
        "Stations request successful"
    );

    Json(names)
}

#[cfg(test)]
mod tests {
    use crate::handlers::tests::get_json;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_station_names() {
        let (status, body) = get_json("/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["WAIKIKI 717.2, HI US", "KANEOHE 838.1, HI US"]));
    }
}
