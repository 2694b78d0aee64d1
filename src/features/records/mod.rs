pub mod model;

use crate::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use model::{ErrorBody, JsonDaRecord};
use tower_http::cors::{Any, CorsLayer};

/// The record feature router. CORS is wide open: the dataset is public and
/// the table page may be served from any origin.
pub fn records_router() -> Router<AppState> {
    Router::new().route("/data", get(list_records_handler)).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

async fn list_records_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonDaRecord>>, (StatusCode, Json<ErrorBody>)> {
    match state.repo.get_all_records().await {
        Ok(mut records) => {
            // the route owns the ordering guarantee, whatever the backend did
            records.sort_by(|a, b| b.da_number.cmp(&a.da_number));

            println!("GET /api/data: returning {} records", records.len());

            Ok(Json(records.iter().map(JsonDaRecord::from).collect()))
        }
        Err(e) => {
            // full chain server-side, message only to the caller
            eprintln!("GET /api/data: upstream query failed: {:#}", e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
