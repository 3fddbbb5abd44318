use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument};

use super::repo_types::NutritionResult;
use crate::state::ResultsState;

pub fn result_routes() -> Router<ResultsState> {
    Router::new().route("/result/:image_key", get(get_result))
}

#[instrument(skip(state))]
pub async fn get_result(
    State(state): State<ResultsState>,
    Path(image_key): Path<String>,
) -> Response {
    match state.store.get(&image_key).await {
        Ok(Some(record)) => {
            info!(%image_key, food = %record.food_name, "result found");
            Json(NutritionResult::from(record)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Result not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = ?e, %image_key, "result lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
