use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument};

use super::services::issue_ticket;
use crate::state::UploadState;

/// `CorsLayer` only emits these on preflight.
const OPEN_CORS: [(HeaderName, &str); 2] = [
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "*"),
];

pub fn upload_routes() -> Router<UploadState> {
    Router::new()
        .route("/", get(get_upload_url))
        .route("/upload", get(get_upload_url))
}

/// GET / → `{upload_url, image_key}`
#[instrument(skip(state))]
pub async fn get_upload_url(State(state): State<UploadState>) -> Response {
    match issue_ticket(&state).await {
        Ok(ticket) => {
            info!(image_key = %ticket.image_key, "upload ticket issued");
            (OPEN_CORS, Json(ticket)).into_response()
        }
        Err(e) => {
            error!(error = ?e, "issue upload ticket failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                OPEN_CORS,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
