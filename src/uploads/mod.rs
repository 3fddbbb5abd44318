pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::UploadState;
use axum::Router;

pub fn router() -> Router<UploadState> {
    handlers::upload_routes()
}
