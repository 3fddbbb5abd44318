pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::state::ResultsState;
use axum::Router;

pub fn router() -> Router<ResultsState> {
    handlers::result_routes()
}
