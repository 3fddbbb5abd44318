use axum::{routing::get, Router};

use foodscan::{app, results, state, telemetry, uploads};

/// Local development server: upload tickets and result lookup on one port.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let shared = state::load_aws().await;
    let results_state = state::ResultsState::from_env(&shared)?;
    let upload_state = state::UploadState::from_env(&shared)?;

    let routes = Router::new()
        .merge(results::router().with_state(results_state))
        .merge(uploads::router().with_state(upload_state))
        .route("/health", get(|| async { "ok" }));

    app::serve(app::build_app(routes)).await
}
