use foodscan::{app, state, telemetry, uploads};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let shared = state::load_aws().await;
    let st = state::UploadState::from_env(&shared)?;

    app::run(app::build_app(uploads::router().with_state(st))).await
}
