use foodscan::{app, results, state, telemetry};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let shared = state::load_aws().await;
    let st = state::ResultsState::from_env(&shared)?;

    app::run(app::build_app(results::router().with_state(st))).await
}
