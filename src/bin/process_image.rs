use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use foodscan::{scanner::handlers::handle_event, state, telemetry};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init();

    // Clients live for the whole process and are shared by every invocation.
    let shared = state::load_aws().await;
    let st = Arc::new(state::ScanState::from_env(&shared)?);

    run(service_fn(move |event: LambdaEvent<S3Event>| {
        let st = Arc::clone(&st);
        async move { handle_event(&st, event).await }
    }))
    .await
}
