use foodscan::{dialog::handlers::handle_event, telemetry};
use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init();
    run(service_fn(handle_event)).await
}
