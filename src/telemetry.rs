use tracing_subscriber::EnvFilter;

/// True when the process was started by the Lambda runtime.
pub fn in_lambda() -> bool {
    std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok()
}

/// Install the global subscriber. `RUST_LOG` wins over the default filter;
/// `LOG_FORMAT=json` (implied inside Lambda) switches to JSON lines.
pub fn init() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "foodscan=debug,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(env_filter));

    if in_lambda() {
        // CloudWatch stamps every line already
        builder.json().with_target(false).without_time().init();
    } else if json_logs {
        builder.json().with_target(false).init();
    } else {
        builder.init();
    }
}
