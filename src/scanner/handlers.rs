use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::services::scan_object;
use crate::error::ScanError;
use crate::state::ScanState;

/// Proxy-style result returned to the invoker; S3 notifications ignore it
/// but it shows up in test invocations and logs.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub status_code: u16,
    pub body: String,
}

impl ScanResponse {
    fn new(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }
}

/// Bucket and key of the first record.
pub fn object_ref(event: &S3Event) -> Result<(String, String), ScanError> {
    if event.records.len() > 1 {
        warn!(records = event.records.len(), "only the first record is processed");
    }
    let s3 = &event.records.first().ok_or(ScanError::MissingObject)?.s3;
    match (s3.bucket.name.clone(), s3.object.key.clone()) {
        (Some(bucket), Some(key)) => Ok((bucket, key)),
        _ => Err(ScanError::MissingObject),
    }
}

pub async fn handle_event(
    st: &ScanState,
    event: LambdaEvent<S3Event>,
) -> Result<ScanResponse, Error> {
    let (bucket, key) = object_ref(&event.payload)?;
    info!(%bucket, %key, request_id = %event.context.request_id, "triggered");

    Ok(respond(scan_object(st, &bucket, &key).await))
}

fn respond(outcome: Result<impl Sized, ScanError>) -> ScanResponse {
    match outcome {
        Ok(_) => ScanResponse::new(200, json!({ "message": "Stored nutrition result" })),
        Err(e @ ScanError::NoFoodData) => {
            warn!("no food data returned");
            ScanResponse::new(404, json!({ "error": e.to_string() }))
        }
        Err(e) => {
            error!(error = ?e, "calling nutritionix or storing result failed");
            ScanResponse::new(500, json!({ "error": e.to_string() }))
        }
    }
}
