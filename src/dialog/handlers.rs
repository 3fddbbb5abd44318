use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use super::dto::{DialogAction, DialogResponse, LexEvent};
use super::services::respond;

pub async fn handle_event(event: LambdaEvent<LexEvent>) -> Result<DialogResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        source = ?payload.invocation_source,
        intent = payload.current_intent.as_ref().map(|i| i.name.as_str()),
        "dialog code hook"
    );

    let res = respond(payload).map_err(|e| {
        error!(error = %e, "malformed dialog event");
        e
    })?;

    if let DialogAction::ElicitSlot { slot_to_elicit, .. } = &res.dialog_action {
        info!(%slot_to_elicit, "eliciting slot");
    }
    Ok(res)
}
