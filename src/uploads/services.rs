use anyhow::Context;
use uuid::Uuid;

use super::dto::UploadTicket;
use crate::state::UploadState;

pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

pub fn new_image_key() -> String {
    format!("{}.jpg", Uuid::new_v4())
}

/// Fresh object key plus a write-only URL for it. Nothing is persisted; expiry
/// is enforced by S3.
pub async fn issue_ticket(st: &UploadState) -> anyhow::Result<UploadTicket> {
    let image_key = new_image_key();
    let upload_url = st
        .storage
        .presign_put(&image_key, IMAGE_CONTENT_TYPE, st.ttl_secs)
        .await
        .with_context(|| format!("presign upload for {}", image_key))?;
    Ok(UploadTicket {
        upload_url,
        image_key,
    })
}
