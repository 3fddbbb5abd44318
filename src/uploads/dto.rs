use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UploadTicket {
    pub upload_url: String,
    pub image_key: String,
}
