use anyhow::Context;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::{
    types::{Image, S3Object},
    Client,
};

#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Label names for an image stored in S3, most confident first.
    async fn detect_labels(&self, bucket: &str, key: &str, max_labels: i32)
        -> anyhow::Result<Vec<String>>;
}

#[derive(Clone)]
pub struct Rekognition {
    client: Client,
}

impl Rekognition {
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: Client::new(shared),
        }
    }
}

#[async_trait]
impl LabelDetector for Rekognition {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        max_labels: i32,
    ) -> anyhow::Result<Vec<String>> {
        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let out = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(max_labels)
            .send()
            .await
            .context("rekognition detect_labels")?;

        Ok(out
            .labels()
            .iter()
            .filter_map(|l| l.name().map(str::to_string))
            .collect())
    }
}
