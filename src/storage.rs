use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{config::Builder as S3ConfigBuilder, presigning::PresigningConfig, Client};

use crate::config::StorageConfig;

#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Presigned `PutObject` URL for `key`, bound to `content_type`.
    async fn presign_put(&self, key: &str, content_type: &str, seconds: u64)
        -> anyhow::Result<String>;
}

#[derive(Clone)]
pub struct Storage {
    client: Client,
    bucket: String,
}

impl Storage {
    pub fn new(shared: &SdkConfig, config: &StorageConfig) -> Self {
        let mut conf = S3ConfigBuilder::from(shared);
        if let Some(endpoint) = &config.endpoint {
            conf = conf.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(conf.build()),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl StorageClient for Storage {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        seconds: u64,
    ) -> anyhow::Result<String> {
        let req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type);
        let presigned = req
            .presigned(PresigningConfig::expires_in(Duration::from_secs(seconds))?)
            .await
            .context("s3 presign_put")?;
        Ok(presigned.uri().to_string())
    }
}
