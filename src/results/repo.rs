use anyhow::Context;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{types::AttributeValue, Client};

use super::repo_types::NutritionRecord;
use crate::config::TableConfig;

/// Point lookups and overwriting writes of nutrition records.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    async fn get(&self, image_key: &str) -> anyhow::Result<Option<NutritionRecord>>;
    /// Last write wins; no merge with an existing record.
    async fn put(&self, record: NutritionRecord) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(shared: &SdkConfig, config: &TableConfig) -> Self {
        Self {
            client: Client::new(shared),
            table: config.table_name.clone(),
        }
    }
}

#[async_trait]
impl NutritionStore for DynamoStore {
    async fn get(&self, image_key: &str) -> anyhow::Result<Option<NutritionRecord>> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("image_key", AttributeValue::S(image_key.to_string()))
            .send()
            .await
            .context("dynamodb get_item")?;

        out.item()
            .map(NutritionRecord::from_item)
            .transpose()
            .with_context(|| format!("decode nutrition record {image_key}"))
    }

    async fn put(&self, record: NutritionRecord) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record.into_item()))
            .send()
            .await
            .context("dynamodb put_item")?;
        Ok(())
    }
}
