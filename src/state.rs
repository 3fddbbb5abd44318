use std::sync::Arc;

use aws_config::{BehaviorVersion, SdkConfig};

use crate::config::{NutritionixConfig, StorageConfig, TableConfig};
use crate::nutritionix::{NutritionApi, Nutritionix};
use crate::results::repo::{DynamoStore, NutritionStore};
use crate::storage::{Storage, StorageClient};
use crate::vision::{LabelDetector, Rekognition};

/// Region and credentials come from the default provider chain.
pub async fn load_aws() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).load().await
}

/// State for the nutrition lookup route.
#[derive(Clone)]
pub struct ResultsState {
    pub store: Arc<dyn NutritionStore>,
}

impl ResultsState {
    pub fn from_env(shared: &SdkConfig) -> anyhow::Result<Self> {
        let table = TableConfig::from_env()?;
        tracing::info!(table = %table.table_name, "results store ready");
        Ok(Self {
            store: Arc::new(DynamoStore::new(shared, &table)),
        })
    }
}

/// State for the upload-ticket route.
#[derive(Clone)]
pub struct UploadState {
    pub storage: Arc<dyn StorageClient>,
    pub ttl_secs: u64,
}

impl UploadState {
    pub fn from_env(shared: &SdkConfig) -> anyhow::Result<Self> {
        let config = StorageConfig::from_env()?;
        tracing::info!(bucket = %config.bucket, ttl = config.upload_ttl_secs, "upload storage ready");
        Ok(Self {
            storage: Arc::new(Storage::new(shared, &config)),
            ttl_secs: config.upload_ttl_secs,
        })
    }
}

/// Clients used by the image pipeline.
#[derive(Clone)]
pub struct ScanState {
    pub detector: Arc<dyn LabelDetector>,
    pub nutrition: Arc<dyn NutritionApi>,
    pub store: Arc<dyn NutritionStore>,
}

impl ScanState {
    pub fn from_env(shared: &SdkConfig) -> anyhow::Result<Self> {
        let table = TableConfig::from_env()?;
        let nutritionix = NutritionixConfig::from_env()?;
        Ok(Self::from_parts(
            Arc::new(Rekognition::new(shared)),
            Arc::new(Nutritionix::new(nutritionix)),
            Arc::new(DynamoStore::new(shared, &table)),
        ))
    }

    pub fn from_parts(
        detector: Arc<dyn LabelDetector>,
        nutrition: Arc<dyn NutritionApi>,
        store: Arc<dyn NutritionStore>,
    ) -> Self {
        Self {
            detector,
            nutrition,
            store,
        }
    }
}
