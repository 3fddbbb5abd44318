use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_NUTRITIONIX_URL: &str = "https://trackapi.nutritionix.com/v2/natural/nutrients";
pub const DEFAULT_UPLOAD_TTL_SECS: u64 = 300;
/// SigV4 presigned URLs expire after at most 7 days.
pub const MAX_UPLOAD_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub table_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    /// Custom S3 endpoint (MinIO, localstack). Switches to path-style addressing.
    pub endpoint: Option<String>,
    pub upload_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub app_key: String,
    pub url: String,
}

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing environment variable {name}"))
}

impl TableConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            table_name: required("TABLE_NAME")?,
        })
    }
}

impl StorageConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bucket: required("BUCKET_NAME")?,
            endpoint: std::env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),
            upload_ttl_secs: upload_ttl()?,
        })
    }
}

fn upload_ttl() -> anyhow::Result<u64> {
    let Ok(raw) = std::env::var("UPLOAD_URL_TTL_SECS") else {
        return Ok(DEFAULT_UPLOAD_TTL_SECS);
    };
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("UPLOAD_URL_TTL_SECS is not a number: {raw}"))?;
    if !(1..=MAX_UPLOAD_TTL_SECS).contains(&secs) {
        anyhow::bail!("UPLOAD_URL_TTL_SECS must be between 1 and {MAX_UPLOAD_TTL_SECS}, got {secs}");
    }
    Ok(secs)
}

impl NutritionixConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            app_id: required("APP_ID")?,
            app_key: required("API_KEY")?,
            url: std::env::var("NUTRITIONIX_URL")
                .unwrap_or_else(|_| DEFAULT_NUTRITIONIX_URL.into()),
        })
    }
}
