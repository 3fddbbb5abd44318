use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No food data returned")]
    NoFoodData,
    #[error("event carries no bucket/key")]
    MissingObject,
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("event carries no current intent")]
    MissingIntent,
    #[error("slot {0} is empty at fulfillment")]
    MissingSlot(&'static str),
}
