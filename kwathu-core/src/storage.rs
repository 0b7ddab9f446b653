use async_trait::async_trait;

/// Client-local key-value storage shared between the booking and payment
/// steps. Writes overwrite; there is no locking between a write and a later
/// read, so the last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Backend(String),
}
