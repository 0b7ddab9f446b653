use async_trait::async_trait;
use kwathu_core::{KeyValueStore, StoreError};
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

/// Redis-backed store. Every write carries a TTL so abandoned client keys
/// age out.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    ttl_seconds: u64,
}

impl RedisStore {
    pub async fn new(connection_string: &str, ttl: Duration) -> Result<Self, StoreError> {
        let client = redis::Client::open(connection_string)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            ttl_seconds: ttl.as_secs().max(1),
        })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, self.ttl_seconds)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        debug!("Stored {} bytes under {} for {}s", value.len(), key, self.ttl_seconds);
        Ok(())
    }
}
