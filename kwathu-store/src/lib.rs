pub mod app_config;
pub mod memory_repo;
pub mod redis_repo;
pub mod scoped;

pub use memory_repo::MemoryStore;
pub use redis_repo::RedisStore;
pub use scoped::ClientStorage;

use std::sync::Arc;
use std::time::Duration;
use app_config::{HandoffBackend, HandoffConfig};
use kwathu_core::{KeyValueStore, StoreError};

/// Build the handoff store selected in configuration
pub async fn connect(config: &HandoffConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    let ttl = Duration::from_secs(config.ttl_seconds);
    match config.backend {
        HandoffBackend::Memory => {
            tracing::info!(
                "Using in-memory handoff store (ttl {}s, max {} entries)",
                config.ttl_seconds,
                config.max_entries
            );
            Ok(Arc::new(MemoryStore::with_limits(ttl, config.max_entries)))
        }
        HandoffBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                StoreError::Unavailable("handoff.redis_url is required for the redis backend".to_string())
            })?;
            tracing::info!("Using Redis handoff store at {}", url);
            Ok(Arc::new(RedisStore::new(url, ttl).await?))
        }
    }
}
