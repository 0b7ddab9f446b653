use async_trait::async_trait;
use kwathu_core::{KeyValueStore, StoreError};
use std::sync::Arc;

/// One client's view of the shared store, the server-side stand-in for a
/// browser's local storage. Keys land under `client:{id}:{key}`.
#[derive(Clone)]
pub struct ClientStorage {
    inner: Arc<dyn KeyValueStore>,
    client_id: String,
}

impl ClientStorage {
    pub fn new(inner: Arc<dyn KeyValueStore>, client_id: impl Into<String>) -> Self {
        Self {
            inner,
            client_id: client_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("client:{}:{}", self.client_id, key)
    }
}

#[async_trait]
impl KeyValueStore for ClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.scoped_key(key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.scoped_key(key), value).await
    }
}
