mod actor;

pub use actor::{StorageActor, StorageActorHandle};

use crate::error::AppResult;
use async_trait::async_trait;

/// String-keyed, string-valued persistence store.
///
/// The seam between the reminder ledger and whatever backs it: Redis in
/// the app, an in-memory map in tests.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>>;
}

#[async_trait]
impl KeyValueStore for StorageActorHandle {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        StorageActorHandle::get(self, key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        StorageActorHandle::set(self, key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        StorageActorHandle::remove(self, key).await
    }

    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        StorageActorHandle::list_keys(self, prefix).await
    }
}
