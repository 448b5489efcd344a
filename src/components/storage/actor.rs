use crate::config::Config;
use crate::error::{storage_error, AppResult};
use redis::{aio::Connection, AsyncCommands, Client as RedisClient};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;

/// The storage actor that processes messages
pub struct StorageActor {
    config: Arc<RwLock<Config>>,
    client: RedisClient,
    command_rx: mpsc::Receiver<StorageCommand>,
}

/// Commands that can be sent to the storage actor
pub enum StorageCommand {
    Get(String, mpsc::Sender<AppResult<Option<String>>>),
    Set(String, String, mpsc::Sender<AppResult<()>>),
    Remove(String, mpsc::Sender<AppResult<()>>),
    ListKeys(String, mpsc::Sender<AppResult<Vec<String>>>),
    Shutdown,
}

/// Handle for communicating with the storage actor
#[derive(Clone)]
pub struct StorageActorHandle {
    command_tx: mpsc::Sender<StorageCommand>,
}

impl StorageActorHandle {
    /// Create a new empty handle for initialization purposes
    pub fn empty() -> Self {
        let (command_tx, _) = mpsc::channel(32);
        Self { command_tx }
    }

    /// Read one value by key
    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::Get(key.to_string(), response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Write one value by key
    pub async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::Set(
                key.to_string(),
                value.to_string(),
                response_tx,
            ))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Delete one key
    pub async fn remove(&self, key: &str) -> AppResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::Remove(key.to_string(), response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// List all keys starting with the given prefix
    pub async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::ListKeys(prefix.to_string(), response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(StorageCommand::Shutdown).await;
        Ok(())
    }
}

impl StorageActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, StorageActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        // Get the default Redis URL - we'll connect to Redis properly in the async methods
        let redis_url = "redis://127.0.0.1:6379".to_string();
        let redis = RedisClient::open(redis_url).expect("Failed to create Redis client");

        let actor = Self {
            config,
            client: redis,
            command_rx,
        };

        let handle = StorageActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Storage actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                StorageCommand::Get(key, response_tx) => {
                    let result = self.get_value(&key).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::Set(key, value, response_tx) => {
                    let result = self.set_value(&key, &value).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::Remove(key, response_tx) => {
                    let result = self.remove_value(&key).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::ListKeys(prefix, response_tx) => {
                    let result = self.list_keys_with_prefix(&prefix).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::Shutdown => {
                    info!("Storage actor shutting down");
                    break;
                }
            }
        }

        info!("Storage actor shut down");
    }

    /// Get a redis connection
    async fn get_redis_connection(&self) -> AppResult<Connection> {
        // Get Redis URL from config
        let redis_url = {
            let config_guard = self.config.read().await;
            config_guard.redis_url.clone()
        };

        // Reconnect with the proper URL if needed
        let redis = if redis_url != "redis://127.0.0.1:6379" {
            RedisClient::open(redis_url)
                .map_err(|e| storage_error(&format!("Failed to create Redis client: {}", e)))?
        } else {
            self.client.clone()
        };

        let result: AppResult<Connection> = redis
            .get_async_connection()
            .await
            .map_err(|e| storage_error(&format!("Failed to connect to Redis: {}", e)));
        result
    }

    /// Read one value from Redis
    async fn get_value(&self, key: &str) -> AppResult<Option<String>> {
        let mut redis_conn = self.get_redis_connection().await?;

        let exists: bool = redis_conn
            .exists(key)
            .await
            .map_err(|e| storage_error(&format!("Redis error: {}", e)))?;

        if !exists {
            return Ok(None);
        }

        let value: String = redis_conn
            .get(key)
            .await
            .map_err(|e| storage_error(&format!("Failed to read key from Redis: {}", e)))?;

        Ok(Some(value))
    }

    /// Write one value to Redis
    async fn set_value(&self, key: &str, value: &str) -> AppResult<()> {
        let mut redis_conn = self.get_redis_connection().await?;

        () = redis_conn
            .set(key, value)
            .await
            .map_err(|e| storage_error(&format!("Failed to write key to Redis: {}", e)))?;

        Ok(())
    }

    /// Delete one key from Redis
    async fn remove_value(&self, key: &str) -> AppResult<()> {
        let mut redis_conn = self.get_redis_connection().await?;

        let _removed: i64 = redis_conn
            .del(key)
            .await
            .map_err(|e| storage_error(&format!("Failed to delete key from Redis: {}", e)))?;

        Ok(())
    }

    /// List all keys starting with the given prefix
    async fn list_keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut redis_conn = self.get_redis_connection().await?;

        let keys: Vec<String> = redis_conn
            .keys(format!("{}*", prefix))
            .await
            .map_err(|e| storage_error(&format!("Failed to list keys from Redis: {}", e)))?;

        Ok(keys)
    }
}
