use async_trait::async_trait;

use crate::{Config, error::Result, storage::azure::AzureBlobStore};

pub mod azure;

/// Content type recorded on every archived object.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Outcome of making sure the target container exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    Created,
    AlreadyExists,
}

/// A single container of a blob storage service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Create the container unless it is already there. Safe to repeat.
    async fn ensure_container(&self) -> Result<ContainerStatus>;

    /// Upload `body` as `name`, replacing any object of the same name.
    async fn put_json(&self, name: &str, body: Vec<u8>) -> Result<()>;
}

/// Construct the Azure store from config.
pub fn store_from_config(config: &Config) -> Box<dyn BlobStore> {
    Box::new(AzureBlobStore::new(
        config.storage_account_name.clone(),
        config.storage_account_key.clone(),
        config.container_name.clone(),
    ))
}
