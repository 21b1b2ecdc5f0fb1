use async_trait::async_trait;
use azure_core::{StatusCode, error::ErrorKind};
use azure_storage::StorageCredentials;
use azure_storage_blobs::prelude::{BlobServiceClient, ContainerClient};
use tracing::debug;

use crate::error::{Error, Result};

use super::{BlobStore, ContainerStatus, JSON_CONTENT_TYPE};

/// Azure Blob Storage container reached with shared-key credentials.
#[derive(Debug, Clone)]
pub struct AzureBlobStore {
    container_name: String,
    container: ContainerClient,
}

impl AzureBlobStore {
    pub fn new(account: String, access_key: String, container_name: String) -> Self {
        let credentials = StorageCredentials::access_key(account.clone(), access_key);
        let container =
            BlobServiceClient::new(account, credentials).container_client(&container_name);

        Self { container_name, container }
    }

    fn storage_error(&self, operation: &str, source: azure_core::Error) -> Error {
        Error::Storage {
            operation: operation.to_string(),
            container: self.container_name.clone(),
            source,
        }
    }
}

/// The service answers 409 `ContainerAlreadyExists` when the container is
/// already there. Other conflicts, such as a pending delete, are failures.
fn is_already_exists(err: &azure_core::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::HttpResponse { status: StatusCode::Conflict, error_code: Some(code) }
            if code == "ContainerAlreadyExists"
    )
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn ensure_container(&self) -> Result<ContainerStatus> {
        match self.container.create().await {
            Ok(_) => Ok(ContainerStatus::Created),
            Err(err) if is_already_exists(&err) => Ok(ContainerStatus::AlreadyExists),
            Err(err) => Err(self.storage_error("create container", err)),
        }
    }

    async fn put_json(&self, name: &str, body: Vec<u8>) -> Result<()> {
        debug!(blob = name, bytes = body.len(), "uploading block blob");

        self.container
            .blob_client(name)
            .put_block_blob(body)
            .content_type(JSON_CONTENT_TYPE)
            .await
            .map_err(|err| self.storage_error(&format!("upload `{name}`"), err))?;

        Ok(())
    }
}
