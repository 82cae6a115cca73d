use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::{
    ObjectStorage, RemoteError, TableClient, UploadFile,
};
use crate::modules::content::domain::entities::{OrderBy, Table};

/// Backend whose every call is rejected with the same status and message.
pub struct FailingTableClient {
    status: u16,
    message: String,
}

impl FailingTableClient {
    pub fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    fn error(&self) -> RemoteError {
        RemoteError::backend(self.status, self.message.clone())
    }
}

#[async_trait]
impl TableClient for FailingTableClient {
    async fn select(&self, _table: Table, _order: OrderBy) -> Result<Vec<Value>, RemoteError> {
        Err(self.error())
    }

    async fn insert(&self, _table: Table, _record: Value) -> Result<(), RemoteError> {
        Err(self.error())
    }

    async fn delete_by_id(&self, _table: Table, _id: Uuid) -> Result<(), RemoteError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), RemoteError> {
        Err(self.error())
    }
}

/// Storage that rejects every upload, as a missing bucket would.
pub struct FailingObjectStorage;

#[async_trait]
impl ObjectStorage for FailingObjectStorage {
    async fn upload_file(
        &self,
        bucket: &str,
        _path: &str,
        _file: UploadFile,
    ) -> Result<String, RemoteError> {
        Err(RemoteError::backend(404, format!("Bucket not found: {}", bucket)))
    }
}
