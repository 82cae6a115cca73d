use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::content::domain::entities::{OrderBy, Table};

// ============================================================================
// Error Types
// ============================================================================

/// Failure of a single remote call. The message is meant for humans and is
/// surfaced as-is in admin notifications.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        RemoteError::Backend {
            status,
            message: message.into(),
        }
    }
}

// ============================================================================
// Port Interface
// ============================================================================

/// Generic access to the remote tables. Rows travel as JSON objects; typing
/// happens in the query layer.
///
/// Each call is one network round-trip. There is no retry and no batching;
/// the backend serializes concurrent writes.
#[async_trait]
pub trait TableClient: Send + Sync {
    async fn select(&self, table: Table, order: OrderBy) -> Result<Vec<Value>, RemoteError>;

    async fn insert(&self, table: Table, record: Value) -> Result<(), RemoteError>;

    async fn delete_by_id(&self, table: Table, id: Uuid) -> Result<(), RemoteError>;

    /// Cheap reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), RemoteError>;
}
