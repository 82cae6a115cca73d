use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Holds the ids of unlocked browser sessions. An id the store does not
/// hold is locked, so anonymous visitors never take up space.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Uuid) -> Result<(), SessionStoreError>;

    /// `false` for unknown and expired sessions.
    async fn contains(&self, session: Uuid) -> Result<bool, SessionStoreError>;

    async fn remove(&self, session: Uuid) -> Result<(), SessionStoreError>;
}
