use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::gate::application::ports::{SessionStore, SessionStoreError};

/// Unlocked sessions older than this are treated as locked.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Unlocked sessions with their expiry. A restart locks every browser.
pub struct InMemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Instant>>,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Entries currently held, expired ones included until the next write.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Uuid) -> Result<(), SessionStoreError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(session, now + self.ttl);
        Ok(())
    }

    async fn contains(&self, session: Uuid) -> Result<bool, SessionStoreError> {
        let expires_at = self.sessions.read().await.get(&session).copied();

        match expires_at {
            Some(expires_at) if expires_at > Instant::now() => Ok(true),
            Some(_) => {
                self.sessions.write().await.remove(&session);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, session: Uuid) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&session);
        Ok(())
    }
}
