use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{SessionStore, SessionStoreError};
use crate::modules::gate::domain::{AdminCredentials, GateStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("Admin credentials are not configured")]
    NotConfigured,

    /// Same error whichever field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Locked/unlocked flag per browser session, unlocked by the pre-shared
/// credentials. Fails closed when no credentials are configured.
pub struct AccessGate {
    credentials: Option<AdminCredentials>,
    sessions: Arc<dyn SessionStore>,
}

impl AccessGate {
    pub fn new(credentials: Option<AdminCredentials>, sessions: Arc<dyn SessionStore>) -> Self {
        if credentials.is_none() {
            warn!("ADMIN_USERNAME / ADMIN_PASSWORD missing; admin console disabled");
        }
        Self {
            credentials,
            sessions,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> Result<&AdminCredentials, GateError> {
        self.credentials.as_ref().ok_or(GateError::NotConfigured)
    }

    pub async fn status(&self, session: Option<Uuid>) -> Result<GateStatus, GateError> {
        if !self.is_configured() {
            return Ok(GateStatus::NotConfigured);
        }

        match session {
            Some(id) if self.is_unlocked(id).await? => Ok(GateStatus::Unlocked),
            _ => Ok(GateStatus::Locked),
        }
    }

    pub async fn is_unlocked(&self, session: Uuid) -> Result<bool, GateError> {
        self.credentials()?;
        Ok(self.sessions.contains(session).await?)
    }

    /// On an exact match, drops the presented session and returns a freshly
    /// minted unlocked one. A mismatch leaves state untouched.
    pub async fn unlock(
        &self,
        presented: Option<Uuid>,
        username: &str,
        password: &str,
    ) -> Result<Uuid, GateError> {
        let credentials = self.credentials()?;

        if !credentials.matches(username, password) {
            warn!("Admin unlock rejected");
            return Err(GateError::InvalidCredentials);
        }

        if let Some(old) = presented {
            self.sessions.remove(old).await?;
        }

        let session = Uuid::new_v4();
        self.sessions.insert(session).await?;
        info!(%session, "Admin console unlocked");
        Ok(session)
    }

    pub async fn lock(&self, session: Uuid) -> Result<(), GateError> {
        self.sessions.remove(session).await?;
        info!(%session, "Admin console locked");
        Ok(())
    }
}
