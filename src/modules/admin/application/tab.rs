use uuid::Uuid;

use super::console::{AdminConsole, SubmitError};
use super::validation::EntityForm;
use crate::modules::content::application::ports::outgoing::{RemoteError, UploadFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    Idle,
    Submitting,
}

/// Editing state of one entity tab in the admin console.
///
/// `Idle -> Submitting -> Idle`. Success resets the draft to its defaults;
/// failure keeps the draft and records the error until dismissed.
/// Deletion takes two steps: `request_delete` then `confirm_delete`.
#[derive(Debug, Clone)]
pub struct EntityTab<F: EntityForm> {
    status: TabStatus,
    pub draft: F,
    attachment: Option<UploadFile>,
    last_error: Option<String>,
    pending_delete: Option<Uuid>,
}

impl<F: EntityForm> Default for EntityTab<F> {
    fn default() -> Self {
        Self {
            status: TabStatus::Idle,
            draft: F::default(),
            attachment: None,
            last_error: None,
            pending_delete: None,
        }
    }
}

impl<F: EntityForm> EntityTab<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TabStatus {
        self.status
    }

    pub fn attach(&mut self, file: UploadFile) {
        self.attachment = Some(file);
    }

    pub fn attachment(&self) -> Option<&UploadFile> {
        self.attachment.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub async fn submit(&mut self, console: &AdminConsole) -> Result<Uuid, SubmitError> {
        self.status = TabStatus::Submitting;
        let result = console.submit(&self.draft, self.attachment.clone()).await;
        self.status = TabStatus::Idle;

        match &result {
            Ok(_) => {
                self.draft = F::default();
                self.attachment = None;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }

        result
    }

    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the requested record. `Ok(None)` when nothing was requested.
    pub async fn confirm_delete(
        &mut self,
        console: &AdminConsole,
    ) -> Result<Option<Uuid>, RemoteError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };

        match console.delete(F::TABLE, id).await {
            Ok(()) => Ok(Some(id)),
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
