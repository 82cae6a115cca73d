use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::upload_policy::UploadPolicy;
use super::validation::{EntityForm, ValidationErrors};
use crate::modules::content::application::ports::outgoing::{
    ObjectStorage, RemoteError, TableClient, UploadFile,
};
use crate::modules::content::application::query::{QueryClient, QueryKey};
use crate::modules::content::domain::entities::Table;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Nothing was sent to the backend.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The image could not be stored; no record was inserted.
    #[error("Image upload failed: {0}")]
    Upload(RemoteError),

    #[error("Could not save record: {0}")]
    Insert(RemoteError),

    #[error("Could not encode record: {0}")]
    Encode(String),
}

//
// ──────────────────────────────────────────────────────────
// Payloads
// ──────────────────────────────────────────────────────────
//

/// Inserted rows carry a client-generated id.
#[derive(Serialize)]
struct InsertRecord<'a, T: Serialize> {
    id: Uuid,
    #[serde(flatten)]
    record: &'a T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContentStats {
    pub skills: usize,
    pub experiences: usize,
    pub projects: usize,
    pub certificates: usize,
}

//
// ──────────────────────────────────────────────────────────
// Console
// ──────────────────────────────────────────────────────────
//

/// Write side of the content collections. Every successful write
/// invalidates its table only after the backend has acknowledged it.
pub struct AdminConsole {
    tables: Arc<dyn TableClient>,
    storage: Arc<dyn ObjectStorage>,
    query: Arc<QueryClient>,
    policy: UploadPolicy,
}

impl AdminConsole {
    pub fn new(
        tables: Arc<dyn TableClient>,
        storage: Arc<dyn ObjectStorage>,
        query: Arc<QueryClient>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            tables,
            storage,
            query,
            policy,
        }
    }

    /// validate → upload (certificates only) → insert → invalidate.
    ///
    /// A failed upload aborts the whole submission.
    pub async fn submit<F: EntityForm>(
        &self,
        form: &F,
        attachment: Option<UploadFile>,
    ) -> Result<Uuid, SubmitError> {
        let mut record = form.validate()?;

        if let Some(file) = attachment {
            if !F::ACCEPTS_IMAGE {
                return Err(ValidationErrors::single(
                    "image",
                    &format!("{} entries do not accept an image.", F::TABLE),
                )
                .into());
            }

            let public_url = self.upload(file).await?;
            F::attach_image(&mut record, public_url);
        }

        let id = Uuid::new_v4();
        let payload = serde_json::to_value(InsertRecord {
            id,
            record: &record,
        })
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

        self.tables
            .insert(F::TABLE, payload)
            .await
            .map_err(SubmitError::Insert)?;

        self.query.invalidate(F::TABLE);
        info!(table = %F::TABLE, %id, "Record created");

        Ok(id)
    }

    async fn upload(&self, file: UploadFile) -> Result<String, SubmitError> {
        self.policy
            .check(&file)
            .map_err(|e| ValidationErrors::single("image", &e.to_string()))?;

        let path = self.policy.object_path(&file);
        let size = file.size();

        match self
            .storage
            .upload_file(&self.policy.bucket_name, &path, file)
            .await
        {
            Ok(url) => {
                info!(bucket = %self.policy.bucket_name, %path, size, "Image uploaded");
                Ok(url)
            }
            Err(e) => {
                warn!(bucket = %self.policy.bucket_name, %path, error = %e, "Image upload failed");
                Err(SubmitError::Upload(e))
            }
        }
    }

    pub async fn delete(&self, table: Table, id: Uuid) -> Result<(), RemoteError> {
        self.tables.delete_by_id(table, id).await?;
        self.query.invalidate(table);
        info!(%table, %id, "Record deleted");
        Ok(())
    }

    /// Admin view of a collection, in the table's read order.
    pub async fn list(&self, table: Table) -> Result<Arc<Vec<Value>>, RemoteError> {
        self.query.fetch_rows(QueryKey::admin(table)).await
    }

    pub async fn stats(&self) -> Result<ContentStats, RemoteError> {
        let (skills, experiences, projects, certificates) = tokio::try_join!(
            self.list(Table::Skills),
            self.list(Table::Experiences),
            self.list(Table::Projects),
            self.list(Table::Certificates),
        )?;

        Ok(ContentStats {
            skills: skills.len(),
            experiences: experiences.len(),
            projects: projects.len(),
            certificates: certificates.len(),
        })
    }
}
