use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::{
    ObjectStorage, RemoteError, TableClient, UploadFile,
};
use crate::modules::content::domain::entities::{OrderBy, Table};

/// Storage objects are cached by browsers for an hour.
const OBJECT_CACHE_CONTROL: &str = "max-age=3600";

fn select_url(base: &str, table: Table, order: OrderBy) -> String {
    let direction = if order.ascending { "asc" } else { "desc" };
    format!(
        "{}/rest/v1/{}?select=*&order={}.{}",
        base,
        table.name(),
        order.column,
        direction
    )
}

fn table_url(base: &str, table: Table) -> String {
    format!("{}/rest/v1/{}", base, table.name())
}

fn delete_url(base: &str, table: Table, id: Uuid) -> String {
    format!("{}/rest/v1/{}?id=eq.{}", base, table.name(), id)
}

fn object_url(base: &str, bucket: &str, path: &str) -> String {
    format!("{}/storage/v1/object/{}/{}", base, bucket, path)
}

fn public_object_url(base: &str, bucket: &str, path: &str) -> String {
    format!("{}/storage/v1/object/public/{}/{}", base, bucket, path)
}

/// Pulls a readable message out of an error body. Table errors carry
/// `message`; storage errors carry `message` or `error`.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error_description", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.clone();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Backend responded with status {}", status)
    } else {
        trimmed.to_string()
    }
}

fn map_transport_error(err: reqwest::Error) -> RemoteError {
    RemoteError::Request(err.to_string())
}

/// Production adapter for the hosted table store and its object storage.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, RemoteError> {
        let response = self
            .authorized(req)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        warn!(status = status.as_u16(), %message, "backend rejected request");
        Err(RemoteError::backend(status.as_u16(), message))
    }
}

#[async_trait]
impl TableClient for SupabaseClient {
    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn select(&self, table: Table, order: OrderBy) -> Result<Vec<Value>, RemoteError> {
        let url = select_url(&self.base_url, table, order);
        debug!(%url, "selecting rows");

        let response = self.send(self.http.get(&url)).await?;
        let body = response.text().await.map_err(map_transport_error)?;

        serde_json::from_str::<Vec<Value>>(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn insert(&self, table: Table, record: Value) -> Result<(), RemoteError> {
        let body = serde_json::to_vec(&record).map_err(|e| RemoteError::Decode(e.to_string()))?;

        let req = self
            .http
            .post(table_url(&self.base_url, table))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body);

        self.send(req).await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn delete_by_id(&self, table: Table, id: Uuid) -> Result<(), RemoteError> {
        let req = self.http.delete(delete_url(&self.base_url, table, id));
        self.send(req).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), RemoteError> {
        let url = format!("{}/rest/v1/", self.base_url);
        self.send(self.http.head(&url)).await?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for SupabaseClient {
    #[tracing::instrument(skip_all, fields(bucket = %bucket, path = %path, size = file.size()))]
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<String, RemoteError> {
        let req = self
            .http
            .post(object_url(&self.base_url, bucket, path))
            .header("Content-Type", file.content_type.as_str())
            .header("cache-control", OBJECT_CACHE_CONTROL)
            .header("x-upsert", "true")
            .body(file.bytes);

        self.send(req).await?;
        Ok(public_object_url(&self.base_url, bucket, path))
    }
}
