use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::{
    ObjectStorage, RemoteError, TableClient, UploadFile,
};
use crate::modules::content::domain::entities::{OrderBy, Table};

/// Process-local stand-in for the hosted backend. Used for local development
/// (`CONTENT_BACKEND=memory`) and in tests.
pub struct InMemoryContentStore {
    public_base: String,
    tables: RwLock<HashMap<Table, Vec<Value>>>,
    objects: RwLock<HashMap<String, UploadFile>>,
}

impl InMemoryContentStore {
    pub fn new(public_base: &str) -> Self {
        Self {
            public_base: public_base.trim_end_matches('/').to_string(),
            tables: RwLock::new(HashMap::new()),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored objects across all buckets.
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn object(&self, bucket: &str, path: &str) -> Option<UploadFile> {
        self.objects
            .read()
            .await
            .get(&object_key(bucket, path))
            .cloned()
    }
}

fn object_key(bucket: &str, path: &str) -> String {
    format!("{}/{}", bucket, path)
}

/// Nulls sort last in both directions.
fn compare_column(a: &Value, b: &Value, order: OrderBy) -> Ordering {
    let left = a.get(order.column).unwrap_or(&Value::Null);
    let right = b.get(order.column).unwrap_or(&Value::Null);

    match (left.is_null(), right.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    let ord = match (left, right) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    };

    if order.ascending {
        ord
    } else {
        ord.reverse()
    }
}

fn row_id(row: &Value) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

#[async_trait]
impl TableClient for InMemoryContentStore {
    async fn select(&self, table: Table, order: OrderBy) -> Result<Vec<Value>, RemoteError> {
        let mut rows = self
            .tables
            .read()
            .await
            .get(&table)
            .cloned()
            .unwrap_or_default();

        rows.sort_by(|a, b| compare_column(a, b, order));
        Ok(rows)
    }

    async fn insert(&self, table: Table, record: Value) -> Result<(), RemoteError> {
        let Value::Object(mut map) = record else {
            return Err(RemoteError::backend(400, "Insert payload must be an object"));
        };

        map.entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        map.entry("created_at").or_insert_with(|| {
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        });

        let row = Value::Object(map);
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();

        let duplicate = rows.iter().any(|existing| {
            matches!((row_id(existing), row_id(&row)), (Some(a), Some(b)) if a == b)
        });
        if duplicate {
            return Err(RemoteError::backend(
                409,
                "duplicate key value violates unique constraint",
            ));
        }

        rows.push(row);
        Ok(())
    }

    async fn delete_by_id(&self, table: Table, id: Uuid) -> Result<(), RemoteError> {
        let id = id.to_string();
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(&table) {
            rows.retain(|row| row_id(row) != Some(id.as_str()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RemoteError> {
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for InMemoryContentStore {
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<String, RemoteError> {
        self.objects
            .write()
            .await
            .insert(object_key(bucket, path), file);

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.public_base, bucket, path
        ))
    }
}
